//! Command-line interface for shopchat.

use crate::config::{validate_config, Config};
use crate::errors::ShopchatResult;
use clap::{Parser, Subcommand};

/// shopchat - Fashion-freek customer support chat
#[derive(Debug, Parser)]
#[command(name = "shopchat")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Support backend base URL (the widget posts to <URL>/chatbot)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Answer from the built-in rules only, without contacting the backend
    #[arg(long, global = true)]
    pub offline: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the chat widget (default)
    Chat,
    /// Run the reference support backend
    Serve {
        /// Address to listen on
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,

        /// Store data file with products, FAQs and journal entries
        #[arg(long, value_name = "PATH")]
        data: Option<String>,
    },
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> ShopchatResult<Config> {
        if let Some(url) = &self.base_url {
            config.api_base_url = url.clone();
        }
        if self.offline {
            config.offline = true;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(Commands::Serve { bind, data }) = &self.command {
            if let Some(bind) = bind {
                config.bind_address = bind.clone();
            }
            if let Some(data) = data {
                config.data_file = data.clone();
            }
        }
        validate_config(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_chat() {
        let cli = Cli::parse_from(["shopchat"]);
        assert!(cli.command.is_none());
        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "shopchat",
            "--base-url",
            "http://shop.example/api",
            "--offline",
        ]);
        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config.api_base_url, "http://shop.example/api");
        assert!(config.offline);
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from(["shopchat", "serve", "--bind", "0.0.0.0:8080", "--data", "x.json"]);
        let config = cli.apply_overrides(Config::default()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.data_file, "x.json");
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let cli = Cli::parse_from(["shopchat", "--base-url", "ftp://nope"]);
        assert!(cli.apply_overrides(Config::default()).is_err());
    }
}
