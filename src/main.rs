use clap::Parser;
use log::info;
use shopchat::{
    app::run_ui,
    catalog::{CatalogResponder, SiteData},
    cli::{Cli, Commands},
    config::{config_dir, initialize_config},
    errors::ShopchatResult,
    logging::{init_logging, init_server_logging},
    resolver::ResponseResolver,
    server::start_server,
};
use std::path::Path;

#[tokio::main]
async fn main() -> ShopchatResult<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.apply_overrides(initialize_config()?)?;

    match cli.command {
        Some(Commands::Serve { .. }) => {
            let _logger = init_server_logging(&config.log_level)?;
            let data = SiteData::load(Path::new(&config.data_file));
            start_server(&config.bind_address, CatalogResponder::new(data)).await
        }
        Some(Commands::Chat) | None => {
            let _logger = init_logging(&config.log_level, &config_dir()?)?;
            info!(
                "Starting chat widget (backend: {}, offline: {})",
                config.api_base_url, config.offline
            );
            let resolver = ResponseResolver::from_config(&config)?;
            run_ui(resolver).await
        }
    }
}
