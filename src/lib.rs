// src/lib.rs

pub mod api;
pub mod app;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod models;
pub mod resolver;
pub mod rules;
pub mod server;
pub mod transcript;
pub mod ui;
pub mod widget;
