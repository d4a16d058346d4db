pub mod commands;
pub mod config;
pub mod duration;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod session;
pub mod validate;

use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, ValueEnum, Debug, Default, Serialize)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
