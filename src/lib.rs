pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::app::TallyApp;
pub use config::{cli::LocalStorage, toml_config::TallyConfig};
pub use crate::core::{classifier::classify, engine::TallyEngine};
pub use domain::model::{Category, Credits, RoundResult, Session};
pub use utils::error::{Result, TallyError};
