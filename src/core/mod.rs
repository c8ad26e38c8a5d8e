pub mod classifier;
pub mod engine;
pub mod histogram;
pub mod input;

pub use crate::domain::model::{Category, Credits, RoundResult, Session, Shape};
pub use crate::domain::ports::{Canvas, ConfigProvider, Storage};
pub use crate::utils::error::Result;
