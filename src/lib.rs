//! Resume tailor library

pub mod cache;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod input;
pub mod llm;
pub mod model;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeTailorError};
