#![doc = include_str!("../README.md")]

pub mod api;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod selectors;
pub mod services;
pub mod strategies;
pub mod tools;
pub mod types;


pub use config::ScrapeConfig;
pub use engine::Engine;
pub use error::{Result, ScrapeError};
pub use services::{JobStore, MarkdownStore};
pub use types::*;
