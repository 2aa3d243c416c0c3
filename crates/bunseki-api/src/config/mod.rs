//! Config module

mod constants;
mod env;

pub use constants::{
  DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_STATIC_DIR, DEFAULT_SUMMARIZER, MAX_TEXT_LENGTH,
};
pub use env::{Config, LogLevel};
