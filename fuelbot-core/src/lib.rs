//! fuelbot-core: configuration layer for the fuelbot services
//!
//! Resolves typed settings from the process environment (optionally
//! pre-populated from `.env` files) once at startup. Everything else in the
//! application receives the resolved [`Settings`] by value; nothing here is
//! global or reloadable.

pub mod config;
pub mod error;

pub use config::{load_dotenv, Settings};
pub use error::{ConfigError, Result};
