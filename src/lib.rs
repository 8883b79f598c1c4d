//! ARISE mobile payment SDK: OAuth session handling, transaction APIs,
//! device and settings lookups, and Tap to Pay orchestration over a
//! host-provided card reader.

pub mod adapters;
pub mod api;
pub mod config;
pub mod core;
pub mod domain;
pub mod mappers;
pub mod services;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};

pub use crate::adapters::{FileTokenStorage, InMemoryTokenStorage};
pub use crate::config::{Environment, SdkConfig};
pub use crate::core::{AriseMobileSdk, AriseMobileSdkBuilder, AriseMobileTtp};
pub use crate::domain::ports::{TapToPayReader, TokenStorage};
pub use crate::utils::error::{Result, SdkError};
pub use crate::utils::logger::LogLevel;
