pub mod device_identifier;
pub mod error;
pub mod logger;
pub mod validation;
