//! HTTP services over the ARISE gateway plus the Tap to Pay flows.

pub mod api_client;
pub mod auth_api;
pub mod devices;
pub mod settings;
pub mod token_service;
pub mod transactions;
pub mod ttp;

pub use api_client::ApiClient;
pub use auth_api::AuthApi;
pub use devices::DevicesService;
pub use settings::SettingsService;
pub use token_service::TokenService;
pub use transactions::TransactionsService;
pub use ttp::TtpService;
