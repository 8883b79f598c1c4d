use crate::config::environment::Environment;
use crate::config::toml_config::SdkConfig;
use crate::utils::error::{Result, SdkError};
use crate::utils::validation::{validate_path, validate_positive_amount, validate_url, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "arise-cli")]
#[command(about = "Debug client for the ARISE payment gateway")]
pub struct CliConfig {
    /// TOML 配置檔；命令列參數優先於檔案內容
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub environment: Option<Environment>,

    #[arg(long)]
    pub api_base_url: Option<String>,

    #[arg(long)]
    pub auth_base_url: Option<String>,

    #[arg(long)]
    pub client_id: Option<String>,

    #[arg(long)]
    pub client_secret: Option<String>,

    #[arg(long)]
    pub country_code: Option<String>,

    /// 保存 token 的 JSON 檔，讓多次執行共用同一個 session
    #[arg(long)]
    pub token_path: Option<String>,

    #[arg(long)]
    pub device_id: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Authenticate with client credentials and store the session
    Auth,
    /// Print a valid access token, refreshing it when needed
    Token,
    /// Clear stored tokens and credentials
    Logout,
    /// List transactions
    Transactions {
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
        #[arg(long)]
        order_by: Option<String>,
        #[arg(long)]
        asc: Option<bool>,
        #[arg(long)]
        batch_id: Option<String>,
    },
    /// Show one transaction
    Details { transaction_id: String },
    /// Calculate cash, card and ACH amounts
    Calculate {
        amount: f64,
        #[arg(long)]
        tip_amount: Option<f64>,
        #[arg(long)]
        tip_rate: Option<f64>,
        #[arg(long)]
        surcharge_rate: Option<f64>,
        #[arg(long)]
        percentage_off_rate: Option<f64>,
        #[arg(long)]
        currency_id: Option<i32>,
        #[arg(long)]
        use_card_price: Option<bool>,
    },
    /// Submit an authorization from a JSON request file
    Authorize { request: PathBuf },
    /// Submit a sale from a JSON request file
    Sale { request: PathBuf },
    Capture { transaction_id: String, amount: f64 },
    Void { transaction_id: String },
    Refund {
        transaction_id: String,
        #[arg(long)]
        amount: Option<f64>,
    },
    /// Show merchant payment settings
    Settings,
    Permissions,
    Devices,
    Device { device_id: String },
    /// Print this machine's device identifier
    DeviceId,
    /// Tap to Pay status of this device
    TtpStatus,
    /// Tap to Pay compatibility report
    Compatibility,
    Version,
}

impl CliConfig {
    /// 合併配置檔與命令列參數
    pub fn to_sdk_config(&self) -> Result<SdkConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                SdkConfig::from_file(path)?
            }
            None => SdkConfig::default(),
        };

        if let Some(environment) = self.environment {
            config = config.with_environment(environment);
        }
        if let Some(url) = &self.api_base_url {
            config = config.with_api_base_url(url);
        }
        if let Some(url) = &self.auth_base_url {
            config = config.with_auth_base_url(url);
        }
        if let Some(country_code) = &self.country_code {
            config = config.with_country_code(country_code);
        }
        if let Some(path) = &self.token_path {
            config = config.with_token_path(path);
        }
        if let Some(device_id) = &self.device_id {
            config = config.with_device_id(device_id);
        }

        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => config = config.with_credentials(id, secret),
            (None, None) => {}
            _ => {
                return Err(SdkError::ConfigValidationError {
                    field: "credentials".to_string(),
                    message: "--client-id and --client-secret must be given together".to_string(),
                })
            }
        }

        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            if !path.exists() {
                return Err(SdkError::InvalidConfigValueError {
                    field: "config".to_string(),
                    value: path.display().to_string(),
                    reason: "Configuration file not found".to_string(),
                });
            }
        }
        if let Some(url) = &self.api_base_url {
            validate_url("api_base_url", url)?;
        }
        if let Some(url) = &self.auth_base_url {
            validate_url("auth_base_url", url)?;
        }
        if let Some(path) = &self.token_path {
            validate_path("token_path", path)?;
        }

        match &self.command {
            Command::Capture { amount, .. } => validate_positive_amount("amount", *amount)?,
            Command::Refund {
                amount: Some(amount),
                ..
            } => validate_positive_amount("amount", *amount)?,
            Command::Authorize { request } | Command::Sale { request } if !request.exists() => {
                return Err(SdkError::InvalidConfigValueError {
                    field: "request".to_string(),
                    value: request.display().to_string(),
                    reason: "Request file not found".to_string(),
                });
            }
            _ => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transactions_command() {
        let cli = CliConfig::parse_from([
            "arise-cli",
            "--environment",
            "uat",
            "--verbose",
            "transactions",
            "--page",
            "2",
            "--page-size",
            "50",
        ]);

        assert_eq!(cli.environment, Some(Environment::Uat));
        assert!(cli.verbose);
        match cli.command {
            Command::Transactions {
                page, page_size, ..
            } => {
                assert_eq!(page, Some(2));
                assert_eq!(page_size, Some(50));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "arise-cli",
            "--environment",
            "uat",
            "--api-base-url",
            "http://localhost:8080",
            "--client-id",
            "id",
            "--client-secret",
            "secret",
            "settings",
        ]);
        cli.validate().unwrap();

        let config = cli.to_sdk_config().unwrap();
        assert_eq!(config.environment(), Environment::Uat);
        assert_eq!(
            config.environment_settings().api_base_url,
            "http://localhost:8080"
        );
        assert_eq!(
            config.environment_settings().auth_base_url,
            "https://oauth.uat.arise.risewithaurora.com"
        );
        assert_eq!(config.credentials.unwrap().client_id, "id");
    }

    #[test]
    fn test_partial_credentials_rejected() {
        let cli = CliConfig::parse_from(["arise-cli", "--client-id", "id", "auth"]);
        assert!(cli.to_sdk_config().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_capture_amount() {
        let cli = CliConfig::parse_from(["arise-cli", "capture", "tx-1", "0"]);
        assert!(cli.validate().is_err());
    }
}
