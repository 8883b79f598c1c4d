use crate::config::environment::{Environment, EnvironmentSettings};
use crate::utils::error::{Result, SdkError};
use crate::utils::logger::LogLevel;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// SDK 配置 (TOML)
///
/// ```toml
/// [sdk]
/// environment = "uat"
/// request_timeout_seconds = 30
///
/// [credentials]
/// client_id = "${ARISE_CLIENT_ID}"
/// client_secret = "${ARISE_CLIENT_SECRET}"
///
/// [storage]
/// token_path = "./.arise/tokens.json"
/// device_id_path = "./.arise/device_id"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub sdk: SdkSection,
    pub credentials: Option<CredentialsConfig>,
    pub storage: Option<StorageConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkSection {
    #[serde(default)]
    pub environment: Environment,
    pub api_base_url: Option<String>,
    pub auth_base_url: Option<String>,
    pub request_timeout_seconds: Option<u64>,
    /// 覆寫付款設定中的國家代碼 (預設 "USA")
    pub country_code: Option<String>,
    pub log_level: Option<LogLevel>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .finish()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// 未設定時 token 只存在記憶體
    pub token_path: Option<String>,
    pub device_id_path: Option<String>,
    /// 固定的裝置識別碼，優先於 device_id_path
    pub device_id: Option<String>,
}

impl SdkConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            sdk: SdkSection {
                environment,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SdkError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SdkError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ARISE_CLIENT_SECRET})；未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SdkError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.sdk.environment = environment;
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.sdk.api_base_url = Some(url.into());
        self
    }

    pub fn with_auth_base_url(mut self, url: impl Into<String>) -> Self {
        self.sdk.auth_base_url = Some(url.into());
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.sdk.country_code = Some(country_code.into());
        self
    }

    pub fn with_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(CredentialsConfig {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        });
        self
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.storage.get_or_insert_with(StorageConfig::default).device_id = Some(device_id.into());
        self
    }

    pub fn with_token_path(mut self, path: impl Into<String>) -> Self {
        self.storage.get_or_insert_with(StorageConfig::default).token_path = Some(path.into());
        self
    }

    pub fn environment(&self) -> Environment {
        self.sdk.environment
    }

    pub fn environment_settings(&self) -> EnvironmentSettings {
        EnvironmentSettings::resolve(
            self.sdk.environment,
            self.sdk.api_base_url.as_deref(),
            self.sdk.auth_base_url.as_deref(),
        )
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.sdk
                .request_timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        )
    }

    pub fn country_code(&self) -> Option<&str> {
        self.sdk.country_code.as_deref()
    }

    pub fn log_level(&self) -> Option<LogLevel> {
        self.sdk.log_level
    }

    pub fn token_path(&self) -> Option<PathBuf> {
        self.storage
            .as_ref()
            .and_then(|s| s.token_path.as_ref())
            .map(PathBuf::from)
    }

    pub fn device_id_path(&self) -> Option<PathBuf> {
        self.storage
            .as_ref()
            .and_then(|s| s.device_id_path.as_ref())
            .map(PathBuf::from)
    }

    pub fn fixed_device_id(&self) -> Option<&str> {
        self.storage.as_ref().and_then(|s| s.device_id.as_deref())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(url) = &self.sdk.api_base_url {
            validate_url("sdk.api_base_url", url)?;
        }
        if let Some(url) = &self.sdk.auth_base_url {
            validate_url("sdk.auth_base_url", url)?;
        }
        if let Some(timeout) = self.sdk.request_timeout_seconds {
            validate_positive_number("sdk.request_timeout_seconds", timeout, 1)?;
        }
        if let Some(country_code) = &self.sdk.country_code {
            if country_code.len() != 3 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(SdkError::InvalidConfigValueError {
                    field: "sdk.country_code".to_string(),
                    value: country_code.clone(),
                    reason: "Expected an ISO 3166-1 alpha-3 code, e.g. USA".to_string(),
                });
            }
        }

        if let Some(credentials) = &self.credentials {
            validate_non_empty_string("credentials.client_id", &credentials.client_id)?;
            validate_non_empty_string("credentials.client_secret", &credentials.client_secret)?;
            for (field, value) in [
                ("credentials.client_id", &credentials.client_id),
                ("credentials.client_secret", &credentials.client_secret),
            ] {
                if value.starts_with("${") {
                    return Err(SdkError::MissingConfigError {
                        field: format!("{} (environment variable {} not set)", field, value),
                    });
                }
            }
        }

        if let Some(storage) = &self.storage {
            if let Some(path) = &storage.token_path {
                validate_path("storage.token_path", path)?;
            }
            if let Some(path) = &storage.device_id_path {
                validate_path("storage.device_id_path", path)?;
            }
            if let Some(id) = &storage.device_id {
                validate_non_empty_string("storage.device_id", id)?;
            }
        }

        Ok(())
    }
}

impl Validate for SdkConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
