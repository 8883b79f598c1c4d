use crate::utils::error::SdkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const TERMINAL_PROFILE_ID: &str = "4c840000-0000-0000-03c2-7fcd696e5616";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Production,
    Uat,
}

impl Environment {
    pub fn api_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://api.arise.risewithaurora.com",
            Environment::Uat => "https://api.uat.arise.risewithaurora.com",
        }
    }

    pub fn auth_base_url(&self) -> &'static str {
        match self {
            Environment::Production => "https://oauth.arise.risewithaurora.com",
            Environment::Uat => "https://oauth.uat.arise.risewithaurora.com",
        }
    }

    pub fn terminal_profile_id(&self) -> &'static str {
        TERMINAL_PROFILE_ID
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => f.write_str("production"),
            Environment::Uat => f.write_str("uat"),
        }
    }
}

impl FromStr for Environment {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            "uat" => Ok(Environment::Uat),
            other => Err(SdkError::InvalidConfigValueError {
                field: "environment".to_string(),
                value: other.to_string(),
                reason: "Expected 'production' or 'uat'".to_string(),
            }),
        }
    }
}

/// 實際使用的端點 (環境預設值套用配置覆寫後)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSettings {
    pub api_base_url: String,
    pub auth_base_url: String,
    pub terminal_profile_id: String,
}

impl EnvironmentSettings {
    pub fn resolve(
        environment: Environment,
        api_base_url: Option<&str>,
        auth_base_url: Option<&str>,
    ) -> Self {
        Self {
            api_base_url: api_base_url
                .unwrap_or(environment.api_base_url())
                .trim_end_matches('/')
                .to_string(),
            auth_base_url: auth_base_url
                .unwrap_or(environment.auth_base_url())
                .trim_end_matches('/')
                .to_string(),
            terminal_profile_id: environment.terminal_profile_id().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_urls() {
        assert_eq!(
            Environment::Uat.api_base_url(),
            "https://api.uat.arise.risewithaurora.com"
        );
        assert_eq!(
            Environment::Production.auth_base_url(),
            "https://oauth.arise.risewithaurora.com"
        );
        assert_eq!(Environment::Uat.terminal_profile_id(), TERMINAL_PROFILE_ID);
    }

    #[test]
    fn test_parse_environment() {
        assert_eq!("UAT".parse::<Environment>().unwrap(), Environment::Uat);
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let settings =
            EnvironmentSettings::resolve(Environment::Uat, Some("http://127.0.0.1:9000/"), None);
        assert_eq!(settings.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(settings.auth_base_url, Environment::Uat.auth_base_url());
    }
}
