use anyhow::Result;
use arise_mobile_sdk::config::toml_config::SdkConfig;
use arise_mobile_sdk::utils::validation::Validate;
use arise_mobile_sdk::{AriseMobileSdk, Environment, LogLevel};
use httpmock::prelude::*;
use serde_json::json;
use tempfile::TempDir;

/// 從 TOML 檔載入配置並替換環境變數
#[tokio::test]
async fn test_load_config_file_with_env_substitution() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("arise.toml");
    std::env::set_var("ARISE_TEST_CLIENT_SECRET", "from-env");

    std::fs::write(
        &config_path,
        r#"
[sdk]
environment = "uat"
request_timeout_seconds = 10
country_code = "CAN"
log_level = "debug"

[credentials]
client_id = "client-1"
client_secret = "${ARISE_TEST_CLIENT_SECRET}"
"#,
    )?;

    let config = SdkConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.environment(), Environment::Uat);
    assert_eq!(config.request_timeout().as_secs(), 10);
    assert_eq!(config.country_code(), Some("CAN"));
    assert_eq!(config.log_level(), Some(LogLevel::Debug));
    let credentials = config.credentials.clone().unwrap();
    assert_eq!(credentials.client_secret, "from-env");
    assert!(!format!("{:?}", credentials).contains("from-env"));
    Ok(())
}

/// 未定義的環境變數讓驗證失敗
#[test]
fn test_unresolved_secret_fails_validation() {
    let config = SdkConfig::from_toml_str(
        r#"
[credentials]
client_id = "client-1"
client_secret = "${ARISE_TEST_UNDEFINED_SECRET}"
"#,
    )
    .unwrap();
    assert!(config.validate().is_err());
}

/// 檔案 token storage 讓新的 SDK 實例沿用既有 session，裝置 ID 也保持一致
#[tokio::test]
async fn test_session_and_device_id_persist_across_instances() -> Result<()> {
    let server = MockServer::start();
    let auth_mock = server.mock(|when, then| {
        when.method(POST).path("/oauth2/token");
        then.status(200).json_body(json!({
            "access_token": "token-1",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "refresh-1"
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/pay/api/v1/devices");
        then.status(200);
    });

    let temp_dir = TempDir::new()?;
    let token_path = temp_dir.path().join("tokens.json");
    let device_id_path = temp_dir.path().join("device_id");
    let config_content = format!(
        r#"
[sdk]
environment = "uat"
api_base_url = "{base}"
auth_base_url = "{base}"

[credentials]
client_id = "client-1"
client_secret = "secret-1"

[storage]
token_path = "{token}"
device_id_path = "{device}"
"#,
        base = server.base_url(),
        token = token_path.display().to_string().replace('\\', "/"),
        device = device_id_path.display().to_string().replace('\\', "/"),
    );
    let config = SdkConfig::from_toml_str(&config_content)?;

    let first = AriseMobileSdk::new(config.clone())?;
    // 建立 SDK 時就寫入裝置 ID，之後的 async 呼叫不再碰檔案
    assert!(device_id_path.exists());
    assert_eq!(std::fs::read_to_string(&device_id_path)?, first.device_id());
    first.authenticate_with_config().await?;
    let device_id = first.device_id();
    assert!(token_path.exists());

    let second = AriseMobileSdk::new(config)?;
    assert_eq!(second.get_access_token().await.as_deref(), Some("token-1"));
    assert_eq!(second.device_id(), device_id);

    second.clear_stored_token().await?;
    assert!(second.get_access_token().await.is_none());

    auth_mock.assert_hits(1);
    Ok(())
}
