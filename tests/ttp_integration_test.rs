use anyhow::Result;
use arise_mobile_sdk::domain::model::{
    Amount, CalculateAmountResponse, DeviceProfile, LocationPermissionStatus, Merchant,
    PlatformEvent, PlatformReaderEvent, PlatformTransaction, ReaderTransactionRequest,
    TapToPayEntitlementStatus, TtpCustomEvent, TtpEvent, TtpReaderEvent, TtpStatus,
    TtpTransactionStatus,
};
use arise_mobile_sdk::domain::ports::ReaderResult;
use arise_mobile_sdk::utils::error::{ReaderError, TtpError};
use arise_mobile_sdk::{AriseMobileSdk, Environment, SdkConfig, SdkError, TapToPayReader};
use async_trait::async_trait;
use futures::stream::{self, BoxStream, StreamExt};
use httpmock::prelude::*;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// 記錄呼叫順序的讀卡器
struct MockReader {
    account_linked: AtomicBool,
    calls: Mutex<Vec<String>>,
    requests: Mutex<Vec<ReaderTransactionRequest>>,
    transaction_error: Option<ReaderError>,
}

impl MockReader {
    fn new(account_linked: bool) -> Self {
        Self {
            account_linked: AtomicBool::new(account_linked),
            calls: Mutex::new(Vec::new()),
            requests: Mutex::new(Vec::new()),
            transaction_error: None,
        }
    }

    fn failing_transactions(error: ReaderError) -> Self {
        Self {
            transaction_error: Some(error),
            ..Self::new(true)
        }
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TapToPayReader for MockReader {
    fn version(&self) -> String {
        "3.1.0".to_string()
    }

    fn device_profile(&self) -> DeviceProfile {
        DeviceProfile {
            model_identifier: "iPhone15,3".to_string(),
            os_version: "18.2".to_string(),
            location_permission: LocationPermissionStatus::Granted,
            entitlement: TapToPayEntitlementStatus::Available,
        }
    }

    async fn is_account_linked(&self) -> ReaderResult<bool> {
        self.record("is_account_linked");
        Ok(self.account_linked.load(Ordering::SeqCst))
    }

    async fn configure(&self, token: &str, merchant: &Merchant) -> ReaderResult<()> {
        self.record(&format!("configure:{}:{}", token, merchant.banner_name));
        Ok(())
    }

    async fn enable_tap_to_pay(&self) -> ReaderResult<()> {
        self.record("enable_tap_to_pay");
        self.account_linked.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn activate_reader(&self) -> ReaderResult<()> {
        self.record("activate_reader");
        Ok(())
    }

    async fn resume(&self, token: &str) -> ReaderResult<()> {
        self.record(&format!("resume:{}", token));
        Ok(())
    }

    async fn perform_transaction(
        &self,
        request: ReaderTransactionRequest,
    ) -> ReaderResult<PlatformTransaction> {
        self.record("perform_transaction");
        self.requests.lock().unwrap().push(request);
        if let Some(error) = &self.transaction_error {
            return Err(error.clone());
        }
        Ok(PlatformTransaction {
            transaction_id: Some("ttp-1".to_string()),
            transaction_outcome: Some("Approved".to_string()),
            authorization_code: Some("A1B2C3".to_string()),
            card_brand_name: Some("Visa".to_string()),
            ..Default::default()
        })
    }

    async fn abort_transaction(&self) -> ReaderResult<bool> {
        self.record("abort_transaction");
        Err(ReaderError::with_code("Read already started", "READER_BUSY"))
    }

    fn events(&self) -> BoxStream<'static, PlatformEvent> {
        stream::iter(vec![
            PlatformEvent::Reader(PlatformReaderEvent::ReadyForTap),
            PlatformEvent::Custom {
                name: "CardDetected".to_string(),
                message: None,
                progress: None,
            },
            PlatformEvent::Reader(PlatformReaderEvent::Other),
        ])
        .boxed()
    }

    fn enable_performance_logging(&self, _enabled: bool) {
        self.record("performance_logging");
    }

    fn clear(&self) {
        self.record("clear");
    }
}

fn sdk_with_reader(server: &MockServer, reader: Arc<MockReader>) -> AriseMobileSdk {
    let config = SdkConfig::new(Environment::Uat)
        .with_api_base_url(server.base_url())
        .with_auth_base_url(server.base_url())
        .with_device_id("device-1");
    AriseMobileSdk::builder(config).reader(reader).build().unwrap()
}

fn mock_gateway(server: &MockServer, tap_to_pay_enabled: bool, settings: serde_json::Value) {
    server.mock(|when, then| {
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
    server.mock(|when, then| {
        when.method(GET).path("/pay/api/v1/devices/device-1");
        then.status(200).json_body(json!({
            "deviceId": "device-1",
            "tapToPayEnabled": tap_to_pay_enabled
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/pay/api/v1/configurations/payments");
        then.status(200).json_body(settings);
    });
}

fn mock_jwt(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/pay/api/v1/devices/tap-to-pay/jwt")
            .json_body(json!({ "deviceId": "device-1" }));
        then.status(200).json_body(json!({
            "jwtToken": "reader-jwt",
            "expiresAt": "2099-01-01T00:00:00Z"
        }));
    })
}

fn merchant_settings() -> serde_json::Value {
    json!({
        "companyName": "Coffee Shop",
        "mccCode": "5814",
        "currencyIsoCode": "USD"
    })
}

/// 首次啟用：設定讀卡器、接受條款、啟用後通知 API
#[tokio::test]
async fn test_activate_links_account_and_notifies_gateway() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, false, merchant_settings());
    let jwt = mock_jwt(&server);
    let activate = server.mock(|when, then| {
        when.method(POST)
            .path("/pay/api/v1/devices/device-1/tap-to-pay/activate");
        then.status(200);
    });

    let reader = Arc::new(MockReader::new(false));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    sdk.ttp().activate().await?;

    assert_eq!(
        reader.calls(),
        vec![
            "configure:reader-jwt:Coffee Shop",
            "is_account_linked",
            "enable_tap_to_pay",
            "activate_reader",
        ]
    );
    jwt.assert();
    activate.assert();
    Ok(())
}

/// 已啟用的裝置不會重複啟用
#[tokio::test]
async fn test_activate_when_already_active_is_noop() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, true, merchant_settings());
    let jwt = mock_jwt(&server);

    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    assert_eq!(sdk.ttp().get_status().await?, TtpStatus::Active);
    sdk.ttp().activate().await?;

    assert!(reader.calls().is_empty());
    jwt.assert_hits(0);
    Ok(())
}

/// 未啟用時 prepare 回傳 NotActive
#[tokio::test]
async fn test_prepare_requires_active_device() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, false, merchant_settings());

    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    let err = sdk.ttp().prepare().await.unwrap_err();
    assert!(matches!(err, SdkError::Ttp(TtpError::NotActive(_))));
    Ok(())
}

/// 交易前先 resume，JWT 只向 API 取一次
#[tokio::test]
async fn test_perform_transaction_approved() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, true, merchant_settings());
    let jwt = mock_jwt(&server);

    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    sdk.ttp().prepare().await?;
    let result = sdk.ttp().perform_transaction(12.5).await?;

    assert_eq!(result.status, TtpTransactionStatus::Approved);
    assert_eq!(result.transaction_id.as_deref(), Some("ttp-1"));
    assert_eq!(result.authorization_code.as_deref(), Some("A1B2C3"));

    let requests = reader.requests.lock().unwrap().clone();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].amount, 12.5);
    assert_eq!(requests[0].currency_code, "USD");
    assert!(reader.calls().contains(&"resume:reader-jwt".to_string()));
    jwt.assert_hits(1);
    Ok(())
}

/// 商家啟用 Surcharge 時單一金額交易被拒絕
#[tokio::test]
async fn test_simple_transaction_rejected_for_surcharge_merchant() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(
        &server,
        true,
        json!({
            "companyName": "Coffee Shop",
            "mccCode": "5814",
            "currencyIsoCode": "USD",
            "zeroCostProcessingOptionId": 4,
            "defaultSurchargeRate": 3.0
        }),
    );
    mock_jwt(&server);

    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    let err = sdk.ttp().perform_transaction(10.0).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Ttp(TtpError::TransactionFailed { code: None, .. })
    ));
    assert!(reader.requests.lock().unwrap().is_empty());
    Ok(())
}

/// 以計算結果交易時帶出總額、小費與自訂資料
#[tokio::test]
async fn test_perform_calculated_transaction() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, true, merchant_settings());
    mock_jwt(&server);

    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    let calculation = CalculateAmountResponse {
        debit_card: Some(Amount {
            base_amount: 40.0,
            tip_amount: 4.0,
            total_amount: 44.0,
            ..Default::default()
        }),
        ..Default::default()
    };
    sdk.ttp()
        .perform_calculated_transaction(&calculation, true)
        .await?;

    let requests = reader.requests.lock().unwrap().clone();
    assert_eq!(requests[0].amount, 44.0);
    assert_eq!(requests[0].tip.as_deref(), Some("4.00"));
    let custom_data = requests[0].custom_data.clone().unwrap();
    assert_eq!(custom_data["isDebitCard"], "true");
    Ok(())
}

/// 讀卡器錯誤代碼保留在 TransactionFailed 中
#[tokio::test]
async fn test_reader_failure_keeps_error_code() -> Result<()> {
    let server = MockServer::start();
    mock_gateway(&server, true, merchant_settings());
    mock_jwt(&server);

    let reader = Arc::new(MockReader::failing_transactions(ReaderError::with_code(
        "Card read timed out",
        "READ_TIMEOUT",
    )));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));
    sdk.authenticate("client-1", "secret-1").await?;

    let err = sdk.ttp().perform_transaction(5.0).await.unwrap_err();
    match err {
        SdkError::Ttp(TtpError::TransactionFailed { message, code }) => {
            assert_eq!(message, "Card read timed out");
            assert_eq!(code.as_deref(), Some("READ_TIMEOUT"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

/// 取消失敗時回傳帶代碼的 FailedToAbortTransaction
#[tokio::test]
async fn test_abort_transaction_failure() -> Result<()> {
    let server = MockServer::start();
    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));

    let err = sdk.ttp().abort_transaction().await.unwrap_err();
    match err {
        SdkError::Ttp(TtpError::FailedToAbortTransaction { message, code }) => {
            assert_eq!(message, "Failed to abort transaction: Read already started");
            assert_eq!(code.as_deref(), Some("READER_BUSY"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    Ok(())
}

/// 讀卡器事件轉成 SDK 事件
#[tokio::test]
async fn test_event_stream_maps_reader_events() -> Result<()> {
    let server = MockServer::start();
    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, reader);

    let events: Vec<TtpEvent> = sdk.ttp().events()?.collect().await;
    assert_eq!(
        events,
        vec![
            TtpEvent::Reader(TtpReaderEvent::ReadyForTap),
            TtpEvent::Custom(TtpCustomEvent::CardDetected),
            TtpEvent::Reader(TtpReaderEvent::ReadNotCompleted),
        ]
    );
    Ok(())
}

/// 沒有讀卡器時相容性檢查失敗，TTP 操作回報錯誤
#[tokio::test]
async fn test_without_reader() -> Result<()> {
    let server = MockServer::start();
    let config = SdkConfig::new(Environment::Uat)
        .with_api_base_url(server.base_url())
        .with_auth_base_url(server.base_url())
        .with_device_id("device-1");
    let sdk = AriseMobileSdk::new(config)?;

    assert!(!sdk.ttp().check_compatibility().is_compatible);
    let err = sdk.ttp().activate().await.unwrap_err();
    assert!(matches!(err, SdkError::Ttp(TtpError::NotCompatible(_))));
    assert!(matches!(
        sdk.ttp().events().err(),
        Some(SdkError::Ttp(TtpError::SdkNotInitialized))
    ));
    Ok(())
}

/// debug 等級會開啟讀卡器效能日誌；清除 token 時一併清除讀卡器狀態
#[tokio::test]
async fn test_log_level_and_clear_reach_reader() -> Result<()> {
    let server = MockServer::start();
    let reader = Arc::new(MockReader::new(true));
    let sdk = sdk_with_reader(&server, Arc::clone(&reader));

    assert_eq!(sdk.reader_version()?, "3.1.0");
    sdk.set_log_level(arise_mobile_sdk::LogLevel::Debug);
    sdk.clear_stored_token().await?;

    assert_eq!(reader.calls(), vec!["performance_logging", "clear"]);
    Ok(())
}
