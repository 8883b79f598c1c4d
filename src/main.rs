use arise_mobile_sdk::domain::model::{
    AuthorizationRequest, CalculateAmountRequest, RefundRequest, TransactionFilters,
};
use arise_mobile_sdk::utils::error::ErrorSeverity;
use arise_mobile_sdk::utils::{logger, validation::Validate};
use arise_mobile_sdk::{AriseMobileSdk, CliConfig, Command, Result, SdkError};
use clap::Parser;
use serde::Serialize;

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_log {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2, // 可重試
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: &CliConfig) -> Result<()> {
    let sdk = AriseMobileSdk::new(config.to_sdk_config()?)?;
    tracing::info!(
        "Using {} environment ({})",
        sdk.environment(),
        sdk.environment_settings().api_base_url
    );

    match &config.command {
        Command::Auth => {
            let result = sdk.authenticate_with_config().await?;
            tracing::info!("✅ Authenticated, token expires in {}s", result.expires_in);
            print_json(&result)
        }
        Command::Token => {
            ensure_session(&sdk).await?;
            let token = match sdk.get_access_token().await {
                Some(token) => token,
                None => sdk.refresh_access_token().await?,
            };
            println!("{}", token);
            Ok(())
        }
        Command::Logout => {
            sdk.clear_stored_token().await?;
            println!("✅ Stored session cleared");
            Ok(())
        }
        Command::Transactions {
            page,
            page_size,
            order_by,
            asc,
            batch_id,
        } => {
            ensure_session(&sdk).await?;
            let filters = TransactionFilters {
                page: *page,
                page_size: *page_size,
                order_by: order_by.clone(),
                asc: *asc,
                batch_id: batch_id.clone(),
                ..Default::default()
            };
            print_json(&sdk.get_transactions(Some(filters)).await?)
        }
        Command::Details { transaction_id } => {
            ensure_session(&sdk).await?;
            print_json(&sdk.get_transaction_details(transaction_id).await?)
        }
        Command::Calculate {
            amount,
            tip_amount,
            tip_rate,
            surcharge_rate,
            percentage_off_rate,
            currency_id,
            use_card_price,
        } => {
            ensure_session(&sdk).await?;
            let request = CalculateAmountRequest {
                amount: *amount,
                percentage_off_rate: *percentage_off_rate,
                surcharge_rate: *surcharge_rate,
                tip_amount: *tip_amount,
                tip_rate: *tip_rate,
                currency_id: *currency_id,
                use_card_price: *use_card_price,
            };
            print_json(&sdk.calculate_amount(&request).await?)
        }
        Command::Authorize { request } => {
            ensure_session(&sdk).await?;
            let request: AuthorizationRequest = read_request(request)?;
            print_json(&sdk.submit_auth_transaction(&request).await?)
        }
        Command::Sale { request } => {
            ensure_session(&sdk).await?;
            let request: AuthorizationRequest = read_request(request)?;
            print_json(&sdk.submit_sale_transaction(&request).await?)
        }
        Command::Capture {
            transaction_id,
            amount,
        } => {
            ensure_session(&sdk).await?;
            print_json(&sdk.capture_transaction(transaction_id, *amount).await?)
        }
        Command::Void { transaction_id } => {
            ensure_session(&sdk).await?;
            print_json(&sdk.void_transaction(transaction_id).await?)
        }
        Command::Refund {
            transaction_id,
            amount,
        } => {
            ensure_session(&sdk).await?;
            let request = RefundRequest::new(transaction_id.clone(), *amount);
            print_json(&sdk.refund_transaction(&request).await?)
        }
        Command::Settings => {
            ensure_session(&sdk).await?;
            print_json(&sdk.get_payment_settings().await?)
        }
        Command::Permissions => {
            ensure_session(&sdk).await?;
            print_json(&sdk.get_permissions().await?)
        }
        Command::Devices => {
            ensure_session(&sdk).await?;
            print_json(&sdk.get_devices().await?)
        }
        Command::Device { device_id } => {
            ensure_session(&sdk).await?;
            print_json(&sdk.get_device_info(device_id).await?)
        }
        Command::DeviceId => {
            println!("{}", sdk.device_id());
            Ok(())
        }
        Command::TtpStatus => {
            ensure_session(&sdk).await?;
            print_json(&sdk.ttp().get_status().await?)
        }
        Command::Compatibility => print_json(&sdk.ttp().check_compatibility()),
        Command::Version => {
            println!("arise-cli {}", sdk.version());
            Ok(())
        }
    }
}

/// 沒有可用 token 時，若有 client 憑證就先登入
async fn ensure_session(sdk: &AriseMobileSdk) -> Result<()> {
    if sdk.get_access_token().await.is_some() {
        return Ok(());
    }

    tracing::info!("🔐 No stored session, authenticating with configured credentials");
    sdk.authenticate_with_config().await.map(|_| ())
}

fn read_request<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(SdkError::SerializationError)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
