use crate::domain::model::{
    CalculateAmountResponse, TtpCompatibilityResult, TtpEvent, TtpStatus, TtpTransactionResult,
};
use crate::services::TtpService;
use crate::utils::error::Result;
use futures::stream::BoxStream;
use std::sync::Arc;

/// Tap to Pay 入口，透過 `AriseMobileSdk::ttp()` 取得
///
/// 一般流程：`check_compatibility` -> `activate` (首次) -> `prepare` (每次啟動)
/// -> `perform_transaction`。回到前景時呼叫 `resume`。
#[derive(Clone)]
pub struct AriseMobileTtp {
    service: Arc<TtpService>,
}

impl AriseMobileTtp {
    pub(crate) fn new(service: Arc<TtpService>) -> Self {
        Self { service }
    }

    pub fn check_compatibility(&self) -> TtpCompatibilityResult {
        self.service.check_compatibility()
    }

    pub async fn get_status(&self) -> Result<TtpStatus> {
        self.service.get_status().await
    }

    pub async fn activate(&self) -> Result<()> {
        self.service.activate().await
    }

    pub async fn prepare(&self) -> Result<()> {
        self.service.prepare().await
    }

    pub async fn resume(&self) -> Result<()> {
        self.service.resume().await
    }

    pub async fn perform_transaction(&self, amount: f64) -> Result<TtpTransactionResult> {
        self.service.perform_transaction(amount).await
    }

    /// 以 `calculate_amount` 的結果交易 (商家啟用 Surcharge 時必須使用)
    pub async fn perform_calculated_transaction(
        &self,
        calculation: &CalculateAmountResponse,
        is_debit_card: bool,
    ) -> Result<TtpTransactionResult> {
        self.service
            .perform_calculated_transaction(calculation, is_debit_card)
            .await
    }

    pub async fn abort_transaction(&self) -> Result<bool> {
        self.service.abort_transaction().await
    }

    pub fn events(&self) -> Result<BoxStream<'static, TtpEvent>> {
        self.service.events()
    }
}
