use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    Address, Amount, AvailableOperation, AvsResponse, CardDetails, ContactInfo,
    ElectronicCheckDetails, EmvTags, ReceiptAmount, Source, TransactionResponseDetails,
};
use super::enums::{
    CardDataSource, CardTokenType, CardholderAuthenticationMethod, CreateMethodId,
    EmvFallbackCondition, EmvFallbackLastChipRead,
};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_amount, validate_range, Validate};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionSummary {
    pub id: String,
    pub payment_processor_id: String,
    pub date: Option<DateTime<Utc>>,
    pub base_amount: f64,
    pub total_amount: f64,
    pub surcharge_amount: Option<f64>,
    pub surcharge_percentage: Option<f64>,
    pub currency_code: Option<String>,
    pub currency_id: Option<i32>,
    pub merchant: Option<String>,
    pub merchant_id: String,
    pub operation_mode: Option<String>,
    pub payment_method_type: Option<String>,
    pub payment_method_type_id: Option<i32>,
    pub payment_method_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_company: Option<String>,
    pub customer_pan: Option<String>,
    pub card_token_type: Option<CardTokenType>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: String,
    pub status_id: i32,
    pub type_id: i32,
    pub r#type: Option<String>,
    pub batch_id: Option<String>,
    pub source: Source,
    pub available_operations: Option<Vec<AvailableOperation>>,
    pub amount: Amount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPage {
    pub items: Vec<TransactionSummary>,
    pub total: i64,
}

/// 交易收據；`TransactionDetails` 另外帶出 base / total 金額
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_id: Option<String>,
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub order_number: Option<String>,
    pub amount: Option<ReceiptAmount>,
    pub currency_id: Option<i32>,
    pub currency: Option<String>,
    pub processor_id: Option<String>,
    pub processor: Option<String>,
    pub operation_type_id: Option<i32>,
    pub operation_type: Option<String>,
    pub transaction_type_id: Option<i32>,
    pub transaction_type: Option<String>,
    pub payment_method_type_id: Option<i32>,
    pub payment_method_type: Option<String>,
    pub customer_id: Option<String>,
    pub customer_pan: Option<String>,
    pub card_token_type: Option<CardTokenType>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub merchant_name: Option<String>,
    pub merchant_address: Option<String>,
    pub merchant_phone_number: Option<String>,
    pub merchant_email_address: Option<String>,
    pub merchant_website: Option<String>,
    pub auth_code: Option<String>,
    pub source: Option<Source>,
    pub response_code: Option<String>,
    pub response_description: Option<String>,
    pub cardholder_authentication_method_id: Option<CardholderAuthenticationMethod>,
    pub cardholder_authentication_method: Option<String>,
    pub cvm_result_msg: Option<String>,
    pub card_data_source_id: Option<CardDataSource>,
    pub card_data_source: Option<String>,
    pub card_processing_details: Option<CardDetails>,
    pub ach_processing_details: Option<ElectronicCheckDetails>,
    pub available_operations: Option<Vec<AvailableOperation>>,
    pub avs_response: Option<AvsResponse>,
    pub emv_tags: Option<EmvTags>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionDetails {
    pub base_amount: Option<f64>,
    pub total_amount: Option<f64>,
    #[serde(flatten)]
    pub receipt: TransactionReceipt,
}

impl TransactionDetails {
    pub fn transaction_id(&self) -> Option<&str> {
        self.receipt.transaction_id.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction_id: Option<String>,
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub type_id: Option<i32>,
    pub r#type: Option<String>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub details: Option<TransactionResponseDetails>,
    pub transaction_receipt: Option<TransactionReceipt>,
}

impl TransactionResponse {
    pub fn auth_code(&self) -> Option<&str> {
        self.details.as_ref()?.auth_code.as_deref()
    }

    pub fn response_description(&self) -> Option<&str> {
        self.transaction_receipt.as_ref()?.response_description.as_deref()
    }

    pub fn avs_response(&self) -> Option<&AvsResponse> {
        self.transaction_receipt.as_ref()?.avs_response.as_ref()
    }
}

/// auth / sale 的結果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationResponse {
    pub transaction_id: Option<String>,
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub type_id: Option<i32>,
    pub r#type: Option<String>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub processed_amount: Option<f64>,
    pub details: Option<TransactionResponseDetails>,
    pub transaction_receipt: Option<TransactionReceipt>,
    pub avs_response: Option<AvsResponse>,
}

impl AuthorizationResponse {
    pub fn auth_code(&self) -> Option<&str> {
        self.details.as_ref()?.auth_code.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionProduct {
    pub name: Option<String>,
    pub code: Option<String>,
    pub unit_price: Option<f64>,
    pub measurement_unit: Option<String>,
    pub quantity: Option<f64>,
    pub tax_amount: Option<f64>,
    pub discount_rate: Option<f64>,
    pub description: Option<String>,
    pub measurement_unit_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct L2Data {
    pub tax_amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_exempt: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct L3Data {
    pub invoice_number: Option<String>,
    pub purchase_order: Option<String>,
    pub shipping_charges: Option<f64>,
    pub duty_charges: Option<f64>,
    pub products: Option<Vec<TransactionProduct>>,
}

/// 卡片授權 / 銷售請求。必要欄位由 `new` 帶入，其餘以欄位賦值補上
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    pub payment_processor_id: String,
    pub amount: f64,
    pub currency_id: i32,
    pub card_data_source: CardDataSource,
    pub payment_method_id: Option<String>,
    pub account_number: Option<String>,
    pub security_code: Option<String>,
    pub expiration_month: Option<i32>,
    pub expiration_year: Option<i32>,
    pub track1: Option<String>,
    pub track2: Option<String>,
    pub emv_tags: Option<Vec<String>>,
    pub emv_payment_app_version: Option<String>,
    pub customer_id: Option<String>,
    pub tip_amount: Option<f64>,
    pub tip_rate: Option<f64>,
    pub percentage_off_rate: Option<f64>,
    pub surcharge_rate: Option<f64>,
    pub use_card_price: Option<bool>,
    pub billing_address: Option<Address>,
    pub shipping_address: Option<Address>,
    pub contact_info: Option<ContactInfo>,
    pub pin: Option<String>,
    pub pin_ksn: Option<String>,
    pub emv_fallback_condition: Option<EmvFallbackCondition>,
    pub emv_fallback_last_chip_read: Option<EmvFallbackLastChipRead>,
    pub reference_id: Option<String>,
    pub customer_initiated_transaction: Option<bool>,
    pub l2: Option<L2Data>,
    pub l3: Option<L3Data>,
}

impl AuthorizationRequest {
    pub fn new(
        payment_processor_id: impl Into<String>,
        amount: f64,
        currency_id: i32,
        card_data_source: CardDataSource,
    ) -> Self {
        Self {
            payment_processor_id: payment_processor_id.into(),
            amount,
            currency_id,
            card_data_source,
            payment_method_id: None,
            account_number: None,
            security_code: None,
            expiration_month: None,
            expiration_year: None,
            track1: None,
            track2: None,
            emv_tags: None,
            emv_payment_app_version: None,
            customer_id: None,
            tip_amount: None,
            tip_rate: None,
            percentage_off_rate: None,
            surcharge_rate: None,
            use_card_price: None,
            billing_address: None,
            shipping_address: None,
            contact_info: None,
            pin: None,
            pin_ksn: None,
            emv_fallback_condition: None,
            emv_fallback_last_chip_read: None,
            reference_id: None,
            customer_initiated_transaction: None,
            l2: None,
            l3: None,
        }
    }
}

impl Validate for AuthorizationRequest {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("payment_processor_id", &self.payment_processor_id)?;
        validate_positive_amount("amount", self.amount)?;
        if let Some(month) = self.expiration_month {
            validate_range("expiration_month", month, 1, 12)?;
        }
        Ok(())
    }
}

/// 退款請求；未指定卡片來源時視為 Internet (card-not-present)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefundRequest {
    pub transaction_id: String,
    pub amount: Option<f64>,
    pub card_data_source: Option<CardDataSource>,
    pub track1: Option<String>,
    pub track2: Option<String>,
    pub emv_tags: Option<Vec<String>>,
    pub emv_payment_app_version: Option<String>,
    pub pin: Option<String>,
    pub pin_ksn: Option<String>,
}

impl RefundRequest {
    pub fn new(transaction_id: impl Into<String>, amount: Option<f64>) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            amount,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateAmountRequest {
    pub amount: f64,
    pub percentage_off_rate: Option<f64>,
    pub surcharge_rate: Option<f64>,
    pub tip_amount: Option<f64>,
    pub tip_rate: Option<f64>,
    pub currency_id: Option<i32>,
    pub use_card_price: Option<bool>,
}

impl CalculateAmountRequest {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            ..Default::default()
        }
    }
}

impl Validate for CalculateAmountRequest {
    fn validate(&self) -> Result<()> {
        validate_positive_amount("amount", self.amount)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculateAmountResponse {
    pub currency_id: Option<i32>,
    pub currency: Option<String>,
    pub zero_cost_processing_option_id: Option<i32>,
    pub zero_cost_processing_option: Option<String>,
    pub use_card_price: Option<bool>,
    pub cash: Option<Amount>,
    pub credit_card: Option<Amount>,
    pub debit_card: Option<Amount>,
    pub ach: Option<Amount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub order_by: Option<String>,
    pub asc: Option<bool>,
    pub create_method_id: Option<CreateMethodId>,
    pub created_by_id: Option<String>,
    pub batch_id: Option<String>,
    pub no_batch: Option<bool>,
}

impl Validate for TransactionFilters {
    fn validate(&self) -> Result<()> {
        if let Some(page_size) = self.page_size {
            validate_range("page_size", page_size, 1, 500)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_request_validation() {
        let request = AuthorizationRequest::new("proc-1", 10.0, 1, CardDataSource::Manual);
        assert!(request.validate().is_ok());

        let empty_processor = AuthorizationRequest::new("  ", 10.0, 1, CardDataSource::Manual);
        assert!(empty_processor.validate().is_err());

        let mut bad_month = AuthorizationRequest::new("proc-1", 10.0, 1, CardDataSource::Manual);
        bad_month.expiration_month = Some(13);
        assert!(bad_month.validate().is_err());

        let zero = AuthorizationRequest::new("proc-1", 0.0, 1, CardDataSource::Manual);
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_response_accessors() {
        let response = TransactionResponse {
            details: Some(TransactionResponseDetails {
                auth_code: Some("A1".to_string()),
                ..Default::default()
            }),
            transaction_receipt: Some(TransactionReceipt {
                response_description: Some("Approved".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(response.auth_code(), Some("A1"));
        assert_eq!(response.response_description(), Some("Approved"));
        assert!(response.avs_response().is_none());
        assert_eq!(AuthorizationResponse::default().auth_code(), None);
    }

    #[test]
    fn test_refund_request_defaults() {
        let refund = RefundRequest::new("tx-1", None);
        assert_eq!(refund.transaction_id, "tx-1");
        assert!(refund.card_data_source.is_none());
        assert!(TransactionFilters::default().validate().is_ok());
    }
}
