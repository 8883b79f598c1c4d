use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    AddressDto, AmountDto, AvsResponseDto, CardDetailsDto, ContactInfoDto,
    ElectronicCheckDetailsDto, EmvTagsDto, ResponseDetailsDto, SourceDto,
    TransactionOperationDto,
};

/// `GET /pay/api/v1/transactions` 的單筆資料
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummaryDto {
    pub id: Option<String>,
    pub payment_processor_id: Option<String>,
    #[serde(default, with = "super::date")]
    pub date: Option<DateTime<Utc>>,
    pub base_amount: Option<f64>,
    pub total_amount: Option<f64>,
    pub surcharge_amount: Option<f64>,
    pub surcharge_percentage: Option<f64>,
    pub currency_code: Option<String>,
    pub currency_id: Option<i32>,
    pub merchant: Option<String>,
    pub merchant_id: Option<String>,
    pub operation_mode: Option<String>,
    pub payment_method_type: Option<String>,
    pub payment_method_type_id: Option<i32>,
    pub payment_method_name: Option<String>,
    pub customer_name: Option<String>,
    pub customer_company: Option<String>,
    pub customer_pan: Option<String>,
    pub card_token_type: Option<i32>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub status: Option<String>,
    pub status_id: Option<i32>,
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub batch_id: Option<String>,
    pub source: Option<SourceDto>,
    pub available_operations: Option<Vec<TransactionOperationDto>>,
    pub amount: Option<AmountDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionsPageDto {
    pub items: Option<Vec<TransactionSummaryDto>>,
    pub total: Option<i64>,
}

/// 交易明細與收據共用同一份 schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceiptDto {
    pub transaction_id: Option<String>,
    #[serde(default, with = "super::date")]
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub order_number: Option<String>,
    pub amount: Option<AmountDto>,
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
    pub card_token_type: Option<i32>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub merchant_name: Option<String>,
    pub merchant_address: Option<String>,
    pub merchant_phone_number: Option<String>,
    pub merchant_email_address: Option<String>,
    pub merchant_website: Option<String>,
    pub auth_code: Option<String>,
    pub source: Option<SourceDto>,
    pub response_code: Option<String>,
    pub response_description: Option<String>,
    pub cardholder_authentication_method_id: Option<i32>,
    pub cardholder_authentication_method: Option<String>,
    pub cvm_result_msg: Option<String>,
    pub card_data_source_id: Option<i32>,
    pub card_data_source: Option<String>,
    pub card_processing_details: Option<CardDetailsDto>,
    pub ach_processing_details: Option<ElectronicCheckDetailsDto>,
    pub available_operations: Option<Vec<TransactionOperationDto>>,
    pub avs_response: Option<AvsResponseDto>,
    pub emv_tags: Option<EmvTagsDto>,
}

pub type TransactionDetailsDto = TransactionReceiptDto;

/// capture / void / return 的回應
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponseDto {
    pub transaction_id: Option<String>,
    #[serde(default, with = "super::date")]
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub details: Option<ResponseDetailsDto>,
    pub transaction_receipt: Option<TransactionReceiptDto>,
}

/// auth / sale 的回應
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationResponseDto {
    pub transaction_id: Option<String>,
    #[serde(default, with = "super::date")]
    pub transaction_date_time: Option<DateTime<Utc>>,
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub status_id: Option<i32>,
    pub status: Option<String>,
    pub processed_amount: Option<f64>,
    pub details: Option<ResponseDetailsDto>,
    pub transaction_receipt: Option<TransactionReceiptDto>,
    pub avs_response: Option<AvsResponseDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement_unit_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L2DataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_exempt: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct L3DataDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_charges: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duty_charges: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<TransactionProductDto>>,
}

/// `POST /transactions/auth` 與 `/transactions/sale` 的請求內容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardTransactionRequestDto {
    pub payment_processor_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tip_rate: Option<f64>,
    pub currency_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage_off_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surcharge_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_card_price: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<AddressDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<AddressDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<ContactInfoDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_payment_app_version: Option<String>,
    pub card_data_source: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_ksn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debit: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_fallback_condition: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_fallback_last_chip_read: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2: Option<L2DataDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l3: Option<L3DataDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_initiated_transaction: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequestDto {
    pub transaction_id: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoidRequestDto {
    pub transaction_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnRequestDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emv_payment_app_version: Option<String>,
    pub card_data_source: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_ksn: Option<String>,
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateAmountResponseDto {
    pub currency_id: Option<i32>,
    pub currency: Option<String>,
    pub zero_cost_processing_option_id: Option<i32>,
    pub zero_cost_processing_option: Option<String>,
    pub use_card_price: Option<bool>,
    pub cash: Option<AmountDto>,
    pub credit_card: Option<AmountDto>,
    pub debit_card: Option<AmountDto>,
    pub ach: Option<AmountDto>,
}
