use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedOptionDto {
    pub id: Option<i32>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettlementBatchTimeSlotDto {
    pub hours: Option<i32>,
    pub minutes: Option<i32>,
    pub timezone_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentProcessorDto {
    pub id: Option<String>,
    pub name: Option<String>,
    pub is_default: Option<bool>,
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub settlement_batch_time_slots: Option<Vec<SettlementBatchTimeSlotDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvsOptionsDto {
    pub is_enabled: Option<bool>,
    pub profile_id: Option<i32>,
    pub profile: Option<String>,
}

/// `GET /pay/api/v1/configurations/payments`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettingsDto {
    pub available_currencies: Option<Vec<NamedOptionDto>>,
    pub zero_cost_processing_option_id: Option<i32>,
    pub zero_cost_processing_option: Option<String>,
    pub default_surcharge_rate: Option<f64>,
    pub default_cash_discount_rate: Option<f64>,
    pub default_dual_pricing_rate: Option<f64>,
    pub is_tips_enabled: Option<bool>,
    pub default_tips_options: Option<Vec<f64>>,
    pub available_card_types: Option<Vec<NamedOptionDto>>,
    pub available_transaction_types: Option<Vec<NamedOptionDto>>,
    pub available_payment_processors: Option<Vec<PaymentProcessorDto>>,
    pub avs: Option<AvsOptionsDto>,
    pub is_customer_card_saving_by_terminal_enabled: Option<bool>,
    pub company_name: Option<String>,
    pub mcc_code: Option<String>,
    pub currency_iso_code: Option<String>,
    pub currency_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiPermissionsDto {
    pub permissions: Option<Vec<i32>>,
}
