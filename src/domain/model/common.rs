use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::enums::{AvsAction, AvsCodeGroup, AvsResult};

/// 金額拆解；缺少的欄位一律為 0.0
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub base_amount: f64,
    pub percentage_off_amount: f64,
    pub percentage_off_rate: f64,
    pub cash_discount_amount: f64,
    pub cash_discount_rate: f64,
    pub surcharge_amount: f64,
    pub surcharge_rate: f64,
    pub tip_amount: f64,
    pub tip_rate: f64,
    pub tax_amount: f64,
    pub tax_rate: f64,
    pub total_amount: f64,
}

/// 收據上的金額，保留缺值
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptAmount {
    pub base_amount: Option<f64>,
    pub percentage_off_amount: Option<f64>,
    pub percentage_off_rate: Option<f64>,
    pub cash_discount_amount: Option<f64>,
    pub cash_discount_rate: Option<f64>,
    pub surcharge_amount: Option<f64>,
    pub surcharge_rate: Option<f64>,
    pub tip_amount: Option<f64>,
    pub tip_rate: Option<f64>,
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state_name: Option<String>,
    pub state_id: Option<i32>,
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company_name: Option<String>,
    pub email: Option<String>,
    pub mobile_number: Option<String>,
    pub sms_notification: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub type_id: Option<i32>,
    pub r#type: Option<String>,
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestedTip {
    pub tip_percent: f64,
    pub tip_amount: f64,
}

/// 交易上目前可執行的後續操作 (capture / void / refund ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AvailableOperation {
    pub type_id: i32,
    pub r#type: Option<String>,
    pub available_amount: Option<f64>,
    pub suggested_tips: Option<Vec<SuggestedTip>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTag {
    pub tag: String,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmvTags {
    pub ac: Option<String>,
    pub tvr: Option<String>,
    pub tsi: Option<String>,
    pub aid: Option<String>,
    pub application_label: Option<String>,
    pub raw_tags: Option<Vec<RawTag>>,
}

impl EmvTags {
    /// tag -> value；缺值以空字串表示，重複的 tag 以後者為準
    pub fn raw_tag_map(&self) -> HashMap<String, String> {
        self.raw_tags
            .iter()
            .flatten()
            .map(|raw| (raw.tag.clone(), raw.value.clone().unwrap_or_default()))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDetails {
    pub auth_code: Option<String>,
    pub mid: Option<String>,
    pub tid: Option<String>,
    pub card_credit_debit_type_id: Option<i32>,
    pub card_credit_debit_type: Option<String>,
    pub process_credit_debit_type_id: Option<i32>,
    pub process_credit_debit_type: Option<String>,
    pub rrn: Option<String>,
    pub card_type_id: Option<i32>,
    pub card_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicCheckDetails {
    pub customer_account_number: Option<String>,
    pub customer_routing_number: Option<String>,
    pub account_holder_type: Option<String>,
    pub account_holder_type_id: Option<i32>,
    pub account_type: Option<String>,
    pub account_type_id: Option<i32>,
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponseDetails {
    pub host_response_code: Option<String>,
    pub host_response_message: Option<String>,
    pub host_response_definition: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub processor_response_code: Option<String>,
    pub auth_code: Option<String>,
    pub masked_pan: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvsResponse {
    pub action_id: Option<AvsAction>,
    pub action: Option<String>,
    pub response_code: Option<String>,
    pub group_id: Option<AvsCodeGroup>,
    pub group: Option<String>,
    pub result_id: Option<AvsResult>,
    pub result: Option<String>,
    pub code_description: Option<String>,
}
