use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmountDto {
    pub base_amount: Option<f64>,
    pub percentage_off_amount: Option<f64>,
    pub percentage_off_rate: Option<f64>,
    pub cash_discount_amount: Option<f64>,
    pub cash_discount_rate: Option<f64>,
    pub surcharge_amount: Option<f64>,
    pub surcharge_rate: Option<f64>,
    pub tip_amount: Option<f64>,
    pub tip_rate: Option<f64>,
    pub tax_amount: Option<f64>,
    pub tax_rate: Option<f64>,
    pub total_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_notification: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDto {
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedTipDto {
    pub tip_percent: Option<f64>,
    pub tip_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOperationDto {
    pub type_id: Option<i32>,
    #[serde(rename = "type")]
    pub r#type: Option<String>,
    pub available_amount: Option<f64>,
    pub suggested_tips: Option<Vec<SuggestedTipDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTagDto {
    pub key: Option<String>,
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmvTagsDto {
    pub ac: Option<String>,
    pub tvr: Option<String>,
    pub tsi: Option<String>,
    pub aid: Option<String>,
    pub application_label: Option<String>,
    pub raw_tags: Option<Vec<RawTagDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDetailsDto {
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
#[serde(rename_all = "camelCase")]
pub struct ElectronicCheckDetailsDto {
    pub customer_account_number: Option<String>,
    pub customer_routing_number: Option<String>,
    pub account_holder_type: Option<String>,
    pub account_holder_type_id: Option<i32>,
    pub account_type: Option<String>,
    pub account_type_id: Option<i32>,
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvsResponseDto {
    pub action_id: Option<i32>,
    pub action: Option<String>,
    pub response_code: Option<String>,
    pub group_id: Option<i32>,
    pub group: Option<String>,
    pub result_id: Option<i32>,
    pub result: Option<String>,
    pub code_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDetailsDto {
    pub host_response_code: Option<String>,
    pub host_response_message: Option<String>,
    pub host_response_definition: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub processor_response_code: Option<String>,
    pub auth_code: Option<String>,
    pub masked_pan: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case_and_type_keyword() {
        let source: SourceDto = serde_json::from_value(serde_json::json!({
            "typeId": 3,
            "type": "Terminal",
            "id": "src-1"
        }))
        .unwrap();

        assert_eq!(source.type_id, Some(3));
        assert_eq!(source.r#type.as_deref(), Some("Terminal"));
        assert_eq!(source.name, None);
    }

    #[test]
    fn test_address_omits_absent_fields() {
        let address = AddressDto {
            city: Some("Austin".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&address).unwrap();
        assert_eq!(json, serde_json::json!({ "city": "Austin" }));
    }
}
