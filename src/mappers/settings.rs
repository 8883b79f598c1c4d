use crate::api::settings::{
    ApiPermissionsDto, AvsOptionsDto, NamedOptionDto, PaymentProcessorDto, PaymentSettingsDto,
    SettlementBatchTimeSlotDto,
};
use crate::domain::model::settings::DEFAULT_COUNTRY_CODE;
use crate::domain::model::{
    ApiPermissionsResponse, AvsOptions, NamedOption, PaymentProcessor, PaymentSettings,
    SettlementBatchTimeSlot,
};

use super::enums;

fn named_options(dtos: Option<&Vec<NamedOptionDto>>) -> Vec<NamedOption> {
    dtos.iter()
        .flat_map(|options| options.iter())
        .map(|option| NamedOption {
            id: option.id.unwrap_or(0),
            name: option.name.clone(),
        })
        .collect()
}

/// `country_override` 來自 SDK 配置；未設定時固定為 "USA"
pub fn payment_settings(dto: &PaymentSettingsDto, country_override: Option<&str>) -> PaymentSettings {
    PaymentSettings {
        available_currencies: named_options(dto.available_currencies.as_ref()),
        zero_cost_processing_option_id: dto.zero_cost_processing_option_id,
        zero_cost_processing_option: dto.zero_cost_processing_option.clone(),
        default_surcharge_rate: dto.default_surcharge_rate,
        default_cash_discount_rate: dto.default_cash_discount_rate,
        default_dual_pricing_rate: dto.default_dual_pricing_rate,
        is_tips_enabled: dto.is_tips_enabled.unwrap_or(false),
        default_tips_options: dto.default_tips_options.clone(),
        available_card_types: named_options(dto.available_card_types.as_ref()),
        available_transaction_types: named_options(dto.available_transaction_types.as_ref()),
        available_payment_processors: dto
            .available_payment_processors
            .iter()
            .flatten()
            .map(processor)
            .collect(),
        avs: avs_options(dto.avs.as_ref()),
        is_customer_card_saving_by_terminal_enabled: dto
            .is_customer_card_saving_by_terminal_enabled
            .unwrap_or(false),
        company_name: dto.company_name.clone(),
        mcc_code: dto.mcc_code.clone(),
        currency_code: dto.currency_iso_code.clone(),
        currency_id: dto.currency_id,
        country_code: Some(country_override.unwrap_or(DEFAULT_COUNTRY_CODE).to_string()),
    }
}

pub fn processor(dto: &PaymentProcessorDto) -> PaymentProcessor {
    PaymentProcessor {
        id: dto.id.clone(),
        name: dto.name.clone(),
        is_default: dto.is_default,
        type_id: dto.type_id,
        r#type: dto.r#type.clone(),
        settlement_batch_time_slots: dto
            .settlement_batch_time_slots
            .iter()
            .flatten()
            .map(time_slot)
            .collect(),
    }
}

pub fn avs_options(dto: Option<&AvsOptionsDto>) -> Option<AvsOptions> {
    let dto = dto?;
    Some(AvsOptions {
        is_enabled: dto.is_enabled,
        profile_id: dto.profile_id,
        profile: dto.profile.clone(),
    })
}

pub fn time_slot(dto: &SettlementBatchTimeSlotDto) -> SettlementBatchTimeSlot {
    SettlementBatchTimeSlot {
        hours: dto.hours,
        minutes: dto.minutes,
        timezone_name: dto.timezone_name.clone(),
    }
}

/// 表外的權限代碼直接丟棄
pub fn permissions(dto: &ApiPermissionsDto) -> ApiPermissionsResponse {
    ApiPermissionsResponse {
        permissions: dto
            .permissions
            .iter()
            .flatten()
            .filter_map(|code| enums::api_permission(*code))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ApiPermission;

    #[test]
    fn test_payment_settings_defaults() {
        let settings = payment_settings(&PaymentSettingsDto::default(), None);
        assert!(settings.available_currencies.is_empty());
        assert!(settings.available_payment_processors.is_empty());
        assert!(!settings.is_tips_enabled);
        assert!(!settings.is_customer_card_saving_by_terminal_enabled);
        assert_eq!(settings.country_code.as_deref(), Some("USA"));
        assert!(settings.avs.is_none());
    }

    #[test]
    fn test_payment_settings_full() {
        let dto: PaymentSettingsDto = serde_json::from_value(serde_json::json!({
            "availableCurrencies": [{ "id": 1, "name": "USD" }, { "name": "no id" }],
            "zeroCostProcessingOptionId": 4,
            "defaultSurchargeRate": 3.5,
            "isTipsEnabled": true,
            "defaultTipsOptions": [15.0, 18.0, 20.0],
            "availablePaymentProcessors": [{
                "id": "proc-1",
                "name": "TSYS",
                "isDefault": true,
                "type": "Card",
                "settlementBatchTimeSlots": [{ "hours": 23, "minutes": 30, "timezoneName": "EST" }]
            }],
            "avs": { "isEnabled": true, "profileId": 2, "profile": "Strict" },
            "companyName": "Coffee Shop",
            "mccCode": "5814",
            "currencyIsoCode": "USD",
            "currencyId": 1
        }))
        .unwrap();

        let settings = payment_settings(&dto, Some("CAN"));
        assert_eq!(settings.available_currencies[1].id, 0);
        assert!(settings.is_tips_enabled);
        assert!(settings.is_surcharge_zcp());
        assert_eq!(settings.currency_code.as_deref(), Some("USD"));
        assert_eq!(settings.country_code.as_deref(), Some("CAN"));

        let processor = settings.default_processor().unwrap();
        assert_eq!(processor.id.as_deref(), Some("proc-1"));
        assert_eq!(processor.settlement_batch_time_slots[0].hours, Some(23));
        assert_eq!(settings.avs.unwrap().profile.as_deref(), Some("Strict"));
    }

    #[test]
    fn test_permissions_drop_unknown_codes() {
        let dto = ApiPermissionsDto {
            permissions: Some(vec![7, 99, 33, -1, 0]),
        };
        let response = permissions(&dto);
        assert_eq!(
            response.permissions,
            vec![
                ApiPermission::EcommerceAuth,
                ApiPermission::FeatureTapToPayOnMobile,
                ApiPermission::PosStartTransaction,
            ]
        );
        assert!(permissions(&ApiPermissionsDto::default()).permissions.is_empty());
    }
}
