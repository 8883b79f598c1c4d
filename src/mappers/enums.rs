//! 整數代碼 <-> 列舉對照表。未知代碼回傳 `None` 並記錄 warn。

use crate::domain::model::{
    ApiPermission, AvsAction, AvsCodeGroup, AvsResult, CardDataSource, CardTokenType,
    CardholderAuthenticationMethod, CreateMethodId, EmvFallbackCondition,
    EmvFallbackLastChipRead,
};
use tracing::warn;

const CARD_DATA_SOURCES: [(i32, CardDataSource); 7] = [
    (1, CardDataSource::Internet),
    (2, CardDataSource::Swipe),
    (3, CardDataSource::Nfc),
    (4, CardDataSource::Emv),
    (5, CardDataSource::EmvContactless),
    (6, CardDataSource::FallbackSwipe),
    (7, CardDataSource::Manual),
];

const EMV_FALLBACK_CONDITIONS: [(i32, EmvFallbackCondition); 2] = [
    (0, EmvFallbackCondition::IccTerminalError),
    (1, EmvFallbackCondition::NoCandidateList),
];

const EMV_FALLBACK_LAST_CHIP_READS: [(i32, EmvFallbackLastChipRead); 4] = [
    (0, EmvFallbackLastChipRead::Successful),
    (1, EmvFallbackLastChipRead::Failed),
    (2, EmvFallbackLastChipRead::NotAChipTransaction),
    (3, EmvFallbackLastChipRead::Unknown),
];

const CARD_TOKEN_TYPES: [(i32, CardTokenType); 2] =
    [(1, CardTokenType::Local), (2, CardTokenType::Network)];

const CARDHOLDER_AUTH_METHODS: [(i32, CardholderAuthenticationMethod); 6] = [
    (0, CardholderAuthenticationMethod::NoCvm),
    (1, CardholderAuthenticationMethod::Signature),
    (2, CardholderAuthenticationMethod::OfflinePin),
    (3, CardholderAuthenticationMethod::OnlinePin),
    (4, CardholderAuthenticationMethod::OfflinePinAndSignature),
    (5, CardholderAuthenticationMethod::ConsumerDevice),
];

const AVS_ACTIONS: [(i32, AvsAction); 2] =
    [(1, AvsAction::NoMatch), (2, AvsAction::PartialMatch)];

const AVS_CODE_GROUPS: [(i32, AvsCodeGroup); 5] = [
    (1, AvsCodeGroup::NoMatch),
    (2, AvsCodeGroup::PartialMatch),
    (3, AvsCodeGroup::Incompatible),
    (4, AvsCodeGroup::Unavailable),
    (5, AvsCodeGroup::ValidGroup),
];

const AVS_RESULTS: [(i32, AvsResult); 2] = [(1, AvsResult::Passed), (2, AvsResult::Failed)];

const CREATE_METHODS: [(i32, CreateMethodId); 9] = [
    (1, CreateMethodId::Portal),
    (2, CreateMethodId::ApiToken),
    (3, CreateMethodId::Terminal),
    (4, CreateMethodId::Invoice),
    (5, CreateMethodId::QuickPayment),
    (6, CreateMethodId::WebComponent),
    (7, CreateMethodId::Subscription),
    (8, CreateMethodId::MobileApp),
    (9, CreateMethodId::TapToPay),
];

fn decode<T: Copy>(table: &[(i32, T)], code: i32, kind: &str) -> Option<T> {
    let found = table.iter().find(|(c, _)| *c == code).map(|(_, v)| *v);
    if found.is_none() {
        warn!(code, kind, "⚠️ Unknown enum code from gateway, ignoring");
    }
    found
}

fn encode<T: Copy + PartialEq>(table: &[(i32, T)], value: T) -> i32 {
    table
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(c, _)| *c)
        // 每個表都涵蓋全部 variant
        .unwrap_or_default()
}

pub fn card_data_source(code: Option<i32>) -> Option<CardDataSource> {
    decode(&CARD_DATA_SOURCES, code?, "CardDataSource")
}

pub fn card_data_source_code(value: CardDataSource) -> i32 {
    encode(&CARD_DATA_SOURCES, value)
}

pub fn emv_fallback_condition(code: Option<i32>) -> Option<EmvFallbackCondition> {
    decode(&EMV_FALLBACK_CONDITIONS, code?, "EmvFallbackCondition")
}

pub fn emv_fallback_condition_code(value: EmvFallbackCondition) -> i32 {
    encode(&EMV_FALLBACK_CONDITIONS, value)
}

pub fn emv_fallback_last_chip_read(code: Option<i32>) -> Option<EmvFallbackLastChipRead> {
    decode(&EMV_FALLBACK_LAST_CHIP_READS, code?, "EmvFallbackLastChipRead")
}

pub fn emv_fallback_last_chip_read_code(value: EmvFallbackLastChipRead) -> i32 {
    encode(&EMV_FALLBACK_LAST_CHIP_READS, value)
}

pub fn card_token_type(code: Option<i32>) -> Option<CardTokenType> {
    decode(&CARD_TOKEN_TYPES, code?, "CardTokenType")
}

pub fn cardholder_authentication_method(
    code: Option<i32>,
) -> Option<CardholderAuthenticationMethod> {
    decode(&CARDHOLDER_AUTH_METHODS, code?, "CardholderAuthenticationMethod")
}

pub fn avs_action(code: Option<i32>) -> Option<AvsAction> {
    decode(&AVS_ACTIONS, code?, "AvsAction")
}

pub fn avs_code_group(code: Option<i32>) -> Option<AvsCodeGroup> {
    decode(&AVS_CODE_GROUPS, code?, "AvsCodeGroup")
}

pub fn avs_result(code: Option<i32>) -> Option<AvsResult> {
    decode(&AVS_RESULTS, code?, "AvsResult")
}

pub fn create_method(code: Option<i32>) -> Option<CreateMethodId> {
    decode(&CREATE_METHODS, code?, "CreateMethodId")
}

pub fn create_method_code(value: CreateMethodId) -> i32 {
    encode(&CREATE_METHODS, value)
}

pub fn api_permission(code: i32) -> Option<ApiPermission> {
    let found = ApiPermission::ALL.into_iter().find(|p| p.code() == code);
    if found.is_none() {
        warn!(code, "⚠️ Unknown API permission code, dropping");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_data_source_both_directions() {
        for (code, source) in CARD_DATA_SOURCES {
            assert_eq!(card_data_source(Some(code)), Some(source));
            assert_eq!(card_data_source_code(source), code);
        }
        assert_eq!(card_data_source(None), None);
    }

    #[test]
    fn test_unknown_codes_never_default_to_first_case() {
        assert_eq!(card_data_source(Some(0)), None);
        assert_eq!(card_data_source(Some(99)), None);
        assert_eq!(avs_code_group(Some(6)), None);
        assert_eq!(cardholder_authentication_method(Some(-1)), None);
        assert_eq!(create_method(Some(10)), None);
        assert_eq!(api_permission(37), None);
    }

    #[test]
    fn test_zero_based_tables() {
        assert_eq!(
            emv_fallback_condition(Some(0)),
            Some(EmvFallbackCondition::IccTerminalError)
        );
        assert_eq!(
            emv_fallback_last_chip_read(Some(3)),
            Some(EmvFallbackLastChipRead::Unknown)
        );
        assert_eq!(
            cardholder_authentication_method(Some(0)),
            Some(CardholderAuthenticationMethod::NoCvm)
        );
        assert_eq!(api_permission(0), Some(ApiPermission::PosStartTransaction));
        assert_eq!(api_permission(36), Some(ApiPermission::GeneralConfigurations));
    }

    #[test]
    fn test_create_method_codes() {
        assert_eq!(create_method_code(CreateMethodId::TapToPay), 9);
        assert_eq!(create_method(Some(2)), Some(CreateMethodId::ApiToken));
    }
}
