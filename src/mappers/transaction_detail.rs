use crate::api::common::{
    CardDetailsDto, ElectronicCheckDetailsDto, EmvTagsDto, SourceDto, SuggestedTipDto,
    TransactionOperationDto,
};
use crate::api::transactions::TransactionDetailsDto;
use crate::domain::model::{
    AvailableOperation, CardDetails, ElectronicCheckDetails, EmvTags, RawTag, Source,
    SuggestedTip, TransactionDetails,
};

use super::transaction_receipt;

/// `GET /transactions/{id}`：收據欄位加上 base / total 金額
pub fn to_model(dto: &TransactionDetailsDto) -> TransactionDetails {
    let receipt = transaction_receipt::build(dto);
    let amount = receipt.amount;
    TransactionDetails {
        base_amount: amount.and_then(|a| a.base_amount),
        total_amount: amount.and_then(|a| a.total_amount),
        receipt,
    }
}

pub fn source(dto: Option<&SourceDto>) -> Option<Source> {
    let dto = dto?;
    Some(Source {
        type_id: dto.type_id,
        r#type: dto.r#type.clone(),
        id: dto.id.clone(),
        name: dto.name.clone().unwrap_or_default(),
    })
}

/// 百分比與金額缺一即丟棄
fn suggested_tip(dto: &SuggestedTipDto) -> Option<SuggestedTip> {
    Some(SuggestedTip {
        tip_percent: dto.tip_percent?,
        tip_amount: dto.tip_amount?,
    })
}

pub fn operation(dto: &TransactionOperationDto) -> AvailableOperation {
    AvailableOperation {
        type_id: dto.type_id.unwrap_or(0),
        r#type: dto.r#type.clone(),
        available_amount: dto.available_amount,
        suggested_tips: dto
            .suggested_tips
            .as_ref()
            .map(|tips| tips.iter().filter_map(suggested_tip).collect()),
    }
}

pub fn operations(dtos: Option<&Vec<TransactionOperationDto>>) -> Option<Vec<AvailableOperation>> {
    dtos.map(|ops| ops.iter().map(operation).collect())
}

pub fn emv_tags(dto: Option<&EmvTagsDto>) -> Option<EmvTags> {
    let dto = dto?;
    let raw_tags = dto.raw_tags.as_ref().map(|tags| {
        tags.iter()
            .filter_map(|raw| {
                raw.key.as_ref().map(|key| RawTag {
                    tag: key.clone(),
                    value: raw.value.clone(),
                })
            })
            .collect()
    });

    Some(EmvTags {
        ac: dto.ac.clone(),
        tvr: dto.tvr.clone(),
        tsi: dto.tsi.clone(),
        aid: dto.aid.clone(),
        application_label: dto.application_label.clone(),
        raw_tags,
    })
}

pub fn card_details(dto: Option<&CardDetailsDto>) -> Option<CardDetails> {
    let dto = dto?;
    Some(CardDetails {
        auth_code: dto.auth_code.clone(),
        mid: dto.mid.clone(),
        tid: dto.tid.clone(),
        card_credit_debit_type_id: dto.card_credit_debit_type_id,
        card_credit_debit_type: dto.card_credit_debit_type.clone(),
        process_credit_debit_type_id: dto.process_credit_debit_type_id,
        process_credit_debit_type: dto.process_credit_debit_type.clone(),
        rrn: dto.rrn.clone(),
        card_type_id: dto.card_type_id,
        card_type: dto.card_type.clone(),
    })
}

pub fn electronic_check(dto: Option<&ElectronicCheckDetailsDto>) -> Option<ElectronicCheckDetails> {
    let dto = dto?;
    Some(ElectronicCheckDetails {
        customer_account_number: dto.customer_account_number.clone(),
        customer_routing_number: dto.customer_routing_number.clone(),
        account_holder_type: dto.account_holder_type.clone(),
        account_holder_type_id: dto.account_holder_type_id,
        account_type: dto.account_type.clone(),
        account_type_id: dto.account_type_id,
        tax_id: dto.tax_id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{AmountDto, RawTagDto};
    use crate::domain::model::CardDataSource;

    #[test]
    fn test_details_amount_split() {
        let dto = TransactionDetailsDto {
            transaction_id: Some("tx-1".to_string()),
            amount: Some(AmountDto {
                base_amount: Some(10.0),
                total_amount: Some(12.5),
                tax_amount: Some(1.0),
                ..Default::default()
            }),
            card_data_source_id: Some(4),
            ..Default::default()
        };

        let details = to_model(&dto);
        assert_eq!(details.transaction_id(), Some("tx-1"));
        assert_eq!(details.base_amount, Some(10.0));
        assert_eq!(details.total_amount, Some(12.5));
        assert_eq!(details.receipt.card_data_source_id, Some(CardDataSource::Emv));
        assert_eq!(details.receipt.amount.unwrap().tip_amount, None);
    }

    #[test]
    fn test_details_without_amount() {
        let details = to_model(&TransactionDetailsDto::default());
        assert_eq!(details.base_amount, None);
        assert_eq!(details.total_amount, None);
        assert!(details.receipt.source.is_none());
    }

    #[test]
    fn test_source_name_defaults_to_empty() {
        let dto = SourceDto {
            type_id: Some(2),
            ..Default::default()
        };
        let source = source(Some(&dto)).unwrap();
        assert_eq!(source.name, "");
        assert_eq!(source.type_id, Some(2));
        assert!(super::source(None).is_none());
    }

    #[test]
    fn test_raw_tags_without_key_are_dropped() {
        let dto = EmvTagsDto {
            raw_tags: Some(vec![
                RawTagDto {
                    key: Some("9F26".to_string()),
                    value: Some("AA".to_string()),
                },
                RawTagDto {
                    key: None,
                    value: Some("lost".to_string()),
                },
                RawTagDto {
                    key: Some("95".to_string()),
                    value: None,
                },
            ]),
            ..Default::default()
        };

        let tags = emv_tags(Some(&dto)).unwrap();
        let raw = tags.raw_tags.unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0].tag, "9F26");
        assert_eq!(raw[1].tag, "95");
        assert_eq!(raw[1].value, None);
    }

    #[test]
    fn test_suggested_tips_filtering_keeps_order() {
        let dto = TransactionOperationDto {
            type_id: None,
            suggested_tips: Some(vec![
                SuggestedTipDto {
                    tip_percent: Some(15.0),
                    tip_amount: Some(1.5),
                },
                SuggestedTipDto::default(),
                SuggestedTipDto {
                    tip_percent: Some(20.0),
                    tip_amount: None,
                },
                SuggestedTipDto {
                    tip_percent: None,
                    tip_amount: Some(3.0),
                },
                SuggestedTipDto {
                    tip_percent: Some(25.0),
                    tip_amount: Some(2.5),
                },
            ]),
            ..Default::default()
        };

        let op = operation(&dto);
        assert_eq!(op.type_id, 0);
        let tips = op.suggested_tips.unwrap();
        assert_eq!(tips.len(), 2);
        assert_eq!(tips[0].tip_percent, 15.0);
        assert_eq!(tips[0].tip_amount, 1.5);
        assert_eq!(tips[1].tip_percent, 25.0);
        assert_eq!(tips[1].tip_amount, 2.5);
    }

    #[test]
    fn test_optional_sub_objects_propagate_none() {
        assert!(card_details(None).is_none());
        assert!(electronic_check(None).is_none());
        assert!(emv_tags(None).is_none());
        assert!(operations(None).is_none());
    }
}
