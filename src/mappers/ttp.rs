use crate::domain::model::{
    PlatformEvent, PlatformReaderEvent, PlatformTransaction, TtpCustomEvent, TtpCvmData, TtpEvent,
    TtpReaderEvent, TtpTransactionResult, TtpTransactionStatus,
};

pub fn to_event(event: &PlatformEvent) -> TtpEvent {
    match event {
        PlatformEvent::Reader(reader) => TtpEvent::Reader(reader_event(*reader)),
        PlatformEvent::Custom {
            name,
            message,
            progress,
        } => TtpEvent::Custom(custom_event(name, message.as_deref(), *progress)),
    }
}

fn reader_event(event: PlatformReaderEvent) -> TtpReaderEvent {
    match event {
        PlatformReaderEvent::UpdateProgress(progress) => TtpReaderEvent::UpdateProgress(progress),
        PlatformReaderEvent::NotReady => TtpReaderEvent::NotReady,
        PlatformReaderEvent::ReadyForTap => TtpReaderEvent::ReadyForTap,
        PlatformReaderEvent::CardDetected => TtpReaderEvent::CardDetected,
        PlatformReaderEvent::RemoveCard => TtpReaderEvent::RemoveCard,
        PlatformReaderEvent::ReadCompleted => TtpReaderEvent::ReadCompleted,
        PlatformReaderEvent::ReadRetry => TtpReaderEvent::ReadRetry,
        PlatformReaderEvent::ReadCancelled => TtpReaderEvent::ReadCancelled,
        PlatformReaderEvent::PinEntryRequested => TtpReaderEvent::PinEntryRequested,
        PlatformReaderEvent::PinEntryCompleted => TtpReaderEvent::PinEntryCompleted,
        PlatformReaderEvent::UserInterfaceDismissed => TtpReaderEvent::UserInterfaceDismissed,
        // 未知的讀卡器事件一律視為未完成
        PlatformReaderEvent::ReadNotCompleted | PlatformReaderEvent::Other => {
            TtpReaderEvent::ReadNotCompleted
        }
    }
}

/// custom 事件以名稱比對 (不分大小寫)
fn custom_event(name: &str, message: Option<&str>, progress: Option<i32>) -> TtpCustomEvent {
    match name.to_ascii_lowercase().as_str() {
        "preparing" => TtpCustomEvent::Preparing,
        "ready" => TtpCustomEvent::Ready,
        "readernotready" => {
            TtpCustomEvent::ReaderNotReady(message.unwrap_or("Reader not ready").to_string())
        }
        "carddetected" => TtpCustomEvent::CardDetected,
        "cardreadsuccess" => TtpCustomEvent::CardReadSuccess,
        "cardreadfailure" => TtpCustomEvent::CardReadFailure,
        "authorizing" => TtpCustomEvent::Authorizing,
        "approved" => TtpCustomEvent::Approved,
        "declined" => TtpCustomEvent::Declined,
        "erroroccurred" => TtpCustomEvent::ErrorOccurred,
        "inprogress" => TtpCustomEvent::InProgress,
        "updatereaderprogress" => TtpCustomEvent::UpdateReaderProgress(progress.unwrap_or(0)),
        "unknownevent" => TtpCustomEvent::UnknownEvent(message.unwrap_or(name).to_string()),
        _ => TtpCustomEvent::UnknownEvent(format!("Unknown custom event: {}", name)),
    }
}

fn status(outcome: Option<&str>) -> TtpTransactionStatus {
    match outcome.map(str::to_ascii_uppercase).as_deref() {
        Some("APPROVED") => TtpTransactionStatus::Approved,
        Some("DECLINED") => TtpTransactionStatus::Declined,
        _ => TtpTransactionStatus::Failed,
    }
}

pub fn to_transaction_result(transaction: &PlatformTransaction) -> TtpTransactionResult {
    TtpTransactionResult {
        transaction_id: transaction.transaction_id.clone(),
        transaction_outcome: transaction.transaction_outcome.clone(),
        status: status(transaction.transaction_outcome.as_deref()),
        order_id: transaction.order_id.clone(),
        authorized_amount: transaction.authorized_amount.clone(),
        authorization_code: transaction.authorization_code.clone(),
        authorisation_response_code: transaction.authorisation_response_code.clone(),
        authorized_date: transaction.authorized_date.clone(),
        authorized_date_format: transaction.authorized_date_format.clone(),
        card_brand_name: transaction.card_brand_name.clone(),
        masked_card_number: transaction.masked_card_number.clone(),
        external_reference_id: transaction.external_reference_id.clone(),
        application_identifier: transaction.application_identifier.clone(),
        application_preferred_name: transaction.application_preferred_name.clone(),
        application_cryptogram: transaction.application_cryptogram.clone(),
        application_transaction_counter: transaction.application_transaction_counter.clone(),
        terminal_verification_results: transaction.terminal_verification_results.clone(),
        issuer_application_data: transaction.issuer_application_data.clone(),
        application_pan_sequence_number: transaction.application_pan_sequence_number.clone(),
        partner_data_map: transaction.partner_data_map.clone(),
        cvm_tags: transaction.cvm_tags.as_ref().map(|tags| {
            tags.iter()
                .map(|tag| TtpCvmData {
                    tag: tag.tag.clone(),
                    value: tag.value.clone(),
                })
                .collect()
        }),
        cvm_action: transaction.cvm_action.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ttp::PlatformCvmTag;

    fn custom(name: &str) -> PlatformEvent {
        PlatformEvent::Custom {
            name: name.to_string(),
            message: None,
            progress: None,
        }
    }

    #[test]
    fn test_reader_events_map_one_to_one() {
        assert_eq!(
            to_event(&PlatformEvent::Reader(PlatformReaderEvent::UpdateProgress(40))),
            TtpEvent::Reader(TtpReaderEvent::UpdateProgress(40))
        );
        assert_eq!(
            to_event(&PlatformEvent::Reader(PlatformReaderEvent::ReadyForTap)),
            TtpEvent::Reader(TtpReaderEvent::ReadyForTap)
        );
        assert_eq!(
            to_event(&PlatformEvent::Reader(PlatformReaderEvent::Other)),
            TtpEvent::Reader(TtpReaderEvent::ReadNotCompleted)
        );
    }

    #[test]
    fn test_custom_events_by_name() {
        assert_eq!(
            to_event(&custom("cardReadSuccess")),
            TtpEvent::Custom(TtpCustomEvent::CardReadSuccess)
        );
        assert_eq!(
            to_event(&custom("readerNotReady")),
            TtpEvent::Custom(TtpCustomEvent::ReaderNotReady("Reader not ready".to_string()))
        );
        assert_eq!(
            to_event(&custom("updateReaderProgress")),
            TtpEvent::Custom(TtpCustomEvent::UpdateReaderProgress(0))
        );
        assert_eq!(
            to_event(&PlatformEvent::Custom {
                name: "readerNotReady".to_string(),
                message: Some("NFC busy".to_string()),
                progress: None,
            }),
            TtpEvent::Custom(TtpCustomEvent::ReaderNotReady("NFC busy".to_string()))
        );
        assert_eq!(
            to_event(&custom("somethingNew")),
            TtpEvent::Custom(TtpCustomEvent::UnknownEvent(
                "Unknown custom event: somethingNew".to_string()
            ))
        );
    }

    #[test]
    fn test_transaction_outcome_status() {
        let mut transaction = PlatformTransaction {
            transaction_id: Some("ttp-1".to_string()),
            transaction_outcome: Some("approved".to_string()),
            cvm_tags: Some(vec![PlatformCvmTag {
                tag: Some("9F34".to_string()),
                value: Some("1E0300".to_string()),
            }]),
            ..Default::default()
        };

        let result = to_transaction_result(&transaction);
        assert_eq!(result.status, TtpTransactionStatus::Approved);
        assert_eq!(result.cvm_tags.unwrap()[0].tag.as_deref(), Some("9F34"));

        transaction.transaction_outcome = Some("DECLINED".to_string());
        assert_eq!(
            to_transaction_result(&transaction).status,
            TtpTransactionStatus::Declined
        );

        transaction.transaction_outcome = Some("TIMEOUT".to_string());
        assert_eq!(
            to_transaction_result(&transaction).status,
            TtpTransactionStatus::Failed
        );

        transaction.transaction_outcome = None;
        assert_eq!(
            to_transaction_result(&transaction).status,
            TtpTransactionStatus::Failed
        );
    }
}
