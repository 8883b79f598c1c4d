use crate::api::transactions::TransactionsPageDto;
use crate::domain::model::TransactionsPage;
use tracing::warn;

use super::transaction_summary;

/// 無效的交易摘要會被略過，其餘保持原順序
pub fn to_model(dto: &TransactionsPageDto) -> TransactionsPage {
    let items = dto
        .items
        .iter()
        .flatten()
        .filter_map(|item| match transaction_summary::to_model(item) {
            Ok(summary) => Some(summary),
            Err(e) => {
                warn!("⚠️ Skipping transaction summary: {}", e);
                None
            }
        })
        .collect();

    TransactionsPage {
        items,
        total: dto.total.unwrap_or(0),
    }
}
