use crate::api::transactions::TransactionSummaryDto;
use crate::domain::model::TransactionSummary;
use crate::utils::error::MapperError;

use super::{amount, enums, non_empty, transaction_detail};

const ENTITY: &str = "TransactionSummary";

/// id、merchantId、source 為必要欄位
pub fn to_model(dto: &TransactionSummaryDto) -> Result<TransactionSummary, MapperError> {
    let id = non_empty(dto.id.as_ref()).ok_or_else(|| MapperError::missing_field("id", ENTITY))?;
    let merchant_id = non_empty(dto.merchant_id.as_ref())
        .ok_or_else(|| MapperError::missing_field("merchantId", ENTITY))?;
    let source = transaction_detail::source(dto.source.as_ref())
        .ok_or_else(|| MapperError::missing_field("source", ENTITY))?;

    Ok(TransactionSummary {
        id: id.to_string(),
        payment_processor_id: dto.payment_processor_id.clone().unwrap_or_default(),
        date: dto.date,
        base_amount: dto.base_amount.unwrap_or(0.0),
        total_amount: dto.total_amount.unwrap_or(0.0),
        surcharge_amount: dto.surcharge_amount,
        surcharge_percentage: dto.surcharge_percentage,
        currency_code: dto.currency_code.clone(),
        currency_id: dto.currency_id,
        merchant: dto.merchant.clone(),
        merchant_id: merchant_id.to_string(),
        operation_mode: dto.operation_mode.clone(),
        payment_method_type: dto.payment_method_type.clone(),
        payment_method_type_id: dto.payment_method_type_id,
        payment_method_name: dto.payment_method_name.clone(),
        customer_name: dto.customer_name.clone(),
        customer_company: dto.customer_company.clone(),
        customer_pan: dto.customer_pan.clone(),
        card_token_type: enums::card_token_type(dto.card_token_type),
        customer_email: dto.customer_email.clone(),
        customer_phone: dto.customer_phone.clone(),
        status: dto.status.clone().unwrap_or_default(),
        status_id: dto.status_id.unwrap_or(0),
        type_id: dto.type_id.unwrap_or(0),
        r#type: dto.r#type.clone(),
        batch_id: dto.batch_id.clone(),
        source,
        available_operations: transaction_detail::operations(dto.available_operations.as_ref()),
        amount: amount::to_model(dto.amount.as_ref()).unwrap_or_default(),
    })
}
