use crate::api::transactions::TransactionReceiptDto;
use crate::domain::model::TransactionReceipt;

use super::{amount, enums, transaction_detail, transaction_response};

pub fn to_model(dto: Option<&TransactionReceiptDto>) -> Option<TransactionReceipt> {
    dto.map(build)
}

pub(crate) fn build(dto: &TransactionReceiptDto) -> TransactionReceipt {
    TransactionReceipt {
        transaction_id: dto.transaction_id.clone(),
        transaction_date_time: dto.transaction_date_time,
        order_number: dto.order_number.clone(),
        amount: amount::receipt_amount(dto.amount.as_ref()),
        currency_id: dto.currency_id,
        currency: dto.currency.clone(),
        processor_id: dto.processor_id.clone(),
        processor: dto.processor.clone(),
        operation_type_id: dto.operation_type_id,
        operation_type: dto.operation_type.clone(),
        transaction_type_id: dto.transaction_type_id,
        transaction_type: dto.transaction_type.clone(),
        payment_method_type_id: dto.payment_method_type_id,
        payment_method_type: dto.payment_method_type.clone(),
        customer_id: dto.customer_id.clone(),
        customer_pan: dto.customer_pan.clone(),
        card_token_type: enums::card_token_type(dto.card_token_type),
        status_id: dto.status_id,
        status: dto.status.clone(),
        merchant_name: dto.merchant_name.clone(),
        merchant_address: dto.merchant_address.clone(),
        merchant_phone_number: dto.merchant_phone_number.clone(),
        merchant_email_address: dto.merchant_email_address.clone(),
        merchant_website: dto.merchant_website.clone(),
        auth_code: dto.auth_code.clone(),
        source: transaction_detail::source(dto.source.as_ref()),
        response_code: dto.response_code.clone(),
        response_description: dto.response_description.clone(),
        cardholder_authentication_method_id: enums::cardholder_authentication_method(
            dto.cardholder_authentication_method_id,
        ),
        cardholder_authentication_method: dto.cardholder_authentication_method.clone(),
        cvm_result_msg: dto.cvm_result_msg.clone(),
        card_data_source_id: enums::card_data_source(dto.card_data_source_id),
        card_data_source: dto.card_data_source.clone(),
        card_processing_details: transaction_detail::card_details(
            dto.card_processing_details.as_ref(),
        ),
        ach_processing_details: transaction_detail::electronic_check(
            dto.ach_processing_details.as_ref(),
        ),
        available_operations: transaction_detail::operations(dto.available_operations.as_ref()),
        avs_response: transaction_response::avs(dto.avs_response.as_ref()),
        emv_tags: transaction_detail::emv_tags(dto.emv_tags.as_ref()),
    }
}
