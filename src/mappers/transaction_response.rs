use crate::api::common::{AvsResponseDto, ResponseDetailsDto};
use crate::api::transactions::{AuthorizationResponseDto, TransactionResponseDto};
use crate::domain::model::{
    AuthorizationResponse, AvsResponse, TransactionResponse, TransactionResponseDetails,
};

use super::{enums, transaction_receipt};

/// auth / sale
pub fn authorization(dto: &AuthorizationResponseDto) -> AuthorizationResponse {
    AuthorizationResponse {
        transaction_id: dto.transaction_id.clone(),
        transaction_date_time: dto.transaction_date_time,
        type_id: dto.type_id,
        r#type: dto.r#type.clone(),
        status_id: dto.status_id,
        status: dto.status.clone(),
        processed_amount: dto.processed_amount,
        details: response_details(dto.details.as_ref()),
        transaction_receipt: transaction_receipt::to_model(dto.transaction_receipt.as_ref()),
        avs_response: avs(dto.avs_response.as_ref()),
    }
}

/// capture / void / return
pub fn transaction(dto: &TransactionResponseDto) -> TransactionResponse {
    TransactionResponse {
        transaction_id: dto.transaction_id.clone(),
        transaction_date_time: dto.transaction_date_time,
        type_id: dto.type_id,
        r#type: dto.r#type.clone(),
        status_id: dto.status_id,
        status: dto.status.clone(),
        details: response_details(dto.details.as_ref()),
        transaction_receipt: transaction_receipt::to_model(dto.transaction_receipt.as_ref()),
    }
}

pub fn response_details(dto: Option<&ResponseDetailsDto>) -> Option<TransactionResponseDetails> {
    let dto = dto?;
    Some(TransactionResponseDetails {
        host_response_code: dto.host_response_code.clone(),
        host_response_message: dto.host_response_message.clone(),
        host_response_definition: dto.host_response_definition.clone(),
        code: dto.code.clone(),
        message: dto.message.clone(),
        processor_response_code: dto.processor_response_code.clone(),
        auth_code: dto.auth_code.clone(),
        masked_pan: dto.masked_pan.clone(),
    })
}

pub fn avs(dto: Option<&AvsResponseDto>) -> Option<AvsResponse> {
    let dto = dto?;
    Some(AvsResponse {
        action_id: enums::avs_action(dto.action_id),
        action: dto.action.clone(),
        response_code: dto.response_code.clone(),
        group_id: enums::avs_code_group(dto.group_id),
        group: dto.group.clone(),
        result_id: enums::avs_result(dto.result_id),
        result: dto.result.clone(),
        code_description: dto.code_description.clone(),
    })
}
