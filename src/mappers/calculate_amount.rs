use crate::api::transactions::CalculateAmountResponseDto;
use crate::domain::model::{CalculateAmountRequest, CalculateAmountResponse};

use super::amount;

/// `GET /transactions/calculate-amount` 的 query；未設定的參數不送
pub fn to_query(request: &CalculateAmountRequest) -> Vec<(&'static str, String)> {
    let mut query = vec![("amount", request.amount.to_string())];
    if let Some(rate) = request.percentage_off_rate {
        query.push(("percentageOffRate", rate.to_string()));
    }
    if let Some(rate) = request.surcharge_rate {
        query.push(("surchargeRate", rate.to_string()));
    }
    if let Some(tip) = request.tip_amount {
        query.push(("tipAmount", tip.to_string()));
    }
    if let Some(rate) = request.tip_rate {
        query.push(("tipRate", rate.to_string()));
    }
    if let Some(currency_id) = request.currency_id {
        query.push(("currencyId", currency_id.to_string()));
    }
    if let Some(use_card_price) = request.use_card_price {
        query.push(("useCardPrice", use_card_price.to_string()));
    }
    query
}

pub fn to_model(dto: &CalculateAmountResponseDto) -> CalculateAmountResponse {
    CalculateAmountResponse {
        currency_id: dto.currency_id,
        currency: dto.currency.clone(),
        zero_cost_processing_option_id: dto.zero_cost_processing_option_id,
        zero_cost_processing_option: dto.zero_cost_processing_option.clone(),
        use_card_price: dto.use_card_price,
        cash: amount::to_model(dto.cash.as_ref()),
        credit_card: amount::to_model(dto.credit_card.as_ref()),
        debit_card: amount::to_model(dto.debit_card.as_ref()),
        ach: amount::to_model(dto.ach.as_ref()),
    }
}
