use crate::api::transactions::{
    CaptureRequestDto, CardTransactionRequestDto, L2DataDto, L3DataDto, ReturnRequestDto,
    TransactionProductDto, VoidRequestDto,
};
use crate::domain::model::{
    AuthorizationRequest, CardDataSource, L2Data, L3Data, RefundRequest, TransactionProduct,
};

use super::{address, enums};

pub fn authorization(request: &AuthorizationRequest) -> CardTransactionRequestDto {
    CardTransactionRequestDto {
        payment_processor_id: request.payment_processor_id.clone(),
        customer_id: request.customer_id.clone(),
        payment_method_id: request.payment_method_id.clone(),
        amount: request.amount,
        tip_amount: request.tip_amount,
        tip_rate: request.tip_rate,
        currency_id: request.currency_id,
        percentage_off_rate: request.percentage_off_rate,
        surcharge_rate: request.surcharge_rate,
        use_card_price: request.use_card_price,
        billing_address: address::to_wire(request.billing_address.as_ref()),
        shipping_address: address::to_wire(request.shipping_address.as_ref()),
        contact_info: address::contact_to_wire(request.contact_info.as_ref()),
        account_number: request.account_number.clone(),
        security_code: request.security_code.clone(),
        expiration_month: request.expiration_month,
        expiration_year: request.expiration_year,
        track1: request.track1.clone(),
        track2: request.track2.clone(),
        emv_tags: request.emv_tags.clone(),
        emv_payment_app_version: request.emv_payment_app_version.clone(),
        card_data_source: enums::card_data_source_code(request.card_data_source),
        pin: request.pin.clone(),
        pin_ksn: request.pin_ksn.clone(),
        debit: None,
        emv_fallback_condition: request
            .emv_fallback_condition
            .map(enums::emv_fallback_condition_code),
        emv_fallback_last_chip_read: request
            .emv_fallback_last_chip_read
            .map(enums::emv_fallback_last_chip_read_code),
        reference_id: request.reference_id.clone(),
        l2: l2(request.l2.as_ref()),
        l3: l3(request.l3.as_ref()),
        customer_initiated_transaction: request.customer_initiated_transaction,
    }
}

/// sale 與 auth 共用同一份 body
pub fn sale(request: &AuthorizationRequest) -> CardTransactionRequestDto {
    authorization(request)
}

pub fn capture(transaction_id: &str, amount: f64) -> CaptureRequestDto {
    CaptureRequestDto {
        transaction_id: transaction_id.to_string(),
        amount,
    }
}

pub fn void(transaction_id: &str) -> VoidRequestDto {
    VoidRequestDto {
        transaction_id: transaction_id.to_string(),
    }
}

/// 未指定卡片來源時送 Internet
pub fn refund(request: &RefundRequest) -> ReturnRequestDto {
    let source = request.card_data_source.unwrap_or(CardDataSource::Internet);
    ReturnRequestDto {
        track1: request.track1.clone(),
        track2: request.track2.clone(),
        emv_tags: request.emv_tags.clone(),
        emv_payment_app_version: request.emv_payment_app_version.clone(),
        card_data_source: enums::card_data_source_code(source),
        pin: request.pin.clone(),
        pin_ksn: request.pin_ksn.clone(),
        transaction_id: request.transaction_id.clone(),
        amount: request.amount,
    }
}

pub fn product(product: &TransactionProduct) -> TransactionProductDto {
    TransactionProductDto {
        name: product.name.clone(),
        code: product.code.clone(),
        unit_price: product.unit_price,
        measurement_unit: product.measurement_unit.clone(),
        quantity: product.quantity,
        tax_amount: product.tax_amount,
        discount_rate: product.discount_rate,
        description: product.description.clone(),
        measurement_unit_id: product.measurement_unit_id,
    }
}

pub fn l2(data: Option<&L2Data>) -> Option<L2DataDto> {
    let data = data?;
    Some(L2DataDto {
        tax_amount: data.tax_amount,
        tax_rate: data.tax_rate,
        tax_exempt: data.tax_exempt,
    })
}

pub fn l3(data: Option<&L3Data>) -> Option<L3DataDto> {
    let data = data?;
    Some(L3DataDto {
        invoice_number: data.invoice_number.clone(),
        purchase_order: data.purchase_order.clone(),
        shipping_charges: data.shipping_charges,
        duty_charges: data.duty_charges,
        products: data
            .products
            .as_ref()
            .map(|products| products.iter().map(product).collect()),
    })
}
