use crate::api::common::AmountDto;
use crate::domain::model::{Amount, ReceiptAmount};

/// 缺少的金額欄位補 0.0
pub fn to_model(dto: Option<&AmountDto>) -> Option<Amount> {
    let dto = dto?;
    Some(Amount {
        base_amount: dto.base_amount.unwrap_or(0.0),
        percentage_off_amount: dto.percentage_off_amount.unwrap_or(0.0),
        percentage_off_rate: dto.percentage_off_rate.unwrap_or(0.0),
        cash_discount_amount: dto.cash_discount_amount.unwrap_or(0.0),
        cash_discount_rate: dto.cash_discount_rate.unwrap_or(0.0),
        surcharge_amount: dto.surcharge_amount.unwrap_or(0.0),
        surcharge_rate: dto.surcharge_rate.unwrap_or(0.0),
        tip_amount: dto.tip_amount.unwrap_or(0.0),
        tip_rate: dto.tip_rate.unwrap_or(0.0),
        tax_amount: dto.tax_amount.unwrap_or(0.0),
        tax_rate: dto.tax_rate.unwrap_or(0.0),
        total_amount: dto.total_amount.unwrap_or(0.0),
    })
}

/// 收據金額保留缺值，不含稅額欄位
pub fn receipt_amount(dto: Option<&AmountDto>) -> Option<ReceiptAmount> {
    let dto = dto?;
    Some(ReceiptAmount {
        base_amount: dto.base_amount,
        percentage_off_amount: dto.percentage_off_amount,
        percentage_off_rate: dto.percentage_off_rate,
        cash_discount_amount: dto.cash_discount_amount,
        cash_discount_rate: dto.cash_discount_rate,
        surcharge_amount: dto.surcharge_amount,
        surcharge_rate: dto.surcharge_rate,
        tip_amount: dto.tip_amount,
        tip_rate: dto.tip_rate,
        total_amount: dto.total_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_base_amount_defaults_the_rest() {
        let dto = AmountDto {
            base_amount: Some(50.0),
            ..Default::default()
        };

        let amount = to_model(Some(&dto)).unwrap();
        assert_eq!(amount.base_amount, 50.0);
        assert_eq!(
            amount,
            Amount {
                base_amount: 50.0,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_absent_amount_propagates() {
        assert_eq!(to_model(None), None);
        assert_eq!(receipt_amount(None), None);
    }

    #[test]
    fn test_full_values_preserved() {
        let dto = AmountDto {
            base_amount: Some(100.0),
            percentage_off_amount: Some(5.0),
            percentage_off_rate: Some(5.0),
            cash_discount_amount: Some(1.5),
            cash_discount_rate: Some(1.5),
            surcharge_amount: Some(3.0),
            surcharge_rate: Some(3.0),
            tip_amount: Some(10.0),
            tip_rate: Some(10.0),
            tax_amount: Some(8.25),
            tax_rate: Some(8.25),
            total_amount: Some(116.25),
        };

        let amount = to_model(Some(&dto)).unwrap();
        assert_eq!(amount.tax_amount, 8.25);
        assert_eq!(amount.total_amount, 116.25);

        let receipt = receipt_amount(Some(&dto)).unwrap();
        assert_eq!(receipt.surcharge_rate, Some(3.0));
        assert_eq!(receipt.total_amount, Some(116.25));
    }

    #[test]
    fn test_receipt_amount_keeps_missing_values() {
        let dto = AmountDto {
            total_amount: Some(20.0),
            ..Default::default()
        };
        let receipt = receipt_amount(Some(&dto)).unwrap();
        assert_eq!(receipt.base_amount, None);
        assert_eq!(receipt.total_amount, Some(20.0));
    }
}
