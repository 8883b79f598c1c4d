//! Pure conversions between the gateway wire schema (`crate::api`) and the
//! domain models (`crate::domain::model`).
//!
//! Rules shared by every mapper:
//! - an absent wire value mapped to an optional domain value stays `None`
//! - an absent field behind a non-optional domain field takes its zero value
//! - entities guarded by an identifying field fail with `MapperError::MissingField`
//! - list fields drop entries that fail their guard and keep the order of the rest

pub mod address;
pub mod amount;
pub mod calculate_amount;
pub mod device;
pub mod enums;
pub mod filters;
pub mod settings;
pub mod transaction_detail;
pub mod transaction_receipt;
pub mod transaction_request;
pub mod transaction_response;
pub mod transaction_summary;
pub mod transactions_page;
pub mod ttp;

/// 空字串視同缺值
pub(crate) fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}
