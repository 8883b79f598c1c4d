use crate::utils::error::{Result, SdkError};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(SdkError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 金額必須為有限正數
pub fn validate_positive_amount(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SdkError::ValidationError {
            message: format!("{} must be a positive amount, got {}", field_name, value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| SdkError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(SdkError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api_base_url", "https://api.uat.arise.risewithaurora.com").is_ok());
        assert!(validate_url("api_base_url", "http://127.0.0.1:8080").is_ok());
        assert!(validate_url("api_base_url", "").is_err());
        assert!(validate_url("api_base_url", "invalid-url").is_err());
        assert!(validate_url("api_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("timeout_seconds", 30, 1).is_ok());
        assert!(validate_positive_number("timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_positive_amount() {
        assert!(validate_positive_amount("amount", 12.5).is_ok());
        assert!(validate_positive_amount("amount", 0.0).is_err());
        assert!(validate_positive_amount("amount", -1.0).is_err());
        assert!(validate_positive_amount("amount", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_range_and_required() {
        assert!(validate_range("page_size", 20u32, 1, 100).is_ok());
        assert!(validate_range("page_size", 0u32, 1, 100).is_err());

        let missing: Option<String> = None;
        assert!(matches!(
            validate_required_field("client_id", &missing),
            Err(SdkError::MissingConfigError { .. })
        ));
        assert!(validate_non_empty_string("client_id", "   ").is_err());
    }
}
