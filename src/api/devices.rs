use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUserDto {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDto {
    pub device_id: Option<String>,
    pub device_name: Option<String>,
    #[serde(default, with = "super::date")]
    pub last_login_at: Option<DateTime<Utc>>,
    pub tap_to_pay_status: Option<String>,
    pub tap_to_pay_status_id: Option<i32>,
    pub tap_to_pay_enabled: Option<bool>,
    pub user_profiles: Option<Vec<DeviceUserDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevicesResponseDto {
    pub devices: Option<Vec<DeviceDto>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDeviceRequestDto {
    pub device_id: String,
    pub device_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapToPayJwtRequestDto {
    pub device_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapToPayJwtResponseDto {
    pub jwt_token: Option<String>,
    #[serde(default, with = "super::date")]
    pub expires_at: Option<DateTime<Utc>>,
}
