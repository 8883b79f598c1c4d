use crate::api::devices::{DeviceDto, DeviceUserDto, DevicesResponseDto};
use crate::domain::model::{DeviceInfo, DeviceUser, DevicesResponse};
use crate::utils::error::MapperError;
use tracing::warn;

use super::non_empty;

pub fn to_model(dto: &DeviceDto) -> Result<DeviceInfo, MapperError> {
    let device_id = non_empty(dto.device_id.as_ref())
        .ok_or_else(|| MapperError::missing_field("deviceId", "DeviceInfo"))?;

    Ok(DeviceInfo {
        device_id: device_id.to_string(),
        device_name: dto.device_name.clone(),
        last_login_at: dto.last_login_at,
        tap_to_pay_status: dto.tap_to_pay_status.clone(),
        tap_to_pay_status_id: dto.tap_to_pay_status_id,
        tap_to_pay_enabled: dto.tap_to_pay_enabled.unwrap_or(false),
        user_profiles: dto.user_profiles.iter().flatten().map(user).collect(),
    })
}

pub fn user(dto: &DeviceUserDto) -> DeviceUser {
    DeviceUser {
        id: dto.id.clone(),
        first_name: dto.first_name.clone(),
        last_name: dto.last_name.clone(),
        email: dto.email.clone(),
    }
}

/// 缺少 deviceId 的裝置會被略過
pub fn devices(dto: &DevicesResponseDto) -> DevicesResponse {
    let devices = dto
        .devices
        .iter()
        .flatten()
        .filter_map(|device| match to_model(device) {
            Ok(info) => Some(info),
            Err(e) => {
                warn!("⚠️ Skipping device: {}", e);
                None
            }
        })
        .collect();
    DevicesResponse { devices }
}
