use crate::api::devices::{
    DeviceDto, DevicesResponseDto, RegisterDeviceRequestDto, TapToPayJwtRequestDto,
    TapToPayJwtResponseDto,
};
use crate::domain::model::{DeviceInfo, DevicesResponse, StoredTtpJwt};
use crate::mappers::device;
use crate::services::api_client::ApiClient;
use crate::utils::error::{ApiError, Result};
use crate::utils::validation::validate_non_empty_string;

const DEVICES_PATH: &str = "/pay/api/v1/devices";

#[derive(Clone)]
pub struct DevicesService {
    api: ApiClient,
}

impl DevicesService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<DevicesResponse> {
        let dto: DevicesResponseDto = self.api.get(DEVICES_PATH, &[]).await?;
        Ok(device::devices(&dto))
    }

    pub async fn info(&self, device_id: &str) -> Result<DeviceInfo> {
        validate_non_empty_string("device_id", device_id)?;
        let path = format!("{}/{}", DEVICES_PATH, device_id);
        let dto: DeviceDto = self.api.get(&path, &[]).await?;
        Ok(device::to_model(&dto)?)
    }

    /// 把目前裝置登記到商家的裝置清單
    pub async fn register(&self, device_id: &str, device_name: &str) -> Result<()> {
        tracing::debug!("Registering device: {} (ID: {})", device_name, device_id);
        let body = RegisterDeviceRequestDto {
            device_id: device_id.to_lowercase(),
            device_name: device_name.to_string(),
        };
        self.api.post_unit(DEVICES_PATH, &body).await?;
        tracing::info!("✅ Device registered successfully: {}", device_name);
        Ok(())
    }

    /// 產生讀卡器使用的短效 JWT
    pub async fn tap_to_pay_jwt(&self, device_id: &str) -> Result<StoredTtpJwt> {
        tracing::debug!("Generating TTP JWT for device: {}", device_id);
        let body = TapToPayJwtRequestDto {
            device_id: device_id.to_lowercase(),
        };
        let dto: TapToPayJwtResponseDto = self
            .api
            .post(&format!("{}/tap-to-pay/jwt", DEVICES_PATH), &body)
            .await?;

        match (dto.jwt_token, dto.expires_at) {
            (Some(token), Some(expires_at)) if !token.is_empty() => {
                tracing::debug!("TTP JWT generated (expires at: {})", expires_at);
                Ok(StoredTtpJwt { token, expires_at })
            }
            _ => Err(ApiError::InvalidResponse("JWT token not found in response".to_string()).into()),
        }
    }

    pub async fn activate_tap_to_pay(&self, device_id: &str) -> Result<()> {
        let path = format!(
            "{}/{}/tap-to-pay/activate",
            DEVICES_PATH,
            device_id.to_lowercase()
        );
        self.api.post_empty(&path).await?;
        tracing::info!("✅ Tap to Pay activated for device: {}", device_id);
        Ok(())
    }
}
