use crate::api::settings::{ApiPermissionsDto, PaymentSettingsDto};
use crate::domain::model::{ApiPermissionsResponse, PaymentSettings};
use crate::mappers::settings;
use crate::services::api_client::ApiClient;
use crate::utils::error::Result;

const PAYMENT_SETTINGS_PATH: &str = "/pay/api/v1/configurations/payments";
const PERMISSIONS_PATH: &str = "/api/available-api-permissions";

#[derive(Clone)]
pub struct SettingsService {
    api: ApiClient,
    country_code: Option<String>,
}

impl SettingsService {
    pub fn new(api: ApiClient, country_code: Option<String>) -> Self {
        Self { api, country_code }
    }

    pub async fn payment_settings(&self) -> Result<PaymentSettings> {
        let dto: PaymentSettingsDto = self.api.get(PAYMENT_SETTINGS_PATH, &[]).await?;
        Ok(settings::payment_settings(&dto, self.country_code.as_deref()))
    }

    pub async fn permissions(&self) -> Result<ApiPermissionsResponse> {
        let dto: ApiPermissionsDto = self.api.get(PERMISSIONS_PATH, &[]).await?;
        let response = settings::permissions(&dto);
        tracing::debug!("Loaded {} API permissions", response.permissions.len());
        Ok(response)
    }
}
