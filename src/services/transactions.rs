use crate::api::transactions::{
    AuthorizationResponseDto, CalculateAmountResponseDto, TransactionDetailsDto,
    TransactionResponseDto, TransactionsPageDto,
};
use crate::domain::model::{
    AuthorizationRequest, AuthorizationResponse, CalculateAmountRequest, CalculateAmountResponse,
    RefundRequest, TransactionDetails, TransactionFilters, TransactionResponse, TransactionsPage,
};
use crate::mappers::{
    calculate_amount, filters, transaction_detail, transaction_request, transaction_response,
    transactions_page,
};
use crate::services::api_client::ApiClient;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_positive_amount, Validate};

const TRANSACTIONS_PATH: &str = "/pay/api/v1/transactions";

/// 交易相關端點
#[derive(Clone)]
pub struct TransactionsService {
    api: ApiClient,
}

impl TransactionsService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self, filters: Option<TransactionFilters>) -> Result<TransactionsPage> {
        if let Some(filters) = &filters {
            filters.validate()?;
        }

        let query = filters::to_query(filters.as_ref());
        let dto: TransactionsPageDto = self.api.get(TRANSACTIONS_PATH, &query).await?;
        let page = transactions_page::to_model(&dto);
        tracing::debug!("Fetched {} of {} transactions", page.items.len(), page.total);
        Ok(page)
    }

    pub async fn details(&self, transaction_id: &str) -> Result<TransactionDetails> {
        validate_non_empty_string("transaction_id", transaction_id)?;
        let path = format!("{}/{}", TRANSACTIONS_PATH, transaction_id);
        let dto: TransactionDetailsDto = self.api.get(&path, &[]).await?;
        Ok(transaction_detail::to_model(&dto))
    }

    pub async fn authorize(&self, request: &AuthorizationRequest) -> Result<AuthorizationResponse> {
        request.validate()?;
        let body = transaction_request::authorization(request);
        let dto: AuthorizationResponseDto = self
            .api
            .post(&format!("{}/auth", TRANSACTIONS_PATH), &body)
            .await?;
        Ok(transaction_response::authorization(&dto))
    }

    pub async fn sale(&self, request: &AuthorizationRequest) -> Result<AuthorizationResponse> {
        request.validate()?;
        let body = transaction_request::sale(request);
        let dto: AuthorizationResponseDto = self
            .api
            .post(&format!("{}/sale", TRANSACTIONS_PATH), &body)
            .await?;
        Ok(transaction_response::authorization(&dto))
    }

    pub async fn capture(&self, transaction_id: &str, amount: f64) -> Result<TransactionResponse> {
        validate_non_empty_string("transaction_id", transaction_id)?;
        validate_positive_amount("amount", amount)?;
        let body = transaction_request::capture(transaction_id, amount);
        let dto: TransactionResponseDto = self
            .api
            .post(&format!("{}/capture", TRANSACTIONS_PATH), &body)
            .await?;
        Ok(transaction_response::transaction(&dto))
    }

    pub async fn void(&self, transaction_id: &str) -> Result<TransactionResponse> {
        validate_non_empty_string("transaction_id", transaction_id)?;
        let body = transaction_request::void(transaction_id);
        let dto: TransactionResponseDto = self
            .api
            .post(&format!("{}/void", TRANSACTIONS_PATH), &body)
            .await?;
        Ok(transaction_response::transaction(&dto))
    }

    pub async fn refund(&self, request: &RefundRequest) -> Result<TransactionResponse> {
        validate_non_empty_string("transaction_id", &request.transaction_id)?;
        if let Some(amount) = request.amount {
            validate_positive_amount("amount", amount)?;
        }
        let body = transaction_request::refund(request);
        let dto: TransactionResponseDto = self
            .api
            .post(&format!("{}/return", TRANSACTIONS_PATH), &body)
            .await?;
        Ok(transaction_response::transaction(&dto))
    }

    pub async fn calculate_amount(
        &self,
        request: &CalculateAmountRequest,
    ) -> Result<CalculateAmountResponse> {
        request.validate()?;
        let query = calculate_amount::to_query(request);
        let dto: CalculateAmountResponseDto = self
            .api
            .get(&format!("{}/calculate-amount", TRANSACTIONS_PATH), &query)
            .await?;
        Ok(calculate_amount::to_model(&dto))
    }
}
