//! `reqwest`-backed implementation of [`ExpenseApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{CreateExpenseRequest, DashboardRecord, DeleteResponse, ExpenseRecord};
use tracing::debug;

use crate::api::error::ApiError;
use crate::api::transport::ExpenseApi;

/// Deployed API this client talks to unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "https://extrackerapi-3.onrender.com";

/// HTTP client for the expense API.
///
/// Holds a connection-pooling [`reqwest::Client`] configured with a 30 s
/// request timeout and a 10 s connect timeout. Cheap to clone.
#[derive(Clone)]
pub struct HttpExpenseApi {
    http: Client,
    base_url: String,
}

impl HttpExpenseApi {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        if base_url.is_empty() {
            return Err(ApiError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn expenses_url(&self) -> String {
        format!("{}/expenses", self.base_url)
    }

    fn expense_url(&self, id: &str) -> String {
        format!("{}/expenses/{}", self.base_url, id)
    }

    fn send_error(error: reqwest::Error) -> ApiError {
        if error.is_connect() || error.is_timeout() {
            ApiError::Unreachable(error.to_string())
        } else {
            ApiError::Request(error)
        }
    }

    /// Decode a 2xx body, or turn a non-2xx response into
    /// [`ApiError::Server`] with the error body captured best-effort.
    async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(format!("Failed to parse {}: {}", what, e)))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ApiError::Server {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl ExpenseApi for HttpExpenseApi {
    async fn list_expenses(
        &self,
        user_id: &str,
        category: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<ExpenseRecord>, ApiError> {
        let url = self.expenses_url();
        let mut query: Vec<(&str, &str)> = vec![("userId", user_id)];
        if let Some(category) = category {
            query.push(("category", category));
        }
        if let Some(start_date) = start_date {
            query.push(("startDate", start_date));
        }
        if let Some(end_date) = end_date {
            query.push(("endDate", end_date));
        }

        debug!(url = %url, ?category, ?start_date, ?end_date, "listing expenses");

        let response = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::read_json(response, "expense list").await
    }

    async fn get_expense(&self, id: &str) -> Result<ExpenseRecord, ApiError> {
        let url = self.expense_url(id);
        debug!(url = %url, "fetching expense");

        let response = self.http.get(&url).send().await.map_err(Self::send_error)?;
        Self::read_json(response, "expense").await
    }

    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError> {
        let url = self.expenses_url();
        debug!(url = %url, category = %request.category, "creating expense");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::read_json(response, "created expense").await
    }

    async fn update_expense(
        &self,
        id: &str,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError> {
        let url = self.expense_url(id);
        debug!(url = %url, "updating expense");

        let response = self
            .http
            .put(&url)
            .json(request)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::read_json(response, "updated expense").await
    }

    async fn delete_expense(&self, id: &str) -> Result<DeleteResponse, ApiError> {
        let url = self.expense_url(id);
        debug!(url = %url, "deleting expense");

        let response = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::read_json(response, "delete confirmation").await
    }

    async fn get_dashboard(&self, user_id: &str) -> Result<DashboardRecord, ApiError> {
        let url = format!("{}/expenses/dashboard", self.base_url);
        debug!(url = %url, "fetching dashboard");

        let response = self
            .http
            .get(&url)
            .query(&[("userId", user_id)])
            .send()
            .await
            .map_err(Self::send_error)?;
        Self::read_json(response, "dashboard").await
    }
}
