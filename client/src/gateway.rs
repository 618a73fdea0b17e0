//! The expense gateway: domain-level operations over a wire transport.
//!
//! Every operation issues exactly one transport call, maps the wire record
//! through the normalization pipeline and returns a tagged result. Failures
//! are flattened into [`GatewayError`], whose `Display` output is meant to
//! be shown to the user as-is; nothing here panics or rethrows.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, error};

use shared::DEFAULT_USER_ID;

use crate::api::error::ApiError;
use crate::api::transport::ExpenseApi;
use crate::domain::models::{Category, DashboardData, Expense};

/// A failed gateway operation, carrying a display-ready message.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{message}")]
pub struct GatewayError {
    pub message: String,
}

impl From<ApiError> for GatewayError {
    fn from(error: ApiError) -> Self {
        GatewayError {
            message: error.to_string(),
        }
    }
}

/// Boundary between application logic and the remote API.
#[derive(Clone)]
pub struct ExpenseGateway {
    api: Arc<dyn ExpenseApi>,
}

impl ExpenseGateway {
    pub fn new(api: Arc<dyn ExpenseApi>) -> Self {
        Self { api }
    }

    /// List expenses, optionally filtered by category and date range.
    ///
    /// Date bounds are inclusive calendar dates; they are expanded to
    /// start-of-day and end-of-day before transmission so the server-side
    /// timestamp comparison covers the whole day.
    pub async fn list_expenses(
        &self,
        category: Option<Category>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Vec<Expense>, GatewayError> {
        let start = start_date.map(start_of_day);
        let end = end_date.map(end_of_day);

        let records = self
            .api
            .list_expenses(
                DEFAULT_USER_ID,
                category.map(|c| c.display_name()),
                start.as_deref(),
                end.as_deref(),
            )
            .await?;

        Ok(records.into_iter().map(Expense::from_record).collect())
    }

    /// Fetch a single expense. Not-found is an ordinary failure.
    pub async fn get_expense(&self, id: &str) -> Result<Expense, GatewayError> {
        let record = self.api.get_expense(id).await?;
        Ok(Expense::from_record(record))
    }

    /// Create an expense and return it with the server-assigned id.
    pub async fn create_expense(&self, expense: &Expense) -> Result<Expense, GatewayError> {
        let request = expense.to_create_request();
        match self.api.create_expense(&request).await {
            Ok(record) => Ok(Expense::from_record(record)),
            Err(ApiError::Server { status, message }) => {
                // The error body is the only clue the server gives about a
                // rejected create; keep it in the logs even though the UI
                // only shows the flattened message.
                error!(status, body = %message, "create_expense rejected by server");
                Err(ApiError::Server { status, message }.into())
            }
            Err(err) => {
                error!(error = %err, "create_expense failed");
                Err(err.into())
            }
        }
    }

    /// Replace an expense and return the updated entity.
    pub async fn update_expense(&self, id: &str, expense: &Expense) -> Result<Expense, GatewayError> {
        let request = expense.to_create_request();
        let record = self.api.update_expense(id, &request).await?;
        Ok(Expense::from_record(record))
    }

    /// Delete an expense. The server's confirmation payload is discarded.
    pub async fn delete_expense(&self, id: &str) -> Result<(), GatewayError> {
        let response = self.api.delete_expense(id).await?;
        debug!(id, message = %response.message, "expense deleted");
        Ok(())
    }

    /// Fetch the aggregated dashboard, normalizing every category label.
    pub async fn get_dashboard(&self) -> Result<DashboardData, GatewayError> {
        let record = self.api.get_dashboard(DEFAULT_USER_ID).await?;
        Ok(DashboardData::from_record(record))
    }
}

fn start_of_day(date: NaiveDate) -> String {
    format!("{}T00:00:00+00:00", date.format("%Y-%m-%d"))
}

fn end_of_day(date: NaiveDate) -> String {
    format!("{}T23:59:59+00:00", date.format("%Y-%m-%d"))
}
