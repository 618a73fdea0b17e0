//! The `ExpenseApi` trait: everything the gateway needs from a transport.

use async_trait::async_trait;
use shared::{CreateExpenseRequest, DashboardRecord, DeleteResponse, ExpenseRecord};

use crate::api::error::ApiError;

/// Abstraction over the remote expense API.
///
/// The gateway only consumes this trait, so tests can substitute an
/// in-memory double and the HTTP implementation stays swappable. Every
/// method performs exactly one request; retries and caching are explicitly
/// not this layer's job.
#[async_trait]
pub trait ExpenseApi: Send + Sync {
    /// Fetch the expenses for a user, optionally filtered by category
    /// (display label) and an inclusive date-time range (RFC 3339).
    async fn list_expenses(
        &self,
        user_id: &str,
        category: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<ExpenseRecord>, ApiError>;

    /// Fetch a single expense by id.
    async fn get_expense(&self, id: &str) -> Result<ExpenseRecord, ApiError>;

    /// Create an expense; the response carries the server-assigned id.
    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError>;

    /// Replace an expense by id.
    async fn update_expense(
        &self,
        id: &str,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError>;

    /// Delete an expense by id.
    async fn delete_expense(&self, id: &str) -> Result<DeleteResponse, ApiError>;

    /// Fetch the aggregated spending dashboard for a user.
    async fn get_dashboard(&self, user_id: &str) -> Result<DashboardRecord, ApiError>;
}
