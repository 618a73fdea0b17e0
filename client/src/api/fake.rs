//! In-memory [`ExpenseApi`] double shared by gateway and screen tests.

use std::sync::Mutex;

use async_trait::async_trait;
use shared::{
    CreateExpenseRequest, DashboardRecord, DeleteResponse, ExpenseRecord, OverallTotalRecord,
};

use crate::api::error::ApiError;
use crate::api::transport::ExpenseApi;

/// Arguments captured from a `list_expenses` call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ListQuery {
    pub user_id: String,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Canned-response transport. When `failure` is set, every call returns
/// that server error; otherwise calls answer from the stored records and
/// echo create/update requests the way the real server does.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub expenses: Mutex<Vec<ExpenseRecord>>,
    pub dashboard: Mutex<Option<DashboardRecord>>,
    pub failure: Mutex<Option<(u16, String)>>,
    pub list_queries: Mutex<Vec<ListQuery>>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_expenses(expenses: Vec<ExpenseRecord>) -> Self {
        let fake = Self::default();
        *fake.expenses.lock().unwrap() = expenses;
        fake
    }

    pub fn failing(status: u16, message: &str) -> Self {
        let fake = Self::default();
        *fake.failure.lock().unwrap() = Some((status, message.to_string()));
        fake
    }

    pub fn with_dashboard(dashboard: DashboardRecord) -> Self {
        let fake = Self::default();
        *fake.dashboard.lock().unwrap() = Some(dashboard);
        fake
    }

    fn check_failure(&self) -> Result<(), ApiError> {
        match &*self.failure.lock().unwrap() {
            Some((status, message)) => Err(ApiError::Server {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn echo(request: &CreateExpenseRequest, id: &str) -> ExpenseRecord {
        ExpenseRecord {
            id: Some(id.to_string()),
            amount: request.amount,
            description: request.description.clone(),
            date: request.date.clone(),
            category: request.category.clone(),
            user_id: request.user_id.clone(),
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl ExpenseApi for FakeApi {
    async fn list_expenses(
        &self,
        user_id: &str,
        category: Option<&str>,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<ExpenseRecord>, ApiError> {
        self.list_queries.lock().unwrap().push(ListQuery {
            user_id: user_id.to_string(),
            category: category.map(String::from),
            start_date: start_date.map(String::from),
            end_date: end_date.map(String::from),
        });
        self.check_failure()?;
        Ok(self.expenses.lock().unwrap().clone())
    }

    async fn get_expense(&self, id: &str) -> Result<ExpenseRecord, ApiError> {
        self.check_failure()?;
        self.expenses
            .lock()
            .unwrap()
            .iter()
            .find(|record| record.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| ApiError::Server {
                status: 404,
                message: "Expense not found".to_string(),
            })
    }

    async fn create_expense(
        &self,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError> {
        self.check_failure()?;
        let record = Self::echo(request, "generated-id");
        self.expenses.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update_expense(
        &self,
        id: &str,
        request: &CreateExpenseRequest,
    ) -> Result<ExpenseRecord, ApiError> {
        self.check_failure()?;
        Ok(Self::echo(request, id))
    }

    async fn delete_expense(&self, id: &str) -> Result<DeleteResponse, ApiError> {
        self.check_failure()?;
        self.deleted.lock().unwrap().push(id.to_string());
        self.expenses
            .lock()
            .unwrap()
            .retain(|record| record.id.as_deref() != Some(id));
        Ok(DeleteResponse {
            message: "Expense deleted successfully".to_string(),
        })
    }

    async fn get_dashboard(&self, user_id: &str) -> Result<DashboardRecord, ApiError> {
        let _ = user_id;
        self.check_failure()?;
        Ok(self
            .dashboard
            .lock()
            .unwrap()
            .clone()
            .unwrap_or(DashboardRecord {
                category_breakdown: Vec::new(),
                overall: OverallTotalRecord { total: 0.0, count: 0 },
            }))
    }
}
