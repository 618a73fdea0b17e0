//! Expense list screen: filterable list with delete.

use chrono::NaiveDate;

use crate::domain::models::{Category, Expense};
use crate::gateway::ExpenseGateway;

/// Snapshot of the list screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseListState {
    pub expenses: Vec<Expense>,
    pub is_loading: bool,
    /// Display-ready message for the error banner; `None` when dismissed.
    pub error: Option<String>,
    pub selected_category: Option<Category>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Everything that can happen on the list screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseListEvent {
    Load,
    FilterByCategory(Option<Category>),
    FilterByDateRange(Option<NaiveDate>, Option<NaiveDate>),
    ClearFilters,
    Delete(String),
    DismissError,
}

/// State owner for the expense list screen.
pub struct ExpenseListScreen {
    gateway: ExpenseGateway,
    state: ExpenseListState,
}

impl ExpenseListScreen {
    pub fn new(gateway: ExpenseGateway) -> Self {
        Self {
            gateway,
            state: ExpenseListState::default(),
        }
    }

    pub fn state(&self) -> &ExpenseListState {
        &self.state
    }

    /// Apply one event. Filter events store the filter and reload.
    pub async fn handle(&mut self, event: ExpenseListEvent) {
        match event {
            ExpenseListEvent::Load => self.load().await,
            ExpenseListEvent::FilterByCategory(category) => {
                self.state.selected_category = category;
                self.load().await;
            }
            ExpenseListEvent::FilterByDateRange(start_date, end_date) => {
                self.state.start_date = start_date;
                self.state.end_date = end_date;
                self.load().await;
            }
            ExpenseListEvent::ClearFilters => {
                self.state.selected_category = None;
                self.state.start_date = None;
                self.state.end_date = None;
                self.load().await;
            }
            ExpenseListEvent::Delete(id) => self.delete(&id).await,
            ExpenseListEvent::DismissError => self.state.error = None,
        }
    }

    async fn load(&mut self) {
        self.state.is_loading = true;
        self.state.error = None;

        match self
            .gateway
            .list_expenses(
                self.state.selected_category,
                self.state.start_date,
                self.state.end_date,
            )
            .await
        {
            Ok(expenses) => {
                self.state.expenses = expenses;
                self.state.is_loading = false;
            }
            Err(error) => {
                self.state.is_loading = false;
                self.state.error = Some(error.to_string());
            }
        }
    }

    async fn delete(&mut self, id: &str) {
        self.state.is_loading = true;

        match self.gateway.delete_expense(id).await {
            Ok(()) => self.load().await,
            Err(error) => {
                self.state.is_loading = false;
                self.state.error = Some(error.to_string());
            }
        }
    }
}
