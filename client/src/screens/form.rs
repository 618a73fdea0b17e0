//! Add/edit expense screen: draft fields, per-field validation, save.

use chrono::{Local, NaiveDate};

use crate::domain::models::{Category, Expense};
use crate::domain::validation::validate_expense_form;
use crate::gateway::ExpenseGateway;

/// Snapshot of the form screen. Field errors mirror the validator output;
/// `is_saved` flips once a create or update round-trip succeeds, which is
/// the caller's cue to navigate away.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormState {
    /// Raw user input; parsed only at validation time.
    pub amount: String,
    pub description: String,
    pub date: NaiveDate,
    pub category: Option<Category>,
    pub amount_error: Option<String>,
    pub description_error: Option<String>,
    pub category_error: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_saved: bool,
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            date: Local::now().date_naive(),
            category: None,
            amount_error: None,
            description_error: None,
            category_error: None,
            is_loading: false,
            error: None,
            is_saved: false,
        }
    }
}

/// Everything that can happen on the form screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseFormEvent {
    AmountChanged(String),
    DescriptionChanged(String),
    DateChanged(NaiveDate),
    CategoryChanged(Category),
    Save,
    DismissError,
}

/// State owner for the add/edit expense screen.
///
/// Created blank for a new expense, or via [`ExpenseFormScreen::for_expense`]
/// to edit an existing one.
pub struct ExpenseFormScreen {
    gateway: ExpenseGateway,
    expense_id: Option<String>,
    state: ExpenseFormState,
}

impl ExpenseFormScreen {
    /// Blank form for creating a new expense, dated today.
    pub fn new(gateway: ExpenseGateway) -> Self {
        Self {
            gateway,
            expense_id: None,
            state: ExpenseFormState::default(),
        }
    }

    /// Edit form pre-filled from the stored expense. A failed fetch leaves
    /// the form blank with the error banner set.
    pub async fn for_expense(gateway: ExpenseGateway, id: String) -> Self {
        let mut screen = Self {
            gateway,
            expense_id: Some(id.clone()),
            state: ExpenseFormState {
                is_loading: true,
                ..ExpenseFormState::default()
            },
        };

        match screen.gateway.get_expense(&id).await {
            Ok(expense) => {
                screen.state.amount = expense.amount.to_string();
                screen.state.description = expense.description;
                screen.state.date = expense.date;
                screen.state.category = Some(expense.category);
                screen.state.is_loading = false;
            }
            Err(error) => {
                screen.state.is_loading = false;
                screen.state.error = Some(error.to_string());
            }
        }

        screen
    }

    pub fn state(&self) -> &ExpenseFormState {
        &self.state
    }

    /// Apply one event. Field edits clear that field's error.
    pub async fn handle(&mut self, event: ExpenseFormEvent) {
        match event {
            ExpenseFormEvent::AmountChanged(amount) => {
                self.state.amount = amount;
                self.state.amount_error = None;
            }
            ExpenseFormEvent::DescriptionChanged(description) => {
                self.state.description = description;
                self.state.description_error = None;
            }
            ExpenseFormEvent::DateChanged(date) => {
                self.state.date = date;
            }
            ExpenseFormEvent::CategoryChanged(category) => {
                self.state.category = Some(category);
                self.state.category_error = None;
            }
            ExpenseFormEvent::Save => self.save().await,
            ExpenseFormEvent::DismissError => self.state.error = None,
        }
    }

    async fn save(&mut self) {
        let validation = validate_expense_form(
            &self.state.amount,
            &self.state.description,
            self.state.category,
        );
        if !validation.is_valid {
            self.state.amount_error = validation.amount_error;
            self.state.description_error = validation.description_error;
            self.state.category_error = validation.category_error;
            return;
        }

        // A valid form always has both of these.
        let Some(amount) = validation.cleaned_amount else { return };
        let Some(category) = self.state.category else { return };

        self.state.is_loading = true;
        self.state.error = None;

        let expense = Expense {
            id: self.expense_id.clone().unwrap_or_default(),
            amount,
            description: self.state.description.clone(),
            date: self.state.date,
            category,
            user_id: shared::DEFAULT_USER_ID.to_string(),
        };

        let result = match &self.expense_id {
            Some(id) => self.gateway.update_expense(id, &expense).await,
            None => self.gateway.create_expense(&expense).await,
        };

        match result {
            Ok(_) => {
                self.state.is_loading = false;
                self.state.is_saved = true;
            }
            Err(error) => {
                self.state.is_loading = false;
                self.state.error = Some(error.to_string());
            }
        }
    }
}
