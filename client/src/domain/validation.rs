//! Pre-submission validation for the expense form.

use crate::domain::models::Category;

/// Longest description the API accepts.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Outcome of validating a draft expense.
///
/// Field errors are collected independently so the UI can show all of them
/// at once instead of only the first violation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseFormValidation {
    pub is_valid: bool,
    pub amount_error: Option<String>,
    pub description_error: Option<String>,
    pub category_error: Option<String>,
    /// The parsed amount, present only when the amount field is valid.
    pub cleaned_amount: Option<f64>,
}

/// Validate the user-entered fields of a draft expense.
pub fn validate_expense_form(
    amount: &str,
    description: &str,
    category: Option<Category>,
) -> ExpenseFormValidation {
    let mut amount_error = None;
    let mut cleaned_amount = None;
    if amount.trim().is_empty() {
        amount_error = Some("Amount is required".to_string());
    } else {
        match amount.trim().parse::<f64>() {
            Err(_) => amount_error = Some("Invalid amount".to_string()),
            Ok(value) if value <= 0.0 => {
                amount_error = Some("Amount must be greater than 0".to_string());
            }
            Ok(value) => cleaned_amount = Some(value),
        }
    }

    let mut description_error = None;
    let trimmed = description.trim();
    if trimmed.is_empty() {
        description_error = Some("Description is required".to_string());
    } else if trimmed.chars().count() > MAX_DESCRIPTION_LENGTH {
        description_error = Some(format!(
            "Description is too long (max {} characters)",
            MAX_DESCRIPTION_LENGTH
        ));
    }

    let category_error = match category {
        Some(_) => None,
        None => Some("Please select a category".to_string()),
    };

    ExpenseFormValidation {
        is_valid: amount_error.is_none() && description_error.is_none() && category_error.is_none(),
        amount_error,
        description_error,
        category_error,
        cleaned_amount,
    }
}
