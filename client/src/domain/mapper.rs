//! Conversions between wire records and domain entities.
//!
//! Wire to domain is where normalization happens: dates go through the
//! lenient parsing chain and categories through the total resolver, so a
//! malformed record still produces a usable entity. Domain to wire is a
//! plain serialization with one quirk: stored records carry the category
//! machine name, while create/update requests carry the display label,
//! because that is what the API actually expects on each path.

use shared::{CreateExpenseRequest, DashboardRecord, ExpenseRecord};

use crate::domain::dates;
use crate::domain::models::{Category, CategoryTotal, DashboardData, Expense, OverallTotal};

/// `yyyy-MM-dd`, the only date shape we ever send.
const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

impl Expense {
    /// Build a domain expense from a wire record, normalizing as needed.
    pub fn from_record(record: ExpenseRecord) -> Expense {
        Expense {
            id: record.id.unwrap_or_default(),
            amount: record.amount,
            description: record.description,
            date: dates::normalize(&record.date),
            category: Category::resolve(Some(&record.category)),
            user_id: record.user_id,
        }
    }

    /// Serialize back into the stored-record shape.
    ///
    /// An empty id becomes an absent `_id`; the category goes out by
    /// machine name.
    pub fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: if self.id.is_empty() { None } else { Some(self.id.clone()) },
            amount: self.amount,
            description: self.description.clone(),
            date: self.date.format(WIRE_DATE_FORMAT).to_string(),
            category: self.category.machine_name().to_string(),
            user_id: self.user_id.clone(),
            created_at: None,
            updated_at: None,
        }
    }

    /// Build the request body for create and update calls.
    ///
    /// The category goes out by display label here, not machine name; the
    /// API expects different spellings on the read and write paths.
    pub fn to_create_request(&self) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: self.amount,
            description: self.description.clone(),
            date: self.date.format(WIRE_DATE_FORMAT).to_string(),
            category: self.category.display_name().to_string(),
            user_id: self.user_id.clone(),
        }
    }
}

impl DashboardData {
    /// Build dashboard data from a wire record, resolving every breakdown
    /// label to a category. Totals and counts pass through unchanged.
    pub fn from_record(record: DashboardRecord) -> DashboardData {
        DashboardData {
            category_breakdown: record
                .category_breakdown
                .into_iter()
                .map(|entry| CategoryTotal {
                    category: Category::resolve(entry.category.as_deref()),
                    total: entry.total,
                    count: entry.count,
                })
                .collect(),
            overall: OverallTotal {
                total: record.overall.total,
                count: record.overall.count,
            },
        }
    }
}
