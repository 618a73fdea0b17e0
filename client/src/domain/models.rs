//! Domain entities for the expense tracker.

use std::fmt;

use chrono::NaiveDate;

pub use shared::DEFAULT_USER_ID;

/// A validated expense.
///
/// Constructed fresh from each API response; never cached. An empty `id`
/// means the expense has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    /// Always strictly positive after form validation.
    pub amount: f64,
    /// Non-empty, at most 500 characters.
    pub description: String,
    /// Calendar date only; any time-of-day from the wire is dropped.
    pub date: NaiveDate,
    pub category: Category,
    pub user_id: String,
}

/// Closed set of expense categories.
///
/// The wire format carries categories as free-form strings; [`Category::resolve`]
/// maps every possible input to exactly one member, with [`Category::Other`]
/// as the universal fallback, so an unknown server label never surfaces as
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Healthcare,
    Shopping,
    Bills,
    Other,
}

impl Category {
    /// Every member, in display order.
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// Identifier used on the read path of the wire format.
    pub fn machine_name(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Healthcare => "healthcare",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Other => "other",
        }
    }

    /// Human-readable label. Also what the API expects on the write path.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Healthcare => "Healthcare",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Resolve a free-form server string into a category.
    ///
    /// Total and case-insensitive: machine names are tried first, then
    /// display labels, and anything unrecognized (including `None` and
    /// blank strings) becomes [`Category::Other`]. The server has drifted
    /// between enum-style and human-readable labels over time, so both
    /// spellings stay accepted.
    pub fn resolve(input: Option<&str>) -> Category {
        let trimmed = match input {
            Some(value) => value.trim(),
            None => return Category::Other,
        };
        if trimmed.is_empty() {
            return Category::Other;
        }

        for category in Category::ALL {
            if category.machine_name().eq_ignore_ascii_case(trimmed) {
                return category;
            }
        }
        for category in Category::ALL {
            if category.display_name().eq_ignore_ascii_case(trimmed) {
                return category;
            }
        }

        Category::Other
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Aggregated spending dashboard.
///
/// Overall totals are trusted to be consistent with the breakdown; this
/// layer does not re-verify the server's aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub category_breakdown: Vec<CategoryTotal>,
    pub overall: OverallTotal,
}

/// Spending total for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
    pub count: u32,
}

/// Spending total across all categories.
#[derive(Debug, Clone, PartialEq)]
pub struct OverallTotal {
    pub total: f64,
    pub count: u32,
}
