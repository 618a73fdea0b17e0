//! Wire-format records exchanged with the remote expense API.
//!
//! These types mirror the JSON payloads exactly as the server emits them
//! (Mongo-style `_id`, camelCase field names). They are ephemeral: each
//! record lives for one request/response cycle and is converted into a
//! domain entity by the client before anything else touches it.

use serde::{Deserialize, Serialize};

/// User identifier every request is scoped to until multi-user support exists.
pub const DEFAULT_USER_ID: &str = "default_user";

fn default_user_id() -> String {
    DEFAULT_USER_ID.to_string()
}

/// One expense as the server stores it.
///
/// `date` and `category` are loosely-typed strings on the wire; the server
/// has historically emitted several date formats and both enum-style and
/// human-readable category labels, so normalization happens client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Server-assigned identifier; absent until the expense is persisted.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: f64,
    pub description: String,
    /// Date as a string, nominally ISO 8601 but not reliably so.
    pub date: String,
    pub category: String,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
    /// RFC 3339 timestamp, set by the server.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// RFC 3339 timestamp, set by the server.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body for `POST expenses` and `PUT expenses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub description: String,
    /// Calendar date in `yyyy-MM-dd` form.
    pub date: String,
    pub category: String,
    #[serde(rename = "userId", default = "default_user_id")]
    pub user_id: String,
}

/// Aggregated spending data from `GET expenses/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardRecord {
    #[serde(rename = "categoryBreakdown")]
    pub category_breakdown: Vec<CategoryTotalRecord>,
    pub overall: OverallTotalRecord,
}

/// Per-category aggregate. The grouping key comes back under `_id` and may
/// be null when the server aggregated expenses with no category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotalRecord {
    #[serde(rename = "_id")]
    pub category: Option<String>,
    pub total: f64,
    pub count: u32,
}

/// Aggregate across every expense for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallTotalRecord {
    pub total: f64,
    pub count: u32,
}

/// Body of a successful `DELETE expenses/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}
