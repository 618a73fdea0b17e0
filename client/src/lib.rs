//! Expense Tracker Client
//!
//! Client-side core for the expense tracker app: it turns the loosely-typed
//! JSON the remote API emits into validated domain entities and exposes
//! result-returning operations plus per-screen state machines on top.
//!
//! # Layers
//!
//! - **Normalization**: lenient date parsing ([`domain::dates`]) and total
//!   category resolution ([`Category::resolve`]) absorb the server's
//!   inconsistent wire formats without ever failing.
//! - **Mapping**: [`domain::mapper`] converts wire records to domain
//!   entities and back.
//! - **Gateway**: [`ExpenseGateway`] wraps a transport ([`ExpenseApi`]) and
//!   converts every failure into a display-ready [`GatewayError`].
//! - **Screens**: one state owner per screen lifecycle, events applied
//!   sequentially ([`screens`]).
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use expense_tracker_client::{ExpenseGateway, HttpExpenseApi};
//! use expense_tracker_client::screens::list::{ExpenseListEvent, ExpenseListScreen};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = Arc::new(HttpExpenseApi::new()?);
//!     let gateway = ExpenseGateway::new(api);
//!
//!     let mut screen = ExpenseListScreen::new(gateway);
//!     screen.handle(ExpenseListEvent::Load).await;
//!     println!("{} expenses", screen.state().expenses.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod domain;
pub mod gateway;
pub mod screens;

pub use api::error::ApiError;
pub use api::http::{HttpExpenseApi, DEFAULT_BASE_URL};
pub use api::transport::ExpenseApi;
pub use domain::models::{Category, CategoryTotal, DashboardData, Expense, OverallTotal};
pub use domain::validation::{validate_expense_form, ExpenseFormValidation};
pub use gateway::{ExpenseGateway, GatewayError};
pub use shared::DEFAULT_USER_ID;
