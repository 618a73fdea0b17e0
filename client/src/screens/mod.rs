//! Per-screen state machines.
//!
//! Each screen is an explicit state machine: a state snapshot plus a closed
//! set of events, applied one at a time by the single owner of the screen's
//! lifecycle. No locks are involved; sequencing comes from ownership. Each
//! screen holds its own copy of fetched data, so nothing is shared between
//! screens, and dropping a screen abandons whatever operation was in
//! flight.

pub mod dashboard;
pub mod form;
pub mod list;
