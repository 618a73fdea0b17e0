//! Domain layer: validated entities and the normalization pipeline that
//! produces them from wire records.

pub mod dates;
pub mod mapper;
pub mod models;
pub mod validation;
