//! Transport layer: the seam between the gateway and HTTP.

pub mod error;
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;
