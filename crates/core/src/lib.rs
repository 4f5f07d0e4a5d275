//! Pure domain logic for the filmworks platform.
//!
//! Everything here is I/O-free: shared id types, the person role
//! vocabulary, page-number pagination math, and the domain error type.
//! Database access lives in `filmworks-db`, HTTP in `filmworks-api`.

pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;
