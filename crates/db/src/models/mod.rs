//! Read models served by the API.
//!
//! The platform is read-only over an externally loaded dataset, so there
//! are no create/update DTOs here, only the aggregate projections the
//! repositories produce.

pub mod movie;
