//! Request handlers for the movies API.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `filmworks_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod movies;
