//! # API Route Handlers
//!
//! `general` holds the informational endpoints, `query` the question endpoint.

pub mod general;
pub mod query;

pub use general::*;
pub use query::*;

use super::{errors::AppError, state::AppState};
