//! # Prompt Template Modules
//!
//! This module organizes the prompt templates used to turn a question into SQL.
//! `core` holds the instruction templates, `schema` the static description of
//! the sample database and the few-shot examples that accompany it.

pub mod core;
pub mod schema;
