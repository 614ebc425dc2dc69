//! # RULECHECK CORE LIBRARY
//!
//! **DECLARATIVE VALIDATION AND WEIGHTED SELECTION**
//!
//! **ARCHITECTURE**: Trait-based validators over dynamically typed JSON values
//! **GUARANTEE**: Deterministic "first violated rule wins" error reporting
//! **SELECTION**: Cumulative-weight walk guarded by the validator

pub mod api;
pub mod config;
pub mod errors;
pub mod random;
pub mod selection;
pub mod types;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;
