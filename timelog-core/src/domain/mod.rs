//! Core domain types
//!
//! These types represent what the loader works with: issues as the tracker
//! returns them, worklog requests parsed from input rows, and the per-row
//! ledger a batch produces.

pub mod issue;
pub mod outcome;
pub mod worklog;
