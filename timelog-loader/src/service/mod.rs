//! Service layer
//!
//! The reconciliation engine: sub-task resolution, worklog commits and the
//! batch runner that drives them row by row. Services only reach the
//! tracker through the [`crate::tracker::Tracker`] trait.

mod batch;
mod committer;
mod resolver;

pub use batch::BatchRunner;
