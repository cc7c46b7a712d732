//! Library surface of the Breakvault dataset builder.
//!
//! The binary is a thin wrapper over [`xlsx::load_workbook`] and
//! [`ingest::ingest`]; keeping the pipeline here lets integration tests
//! exercise it without spawning the executable.

pub mod ingest;
pub mod xlsx;

pub use ingest::{Cell, IngestError, IngestMode, Table, Workbook, ingest};
