//! Legacy student record store
//!
//! The store predates the `StudentSystem` interface and keeps its own method
//! naming and single-precision scores. It is a plain `Vec` scanned linearly;
//! callers reach it through [`crate::StudentSystemAdapter`].
//!
//! Operations never fail. "Not found" is reported through return values
//! (`0` records removed, `false` for update) and it is up to the caller to
//! decide whether that is worth logging.

mod database;

pub use database::LegacyStudentDatabase;
