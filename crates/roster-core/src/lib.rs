//! Student Roster Core
//!
//! A legacy in-memory student record store, the modern `StudentSystem`
//! interface that client code is written against, and the adapter that lets
//! the one stand in for the other.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{StudentManagementClient, StudentSystemAdapter};
//!
//! let mut system = StudentSystemAdapter::new();
//! let mut client = StudentManagementClient::new(&mut system);
//!
//! client.register_new_student(1001, "John Smith", 3.75);
//! client.register_new_student(1002, "Emily Johnson", 3.92);
//! client.remove_student(1002);
//!
//! let mut out = Vec::new();
//! client.display_all_students(&mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("Total Students: 1\n"));
//! ```

pub mod adapter;
pub mod client;
pub mod demo;
pub mod legacy;
pub mod record;
pub mod system;

// Re-export main types at crate root
pub use adapter::{narrow_score, StudentSystemAdapter};
pub use client::StudentManagementClient;
pub use demo::{run_demo, DemoReport};
pub use legacy::LegacyStudentDatabase;
pub use record::StudentRecord;
pub use system::{Outcome, RosterError, RosterResult, StudentSystem};
