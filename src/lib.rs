//! EmSearch - Terminal employee search
//!
//! A single-screen terminal UI for looking up employee records by employee
//! number or name, backed by a mock directory that simulates backend latency.
//!
//! # Features
//!
//! - **Criteria form**: search by employee number, name, or both
//! - **Substring matching**: case-insensitive, preserving store order
//! - **Simulated latency**: configurable delay standing in for a real API
//! - **Pluggable data source**: swap the built-in dataset for a JSON file
//! - **Tagged view state**: loading/error/empty/results cannot overlap
//!
//! # Example
//!
//! ```no_run
//! use emsearch::{builtin_records, EmployeeDirectory, InMemoryDirectory, SearchCriteria};
//! use std::time::Duration;
//!
//! fn main() -> emsearch::Result<()> {
//!     let directory = InMemoryDirectory::new(builtin_records())
//!         .with_latency(Duration::ZERO);
//!
//!     let criteria = SearchCriteria {
//!         employee_number: "DC0001".to_string(),
//!         name: String::new(),
//!     };
//!
//!     for employee in directory.search(&criteria)? {
//!         println!("{}: {}", employee.employee_number, employee.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod directory;
pub mod employee;
pub mod error;
pub mod logging;
pub mod tui;

// Re-export main types
pub use directory::{builtin_records, EmployeeDirectory, InMemoryDirectory};
pub use employee::{Employee, EnrollmentStatus, SearchCriteria};
pub use error::{EmSearchError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
