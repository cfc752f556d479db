//! The pieces of the backup tool which do not depend on what is being backed up:
//! the folder merge-copier, its error type, and shared option structs.
//!
pub mod error;
pub mod file_copier;
pub mod macros;
pub mod types;
