//! Domain layer for RST Warden
//!
//! CDD Principle: Domain Model - Pure business logic for markup validation
//! - Contains the core entities and value objects of a validation run
//! - Independent of infrastructure concerns like file systems or terminal output
//! - Expresses the ubiquitous language of documents, issues, and scan results

pub mod issues;

// Re-export main domain types for convenience
pub use issues::*;
