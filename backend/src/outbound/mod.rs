//! Outbound adapters implementing the record-store ports.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM.
//! - **memory**: process-local repositories for tests and database-less runs.
//!
//! Adapters convert between domain types and storage representations and
//! contain no business logic.

pub mod memory;
pub mod persistence;
