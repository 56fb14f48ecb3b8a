//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into journal use cases.
//! - Sequence the monthly aggregation pipeline over a fixed window.
//! - Keep UI/CLI layers decoupled from storage and generator details.

pub mod aggregate;
pub mod journal_service;
