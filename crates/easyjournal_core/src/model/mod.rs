//! Journal domain model.
//!
//! # Responsibility
//! - Define the canonical entry record shared by storage, analysis and
//!   summary code.
//!
//! # Invariants
//! - Every entry is identified by its calendar date; one entry per date.
//! - A persisted entry always carries a non-blank answer.

pub mod entry;
