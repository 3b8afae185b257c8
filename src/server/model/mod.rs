//! Domain models for the counter.
//!
//! - `counter` - In-memory counter state, display target and reconciliation outcomes
//! - `counter_record` - Persisted key/value records and their upsert parameters

pub mod counter;
pub mod counter_record;
