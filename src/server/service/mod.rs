//! Service layer for the counter.
//!
//! Services sit between the Discord-facing bot layer and the data layer:
//!
//! - `counter_store` - Parsing and self-healing of the persisted counter records
//! - `elapsed` - Pure elapsed-time formatting and message rendering
//! - `display` - The outward display channel and its Discord implementation
//! - `reconciler` - Keeping exactly one up-to-date counter message in the channel
//! - `counter` - Reset, tick and startup transitions under the session lock

pub mod counter;
pub mod counter_store;
pub mod display;
pub mod elapsed;
pub mod reconciler;

#[cfg(test)]
pub(crate) mod test;
