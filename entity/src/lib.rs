//! SeaORM entity models for the incident counter database.

pub mod counter_record;
pub mod prelude;
