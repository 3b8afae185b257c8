//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! services never touch entities directly.

pub mod counter_record;

#[cfg(test)]
mod test;
