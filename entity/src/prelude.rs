pub use super::counter_record::Entity as CounterRecord;
