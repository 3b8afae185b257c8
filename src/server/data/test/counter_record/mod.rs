use crate::server::{
    data::counter_record::CounterRecordRepository, error::AppError,
    model::counter_record::UpsertCounterRecordParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::builder::TestBuilder;

mod get_by_name;
mod upsert;
