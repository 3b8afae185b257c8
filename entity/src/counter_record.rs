use sea_orm::entity::prelude::*;

/// A single text-encoded scalar keyed by its name.
///
/// The counter keeps two of these: the last reset timestamp and the id of the
/// display message. Values are stored as text and parsed by the service layer
/// so a corrupted row never prevents the table from loading.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "counter_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub value: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
