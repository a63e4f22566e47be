use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "certifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(200))")]
    pub issuer: String,

    #[sea_orm(nullable)]
    pub issue_date: Option<Date>,

    #[sea_orm(column_type = "Text", nullable)]
    pub credential_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub document: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub thumbnail: Option<String>,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
