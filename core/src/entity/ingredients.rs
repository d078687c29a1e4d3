use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub aliases: Vec<String>,
    pub common_units: Vec<String>,
    pub emoji: Option<String>,
    pub shelf_life_days: Option<i32>,
    pub usda_fdc_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_inventory::Entity")]
    UserInventory,
    #[sea_orm(has_many = "super::pantry_staples::Entity")]
    PantryStaples,
}

impl Related<super::user_inventory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserInventory.def()
    }
}

impl Related<super::pantry_staples::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PantryStaples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
