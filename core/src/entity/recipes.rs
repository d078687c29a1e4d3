use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub hero_emoji: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub ingredients: Json,
    #[sea_orm(column_type = "JsonBinary")]
    pub steps: Json,
    pub total_time: i32,
    pub active_time: i32,
    pub difficulty: String,
    pub cuisine_type: String,
    pub meal_type: String,
    pub is_one_pot: bool,
    pub is_vegetarian: bool,
    pub is_vegan: bool,
    pub equipment: Vec<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub nutrition: Json,
    pub servings: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::saved_recipes::Entity")]
    SavedRecipes,
}

impl Related<super::saved_recipes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SavedRecipes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
