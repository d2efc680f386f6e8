use serde::Serialize;
use sqlx::prelude::FromRow;

/// Short recipe card returned by favorite, cart and subscription endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RecipeMinified {
    pub id: String,
    pub name: String,
    pub cooking_time: u32,
}
