use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use super::repository;

#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct IngredientAmount {
    pub id: String,
    #[validate(range(min = 1))]
    pub amount: u32,
}

#[derive(Debug, Clone, Validate, Deserialize)]
pub struct RecipeInput {
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    #[validate(length(min = 1))]
    pub text: String,
    #[validate(range(min = 1))]
    pub cooking_time: u32,
    #[validate(length(min = 1))]
    pub tags: Vec<String>,
    #[validate(length(min = 1), nested)]
    pub ingredients: Vec<IngredientAmount>,
}

impl super::Command {
    pub async fn create(
        &self,
        author_id: impl Into<String>,
        input: RecipeInput,
    ) -> foodgram_shared::Result<String> {
        input.validate()?;
        repository::check_references(&self.read_db, &input).await?;

        let id = Ulid::new().to_string();
        let author_id = author_id.into();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let mut tx = self.write_db.begin().await?;
        repository::insert(&mut tx, &id, &author_id, &input, now).await?;
        repository::insert_tags(&mut tx, &id, &input.tags).await?;
        repository::insert_ingredients(&mut tx, &id, &input.ingredients).await?;
        tx.commit().await?;

        tracing::info!(recipe_id = %id, author_id = %author_id, "recipe created");

        Ok(id)
    }
}
