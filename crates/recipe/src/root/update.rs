use time::OffsetDateTime;
use validator::Validate;

use super::{RecipeInput, repository};

impl super::Command {
    /// Replaces the recipe fields, its tags and its ingredient lines.
    pub async fn update(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
        input: RecipeInput,
    ) -> foodgram_shared::Result<()> {
        let id = id.into();

        let Some(author_id) = repository::find_author(&self.read_db, &id).await? else {
            foodgram_shared::not_found!("recipe");
        };

        if author_id != user_id.into() {
            foodgram_shared::forbidden!();
        }

        input.validate()?;
        repository::check_references(&self.read_db, &input).await?;

        let now = OffsetDateTime::now_utc().unix_timestamp();

        let mut tx = self.write_db.begin().await?;
        repository::update(&mut tx, &id, &input, now).await?;
        repository::delete_lines(&mut tx, &id).await?;
        repository::insert_tags(&mut tx, &id, &input.tags).await?;
        repository::insert_ingredients(&mut tx, &id, &input.ingredients).await?;
        tx.commit().await?;

        Ok(())
    }
}
