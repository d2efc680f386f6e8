use std::path::PathBuf;

use anyhow::Result;
use foodgram::Config;
use foodgram_recipe::{ImportIngredient, TagInput};

async fn command(config: &Config) -> Result<foodgram_recipe::Command> {
    let pool = foodgram::db::create_pool(&config.database.url, 1).await?;

    Ok(foodgram_recipe::Command::new(foodgram_shared::State::single(pool)))
}

/// Loads a JSON array of `{"name", "measurement_unit"}` objects.
#[tracing::instrument(skip(config))]
pub async fn import_ingredients(config: Config, path: PathBuf) -> Result<()> {
    let content = tokio::fs::read_to_string(&path).await?;
    let ingredients: Vec<ImportIngredient> = serde_json::from_str(&content)?;
    let total = ingredients.len();

    let inserted = command(&config).await?.ingredient.import(ingredients).await?;

    tracing::info!(total, inserted, "Ingredients import completed");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn create_tag(config: Config, name: String, slug: String) -> Result<()> {
    let id = command(&config)
        .await?
        .tag
        .create(TagInput { name, slug })
        .await?;

    tracing::info!(tag_id = %id, "Tag created");

    Ok(())
}
