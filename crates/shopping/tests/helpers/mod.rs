use std::{path::PathBuf, str::FromStr};

use foodgram_recipe::{ImportIngredient, IngredientAmount, RecipeInput, TagInput};
use foodgram_shared::State;
use foodgram_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    foodgram_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(State::single(pool))
}

pub async fn create_user(state: &State, name: &str) -> anyhow::Result<String> {
    let cmd = foodgram_user::Command::new(state.clone());

    Ok(cmd
        .register(RegisterInput {
            email: format!("{name}@foodgram.localhost"),
            username: name.to_owned(),
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            password: "my_password".to_owned(),
        })
        .await?)
}

/// Creates a recipe authored by `author_id` with the given
/// `(name, unit, amount)` lines, importing missing ingredients.
pub async fn create_recipe(
    state: &State,
    author_id: &str,
    name: &str,
    lines: &[(&str, &str, u32)],
) -> anyhow::Result<String> {
    let cmd = foodgram_recipe::Command::new(state.clone());
    let query = foodgram_recipe::Query(state.clone());

    let tag = match query.tags().await?.into_iter().next() {
        Some(tag) => tag.id,
        None => {
            cmd.tag
                .create(TagInput {
                    name: "Обед".to_owned(),
                    slug: "lunch".to_owned(),
                })
                .await?
        }
    };

    cmd.ingredient
        .import(
            lines
                .iter()
                .map(|(name, unit, _)| ImportIngredient {
                    name: name.to_string(),
                    measurement_unit: unit.to_string(),
                })
                .collect(),
        )
        .await?;

    let all = query.ingredients(None).await?;
    let ingredients = lines
        .iter()
        .map(|(name, unit, amount)| IngredientAmount {
            id: all
                .iter()
                .find(|i| i.name == *name && i.measurement_unit == *unit)
                .map(|i| i.id.to_owned())
                .unwrap(),
            amount: *amount,
        })
        .collect();

    Ok(cmd
        .create(
            author_id,
            RecipeInput {
                name: name.to_owned(),
                text: "...".to_owned(),
                cooking_time: 15,
                tags: vec![tag],
                ingredients,
            },
        )
        .await?)
}
