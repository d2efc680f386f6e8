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

#[allow(dead_code)]
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

#[allow(dead_code)]
pub async fn create_tag(cmd: &foodgram_recipe::Command, slug: &str) -> anyhow::Result<String> {
    Ok(cmd
        .tag
        .create(TagInput {
            name: slug.to_uppercase(),
            slug: slug.to_owned(),
        })
        .await?)
}

/// Imports the ingredients and returns their ids in the given order.
#[allow(dead_code)]
pub async fn create_ingredients(
    state: &State,
    ingredients: &[(&str, &str)],
) -> anyhow::Result<Vec<String>> {
    let cmd = foodgram_recipe::Command::new(state.clone());
    cmd.ingredient
        .import(
            ingredients
                .iter()
                .map(|(name, unit)| ImportIngredient {
                    name: name.to_string(),
                    measurement_unit: unit.to_string(),
                })
                .collect(),
        )
        .await?;

    let query = foodgram_recipe::Query(state.clone());
    let all = query.ingredients(None).await?;

    Ok(ingredients
        .iter()
        .map(|(name, unit)| {
            all.iter()
                .find(|i| i.name == *name && i.measurement_unit == *unit)
                .map(|i| i.id.to_owned())
                .unwrap()
        })
        .collect())
}

#[allow(dead_code)]
pub fn recipe_input(name: &str, tags: Vec<String>, ingredients: Vec<(String, u32)>) -> RecipeInput {
    RecipeInput {
        name: name.to_owned(),
        text: format!("How to cook {name}"),
        cooking_time: 10,
        tags,
        ingredients: ingredients
            .into_iter()
            .map(|(id, amount)| IngredientAmount { id, amount })
            .collect(),
    }
}
