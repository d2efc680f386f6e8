use std::collections::HashSet;

use foodgram_db::table::{Ingredient, Recipe, RecipeIngredient, RecipeTag, Tag};
use sea_query::{Expr, ExprTrait, Func, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use super::{IngredientAmount, RecipeInput};

pub(crate) async fn find_author(
    pool: &SqlitePool,
    id: &str,
) -> foodgram_shared::Result<Option<String>> {
    let (sql, values) = Query::select()
        .column(Recipe::AuthorId)
        .from(Recipe::Table)
        .and_where(Expr::col(Recipe::Id).eq(id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_scalar_with::<_, String, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

/// Rejects duplicated or unknown tags and ingredients.
pub(crate) async fn check_references(
    pool: &SqlitePool,
    input: &RecipeInput,
) -> foodgram_shared::Result<()> {
    let ingredient_ids = input
        .ingredients
        .iter()
        .map(|i| i.id.as_str())
        .collect::<HashSet<_>>();

    if ingredient_ids.len() != input.ingredients.len() {
        foodgram_shared::user!("Ингредиенты не должны повторяться");
    }

    let tag_ids = input.tags.iter().map(|t| t.as_str()).collect::<HashSet<_>>();

    if tag_ids.len() != input.tags.len() {
        foodgram_shared::user!("Теги не должны повторяться");
    }

    let (sql, values) = Query::select()
        .expr(Func::count(Expr::col(Tag::Id)))
        .from(Tag::Table)
        .and_where(Expr::col(Tag::Id).is_in(tag_ids))
        .build_sqlx(SqliteQueryBuilder);

    let count = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(pool)
        .await?;

    if count as usize != input.tags.len() {
        foodgram_shared::user!("Указан несуществующий тег");
    }

    let (sql, values) = Query::select()
        .expr(Func::count(Expr::col(Ingredient::Id)))
        .from(Ingredient::Table)
        .and_where(Expr::col(Ingredient::Id).is_in(ingredient_ids))
        .build_sqlx(SqliteQueryBuilder);

    let count = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_one(pool)
        .await?;

    if count as usize != input.ingredients.len() {
        foodgram_shared::user!("Указан несуществующий ингредиент");
    }

    Ok(())
}

pub(crate) async fn insert(
    conn: &mut SqliteConnection,
    id: &str,
    author_id: &str,
    input: &RecipeInput,
    now: i64,
) -> foodgram_shared::Result<()> {
    let (sql, values) = Query::insert()
        .into_table(Recipe::Table)
        .columns([
            Recipe::Id,
            Recipe::AuthorId,
            Recipe::Name,
            Recipe::Text,
            Recipe::CookingTime,
            Recipe::CreatedAt,
            Recipe::UpdatedAt,
        ])
        .values_panic([
            id.into(),
            author_id.into(),
            input.name.to_owned().into(),
            input.text.to_owned().into(),
            input.cooking_time.into(),
            now.into(),
            now.into(),
        ])
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn update(
    conn: &mut SqliteConnection,
    id: &str,
    input: &RecipeInput,
    now: i64,
) -> foodgram_shared::Result<()> {
    let (sql, values) = Query::update()
        .table(Recipe::Table)
        .values([
            (Recipe::Name, input.name.to_owned().into()),
            (Recipe::Text, input.text.to_owned().into()),
            (Recipe::CookingTime, input.cooking_time.into()),
            (Recipe::UpdatedAt, now.into()),
        ])
        .and_where(Expr::col(Recipe::Id).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn delete_lines(conn: &mut SqliteConnection, id: &str) -> foodgram_shared::Result<()> {
    let (sql, values) = Query::delete()
        .from_table(RecipeTag::Table)
        .and_where(Expr::col(RecipeTag::RecipeId).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let (sql, values) = Query::delete()
        .from_table(RecipeIngredient::Table)
        .and_where(Expr::col(RecipeIngredient::RecipeId).eq(id))
        .build_sqlx(SqliteQueryBuilder);

    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn insert_tags(
    conn: &mut SqliteConnection,
    id: &str,
    tags: &[String],
) -> foodgram_shared::Result<()> {
    let mut statement = Query::insert()
        .into_table(RecipeTag::Table)
        .columns([RecipeTag::RecipeId, RecipeTag::TagId])
        .to_owned();

    for tag in tags {
        statement.values_panic([id.into(), tag.to_owned().into()]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

pub(crate) async fn insert_ingredients(
    conn: &mut SqliteConnection,
    id: &str,
    ingredients: &[IngredientAmount],
) -> foodgram_shared::Result<()> {
    let mut statement = Query::insert()
        .into_table(RecipeIngredient::Table)
        .columns([
            RecipeIngredient::RecipeId,
            RecipeIngredient::IngredientId,
            RecipeIngredient::Amount,
        ])
        .to_owned();

    for ingredient in ingredients {
        statement.values_panic([
            id.into(),
            ingredient.id.to_owned().into(),
            ingredient.amount.into(),
        ]);
    }

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}
