use foodgram_db::table::{Favorite, Ingredient, Recipe, RecipeIngredient, RecipeTag, ShoppingCart, Tag};
use foodgram_user::UserView;
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

use super::TagView;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct RecipeIngredientView {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecipeView {
    pub id: String,
    pub tags: Vec<TagView>,
    pub author: UserView,
    pub ingredients: Vec<RecipeIngredientView>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
    pub name: String,
    pub text: String,
    pub cooking_time: u32,
}

#[derive(FromRow)]
struct RecipeRow {
    id: String,
    author_id: String,
    name: String,
    text: String,
    cooking_time: u32,
}

async fn exists(pool: &SqlitePool, statement: SelectStatement) -> anyhow::Result<bool> {
    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}

impl super::Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
        viewer: Option<&str>,
    ) -> anyhow::Result<Option<RecipeView>> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                Recipe::Id,
                Recipe::AuthorId,
                Recipe::Name,
                Recipe::Text,
                Recipe::CookingTime,
            ])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let Some(row) = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let Some(author) = foodgram_user::Query(self.0.clone())
            .find(&row.author_id, viewer)
            .await?
        else {
            anyhow::bail!("author {} of recipe {} not found", row.author_id, row.id);
        };

        let (sql, values) = sea_query::Query::select()
            .columns([(Tag::Table, Tag::Id), (Tag::Table, Tag::Name), (Tag::Table, Tag::Slug)])
            .from(Tag::Table)
            .inner_join(
                RecipeTag::Table,
                Expr::col((RecipeTag::Table, RecipeTag::TagId)).equals((Tag::Table, Tag::Id)),
            )
            .and_where(Expr::col((RecipeTag::Table, RecipeTag::RecipeId)).eq(row.id.as_str()))
            .order_by((Tag::Table, Tag::Name), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let tags = sqlx::query_as_with::<_, TagView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let (sql, values) = sea_query::Query::select()
            .columns([
                (Ingredient::Table, Ingredient::Id),
                (Ingredient::Table, Ingredient::Name),
                (Ingredient::Table, Ingredient::MeasurementUnit),
            ])
            .column((RecipeIngredient::Table, RecipeIngredient::Amount))
            .from(RecipeIngredient::Table)
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(
                Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId)).eq(row.id.as_str()),
            )
            .order_by((Ingredient::Table, Ingredient::Name), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let ingredients = sqlx::query_as_with::<_, RecipeIngredientView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let (is_favorited, is_in_shopping_cart) = match viewer {
            Some(viewer) => (
                exists(
                    &self.read_db,
                    sea_query::Query::select()
                        .column(Favorite::RecipeId)
                        .from(Favorite::Table)
                        .and_where(Expr::col(Favorite::RecipeId).eq(row.id.as_str()))
                        .and_where(Expr::col(Favorite::UserId).eq(viewer))
                        .limit(1)
                        .to_owned(),
                )
                .await?,
                exists(
                    &self.read_db,
                    sea_query::Query::select()
                        .column(ShoppingCart::RecipeId)
                        .from(ShoppingCart::Table)
                        .and_where(Expr::col(ShoppingCart::RecipeId).eq(row.id.as_str()))
                        .and_where(Expr::col(ShoppingCart::UserId).eq(viewer))
                        .limit(1)
                        .to_owned(),
                )
                .await?,
            ),
            None => (false, false),
        };

        Ok(Some(RecipeView {
            id: row.id,
            tags,
            author,
            ingredients,
            is_favorited,
            is_in_shopping_cart,
            name: row.name,
            text: row.text,
            cooking_time: row.cooking_time,
        }))
    }
}
