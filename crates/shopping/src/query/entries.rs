use std::collections::HashMap;

use foodgram_db::table::{Ingredient, RecipeIngredient, ShoppingCart};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

use crate::aggregator::{CartEntry, IngredientLine};

#[derive(FromRow)]
struct LineRow {
    recipe_id: String,
    name: String,
    measurement_unit: String,
    amount: u32,
}

impl super::Query {
    /// Cart entries of the user, each with the ingredient lines of its recipe.
    pub async fn cart_entries(&self, user_id: impl Into<String>) -> anyhow::Result<Vec<CartEntry>> {
        let user_id = user_id.into();

        let (sql, values) = sea_query::Query::select()
            .column(ShoppingCart::RecipeId)
            .from(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id.to_owned()))
            .order_by(ShoppingCart::AddedAt, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let recipe_ids = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if recipe_ids.is_empty() {
            return Ok(vec![]);
        }

        let (sql, values) = sea_query::Query::select()
            .column((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .columns([
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
            .inner_join(
                ShoppingCart::Table,
                Expr::col((ShoppingCart::Table, ShoppingCart::RecipeId))
                    .equals((RecipeIngredient::Table, RecipeIngredient::RecipeId)),
            )
            .and_where(Expr::col((ShoppingCart::Table, ShoppingCart::UserId)).eq(user_id))
            .build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, LineRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut lines: HashMap<String, Vec<IngredientLine>> = HashMap::new();
        for row in rows {
            lines
                .entry(row.recipe_id)
                .or_default()
                .push(IngredientLine::new(row.name, row.measurement_unit, row.amount));
        }

        Ok(recipe_ids
            .into_iter()
            .map(|recipe_id| CartEntry {
                lines: lines.remove(&recipe_id).unwrap_or_default(),
                recipe_id,
            })
            .collect())
    }
}
