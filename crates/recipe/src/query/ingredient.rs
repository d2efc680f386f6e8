use foodgram_db::table::Ingredient;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct IngredientView {
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
}

impl super::Query {
    /// Ingredients whose name starts with `name`, ordered by name.
    pub async fn ingredients(&self, name: Option<&str>) -> anyhow::Result<Vec<IngredientView>> {
        let mut statement = sea_query::Query::select()
            .columns([
                Ingredient::Id,
                Ingredient::Name,
                Ingredient::MeasurementUnit,
            ])
            .from(Ingredient::Table)
            .order_by(Ingredient::Name, Order::Asc)
            .order_by(Ingredient::MeasurementUnit, Order::Asc)
            .to_owned();

        if let Some(name) = name.filter(|n| !n.is_empty()) {
            let escaped = name.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
            statement.and_where(Expr::cust_with_values(
                "name LIKE ? ESCAPE '\\'",
                [format!("{escaped}%")],
            ));
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find_ingredient(
        &self,
        id: impl Into<String>,
    ) -> anyhow::Result<Option<IngredientView>> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([
                Ingredient::Id,
                Ingredient::Name,
                Ingredient::MeasurementUnit,
            ])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Id).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, IngredientView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
