use foodgram_db::table::{Favorite, Recipe, RecipeTag, ShoppingCart, Tag};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::RecipeView;

#[derive(Debug, Default, Clone)]
pub struct RecipeFilter {
    /// Tag slugs, a recipe matches when it has any of them.
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

impl super::Query {
    /// Recipes matching the filter, newest first. The favorite and cart
    /// filters are ignored without a viewer.
    pub async fn filter(
        &self,
        filter: RecipeFilter,
        viewer: Option<&str>,
    ) -> anyhow::Result<Vec<RecipeView>> {
        let mut statement = sea_query::Query::select()
            .column((Recipe::Table, Recipe::Id))
            .from(Recipe::Table)
            .order_by((Recipe::Table, Recipe::CreatedAt), Order::Desc)
            .order_by((Recipe::Table, Recipe::Id), Order::Desc)
            .to_owned();

        if let Some(author) = filter.author {
            statement.and_where(Expr::col((Recipe::Table, Recipe::AuthorId)).eq(author));
        }

        if !filter.tags.is_empty() {
            statement.and_where(
                Expr::col((Recipe::Table, Recipe::Id)).in_subquery(
                    sea_query::Query::select()
                        .column((RecipeTag::Table, RecipeTag::RecipeId))
                        .from(RecipeTag::Table)
                        .inner_join(
                            Tag::Table,
                            Expr::col((Tag::Table, Tag::Id))
                                .equals((RecipeTag::Table, RecipeTag::TagId)),
                        )
                        .and_where(Expr::col((Tag::Table, Tag::Slug)).is_in(filter.tags))
                        .to_owned(),
                ),
            );
        }

        if let Some(viewer) = viewer {
            if filter.is_favorited {
                statement.and_where(
                    Expr::col((Recipe::Table, Recipe::Id)).in_subquery(
                        sea_query::Query::select()
                            .column(Favorite::RecipeId)
                            .from(Favorite::Table)
                            .and_where(Expr::col(Favorite::UserId).eq(viewer))
                            .to_owned(),
                    ),
                );
            }

            if filter.is_in_shopping_cart {
                statement.and_where(
                    Expr::col((Recipe::Table, Recipe::Id)).in_subquery(
                        sea_query::Query::select()
                            .column(ShoppingCart::RecipeId)
                            .from(ShoppingCart::Table)
                            .and_where(Expr::col(ShoppingCart::UserId).eq(viewer))
                            .to_owned(),
                    ),
                );
            }
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ids = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut recipes = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(recipe) = self.find(id, viewer).await? {
                recipes.push(recipe);
            }
        }

        Ok(recipes)
    }
}
