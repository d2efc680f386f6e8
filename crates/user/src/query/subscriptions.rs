use foodgram_db::table::{Recipe, Subscription, User};
use foodgram_shared::recipe::RecipeMinified;
use sea_query::{Expr, ExprTrait, Func, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;

use super::UserView;

#[derive(Debug, Clone, Serialize)]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub author: UserView,
    pub recipes: Vec<RecipeMinified>,
    pub recipes_count: u32,
}

impl super::Query {
    /// Authors the user follows, each with their newest recipes.
    pub async fn subscriptions(
        &self,
        user_id: impl Into<String>,
        recipes_limit: Option<u32>,
    ) -> anyhow::Result<Vec<SubscriptionView>> {
        let user_id: String = user_id.into();

        let statement = super::user::select_user()
            .inner_join(
                Subscription::Table,
                Expr::col((Subscription::Table, Subscription::AuthorId))
                    .equals((User::Table, User::Id)),
            )
            .and_where(Expr::col((Subscription::Table, Subscription::UserId)).eq(user_id))
            .order_by((User::Table, User::Username), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let authors = sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut views = Vec::with_capacity(authors.len());

        for mut author in authors {
            author.is_subscribed = true;

            let mut statement = sea_query::Query::select()
                .columns([Recipe::Id, Recipe::Name, Recipe::CookingTime])
                .from(Recipe::Table)
                .and_where(Expr::col(Recipe::AuthorId).eq(author.id.as_str()))
                .order_by(Recipe::CreatedAt, Order::Desc)
                .order_by(Recipe::Id, Order::Desc)
                .to_owned();

            if let Some(limit) = recipes_limit {
                statement.limit(limit.into());
            }

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let recipes = sqlx::query_as_with::<_, RecipeMinified, _>(&sql, values)
                .fetch_all(&self.read_db)
                .await?;

            let (sql, values) = sea_query::Query::select()
                .expr(Func::count(Expr::col(Recipe::Id)))
                .from(Recipe::Table)
                .and_where(Expr::col(Recipe::AuthorId).eq(author.id.as_str()))
                .build_sqlx(SqliteQueryBuilder);

            let recipes_count = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
                .fetch_one(&self.read_db)
                .await?;

            views.push(SubscriptionView {
                author,
                recipes,
                recipes_count: recipes_count as u32,
            });
        }

        Ok(views)
    }
}
