mod add;
mod remove;

use std::ops::Deref;

use foodgram_db::table::Favorite;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct Command(pub(crate) foodgram_shared::State);

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub(crate) async fn exists(
    pool: &SqlitePool,
    recipe_id: &str,
    user_id: &str,
) -> foodgram_shared::Result<bool> {
    let (sql, values) = Query::select()
        .column(Favorite::RecipeId)
        .from(Favorite::Table)
        .and_where(Expr::col(Favorite::UserId).eq(user_id))
        .and_where(Expr::col(Favorite::RecipeId).eq(recipe_id))
        .limit(1)
        .build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}
