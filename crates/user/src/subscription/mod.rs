use std::ops::Deref;

use foodgram_db::table::Subscription;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::SqlitePool;

mod subscribe;
mod unsubscribe;

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
    user_id: &str,
    author_id: &str,
) -> foodgram_shared::Result<bool> {
    let statement = Query::select()
        .column(Subscription::AuthorId)
        .from(Subscription::Table)
        .and_where(Expr::col(Subscription::UserId).eq(user_id))
        .and_where(Expr::col(Subscription::AuthorId).eq(author_id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_with(&sql, values)
        .fetch_optional(pool)
        .await?
        .is_some())
}
