use std::collections::HashSet;

use foodgram_db::table::{Subscription, User};
use sea_query::{Expr, ExprTrait, Order, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::{SqlitePool, prelude::FromRow};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(default)]
    pub is_subscribed: bool,
}

pub(crate) fn select_user() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (User::Table, User::Id),
            (User::Table, User::Email),
            (User::Table, User::Username),
            (User::Table, User::FirstName),
            (User::Table, User::LastName),
        ])
        .from(User::Table)
        .to_owned()
}

/// Author ids the viewer is subscribed to.
pub(crate) async fn subscribed_authors(
    pool: &SqlitePool,
    viewer: &str,
) -> anyhow::Result<HashSet<String>> {
    let (sql, values) = sea_query::Query::select()
        .column(Subscription::AuthorId)
        .from(Subscription::Table)
        .and_where(Expr::col(Subscription::UserId).eq(viewer))
        .build_sqlx(SqliteQueryBuilder);

    let ids = sqlx::query_scalar_with::<_, String, _>(&sql, values)
        .fetch_all(pool)
        .await?;

    Ok(ids.into_iter().collect())
}

impl super::Query {
    pub async fn find(
        &self,
        id: impl Into<String>,
        viewer: Option<&str>,
    ) -> anyhow::Result<Option<UserView>> {
        let id: String = id.into();
        let statement = select_user()
            .and_where(Expr::col((User::Table, User::Id)).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let Some(mut user) = sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        if let Some(viewer) = viewer {
            user.is_subscribed = subscribed_authors(&self.read_db, viewer)
                .await?
                .contains(&user.id);
        }

        Ok(Some(user))
    }

    pub async fn list(&self, viewer: Option<&str>) -> anyhow::Result<Vec<UserView>> {
        let statement = select_user()
            .order_by((User::Table, User::Username), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let mut users = sqlx::query_as_with::<_, UserView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        if let Some(viewer) = viewer {
            let subscribed = subscribed_authors(&self.read_db, viewer).await?;
            for user in users.iter_mut() {
                user.is_subscribed = subscribed.contains(&user.id);
            }
        }

        Ok(users)
    }
}
