use foodgram_db::table::Tag;
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct TagView {
    pub id: String,
    pub name: String,
    pub slug: String,
}

impl super::Query {
    pub async fn tags(&self) -> anyhow::Result<Vec<TagView>> {
        let (sql, values) = sea_query::Query::select()
            .columns([Tag::Id, Tag::Name, Tag::Slug])
            .from(Tag::Table)
            .order_by(Tag::Name, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, TagView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn find_tag(&self, id: impl Into<String>) -> anyhow::Result<Option<TagView>> {
        let id: String = id.into();
        let (sql, values) = sea_query::Query::select()
            .columns([Tag::Id, Tag::Name, Tag::Slug])
            .from(Tag::Table)
            .and_where(Expr::col(Tag::Id).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, TagView, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?)
    }
}
