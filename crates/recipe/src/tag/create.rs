use std::sync::LazyLock;

use foodgram_db::table::Tag;
use regex::Regex;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

static RE_SLUG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-a-zA-Z0-9_]+$").unwrap());

#[derive(Debug, Clone, Validate, Deserialize)]
pub struct TagInput {
    #[validate(length(min = 1, max = 32))]
    pub name: String,
    #[validate(length(min = 1, max = 32), regex(path = *RE_SLUG))]
    pub slug: String,
}

impl super::Command {
    pub async fn create(&self, input: TagInput) -> foodgram_shared::Result<String> {
        input.validate()?;

        let (sql, values) = Query::select()
            .columns([Tag::Name, Tag::Slug])
            .from(Tag::Table)
            .cond_where(
                Expr::col(Tag::Name)
                    .eq(input.name.to_owned())
                    .or(Expr::col(Tag::Slug).eq(input.slug.to_owned())),
            )
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        if let Some((name, _)) = sqlx::query_as_with::<_, (String, String), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        {
            if name == input.name {
                foodgram_shared::user!("Тег с таким названием уже существует");
            }

            foodgram_shared::user!("Тег с таким slug уже существует");
        }

        let id = Ulid::new().to_string();

        let (sql, values) = Query::insert()
            .into_table(Tag::Table)
            .columns([Tag::Id, Tag::Name, Tag::Slug])
            .values_panic([id.to_owned().into(), input.name.into(), input.slug.into()])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(id)
    }
}
