use foodgram_db::table::Subscription;
use sea_query::{Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

use crate::root::repository::{self, FindType};

impl super::Command {
    pub async fn subscribe(
        &self,
        author_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let author_id = author_id.into();
        let user_id = user_id.into();

        if repository::find(&self.read_db, FindType::Id(author_id.to_owned()))
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("author");
        }

        if author_id == user_id {
            foodgram_shared::user!("Нельзя подписаться на самого себя");
        }

        if super::exists(&self.read_db, &user_id, &author_id).await? {
            foodgram_shared::user!("Вы уже подписаны на этого пользователя");
        }

        let statement = Query::insert()
            .into_table(Subscription::Table)
            .columns([
                Subscription::UserId,
                Subscription::AuthorId,
                Subscription::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                author_id.into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
