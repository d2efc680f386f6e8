use foodgram_db::table::Subscription;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::root::repository::{self, FindType};

impl super::Command {
    pub async fn unsubscribe(
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

        if !super::exists(&self.read_db, &user_id, &author_id).await? {
            foodgram_shared::user!("Вы не подписаны на этого пользователя");
        }

        let statement = Query::delete()
            .from_table(Subscription::Table)
            .and_where(Expr::col(Subscription::UserId).eq(user_id))
            .and_where(Expr::col(Subscription::AuthorId).eq(author_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
