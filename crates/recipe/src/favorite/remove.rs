use foodgram_db::table::Favorite;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::root::repository;

impl super::Command {
    pub async fn remove(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let id = id.into();
        let user_id = user_id.into();

        if repository::find_author(&self.read_db, &id).await?.is_none() {
            foodgram_shared::not_found!("recipe");
        }

        if !super::exists(&self.read_db, &id, &user_id).await? {
            foodgram_shared::user!("Рецепт не найден в избранном");
        }

        let (sql, values) = Query::delete()
            .from_table(Favorite::Table)
            .and_where(Expr::col(Favorite::UserId).eq(user_id))
            .and_where(Expr::col(Favorite::RecipeId).eq(id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
