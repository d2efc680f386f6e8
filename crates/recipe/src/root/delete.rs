use foodgram_db::table::Recipe;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use super::repository;

impl super::Command {
    pub async fn delete(
        &self,
        id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let id = id.into();

        let Some(author_id) = repository::find_author(&self.read_db, &id).await? else {
            foodgram_shared::not_found!("recipe");
        };

        if author_id != user_id.into() {
            foodgram_shared::forbidden!();
        }

        let (sql, values) = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id.to_owned()))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::info!(recipe_id = %id, "recipe deleted");

        Ok(())
    }
}
