use foodgram_db::table::{Recipe, ShoppingCart};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    pub async fn remove(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<()> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let (sql, values) = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(recipe_id.to_owned()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        if sqlx::query_with(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
            .is_none()
        {
            foodgram_shared::not_found!("recipe");
        }

        if !super::exists(&self.read_db, &recipe_id, &user_id).await? {
            foodgram_shared::user!("Рецепт отсутствует в списке покупок");
        }

        let (sql, values) = Query::delete()
            .from_table(ShoppingCart::Table)
            .and_where(Expr::col(ShoppingCart::UserId).eq(user_id))
            .and_where(Expr::col(ShoppingCart::RecipeId).eq(recipe_id))
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(())
    }
}
