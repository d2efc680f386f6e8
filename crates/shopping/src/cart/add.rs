use foodgram_db::table::{Recipe, ShoppingCart};
use foodgram_shared::recipe::RecipeMinified;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use time::OffsetDateTime;

impl super::Command {
    pub async fn add(
        &self,
        recipe_id: impl Into<String>,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<RecipeMinified> {
        let recipe_id = recipe_id.into();
        let user_id = user_id.into();

        let (sql, values) = Query::select()
            .columns([Recipe::Id, Recipe::Name, Recipe::CookingTime])
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(recipe_id.to_owned()))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let Some(recipe) = sqlx::query_as_with::<_, RecipeMinified, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            foodgram_shared::not_found!("recipe");
        };

        if super::exists(&self.read_db, &recipe_id, &user_id).await? {
            foodgram_shared::user!("Рецепт уже в списке покупок");
        }

        let (sql, values) = Query::insert()
            .into_table(ShoppingCart::Table)
            .columns([
                ShoppingCart::UserId,
                ShoppingCart::RecipeId,
                ShoppingCart::AddedAt,
            ])
            .values_panic([
                user_id.to_owned().into(),
                recipe_id.to_owned().into(),
                OffsetDateTime::now_utc().unix_timestamp().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        tracing::debug!(recipe_id = %recipe_id, user_id = %user_id, "recipe added to cart");

        Ok(recipe)
    }
}
