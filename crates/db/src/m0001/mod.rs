/// Implements `sqlx_migrator::Operation` from a pair of sea-query
/// statement builders.
macro_rules! operation {
    ($name:ident, $up:expr, $down:expr) => {
        pub struct $name;

        #[async_trait::async_trait]
        impl sqlx_migrator::Operation<sqlx::Sqlite> for $name {
            async fn up(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $up.to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }

            async fn down(
                &self,
                connection: &mut sqlx::SqliteConnection,
            ) -> Result<(), sqlx_migrator::Error> {
                let statement = $down.to_string(sea_query::SqliteQueryBuilder);
                sqlx::query(&statement).execute(connection).await?;

                Ok(())
            }
        }
    };
}

pub(crate) use operation;

mod favorite;
mod ingredient;
mod recipe;
mod recipe_ingredient;
mod recipe_tag;
mod shopping_cart;
mod subscription;
mod tag;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "foodgram",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUkEmail,
        user::CreateUkUsername,
        subscription::CreateTable,
        subscription::CreateIdxAuthor,
        tag::CreateTable,
        tag::CreateUkName,
        tag::CreateUkSlug,
        ingredient::CreateTable,
        ingredient::CreateUkNameUnit,
        recipe::CreateTable,
        recipe::CreateIdxAuthor,
        recipe::CreateIdxCreatedAt,
        recipe_tag::CreateTable,
        recipe_ingredient::CreateTable,
        favorite::CreateTable,
        shopping_cart::CreateTable
    ]
);
