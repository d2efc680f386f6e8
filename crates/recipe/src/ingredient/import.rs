use foodgram_db::table::Ingredient;
use sea_query::{OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

#[derive(Debug, Clone, Validate, Deserialize)]
pub struct ImportIngredient {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[validate(length(min = 1, max = 64))]
    pub measurement_unit: String,
}

impl super::Command {
    /// Inserts the ingredients, skipping existing `(name, measurement_unit)`
    /// pairs. Returns the number of inserted rows.
    pub async fn import(&self, input: Vec<ImportIngredient>) -> foodgram_shared::Result<u64> {
        for ingredient in input.iter() {
            ingredient.validate()?;
        }

        let mut tx = self.write_db.begin().await?;
        let mut inserted = 0;

        for ingredient in input {
            let (sql, values) = Query::insert()
                .into_table(Ingredient::Table)
                .columns([Ingredient::Id, Ingredient::Name, Ingredient::MeasurementUnit])
                .values_panic([
                    Ulid::new().to_string().into(),
                    ingredient.name.into(),
                    ingredient.measurement_unit.into(),
                ])
                .on_conflict(
                    OnConflict::columns([Ingredient::Name, Ingredient::MeasurementUnit])
                        .do_nothing()
                        .to_owned(),
                )
                .build_sqlx(SqliteQueryBuilder);

            inserted += sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;

        tracing::info!(inserted, "ingredients imported");

        Ok(inserted)
    }
}
