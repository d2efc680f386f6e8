mod ingredient;
mod list;
mod recipe;
mod tag;

use std::ops::Deref;

pub use ingredient::IngredientView;
pub use list::RecipeFilter;
pub use recipe::{RecipeIngredientView, RecipeView};
pub use tag::TagView;

#[derive(Clone)]
pub struct Query(pub foodgram_shared::State);

impl Deref for Query {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
