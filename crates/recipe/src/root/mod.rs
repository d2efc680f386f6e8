use std::ops::Deref;

mod create;
mod delete;
pub(crate) mod repository;
mod update;

pub use create::{IngredientAmount, RecipeInput};

#[derive(Clone)]
pub struct Command {
    state: foodgram_shared::State,
    pub favorite: crate::favorite::Command,
    pub tag: crate::tag::Command,
    pub ingredient: crate::ingredient::Command,
}

impl Deref for Command {
    type Target = foodgram_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

impl Command {
    pub fn new(state: foodgram_shared::State) -> Self {
        Self {
            favorite: crate::favorite::Command(state.clone()),
            tag: crate::tag::Command(state.clone()),
            ingredient: crate::ingredient::Command(state.clone()),
            state,
        }
    }
}
