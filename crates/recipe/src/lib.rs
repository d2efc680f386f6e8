mod favorite;
mod ingredient;
mod query;
mod root;
mod tag;

pub use ingredient::ImportIngredient;
pub use query::*;
pub use root::*;
pub use tag::TagInput;
