pub mod aggregator;
mod cart;
mod query;

pub use aggregator::{AggregatedLine, CartEntry, IngredientLine};
pub use cart::Command;
pub use query::*;
