//! Turns the recipes of a shopping cart into a plain-text shopping list.
//!
//! Lines sharing the same `(name, measurement_unit)` are merged and their
//! amounts summed. The result is ordered by name then unit using plain
//! string comparison, so the output only depends on the cart content.

use std::collections::HashMap;

pub const HEADER: &str = "Список покупок:";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("Список покупок пуст")]
    NoContent,
}

impl From<Error> for foodgram_shared::Error {
    fn from(value: Error) -> Self {
        Self::User(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngredientLine {
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, measurement_unit: impl Into<String>, amount: u32) -> Self {
        Self {
            name: name.into(),
            measurement_unit: measurement_unit.into(),
            amount,
        }
    }
}

/// One recipe in the cart with its ingredient lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub recipe_id: String,
    pub lines: Vec<IngredientLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedLine {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: u64,
}

pub fn aggregate(entries: &[CartEntry]) -> Result<Vec<AggregatedLine>, Error> {
    if entries.is_empty() {
        return Err(Error::NoContent);
    }

    let mut totals: HashMap<(&str, &str), u64> = HashMap::new();

    for line in entries.iter().flat_map(|entry| entry.lines.iter()) {
        *totals
            .entry((line.name.as_str(), line.measurement_unit.as_str()))
            .or_default() += u64::from(line.amount);
    }

    let mut lines = totals
        .into_iter()
        .map(|((name, measurement_unit), total_amount)| AggregatedLine {
            name: name.to_owned(),
            measurement_unit: measurement_unit.to_owned(),
            total_amount,
        })
        .collect::<Vec<_>>();

    lines.sort_unstable_by(|a, b| {
        (a.name.as_str(), a.measurement_unit.as_str())
            .cmp(&(b.name.as_str(), b.measurement_unit.as_str()))
    });

    Ok(lines)
}

pub fn render(lines: &[AggregatedLine]) -> String {
    let mut content = format!("{HEADER}\r\n");

    for line in lines {
        content.push_str(&format!(
            "{} - {} {}\r\n",
            line.name, line.total_amount, line.measurement_unit
        ));
    }

    content
}

pub fn shopping_list(entries: &[CartEntry]) -> Result<String, Error> {
    Ok(render(&aggregate(entries)?))
}
