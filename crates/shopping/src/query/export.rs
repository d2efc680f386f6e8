use crate::aggregator;

/// Plain-text shopping list ready to be served as an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListExport {
    pub filename: String,
    pub content: String,
}

impl ShoppingListExport {
    pub const CONTENT_TYPE: &'static str = "text/plain; charset=utf-8";

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

impl super::Query {
    pub async fn export(
        &self,
        user_id: impl Into<String>,
    ) -> foodgram_shared::Result<ShoppingListExport> {
        let user_id = user_id.into();
        let entries = self.cart_entries(&user_id).await?;
        let content = aggregator::shopping_list(&entries)?;

        tracing::info!(user_id = %user_id, recipes = entries.len(), "shopping list exported");

        Ok(ShoppingListExport {
            filename: format!("shopping_cart_{user_id}.txt"),
            content,
        })
    }
}
