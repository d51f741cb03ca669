use super::Item;

/// A single page returned from a query.
#[derive(Debug, Clone, Default)]
pub struct QueryPage {
    pub items: Vec<Item>,
    /// The continuation token. `None` when this is the last page.
    pub last_evaluated_key: Option<Item>,
}
