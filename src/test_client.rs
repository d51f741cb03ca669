//! Enabled with the `test-util` feature.
//!
//! ```rust
//! use care_giver_common::{
//!     receiver::Receiver, repository::ReceiverRepository, test_client::TestClient,
//! };
//!
//! # async fn wrapper() -> Result<(), care_giver_common::Error> {
//! let client = TestClient::new();
//! let receivers = ReceiverRepository::new("receiver-table", client.clone());
//!
//! receivers.create_receiver(&Receiver::new("John", "Doe")).await?;
//! assert_eq!(client.put_items().len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::{
    client::DynamodbClient,
    error::Error,
    types::{Item, Query, QueryPage},
};

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

#[derive(Debug, Default)]
struct State {
    err: Option<String>,
    get_output: Option<Item>,
    pages: VecDeque<QueryPage>,
    put_items: Vec<(String, Item)>,
    get_keys: Vec<Item>,
    deleted_keys: Vec<Item>,
    queries: Vec<(Query, Option<Item>)>,
}

/// A client answering from canned outputs and recording every call.
///
/// Without a canned `get_item` output it answers from the items put so far.
#[derive(Debug, Clone, Default)]
pub struct TestClient {
    state: Arc<Mutex<State>>,
}

impl TestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client failing every call with `Error::SdkError(message)`.
    pub fn failing(message: &str) -> Self {
        let client = Self::new();
        client.state().err = Some(message.to_string());
        client
    }

    /// A client answering every `get_item` with `item`.
    pub fn with_item(item: Item) -> Self {
        let client = Self::new();
        client.state().get_output = Some(item);
        client
    }

    /// A client answering successive queries with `pages`, then with empty pages.
    pub fn with_pages(pages: Vec<QueryPage>) -> Self {
        let client = Self::new();
        client.state().pages = pages.into();
        client
    }

    /// Every `(table_name, item)` put so far.
    pub fn put_items(&self) -> Vec<(String, Item)> {
        self.state().put_items.clone()
    }

    pub fn get_keys(&self) -> Vec<Item> {
        self.state().get_keys.clone()
    }

    pub fn deleted_keys(&self) -> Vec<Item> {
        self.state().deleted_keys.clone()
    }

    /// Every query sent, with its exclusive start key.
    pub fn queries(&self) -> Vec<(Query, Option<Item>)> {
        self.state().queries.clone()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn check(&self) -> Result<(), Error> {
        match self.state().err.clone() {
            Some(message) => Err(Error::SdkError(message.into())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DynamodbClient for TestClient {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error> {
        self.check()?;
        self.state().put_items.push((table_name.to_string(), item));
        Ok(())
    }

    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error> {
        self.check()?;
        let mut state = self.state();
        state.get_keys.push(key.clone());

        if let Some(item) = state.get_output.clone() {
            return Ok(Some(item));
        }

        Ok(state
            .put_items
            .iter()
            .rev()
            .find(|(table, item)| {
                table == table_name && key.iter().all(|(name, value)| item.get(name) == Some(value))
            })
            .map(|(_, item)| item.clone()))
    }

    async fn query(
        &self,
        query: &Query,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryPage, Error> {
        self.check()?;
        let mut state = self.state();
        state.queries.push((query.clone(), exclusive_start_key));
        Ok(state.pages.pop_front().unwrap_or_default())
    }

    async fn delete_item(&self, _table_name: &str, key: Item) -> Result<(), Error> {
        self.check()?;
        self.state().deleted_keys.push(key);
        Ok(())
    }
}
