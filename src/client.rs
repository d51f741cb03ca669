use super::{
    config::Environment,
    error::Error,
    types::{Item, Query, QueryPage},
};

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::{config::Builder as DbConfigBuilder, Client as DbClient};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct Client {
    db: DbClient,
}

impl Client {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            db: DbClient::new(config),
        }
    }

    /// Create a client pointing at the endpoint for the given environment.
    ///
    /// The local environment talks to the dynamodb-local container, any other
    /// environment uses the regional endpoint resolved from `config`.
    pub fn from_env(env: Environment, config: &SdkConfig) -> Self {
        match env.endpoint_url() {
            Some(endpoint) => {
                info!("creating local dynamodb client for {endpoint}");
                let conf = DbConfigBuilder::from(config).endpoint_url(endpoint).build();
                Self {
                    db: DbClient::from_conf(conf),
                }
            }
            None => {
                info!("creating dynamodb client");
                Self::new(config)
            }
        }
    }
}

impl From<DbClient> for Client {
    fn from(db: DbClient) -> Self {
        Self { db }
    }
}

#[async_trait]
pub trait DynamodbClient: Clone + Send + Sync {
    /// Write the item to the table, replacing any item with the same key.
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error>;

    /// Return the item having the key, or None if no such item exists.
    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error>;

    /// Return one page of query results starting after `exclusive_start_key`.
    async fn query(
        &self,
        query: &Query,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryPage, Error>;

    /// Delete the item having the key.
    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), Error>;

    /// Return the items from every page of the query, in the order the pages
    /// were returned.
    async fn query_all(&self, query: &Query) -> Result<Vec<Item>, Error> {
        let QueryPage {
            mut items,
            mut last_evaluated_key,
        } = self.query(query, None).await?;
        let mut pages = 1;

        while last_evaluated_key.is_some() {
            let mut page = self.query(query, last_evaluated_key.take()).await?;
            items.append(&mut page.items);
            last_evaluated_key = page.last_evaluated_key;
            pages += 1;
        }

        debug!(
            table_name = query.table_name(),
            pages,
            count = items.len(),
            "fetched all query pages"
        );
        Ok(items)
    }
}

#[async_trait]
impl DynamodbClient for Client {
    async fn put_item(&self, table_name: &str, item: Item) -> Result<(), Error> {
        self.db
            .put_item()
            .table_name(table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))?;

        Ok(())
    }

    async fn get_item(&self, table_name: &str, key: Item) -> Result<Option<Item>, Error> {
        self.db
            .get_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| output.item)
    }

    async fn query(
        &self,
        query: &Query,
        exclusive_start_key: Option<Item>,
    ) -> Result<QueryPage, Error> {
        self.db
            .query()
            .table_name(query.table_name())
            .set_index_name(query.index_name().map(|val| val.to_string()))
            .key_condition_expression(query.key_condition_expression())
            .set_expression_attribute_values(Some(query.expression_attribute_values().clone()))
            .set_exclusive_start_key(exclusive_start_key)
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))
            .map(|output| QueryPage {
                items: output.items.unwrap_or_default(),
                last_evaluated_key: output.last_evaluated_key.filter(|key| !key.is_empty()),
            })
    }

    async fn delete_item(&self, table_name: &str, key: Item) -> Result<(), Error> {
        self.db
            .delete_item()
            .table_name(table_name)
            .set_key(Some(key))
            .send()
            .await
            .map_err(|err| Error::SdkError(Box::new(err)))?;

        Ok(())
    }
}
