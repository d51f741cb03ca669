//! # Repositories
//!
//! One repository per table. Every repository holds a [`DynamodbClient`] and the name of
//! its table, and exposes one method per operation the application needs.
//!
//! ```rust,no_run
//! use care_giver_common::{config, repository::UserRepository, Client, Environment};
//!
//! # async fn wrapper() -> Result<(), care_giver_common::Error> {
//! let env = Environment::from_env();
//! let sdk_config = config::load_sdk_config(env).await;
//! let client = Client::from_env(env, &sdk_config);
//!
//! let users = UserRepository::new("user-table", client);
//! let user = users.get_user_by_email("someone@example.com").await?;
//! println!("{:#?}", user);
//! # Ok(())
//! # }
//! ```

mod event;
mod receiver;
mod relationship;
mod user;

pub use event::EventRepository;
pub use receiver::ReceiverRepository;
pub use relationship::{
    RelationshipRepository, EMAIL_NOTIFICATIONS_GSI_PK, EMAIL_NOTIFICATIONS_INDEX,
};
pub use user::{UserRepository, EMAIL_INDEX};

use super::{client::DynamodbClient, error::Error, types::Item};

use serde::{de::DeserializeOwned, Serialize};

fn to_item<T: Serialize>(value: &T) -> Result<Item, Error> {
    Ok(serde_dynamo::to_item(value)?)
}

fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, Error> {
    Ok(serde_dynamo::from_item(item)?)
}

fn from_items<T: DeserializeOwned>(items: Vec<Item>) -> Result<Vec<T>, Error> {
    Ok(serde_dynamo::from_items(items)?)
}

fn not_found(table_name: &str, key: &Item) -> Error {
    let mut key = key
        .iter()
        .map(|(name, value)| {
            let value = value.as_s().map(String::as_str).unwrap_or("?");
            format!("{name}={value}")
        })
        .collect::<Vec<String>>();
    key.sort();

    Error::NotFound {
        table: table_name.to_string(),
        key: key.join(","),
    }
}
