//! Typed access to the DynamoDB tables of the care giver app, along with the bundled
//! event type configuration.
//!
//! ## Getting Started
//!
//! Assuming that the dynamodb-local container is reachable and the "event-table" table
//! exists, you can record an event for a receiver with the following.
//!
//! ```rust,no_run
//! use care_giver_common::{config, event::Entry, repository::EventRepository, Client, Environment};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), care_giver_common::Error> {
//!     let env = Environment::Local;
//!     let sdk_config = config::load_sdk_config(env).await;
//!
//!     let client = Client::from_env(env, &sdk_config);
//!     let events = EventRepository::new("event-table", client);
//!
//!     let entry = Entry::builder("Receiver#123", "User#123", "Shower").build()?;
//!     events.add_event(&entry).await?;
//!
//!     for entry in events.get_events("Receiver#123").await? {
//!         println!("{:#?}", entry);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## AWS SDK Dependency
//!
//! To build [`Client`] of this crate, you must pass the reference for
//! [`SdkConfig`](aws_config::SdkConfig). [`config::load_sdk_config`] loads one suitable
//! for each [`Environment`].

#[macro_use]
mod macros;

/// Client for calling AWS APIs.
pub mod client;

/// Environment selection and AWS SDK configuration.
pub mod config;

/// Common errors.
pub mod error;

/// Event entries and event type configuration.
pub mod event;

pub mod receiver;

pub mod relationship;

/// One repository per table.
pub mod repository;

/// In-memory [`DynamodbClient`] for testing code built on the repositories.
#[cfg(any(test, feature = "test-util"))]
pub mod test_client;

/// Data structures used by operations.
pub mod types;

pub mod user;

pub use client::{Client, DynamodbClient};
pub use config::Environment;
pub use error::Error;
