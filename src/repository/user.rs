use super::{from_item, from_items, not_found, to_item, DynamodbClient, Error};
use crate::{types::Query, user::User};

use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info};

/// The secondary index of the user table keyed on `email`.
pub const EMAIL_INDEX: &str = "email-index";

#[derive(Debug, Clone)]
pub struct UserRepository<Client>
where
    Client: DynamodbClient,
{
    client: Client,
    table_name: String,
}

impl<Client> UserRepository<Client>
where
    Client: DynamodbClient,
{
    pub fn new(table_name: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }

    pub async fn create_user(&self, user: &User) -> Result<(), Error> {
        info!(table_name = %self.table_name, user_id = %user.user_id, "creating user");

        if user.user_id.is_empty() {
            return Err(Error::MissingKey("user_id"));
        }

        let item = to_item(user)?;
        self.client
            .put_item(&self.table_name, item)
            .await
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to put user: {err}")
            })?;

        info!(table_name = %self.table_name, "successfully inserted user");
        Ok(())
    }

    pub async fn get_user(&self, user_id: &str) -> Result<User, Error> {
        info!(table_name = %self.table_name, user_id, "getting user");

        let key = key!("user_id" => user_id)?;
        let item = self
            .client
            .get_item(&self.table_name, key.clone())
            .await?
            .ok_or_else(|| not_found(&self.table_name, &key))?;

        from_item(item)
    }

    /// Return the first user registered with the email address.
    pub async fn get_user_by_email(&self, email: &str) -> Result<User, Error> {
        info!(table_name = %self.table_name, "getting user by email");

        if email.is_empty() {
            return Err(Error::MissingKey("email"));
        }

        let query = Query::partition(&self.table_name, "email", AttributeValue::S(email.into()))
            .on_index(EMAIL_INDEX);
        let items = self
            .client
            .query_all(&query)
            .await
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to query user by email: {err}")
            })?;

        from_items::<User>(items)
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to unmarshal users: {err}")
            })?
            .into_iter()
            .next()
            .ok_or_else(|| Error::NotFound {
                table: self.table_name.clone(),
                key: format!("email={email}"),
            })
    }
}
