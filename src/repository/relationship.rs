use super::{from_item, from_items, not_found, to_item, DynamodbClient, Error};
use crate::{relationship::Relationship, types::Query};

use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info};

/// The sparse secondary index holding only relationships with email notifications enabled.
pub const EMAIL_NOTIFICATIONS_INDEX: &str = "email_notifications";

/// The partition key of [`EMAIL_NOTIFICATIONS_INDEX`]. Written as `1` when notifications
/// are enabled and omitted otherwise.
pub const EMAIL_NOTIFICATIONS_GSI_PK: &str = "email_notifications_gsi_pk";

#[derive(Debug, Clone)]
pub struct RelationshipRepository<Client>
where
    Client: DynamodbClient,
{
    client: Client,
    table_name: String,
}

impl<Client> RelationshipRepository<Client>
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

    pub async fn add_relationship(&self, relationship: &Relationship) -> Result<(), Error> {
        info!(
            table_name = %self.table_name,
            user_id = %relationship.user_id,
            receiver_id = %relationship.receiver_id,
            "adding user receiver relationship"
        );

        if relationship.user_id.is_empty() {
            return Err(Error::MissingKey("user_id"));
        }
        if relationship.receiver_id.is_empty() {
            return Err(Error::MissingKey("receiver_id"));
        }

        let mut item = to_item(relationship)?;
        if relationship.email_notifications {
            item.insert(
                EMAIL_NOTIFICATIONS_GSI_PK.to_string(),
                AttributeValue::N("1".into()),
            );
        }

        self.client
            .put_item(&self.table_name, item)
            .await
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to put relationship: {err}")
            })?;

        info!(table_name = %self.table_name, "successfully inserted relationship");
        Ok(())
    }

    pub async fn get_relationship(
        &self,
        user_id: &str,
        receiver_id: &str,
    ) -> Result<Relationship, Error> {
        info!(
            table_name = %self.table_name,
            user_id,
            receiver_id,
            "getting user receiver relationship"
        );

        let key = key!("user_id" => user_id, "receiver_id" => receiver_id)?;
        let item = self
            .client
            .get_item(&self.table_name, key.clone())
            .await?
            .ok_or_else(|| not_found(&self.table_name, &key))?;

        from_item(item)
    }

    pub async fn get_relationships_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Relationship>, Error> {
        info!(table_name = %self.table_name, user_id, "getting user receiver relationships");

        if user_id.is_empty() {
            return Err(Error::MissingKey("user_id"));
        }

        let query = Query::partition(
            &self.table_name,
            "user_id",
            AttributeValue::S(user_id.into()),
        );
        let items = self.client.query_all(&query).await?;

        from_items(items).inspect_err(|err| {
            error!(table_name = %self.table_name, "failed to unmarshal relationships: {err}")
        })
    }

    pub async fn delete_relationship(
        &self,
        user_id: &str,
        receiver_id: &str,
    ) -> Result<(), Error> {
        info!(
            table_name = %self.table_name,
            user_id,
            receiver_id,
            "deleting user receiver relationship"
        );

        let key = key!("user_id" => user_id, "receiver_id" => receiver_id)?;
        self.client.delete_item(&self.table_name, key).await?;

        info!(table_name = %self.table_name, "successfully deleted relationship");
        Ok(())
    }

    /// Return every relationship having email notifications enabled, across all users.
    pub async fn get_relationships_by_email_notifications(
        &self,
    ) -> Result<Vec<Relationship>, Error> {
        info!(
            table_name = %self.table_name,
            "getting relationships with email notifications enabled"
        );

        let query = Query::partition(
            &self.table_name,
            EMAIL_NOTIFICATIONS_GSI_PK,
            AttributeValue::N("1".into()),
        )
        .on_index(EMAIL_NOTIFICATIONS_INDEX);

        let items = self.client.query_all(&query).await.inspect_err(|err| {
            error!(
                table_name = %self.table_name,
                "failed to query relationships by email notification: {err}"
            )
        })?;

        let relationships: Vec<Relationship> = from_items(items).inspect_err(|err| {
            error!(table_name = %self.table_name, "failed to unmarshal relationships: {err}")
        })?;

        info!(
            table_name = %self.table_name,
            count = relationships.len(),
            "successfully retrieved relationships with email notifications"
        );
        Ok(relationships)
    }
}
