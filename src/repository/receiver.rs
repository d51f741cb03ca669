use super::{from_item, not_found, to_item, DynamodbClient, Error};
use crate::receiver::Receiver;

use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct ReceiverRepository<Client>
where
    Client: DynamodbClient,
{
    client: Client,
    table_name: String,
}

impl<Client> ReceiverRepository<Client>
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

    pub async fn create_receiver(&self, receiver: &Receiver) -> Result<(), Error> {
        info!(
            table_name = %self.table_name,
            receiver_id = %receiver.receiver_id,
            "creating receiver"
        );

        if receiver.receiver_id.is_empty() {
            return Err(Error::MissingKey("receiver_id"));
        }

        let item = to_item(receiver)?;
        self.client
            .put_item(&self.table_name, item)
            .await
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to put receiver: {err}")
            })?;

        info!(table_name = %self.table_name, "successfully inserted receiver");
        Ok(())
    }

    pub async fn get_receiver(&self, receiver_id: &str) -> Result<Receiver, Error> {
        info!(table_name = %self.table_name, receiver_id, "getting receiver");

        let key = key!("receiver_id" => receiver_id)?;
        let item = self
            .client
            .get_item(&self.table_name, key.clone())
            .await?
            .ok_or_else(|| not_found(&self.table_name, &key))?;

        from_item(item)
    }
}
