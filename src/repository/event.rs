use super::{from_items, to_item, DynamodbClient, Error};
use crate::{event::Entry, types::Query};

use aws_sdk_dynamodb::types::AttributeValue;
use tracing::{error, info};

#[derive(Debug, Clone)]
pub struct EventRepository<Client>
where
    Client: DynamodbClient,
{
    client: Client,
    table_name: String,
}

impl<Client> EventRepository<Client>
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

    pub async fn add_event(&self, entry: &Entry) -> Result<(), Error> {
        info!(
            table_name = %self.table_name,
            event_id = %entry.event_id,
            receiver_id = %entry.receiver_id,
            "adding event"
        );

        key!(
            "receiver_id" => entry.receiver_id.as_str(),
            "event_id" => entry.event_id.as_str(),
        )?;

        let item = to_item(entry)?;
        self.client
            .put_item(&self.table_name, item)
            .await
            .inspect_err(|err| {
                error!(table_name = %self.table_name, "failed to put event: {err}")
            })?;

        info!(table_name = %self.table_name, "successfully inserted event");
        Ok(())
    }

    /// Return every event recorded for the receiver.
    pub async fn get_events(&self, receiver_id: &str) -> Result<Vec<Entry>, Error> {
        info!(table_name = %self.table_name, receiver_id, "getting events");

        if receiver_id.is_empty() {
            return Err(Error::MissingKey("receiver_id"));
        }

        let query = Query::partition(
            &self.table_name,
            "receiver_id",
            AttributeValue::S(receiver_id.into()),
        );
        let items = self.client.query_all(&query).await?;

        from_items(items).inspect_err(|err| {
            error!(table_name = %self.table_name, "failed to unmarshal events: {err}")
        })
    }

    pub async fn delete_event(&self, receiver_id: &str, event_id: &str) -> Result<(), Error> {
        info!(table_name = %self.table_name, receiver_id, event_id, "deleting event");

        let key = key!("receiver_id" => receiver_id, "event_id" => event_id)?;
        self.client.delete_item(&self.table_name, key).await?;

        info!(table_name = %self.table_name, "successfully deleted event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_client::TestClient;
    use crate::{
        event::{DataPoint, DataValue},
        types::{Item, QueryPage},
    };

    fn repository(client: TestClient) -> EventRepository<TestClient> {
        EventRepository::new("event-table", client)
    }

    fn s(val: &str) -> AttributeValue {
        AttributeValue::S(val.into())
    }

    fn typed(event_type: &str) -> Entry {
        Entry {
            event_type: event_type.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn it_adds_an_event() {
        let client = TestClient::new();
        let entry = Entry::builder("Receiver#123", "User#123", "Weight")
            .timestamp("2024-01-02T03:04:05Z")
            .data(vec![DataPoint::new("Weight", 120.3)])
            .build()
            .unwrap();

        repository(client.clone()).add_event(&entry).await.unwrap();

        let puts = client.put_items();
        assert_eq!(puts.len(), 1);
        let item = &puts[0].1;
        assert_eq!(item.get("event_id"), Some(&s(&entry.event_id)));
        assert_eq!(item.get("receiver_id"), Some(&s("Receiver#123")));
        assert_eq!(item.get("type"), Some(&s("Weight")));
        assert_eq!(item.get("timestamp"), Some(&s("2024-01-02T03:04:05Z")));
        assert!(item.get("note").is_none());

        let data = item.get("data").and_then(|val| val.as_l().ok()).unwrap();
        let point = data[0].as_m().unwrap();
        assert_eq!(point.get("name"), Some(&s("Weight")));
        assert_eq!(point.get("value"), Some(&AttributeValue::N("120.3".into())));
    }

    #[tokio::test]
    async fn put_error_is_propagated() {
        let entry = Entry {
            event_id: "Error".into(),
            receiver_id: "Receiver#123".into(),
            ..Default::default()
        };

        let err = repository(TestClient::failing("An error occurred during Put Item"))
            .add_event(&entry)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SdkError(_)));
    }

    #[tokio::test]
    async fn empty_key_is_rejected() {
        let client = TestClient::new();
        let repository = repository(client.clone());

        let without_receiver = Entry {
            event_id: "Event#123".into(),
            ..Default::default()
        };
        let err = repository.add_event(&without_receiver).await.unwrap_err();
        assert!(matches!(err, Error::MissingKey("receiver_id")));

        let without_id = Entry {
            receiver_id: "Receiver#123".into(),
            ..Default::default()
        };
        let err = repository.add_event(&without_id).await.unwrap_err();
        assert!(matches!(err, Error::MissingKey("event_id")));

        assert!(client.put_items().is_empty());
    }

    #[tokio::test]
    async fn it_gets_events() {
        let client = TestClient::with_pages(vec![QueryPage {
            items: vec![
                Item::from([("type".to_string(), s("Shower"))]),
                Item::from([("type".to_string(), s("Medication"))]),
            ],
            last_evaluated_key: None,
        }]);

        let events = repository(client.clone())
            .get_events("Receiver#123")
            .await
            .unwrap();

        assert_eq!(events, vec![typed("Shower"), typed("Medication")]);

        let queries = client.queries();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].0.table_name(), "event-table");
        assert_eq!(queries[0].0.key_condition_expression(), "receiver_id = :receiver_id");
    }

    #[tokio::test]
    async fn it_gets_events_across_pages() {
        let cursor = Item::from([
            ("receiver_id".to_string(), s("Receiver#123")),
            ("event_id".to_string(), s("Event#1")),
        ]);
        let client = TestClient::with_pages(vec![
            QueryPage {
                items: vec![Item::from([("type".to_string(), s("Shower"))])],
                last_evaluated_key: Some(cursor.clone()),
            },
            QueryPage {
                items: vec![Item::from([("type".to_string(), s("Weight"))])],
                last_evaluated_key: None,
            },
        ]);

        let events = repository(client.clone())
            .get_events("Receiver#123")
            .await
            .unwrap();

        assert_eq!(events, vec![typed("Shower"), typed("Weight")]);
        assert_eq!(client.queries()[1].1, Some(cursor));
    }

    #[tokio::test]
    async fn query_error_is_propagated() {
        let err = repository(TestClient::failing("An error occurred during Query"))
            .get_events("Error")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SdkError(_)));
    }

    #[tokio::test]
    async fn type_mismatch_fails() {
        let client = TestClient::with_pages(vec![QueryPage {
            items: vec![Item::from([("type".to_string(), AttributeValue::Bool(false))])],
            last_evaluated_key: None,
        }]);

        let err = repository(client).get_events("BadData").await.unwrap_err();
        assert!(matches!(err, Error::Serde(_)));
    }

    #[tokio::test]
    async fn it_deletes_an_event() {
        let client = TestClient::new();

        repository(client.clone())
            .delete_event("Receiver#123", "Event#123")
            .await
            .unwrap();

        assert_eq!(
            client.deleted_keys(),
            vec![Item::from([
                ("receiver_id".to_string(), s("Receiver#123")),
                ("event_id".to_string(), s("Event#123")),
            ])]
        );
    }

    #[tokio::test]
    async fn delete_error_is_propagated() {
        let err = repository(TestClient::failing("error deleting item"))
            .delete_event("Receiver#123", "Error")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::SdkError(_)));
    }

    #[tokio::test]
    async fn added_event_can_be_read_back() {
        let client = TestClient::new();
        let repository = repository(client.clone());
        let entry = Entry::builder("Receiver#123", "User#123", "Weight")
            .data(vec![
                DataPoint::new("Weight", 120.3),
                DataPoint::new("Scale", "bathroom"),
                DataPoint::new("Fasting", true),
                DataPoint::new("Reps", 3),
            ])
            .note("after breakfast")
            .build()
            .unwrap();

        repository.add_event(&entry).await.unwrap();
        let stored = client.put_items().pop().unwrap().1;
        let client = TestClient::with_pages(vec![QueryPage {
            items: vec![stored],
            last_evaluated_key: None,
        }]);

        let events = EventRepository::new("event-table", client)
            .get_events("Receiver#123")
            .await
            .unwrap();

        assert_eq!(events, vec![entry]);
        assert_eq!(events[0].data[3].value, DataValue::Number(3.0));
    }
}
