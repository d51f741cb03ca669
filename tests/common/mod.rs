use aws_config::{retry::RetryConfig, BehaviorVersion, Region, SdkConfig};
use aws_credential_types::{provider::SharedCredentialsProvider, Credentials};
use aws_sdk_dynamodb::{
    types::{
        AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType,
        Projection, ProjectionType, ScalarAttributeType,
    },
    Client,
};
use care_giver_common::repository::{
    EMAIL_INDEX, EMAIL_NOTIFICATIONS_GSI_PK, EMAIL_NOTIFICATIONS_INDEX,
};
use ulid::Ulid;

pub struct TestConfig {
    prefix: String,
    config: SdkConfig,
}

impl TestConfig {
    pub fn table_name(&self, name: &str) -> String {
        format!("{}-{name}", self.prefix)
    }

    pub fn aws_sdk_config(&self) -> &SdkConfig {
        &self.config
    }
}

pub async fn setup() -> TestConfig {
    let creds = Credentials::new(Ulid::new(), Ulid::new(), None, None, "test");
    let creds_provider = SharedCredentialsProvider::new(creds);

    let retry = RetryConfig::standard().with_max_attempts(5);

    let config = SdkConfig::builder()
        .endpoint_url("http://localhost:8000")
        .credentials_provider(creds_provider)
        .retry_config(retry)
        .behavior_version(BehaviorVersion::latest())
        .region(Some(Region::from_static("us-east-2")))
        .build();

    let config = TestConfig {
        prefix: Ulid::new().to_string().to_lowercase(),
        config,
    };

    create_table(&config, "events", &["receiver_id", "event_id"], None).await;
    create_table(&config, "receivers", &["receiver_id"], None).await;
    create_table(
        &config,
        "relationships",
        &["user_id", "receiver_id"],
        Some((
            EMAIL_NOTIFICATIONS_INDEX,
            EMAIL_NOTIFICATIONS_GSI_PK,
            ScalarAttributeType::N,
        )),
    )
    .await;
    create_table(
        &config,
        "users",
        &["user_id"],
        Some((EMAIL_INDEX, "email", ScalarAttributeType::S)),
    )
    .await;

    config
}

pub async fn teardown(config: &TestConfig) {
    for name in ["events", "receivers", "relationships", "users"] {
        Client::new(config.aws_sdk_config())
            .delete_table()
            .table_name(config.table_name(name))
            .send()
            .await
            .unwrap();
    }
}

/// Create a table keyed on `keys`. The second key attribute, if any, is the sort key.
async fn create_table(
    config: &TestConfig,
    name: &str,
    keys: &[&str],
    index: Option<(&str, &str, ScalarAttributeType)>,
) {
    let mut builder = Client::new(config.aws_sdk_config())
        .create_table()
        .table_name(config.table_name(name))
        .billing_mode(BillingMode::PayPerRequest);

    for (i, attr) in keys.iter().enumerate() {
        let key_type = if i == 0 { KeyType::Hash } else { KeyType::Range };
        builder = builder
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(*attr)
                    .attribute_type(ScalarAttributeType::S)
                    .build()
                    .unwrap(),
            )
            .key_schema(
                KeySchemaElement::builder()
                    .attribute_name(*attr)
                    .key_type(key_type)
                    .build()
                    .unwrap(),
            );
    }

    if let Some((index_name, attr, attr_type)) = index {
        builder = builder
            .attribute_definitions(
                AttributeDefinition::builder()
                    .attribute_name(attr)
                    .attribute_type(attr_type)
                    .build()
                    .unwrap(),
            )
            .global_secondary_indexes(
                GlobalSecondaryIndex::builder()
                    .index_name(index_name)
                    .key_schema(
                        KeySchemaElement::builder()
                            .attribute_name(attr)
                            .key_type(KeyType::Hash)
                            .build()
                            .unwrap(),
                    )
                    .projection(
                        Projection::builder()
                            .projection_type(ProjectionType::All)
                            .build(),
                    )
                    .build()
                    .unwrap(),
            );
    }

    builder.send().await.unwrap();
}
