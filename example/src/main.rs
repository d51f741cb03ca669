use care_giver_common::{config, repository::RelationshipRepository, Client, Environment};
use tracing_subscriber::EnvFilter;

// This example assumes that `ENV=local` is set, the dynamodb-local instance is reachable
// and "relationship-table" table exists.

#[tokio::main]
async fn main() -> Result<(), care_giver_common::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let env = Environment::from_env();
    let sdk_config = config::load_sdk_config(env).await;

    let client = Client::from_env(env, &sdk_config);
    let relationships = RelationshipRepository::new("relationship-table", client);

    for relationship in relationships.get_relationships_by_email_notifications().await? {
        println!("{:#?}", relationship);
    }

    Ok(())
}
