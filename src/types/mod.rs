mod outputs;
mod query;

pub use outputs::QueryPage;
pub use query::Query;

use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

/// The attribute map representation of a single DynamoDB record.
pub type Item = HashMap<String, AttributeValue>;
