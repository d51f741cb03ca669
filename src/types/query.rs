use super::Item;

use aws_sdk_dynamodb::types::AttributeValue;

/// A key condition query against a table or one of its secondary indexes.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table_name: String,
    index_name: Option<String>,
    key_condition_expression: String,
    expression_attribute_values: Item,
}

impl Query {
    /// Create a query on the partition key `key`, matching `value` exactly.
    pub fn partition(
        table_name: impl Into<String>,
        key: &str,
        value: AttributeValue,
    ) -> Self {
        let placeholder = format!(":{key}");
        let key_condition_expression = format!("{key} = {placeholder}");

        Self {
            table_name: table_name.into(),
            index_name: None,
            key_condition_expression,
            expression_attribute_values: Item::from([(placeholder, value)]),
        }
    }

    /// Run the query against the secondary index `index_name` instead of the table.
    pub fn on_index(self, index_name: impl Into<String>) -> Self {
        Self {
            index_name: Some(index_name.into()),
            ..self
        }
    }

    pub fn table_name(&self) -> &str {
        self.table_name.as_str()
    }

    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    pub fn key_condition_expression(&self) -> &str {
        self.key_condition_expression.as_str()
    }

    pub fn expression_attribute_values(&self) -> &Item {
        &self.expression_attribute_values
    }
}
