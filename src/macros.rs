/// Build an [`Item`](crate::types::Item) of string attributes used as a primary key.
///
/// Evaluates to `Err(Error::MissingKey(name))` for the first empty value.
macro_rules! key {
    ($($name:literal => $value:expr),+ $(,)?) => {{
        let mut key = $crate::types::Item::new();
        let mut missing: Option<&'static str> = None;
        $(
            let value: &str = $value.as_ref();
            if value.is_empty() && missing.is_none() {
                missing = Some($name);
            }
            key.insert(
                $name.to_string(),
                ::aws_sdk_dynamodb::types::AttributeValue::S(value.to_string()),
            );
        )+
        match missing {
            Some(name) => Err($crate::error::Error::MissingKey(name)),
            None => Ok(key),
        }
    }};
}
