use aws_sdk_dynamodb::types::AttributeValue;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashMap;

use crate::error::UserError;

/// A DynamoDB item: attribute name to attribute value.
pub type Item = HashMap<String, AttributeValue>;

/// Marshal a serializable record into a DynamoDB item.
pub fn to_item<T: Serialize>(value: &T) -> Result<Item, UserError> {
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => Ok(fields
            .into_iter()
            .map(|(name, value)| (name, to_attribute(value)))
            .collect()),
        Ok(other) => {
            tracing::warn!("Refusing to marshal non-object value: {}", other);
            Err(UserError::CouldNotMarshalItem)
        }
        Err(e) => {
            tracing::warn!("Failed to marshal record: {}", e);
            Err(UserError::CouldNotMarshalItem)
        }
    }
}

/// Unmarshal a DynamoDB item into a record.
pub fn from_item<T: DeserializeOwned>(item: Item) -> Result<T, UserError> {
    let fields = item
        .into_iter()
        .map(|(name, attr)| from_attribute(attr).map(|value| (name, value)))
        .collect::<Option<Map<String, Value>>>()
        .ok_or(UserError::FailedToUnmarshalRecord)?;

    serde_json::from_value(Value::Object(fields)).map_err(|e| {
        tracing::warn!("Failed to unmarshal record: {}", e);
        UserError::FailedToUnmarshalRecord
    })
}

/// Build the single-attribute key map for a string partition key.
pub fn string_key(name: &str, value: &str) -> Item {
    HashMap::from([(name.to_string(), AttributeValue::S(value.to_string()))])
}

fn to_attribute(value: Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s),
        Value::Array(values) => AttributeValue::L(values.into_iter().map(to_attribute).collect()),
        Value::Object(fields) => AttributeValue::M(
            fields
                .into_iter()
                .map(|(name, value)| (name, to_attribute(value)))
                .collect(),
        ),
    }
}

// Binary attributes have no JSON counterpart and are rejected.
fn from_attribute(attr: AttributeValue) -> Option<Value> {
    let value = match attr {
        AttributeValue::S(s) => Value::String(s),
        AttributeValue::N(n) => Value::Number(n.parse::<Number>().ok()?),
        AttributeValue::Bool(b) => Value::Bool(b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .into_iter()
                .map(from_attribute)
                .collect::<Option<Vec<_>>>()?,
        ),
        AttributeValue::M(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(name, attr)| from_attribute(attr).map(|value| (name, value)))
                .collect::<Option<Map<_, _>>>()?,
        ),
        AttributeValue::Ss(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .into_iter()
                .map(|n| n.parse::<Number>().ok().map(Value::Number))
                .collect::<Option<Vec<_>>>()?,
        ),
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::User;

    #[test]
    fn test_user_marshals_to_string_attributes() {
        let item = to_item(&User::new("alan.oliver@ecs.co.uk", "Alan", "Oliver")).unwrap();

        assert_eq!(item.len(), 3);
        assert_eq!(item["email"], AttributeValue::S("alan.oliver@ecs.co.uk".into()));
        assert_eq!(item["firstName"], AttributeValue::S("Alan".into()));
        assert_eq!(item["lastName"], AttributeValue::S("Oliver".into()));
    }

    #[test]
    fn test_empty_item_is_empty_user() {
        let user: User = from_item(Item::new()).unwrap();
        assert_eq!(user, User::default());
    }

    #[test]
    fn test_wrong_attribute_type_fails() {
        let mut item = string_key("email", "a@b.co");
        item.insert("firstName".into(), AttributeValue::N("42".into()));

        assert_eq!(from_item::<User>(item), Err(UserError::FailedToUnmarshalRecord));
    }

    #[test]
    fn test_binary_attribute_is_rejected() {
        let mut item = string_key("email", "a@b.co");
        item.insert("avatar".into(), AttributeValue::B(vec![1, 2, 3].into()));

        assert_eq!(from_item::<User>(item), Err(UserError::FailedToUnmarshalRecord));
    }

    #[test]
    fn test_non_object_cannot_be_marshalled() {
        assert_eq!(to_item(&"just a string"), Err(UserError::CouldNotMarshalItem));
    }

    #[test]
    fn test_nested_values_convert() {
        let value = serde_json::json!({"tags": ["a", 1, null], "meta": {"active": true}});
        let item = to_item(&value).unwrap();

        assert_eq!(
            item["tags"],
            AttributeValue::L(vec![
                AttributeValue::S("a".into()),
                AttributeValue::N("1".into()),
                AttributeValue::Null(true),
            ])
        );
        let back: Value = from_item(item).unwrap();
        assert_eq!(back, value);
    }
}
