// Tag attribute bags -> typed bindings (validated at the boundary)

use enqueue_routing_core::application::constants::{
    ATTR_PROCESSOR_NAME, ATTR_QUEUE_NAME, ATTR_TOPIC_NAME,
};
use enqueue_routing_core::domain::DeclaredBinding;
use enqueue_routing_core::{AppError, Result};
use serde_json::Value;
use tracing::warn;

/// Free-form key/value map attached to a tag
pub type TagAttributes = serde_json::Map<String, Value>;

/// Convert one attribute bag into a `DeclaredBinding`.
///
/// Known keys must hold strings (or null); unknown keys are ignored.
pub fn declared_binding_from_attributes(
    service_id: &str,
    attributes: &TagAttributes,
) -> Result<DeclaredBinding> {
    let mut binding = DeclaredBinding::new();

    for (key, value) in attributes {
        let slot = match key.as_str() {
            ATTR_TOPIC_NAME => &mut binding.topic_name,
            ATTR_QUEUE_NAME => &mut binding.queue_name,
            ATTR_PROCESSOR_NAME => &mut binding.processor_name,
            other => {
                warn!(service_id, attribute = other, "Ignoring unknown processor tag attribute");
                continue;
            }
        };

        *slot = match value {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => {
                return Err(AppError::Validation(format!(
                    "attribute \"{}\" of service \"{}\" must be a string, got {}",
                    key, service_id, other
                )))
            }
        };
    }

    Ok(binding.normalized())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> TagAttributes {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        }
    }

    #[test]
    fn test_all_known_keys() {
        let binding = declared_binding_from_attributes(
            "processor",
            &attrs(json!({
                "topicName": "aTopicName",
                "queueName": "theClientQueueName",
                "processorName": "theProcessorName",
            })),
        )
        .unwrap();

        assert_eq!(binding.topic_name.as_deref(), Some("aTopicName"));
        assert_eq!(binding.queue_name.as_deref(), Some("theClientQueueName"));
        assert_eq!(binding.processor_name.as_deref(), Some("theProcessorName"));
    }

    #[test]
    fn test_empty_bag_is_partial_binding() {
        let binding = declared_binding_from_attributes("processor", &TagAttributes::new()).unwrap();
        assert_eq!(binding, DeclaredBinding::default());
    }

    #[test]
    fn test_blank_and_null_values_count_as_absent() {
        let binding = declared_binding_from_attributes(
            "processor",
            &attrs(json!({"topicName": "t", "queueName": "", "processorName": null})),
        )
        .unwrap();

        assert!(binding.queue_name.is_none());
        assert!(binding.processor_name.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let binding = declared_binding_from_attributes(
            "processor",
            &attrs(json!({"topicName": "t", "priority": 10})),
        )
        .unwrap();
        assert_eq!(binding.topic_name.as_deref(), Some("t"));
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let err = declared_binding_from_attributes(
            "processor-service-id",
            &attrs(json!({"queueName": 42})),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("processor-service-id"));
        assert!(err.to_string().contains("queueName"));
    }
}
