use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared parameter type. Shape typing only: the stored value is not
/// validated against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterType {
    String,
    Number,
    Boolean,
    Select,
    Date,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub key: String,
    pub value: Value,
    #[serde(rename = "type")]
    pub param_type: ParameterType,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Choices for `select` parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Bounds for `number` parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterGroup {
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// The full configuration document: a versioned tree of parameter groups,
/// stored as one JSON unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationDoc {
    pub version: String,
    #[serde(default)]
    pub groups: Vec<ParameterGroup>,
}

impl ConfigurationDoc {
    /// First match wins when group ids repeat.
    pub fn group_mut(&mut self, group_id: &str) -> Option<&mut ParameterGroup> {
        self.groups.iter_mut().find(|g| g.id == group_id)
    }

    /// Sets the value of an existing parameter. Returns false when the group
    /// or the parameter is not found, leaving the document untouched.
    pub fn set_parameter_value(
        &mut self,
        group_id: &str,
        parameter_key: &str,
        new_value: Value,
    ) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        match group.parameters.iter_mut().find(|p| p.key == parameter_key) {
            Some(parameter) => {
                parameter.value = new_value;
                true
            }
            None => false,
        }
    }

    /// Removes a parameter by key. The group itself stays, even when its
    /// parameter list becomes empty.
    pub fn remove_parameter(&mut self, group_id: &str, parameter_key: &str) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        let before = group.parameters.len();
        group.parameters.retain(|p| p.key != parameter_key);
        group.parameters.len() < before
    }

    /// Appends a parameter to a group. Returns false when the group is absent
    /// or a parameter with the same key already exists in it.
    pub fn add_parameter(&mut self, group_id: &str, parameter: Parameter) -> bool {
        let Some(group) = self.group_mut(group_id) else {
            return false;
        };
        if group.parameters.iter().any(|p| p.key == parameter.key) {
            return false;
        }
        group.parameters.push(parameter);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parameter(key: &str, value: Value) -> Parameter {
        Parameter {
            key: key.to_string(),
            value,
            param_type: ParameterType::String,
            label: key.to_string(),
            description: None,
            options: None,
            min: None,
            max: None,
        }
    }

    fn group(id: &str, parameters: Vec<Parameter>) -> ParameterGroup {
        ParameterGroup {
            id: id.to_string(),
            label: id.to_string(),
            description: None,
            parameters,
        }
    }

    fn doc(groups: Vec<ParameterGroup>) -> ConfigurationDoc {
        ConfigurationDoc {
            version: "1.0".to_string(),
            groups,
        }
    }

    #[test]
    fn test_set_parameter_value() {
        let mut doc = doc(vec![group("network", vec![parameter("timeout_ms", json!(30))])]);

        assert!(doc.set_parameter_value("network", "timeout_ms", json!(60)));
        assert_eq!(doc.groups[0].parameters[0].value, json!(60));
    }

    #[test]
    fn test_set_parameter_value_not_found() {
        let original = doc(vec![group("network", vec![parameter("timeout_ms", json!(30))])]);
        let mut doc = original.clone();

        assert!(!doc.set_parameter_value("storage", "timeout_ms", json!(60)));
        assert!(!doc.set_parameter_value("network", "retries", json!(3)));
        // Failed lookups leave the document unchanged
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::to_value(&original).unwrap()
        );
    }

    #[test]
    fn test_first_matching_group_wins_on_duplicate_ids() {
        let mut doc = doc(vec![
            group("network", vec![parameter("timeout_ms", json!(30))]),
            group("network", vec![parameter("retries", json!(3))]),
        ]);

        // "retries" lives in the second duplicate group, so the scan fails
        assert!(!doc.set_parameter_value("network", "retries", json!(5)));
        assert!(doc.set_parameter_value("network", "timeout_ms", json!(60)));
        assert_eq!(doc.groups[1].parameters[0].value, json!(3));
    }

    #[test]
    fn test_remove_last_parameter_keeps_group() {
        let mut doc = doc(vec![group("network", vec![parameter("timeout_ms", json!(30))])]);

        assert!(doc.remove_parameter("network", "timeout_ms"));
        assert_eq!(doc.groups.len(), 1);
        assert!(doc.groups[0].parameters.is_empty());

        assert!(!doc.remove_parameter("network", "timeout_ms"));
    }

    #[test]
    fn test_add_parameter_rejects_duplicate_key() {
        let mut doc = doc(vec![group("network", vec![parameter("timeout_ms", json!(30))])]);

        assert!(!doc.add_parameter("network", parameter("timeout_ms", json!(60))));
        assert_eq!(doc.groups[0].parameters.len(), 1);
        assert_eq!(doc.groups[0].parameters[0].value, json!(30));

        assert!(doc.add_parameter("network", parameter("retries", json!(3))));
        assert_eq!(doc.groups[0].parameters.len(), 2);

        assert!(!doc.add_parameter("storage", parameter("retries", json!(3))));
    }

    #[test]
    fn test_document_tolerates_missing_lists() {
        let doc: ConfigurationDoc = serde_json::from_str(r#"{"version": "1.0"}"#).unwrap();
        assert!(doc.groups.is_empty());

        let doc: ConfigurationDoc = serde_json::from_str(
            r#"{"version": "1.0", "groups": [{"id": "network", "label": "Network"}]}"#,
        )
        .unwrap();
        assert!(doc.groups[0].parameters.is_empty());
    }
}
