use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Snapshot of the host-side configuration for the control.
///
/// Field names on the wire are fixed by the host's declarative binding
/// mechanism (`wordLimit` / `commentField`); both properties are optional on
/// the host side, so missing values fall back to zero / empty rather than
/// failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControlConfig {
    /// Maximum number of characters the bound field is intended to hold.
    #[serde(
        rename = "wordLimit",
        default,
        deserialize_with = "clamped_word_limit"
    )]
    pub word_limit: usize,

    /// Current value of the bound text property.
    #[serde(rename = "commentField", default)]
    pub comment_field: String,
}

impl ControlConfig {
    /// Build a config from raw host values. A negative limit is undefined on
    /// the host side and clamps to zero instead of propagating as an error.
    pub fn new(word_limit: i64, comment_field: impl Into<String>) -> Self {
        Self {
            word_limit: usize::try_from(word_limit).unwrap_or_default(),
            comment_field: comment_field.into(),
        }
    }
}

fn clamped_word_limit<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = i64::deserialize(deserializer)?;
    Ok(usize::try_from(raw).unwrap_or_default())
}

/// Value bag returned to the host when it pulls outputs after an
/// outputs-ready notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOutputs {
    #[serde(rename = "commentField")]
    pub comment_field: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_host_field_names() {
        let config: ControlConfig =
            serde_json::from_str(r#"{"wordLimit":10,"commentField":"hi"}"#).unwrap();
        assert_eq!(
            config,
            ControlConfig {
                word_limit: 10,
                comment_field: "hi".to_string(),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: ControlConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.word_limit, 0);
        assert_eq!(config.comment_field, "");
    }

    #[test]
    fn negative_limit_clamps_to_zero() {
        let config: ControlConfig = serde_json::from_str(r#"{"wordLimit":-3}"#).unwrap();
        assert_eq!(config.word_limit, 0);

        assert_eq!(ControlConfig::new(-1, "x").word_limit, 0);
    }

    #[test]
    fn outputs_serialize_with_host_field_name() {
        let outputs = ControlOutputs {
            comment_field: "draft".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&outputs).unwrap(),
            r#"{"commentField":"draft"}"#
        );
    }
}
