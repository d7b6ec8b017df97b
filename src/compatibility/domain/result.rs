use serde::{Deserialize, Serialize};

/// Outcome of a pairwise rule or of a whole-build aggregation.
///
/// `issues` is empty whenever `is_compatible` is true and append-only during
/// aggregation. `message` is human-readable; only the vacuous verdict (no
/// pair evaluated) carries an empty message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    pub is_compatible: bool,
    pub message: String,
    #[serde(default)]
    pub issues: Vec<String>,
}

impl CompatibilityResult {
    pub fn compatible(message: impl Into<String>) -> Self {
        Self {
            is_compatible: true,
            message: message.into(),
            issues: Vec::new(),
        }
    }

    pub fn incompatible(message: impl Into<String>, issues: Vec<String>) -> Self {
        Self {
            is_compatible: false,
            message: message.into(),
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compatible_has_no_issues() {
        let result = CompatibilityResult::compatible("all good");
        assert!(result.is_compatible);
        assert_eq!(result.message, "all good");
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_incompatible_carries_issues() {
        let result =
            CompatibilityResult::incompatible("mismatch", vec!["socket differs".to_string()]);
        assert!(!result.is_compatible);
        assert_eq!(result.issues.len(), 1);
    }

    #[test]
    fn test_serialize_camel_case() {
        let result = CompatibilityResult::compatible("ok");
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"isCompatible\":true"));
        assert!(json.contains("\"issues\":[]"));
    }
}
