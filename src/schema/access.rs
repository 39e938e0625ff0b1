//! Read access rules.

use serde::Serialize;
use serde_json::Value;

/// Who may read a document of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "read", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ReadAccess {
    /// Everyone.
    Public,
    /// Authenticated users always; anonymous readers only when the document's
    /// `field` equals `value`.
    WhenEquals {
        field: &'static str,
        value: &'static str,
    },
    /// Authenticated users only.
    Authenticated,
}

impl ReadAccess {
    pub fn allows(&self, doc: &Value, authenticated: bool) -> bool {
        match self {
            Self::Public => true,
            Self::WhenEquals { field, value } => {
                authenticated || doc.get(*field).and_then(Value::as_str) == Some(*value)
            }
            Self::Authenticated => authenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PUBLISHED_ONLY: ReadAccess = ReadAccess::WhenEquals {
        field: "status",
        value: "published",
    };

    #[test]
    fn test_public() {
        assert!(ReadAccess::Public.allows(&json!({}), false));
    }

    #[test]
    fn test_published_only() {
        let draft = json!({ "status": "draft" });
        let published = json!({ "status": "published" });

        assert!(!PUBLISHED_ONLY.allows(&draft, false));
        assert!(PUBLISHED_ONLY.allows(&draft, true));
        assert!(PUBLISHED_ONLY.allows(&published, false));
        assert!(!PUBLISHED_ONLY.allows(&json!({}), false));
    }

    #[test]
    fn test_authenticated() {
        assert!(!ReadAccess::Authenticated.allows(&json!({}), false));
        assert!(ReadAccess::Authenticated.allows(&json!({}), true));
    }
}
