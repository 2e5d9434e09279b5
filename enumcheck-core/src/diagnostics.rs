//! Diagnostic descriptors and findings.
//!
//! Descriptors are compile-time constants: stable id, fixed message
//! template, error severity, always enabled. Exactly two exist, and a
//! single sentinel signal produces at most one finding.

use serde::Serialize;

use crate::syntax::Span;

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Immutable description of a reportable rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Descriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub enabled_by_default: bool,
}

/// ENUM001: an enum-typed sentinel was reached with unreferenced members.
pub const NOT_EXHAUSTED: Descriptor = Descriptor {
    id: "ENUM001",
    title: "Unreferenced enum values",
    category: "Usage",
    severity: Severity::Error,
    enabled_by_default: true,
};

/// ENUM002: the sentinel's type argument is not an enum.
pub const NON_ENUM_TYPE_ARG: Descriptor = Descriptor {
    id: "ENUM002",
    title: "enum type required",
    category: "Usage",
    severity: Severity::Error,
    enabled_by_default: true,
};

/// Outcome of checking one sentinel signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// Members left unreferenced in the enclosing block, in enum
    /// declaration order.
    MissingMembers { span: Span, members: Vec<String> },
    /// The sentinel was parameterized with a non-enum type.
    WrongKind { span: Span },
}

impl Finding {
    pub fn descriptor(&self) -> &'static Descriptor {
        match self {
            Self::MissingMembers { .. } => &NOT_EXHAUSTED,
            Self::WrongKind { .. } => &NON_ENUM_TYPE_ARG,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::MissingMembers { span, .. } | Self::WrongKind { span } => *span,
        }
    }

    /// Renders the fixed message template for this finding.
    pub fn message(&self) -> String {
        match self {
            Self::MissingMembers { members, .. } => format!(
                "enum value(s) not referenced in enclosing block: {}",
                members.join(",")
            ),
            Self::WrongKind { .. } => {
                "EnumNotExhaustedException must be used with enum".to_string()
            }
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        let descriptor = self.descriptor();
        Diagnostic {
            id: descriptor.id,
            severity: descriptor.severity,
            message: self.message(),
            span: self.span(),
            file: None,
        }
    }
}

/// A reported diagnostic, ready for output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub id: &'static str,
    pub severity: Severity,
    pub message: String,
    pub span: Span,
    /// Document the diagnostic was found in; attached by the builder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_members_message_comma_joined() {
        let finding = Finding::MissingMembers {
            span: Span::new(26, 13),
            members: vec!["Blue".into()],
        };
        assert_eq!(
            finding.message(),
            "enum value(s) not referenced in enclosing block: Blue"
        );

        let finding = Finding::MissingMembers {
            span: Span::default(),
            members: vec!["Green".into(), "Blue".into()],
        };
        assert_eq!(
            finding.message(),
            "enum value(s) not referenced in enclosing block: Green,Blue"
        );
    }

    #[test]
    fn test_wrong_kind_message_fixed() {
        let finding = Finding::WrongKind {
            span: Span::default(),
        };
        assert_eq!(
            finding.message(),
            "EnumNotExhaustedException must be used with enum"
        );
    }

    #[test]
    fn test_descriptors() {
        let missing = Finding::MissingMembers {
            span: Span::default(),
            members: vec![],
        };
        let wrong = Finding::WrongKind {
            span: Span::default(),
        };
        assert_eq!(missing.descriptor().id, "ENUM001");
        assert_eq!(wrong.descriptor().id, "ENUM002");
        assert_eq!(missing.descriptor().severity, Severity::Error);
        assert!(wrong.descriptor().enabled_by_default);
    }

    #[test]
    fn test_into_diagnostic_carries_location() {
        let diag = Finding::WrongKind {
            span: Span::new(15, 13),
        }
        .into_diagnostic();
        assert_eq!(diag.id, "ENUM002");
        assert_eq!(diag.span, Span::new(15, 13));
        assert_eq!(diag.file, None);
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let diag = Finding::MissingMembers {
            span: Span::new(3, 5),
            members: vec!["Blue".into()],
        }
        .into_diagnostic();
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["id"], "ENUM001");
        assert_eq!(json["severity"], "error");
        assert_eq!(json["span"]["line"], 3);
        // No file attached: field must be omitted, not null.
        assert!(json.get("file").is_none());
    }
}
