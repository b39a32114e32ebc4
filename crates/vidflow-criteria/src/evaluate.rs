//! Field evaluator.

use vidflow_model::is_placeholder;

use crate::table::CompletionCriteria;

/// Marker left in generated scripts until a human fills the section in.
pub const FIXME_MARKER: &str = "FIXME:";

/// Current value of a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    StringList(Vec<String>),
}

impl FieldValue {
    /// A list counts by length alone; its contents are not inspected.
    fn is_filled(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty() && s != "-",
            Self::Bool(b) => *b,
            Self::StringList(items) => !items.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::StringList(value)
    }
}

/// Decide whether a field satisfies its completion rule.
///
/// `sponsorship_amount` is the sibling value consulted by the two conditional
/// kinds; `None` is treated the same as an absent sponsorship. A value whose
/// shape does not fit the rule (text under `TrueOnly`, for instance) is never
/// complete.
#[must_use]
pub fn is_complete(
    kind: CompletionCriteria,
    value: &FieldValue,
    sponsorship_amount: Option<&str>,
) -> bool {
    let sponsored = sponsorship_amount.is_some_and(|amount| !is_placeholder(amount));

    match kind {
        CompletionCriteria::FilledOnly | CompletionCriteria::FilledRequired => value.is_filled(),
        CompletionCriteria::EmptyOrFilled => true,
        CompletionCriteria::TrueOnly => matches!(value, FieldValue::Bool(true)),
        CompletionCriteria::FalseOnly => matches!(value, FieldValue::Bool(false)),
        CompletionCriteria::ConditionalSponsorship => {
            !sponsored
                || match value {
                    FieldValue::String(s) => !s.is_empty(),
                    other => other.is_filled(),
                }
        }
        CompletionCriteria::ConditionalSponsors => {
            !sponsored || matches!(value, FieldValue::Bool(true))
        }
        CompletionCriteria::NoFixme => match value {
            FieldValue::String(s) => !s.is_empty() && !s.contains(FIXME_MARKER),
            other => other.is_filled(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CompletionCriteria::*;

    fn s(value: &str) -> FieldValue {
        FieldValue::from(value)
    }

    #[test]
    fn test_filled_only() {
        assert!(is_complete(FilledOnly, &s("something"), None));
        assert!(!is_complete(FilledOnly, &s(""), None));
        assert!(!is_complete(FilledOnly, &s("-"), None));
        // N/A is an explicit answer, not an empty field
        assert!(is_complete(FilledRequired, &s("N/A"), None));
        assert!(!is_complete(FilledRequired, &s("-"), None));
    }

    #[test]
    fn test_lists_count_by_length() {
        assert!(!is_complete(FilledOnly, &FieldValue::StringList(vec![]), None));
        assert!(is_complete(
            FilledOnly,
            &FieldValue::StringList(vec![String::new()]),
            None
        ));
    }

    #[test]
    fn test_empty_or_filled_never_blocks() {
        assert!(is_complete(EmptyOrFilled, &s(""), None));
        assert!(is_complete(EmptyOrFilled, &FieldValue::Bool(false), None));
        assert!(is_complete(
            EmptyOrFilled,
            &FieldValue::StringList(vec![]),
            None
        ));
    }

    #[test]
    fn test_boolean_kinds() {
        assert!(is_complete(TrueOnly, &FieldValue::Bool(true), None));
        assert!(!is_complete(TrueOnly, &FieldValue::Bool(false), None));
        assert!(is_complete(FalseOnly, &FieldValue::Bool(false), None));
        assert!(!is_complete(FalseOnly, &FieldValue::Bool(true), None));
    }

    #[test]
    fn test_mismatched_shapes_fail_closed() {
        assert!(!is_complete(TrueOnly, &s("true"), None));
        assert!(!is_complete(FalseOnly, &s(""), None));
        assert!(!is_complete(
            TrueOnly,
            &FieldValue::StringList(vec!["x".to_string()]),
            None
        ));
    }

    #[test]
    fn test_bool_under_text_kind_uses_flag() {
        assert!(is_complete(FilledOnly, &FieldValue::Bool(true), None));
        assert!(!is_complete(FilledOnly, &FieldValue::Bool(false), None));
    }

    #[test]
    fn test_conditional_sponsorship() {
        // no sponsorship: nothing to notify
        assert!(is_complete(ConditionalSponsorship, &s(""), Some("")));
        assert!(is_complete(ConditionalSponsorship, &s(""), Some("-")));
        assert!(is_complete(ConditionalSponsorship, &s(""), Some("N/A")));
        assert!(is_complete(ConditionalSponsorship, &s(""), None));
        // active sponsorship needs the emails
        assert!(!is_complete(ConditionalSponsorship, &s(""), Some("$100")));
        assert!(is_complete(
            ConditionalSponsorship,
            &s("a@b.com"),
            Some("$100")
        ));
    }

    #[test]
    fn test_conditional_sponsors() {
        assert!(is_complete(
            ConditionalSponsors,
            &FieldValue::Bool(false),
            Some("")
        ));
        assert!(!is_complete(
            ConditionalSponsors,
            &FieldValue::Bool(false),
            Some("$100")
        ));
        assert!(is_complete(
            ConditionalSponsors,
            &FieldValue::Bool(true),
            Some("$100")
        ));
    }

    #[test]
    fn test_no_fixme() {
        assert!(is_complete(NoFixme, &s("00:00 Intro\n02:10 Setup"), None));
        assert!(!is_complete(NoFixme, &s("00:00 FIXME:"), None));
        assert!(!is_complete(NoFixme, &s(""), None));
        // marker is case-sensitive and needs the colon
        assert!(is_complete(NoFixme, &s("fixme later"), None));
    }
}
