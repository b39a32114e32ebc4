//! JSON output canonicalization (RFC 8785 / JCS).
//!
//! Every `--json` output goes through [`emit_jcs`] so that equal data yields
//! byte-identical output, independent of struct field order or map hashing.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serialize a value to canonical JSON (JCS, RFC 8785).
///
/// # Example
///
/// ```rust
/// use serde::Serialize;
/// use vidflow_utils::canonicalization::emit_jcs;
///
/// #[derive(Serialize)]
/// struct Counts {
///     total: u32,
///     ideas: u32,
/// }
///
/// let json = emit_jcs(&Counts { total: 3, ideas: 1 }).unwrap();
/// assert_eq!(json, r#"{"ideas":1,"total":3}"#);
/// ```
pub fn emit_jcs<T: Serialize>(value: &T) -> Result<String> {
    let json_value =
        serde_json::to_value(value).with_context(|| "Failed to serialize value to JSON")?;
    let json_bytes = serde_json_canonicalizer::to_vec(&json_value)
        .with_context(|| "Failed to canonicalize JSON using JCS")?;
    String::from_utf8(json_bytes).with_context(|| "JCS output contained invalid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_keys_sorted_no_whitespace() {
        let mut map = HashMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        assert_eq!(emit_jcs(&map).unwrap(), r#"{"alpha":2,"zeta":1}"#);
    }

    #[test]
    fn test_nested_structures() {
        #[derive(Serialize)]
        struct Outer {
            name: &'static str,
            items: Vec<Inner>,
        }
        #[derive(Serialize)]
        struct Inner {
            total: u32,
            completed: u32,
        }
        let value = Outer {
            name: "x",
            items: vec![Inner {
                total: 8,
                completed: 3,
            }],
        };
        assert_eq!(
            emit_jcs(&value).unwrap(),
            r#"{"items":[{"completed":3,"total":8}],"name":"x"}"#
        );
    }
}
