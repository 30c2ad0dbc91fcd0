//! Tag directive parsing
//!
//! A field directive is `name[,options...]`. An empty name keeps the field's
//! declared identifier; a name of `-` excludes the field from the schema; a
//! `key` option marks the field as an ascending sort-key column. Unknown
//! options are ignored for forward compatibility.

/// The full-directive sentinel that excludes a field
const SKIP_SENTINEL: &str = "-";

/// The option token that marks a sort-key column
const KEY_SENTINEL: &str = "key";

/// Parsed form of a field's tag directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Directive<'a> {
    /// Column name to emit
    pub name: &'a str,
    /// Whether the field is excluded from the schema
    pub skip: bool,
    /// Whether the column joins the ascending sort-key prefix
    pub is_key: bool,
}

impl<'a> Directive<'a> {
    /// Parse a raw directive; `default_name` is the field's declared
    /// identifier, used when the directive does not rename it. An absent
    /// directive behaves like an empty one.
    pub fn parse(tag: Option<&'a str>, default_name: &'a str) -> Self {
        let Some(tag) = tag else {
            return Self {
                name: default_name,
                skip: false,
                is_key: false,
            };
        };

        let mut tokens = tag.split(',');
        let first = tokens.next().unwrap_or("");

        if first == SKIP_SENTINEL {
            return Self {
                name: default_name,
                skip: true,
                is_key: false,
            };
        }

        Self {
            name: if first.is_empty() { default_name } else { first },
            skip: false,
            is_key: tokens.any(|token| token == KEY_SENTINEL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(None, "Field", "Field", false; "absent directive")]
    #[test_case(Some(""), "Field", "Field", false; "empty directive")]
    #[test_case(Some("renamed"), "Field", "renamed", false; "rename")]
    #[test_case(Some("renamed,key"), "Field", "renamed", true; "rename and key")]
    #[test_case(Some(",key"), "Field", "Field", true; "key with default name")]
    #[test_case(Some("a,key,whatever"), "Field", "a", true; "unknown trailing token")]
    #[test_case(Some("a,omitempty"), "Field", "a", false; "unknown option only")]
    fn test_parse(tag: Option<&str>, default_name: &str, name: &str, is_key: bool) {
        let directive = Directive::parse(tag, default_name);
        assert_eq!(directive.name, name);
        assert_eq!(directive.is_key, is_key);
        assert!(!directive.skip);
    }

    #[test]
    fn test_parse_skip() {
        let directive = Directive::parse(Some("-"), "Field");
        assert!(directive.skip);
        assert!(!directive.is_key);
    }
}
