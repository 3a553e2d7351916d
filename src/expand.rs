//! `${VAR}` substitution for templated config files.
//!
//! Placeholders use the `${NAME}` form, where `NAME` is ASCII alphanumerics
//! and underscores. Unset variables are left verbatim, so a partially
//! templated file survives a load/save round trip. There is no escape
//! syntax; a literal `${` followed by a non-placeholder is passed through
//! unchanged.

/// Expand `${VAR}` placeholders using the given lookup.
///
/// Takes a closure instead of reading `std::env` directly so tests can pass
/// synthetic variables.
pub fn expand_vars(text: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) if is_var_name(&after[..end]) => {
                let name = &after[..end];
                match lookup(name) {
                    Some(value) => out.push_str(&value),
                    None => {
                        out.push_str("${");
                        out.push_str(name);
                        out.push('}');
                    }
                }
                rest = &after[end + 1..];
            }
            _ => {
                out.push_str("${");
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Expand placeholders from the process environment.
pub fn expand_env(text: &str) -> String {
    expand_vars(text, |name| std::env::var(name).ok())
}

fn is_var_name(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn expand(text: &str, pairs: &[(&str, &str)]) -> String {
        let map = vars(pairs);
        expand_vars(text, |name| map.get(name).cloned())
    }

    #[test]
    fn replaces_single_placeholder() {
        assert_eq!(
            expand("host: ${DB_HOST}", &[("DB_HOST", "localhost")]),
            "host: localhost"
        );
    }

    #[test]
    fn replaces_multiple_placeholders() {
        assert_eq!(
            expand("${A}-${B}", &[("A", "1"), ("B", "2")]),
            "1-2"
        );
    }

    #[test]
    fn unset_variable_left_verbatim() {
        assert_eq!(expand("key: ${MISSING}", &[]), "key: ${MISSING}");
    }

    #[test]
    fn text_without_placeholders_unchanged() {
        assert_eq!(expand("plain: text\n", &[("A", "1")]), "plain: text\n");
    }

    #[test]
    fn unclosed_brace_passed_through() {
        assert_eq!(expand("${NOPE and on", &[]), "${NOPE and on");
    }

    #[test]
    fn non_name_contents_passed_through() {
        assert_eq!(expand("${1 + 5}", &[]), "${1 + 5}");
        assert_eq!(expand("${}", &[]), "${}");
    }

    #[test]
    fn empty_value_substitutes_empty() {
        assert_eq!(expand("x${A}y", &[("A", "")]), "xy");
    }

    #[test]
    fn adjacent_placeholders() {
        assert_eq!(expand("${A}${A}", &[("A", "z")]), "zz");
    }
}
