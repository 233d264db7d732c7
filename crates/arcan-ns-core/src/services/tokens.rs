//! Namespace token substitution.
//!
//! Argument strings may reference namespaces as `[NAME]`, where `NAME` is a
//! canonical variable name such as `ARCAN_RESOURCEPATH`:
//!
//! ```text
//! somearg[ARCAN_RESOURCEPATH]tail  ->  somearg/usr/share/arcan/resourcestail
//! ```
//!
//! # Grammar
//!
//! - The leftmost `[` is always resolved first, against the first `]` after it
//! - Resolution repeats on the rewritten string until no `[` is left
//! - An unterminated `[NAME` consumes the rest of the string: the expansion
//!   replaces it and resolution stops
//! - An unknown name or an unbound kind stops resolution and leaves the
//!   string exactly as it stood at that point

use thiserror::Error;

use crate::domain::NamespaceKind;
use crate::ports::NamespaceRegistry;

/// Upper bound on substitutions performed on one string.
///
/// Only reachable when a binding contains a token that expands back into
/// itself.
pub const MAX_SUBSTITUTIONS: usize = 256;

/// Why a string could not be fully resolved.
///
/// Every variant carries `text`: the string as it stood when resolution
/// stopped. That is the value callers fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The bracketed name is not a namespace variable name.
    #[error("expand failed, no match for supplied string: {name}")]
    UnknownNamespace { name: String, text: String },

    /// The name is valid but the namespace has no binding.
    #[error("expand failed, no match for supplied string: {kind}")]
    Unresolved { kind: NamespaceKind, text: String },

    /// Substitution did not reach a fixed point.
    #[error("expand failed, too many substitutions in: {text}")]
    TooDeep { text: String },
}

impl TokenError {
    /// The partially resolved string.
    pub fn text(&self) -> &str {
        match self {
            Self::UnknownNamespace { text, .. }
            | Self::Unresolved { text, .. }
            | Self::TooDeep { text } => text,
        }
    }

    /// Consume the error, keeping the partially resolved string.
    pub fn into_text(self) -> String {
        match self {
            Self::UnknownNamespace { text, .. }
            | Self::Unresolved { text, .. }
            | Self::TooDeep { text } => text,
        }
    }
}

/// A located `[NAME]` or `[NAME` token.
struct Token<'a> {
    /// Byte offset of the opening bracket.
    start: usize,
    name: &'a str,
    /// Text after the closing bracket; `None` when unterminated.
    tail: Option<&'a str>,
}

fn next_token(s: &str) -> Option<Token<'_>> {
    let start = s.find('[')?;
    let rest = &s[start + 1..];
    let token = match rest.find(']') {
        Some(end) => Token {
            start,
            name: &rest[..end],
            tail: Some(&rest[end + 1..]),
        },
        None => Token {
            start,
            name: rest,
            tail: None,
        },
    };
    Some(token)
}

/// Resolve every token in `input`, reporting where resolution stopped.
pub fn try_substitute<R>(registry: &R, input: &str) -> Result<String, TokenError>
where
    R: NamespaceRegistry + ?Sized,
{
    let mut current = input.to_owned();

    for _ in 0..MAX_SUBSTITUTIONS {
        let Some(token) = next_token(&current) else {
            return Ok(current);
        };

        let Some(kind) = NamespaceKind::from_var_name(token.name) else {
            return Err(TokenError::UnknownNamespace {
                name: token.name.to_owned(),
                text: current,
            });
        };

        let Some(expansion) = registry.expand("", kind.mask()) else {
            return Err(TokenError::Unresolved {
                kind,
                text: current,
            });
        };

        let head = &current[..token.start];
        match token.tail {
            Some(tail) => current = format!("{head}{expansion}{tail}"),
            None => return Ok(format!("{head}{expansion}")),
        }
    }

    Err(TokenError::TooDeep { text: current })
}

/// Resolve every token in `input`.
///
/// Failures are logged as a warning and the string is returned as it stood
/// when resolution stopped.
pub fn substitute_one<R>(registry: &R, input: &str) -> String
where
    R: NamespaceRegistry + ?Sized,
{
    try_substitute(registry, input).unwrap_or_else(|e| {
        tracing::warn!("{e}");
        e.into_text()
    })
}

/// Rewrite every argument in place.
pub fn expand_tokens<R>(registry: &R, argv: &mut [String])
where
    R: NamespaceRegistry + ?Sized,
{
    for arg in argv.iter_mut() {
        if arg.contains('[') {
            *arg = substitute_one(registry, arg);
        }
    }
}

/// Owned variant of [`expand_tokens`].
pub fn expand_tokens_owned<R>(registry: &R, mut argv: Vec<String>) -> Vec<String>
where
    R: NamespaceRegistry + ?Sized,
{
    expand_tokens(registry, &mut argv);
    argv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NamespaceMask;
    use crate::registry::NamespaceTable;

    fn registry() -> NamespaceTable {
        let mut table = NamespaceTable::new();
        table.hard_override(Some("/res"), NamespaceMask::RESOURCE_PATH);
        table.hard_override(Some("/fonts"), NamespaceMask::FONT_PATH);
        table.hard_override(Some("/logs"), NamespaceMask::LOG_PATH);
        table
    }

    #[test]
    fn string_without_brackets_is_identity() {
        let reg = registry();
        for s in ["", "plain", "]only-close]", "a/b/c", "ARCAN_RESOURCEPATH"] {
            assert_eq!(substitute_one(&reg, s), s);
        }
    }

    #[test]
    fn every_bound_kind_substitutes() {
        let mut reg = NamespaceTable::new();
        for kind in NamespaceKind::ALL {
            reg.hard_override(Some(format!("/e{}", kind.index()).as_str()), kind.mask());
        }
        for kind in NamespaceKind::ALL.into_iter().filter(|k| !k.is_deprecated()) {
            let input = format!("pre[{}]post", kind.var_name());
            let expected = format!("pre/e{}post", kind.index());
            assert_eq!(substitute_one(&reg, &input), expected);
        }
    }

    #[test]
    fn terminated_token_is_replaced() {
        let reg = registry();
        assert_eq!(
            substitute_one(&reg, "somearg[ARCAN_RESOURCEPATH]tail"),
            "somearg/restail"
        );
    }

    #[test]
    fn unterminated_token_discards_tail() {
        let reg = registry();
        assert_eq!(substitute_one(&reg, "pre[ARCAN_FONTPATH"), "pre/fonts");
    }

    #[test]
    fn unterminated_token_stops_resolution() {
        let reg = registry();
        assert_eq!(
            try_substitute(&reg, "a[ARCAN_LOGPATH]b[ARCAN_FONTPATH"),
            Ok("a/logsb/fonts".to_string())
        );
    }

    #[test]
    fn multiple_tokens_resolve_left_to_right() {
        let reg = registry();
        assert_eq!(
            substitute_one(&reg, "a[ARCAN_RESOURCEPATH]b[ARCAN_FONTPATH]c"),
            "a/resb/fontsc"
        );
    }

    #[test]
    fn unknown_name_returns_original() {
        let reg = registry();
        let err = try_substitute(&reg, "x[UNKNOWN]y").unwrap_err();
        assert_eq!(
            err,
            TokenError::UnknownNamespace {
                name: "UNKNOWN".to_string(),
                text: "x[UNKNOWN]y".to_string()
            }
        );
        assert_eq!(substitute_one(&reg, "x[UNKNOWN]y"), "x[UNKNOWN]y");
    }

    #[test]
    fn unbound_kind_returns_original() {
        let reg = registry();
        let err = try_substitute(&reg, "x[ARCAN_BINPATH]y").unwrap_err();
        assert!(matches!(
            err,
            TokenError::Unresolved {
                kind: NamespaceKind::BinPath,
                ..
            }
        ));
        assert_eq!(err.text(), "x[ARCAN_BINPATH]y");
    }

    #[test]
    fn unterminated_unknown_returns_original() {
        let reg = registry();
        assert_eq!(substitute_one(&reg, "pre[NOPE"), "pre[NOPE");
    }

    #[test]
    fn failure_after_success_keeps_earlier_substitution() {
        let reg = registry();
        assert_eq!(
            substitute_one(&reg, "a[ARCAN_RESOURCEPATH]b[BAD]c[ARCAN_FONTPATH]"),
            "a/resb[BAD]c[ARCAN_FONTPATH]"
        );
    }

    #[test]
    fn shortest_closing_bracket_is_used() {
        let reg = registry();
        // The name is "ARCAN_LOGPATH" and "]]" leaves a stray "]" in the tail.
        assert_eq!(substitute_one(&reg, "[ARCAN_LOGPATH]]x"), "/logs]x");
    }

    #[test]
    fn empty_brackets_are_unknown() {
        let reg = registry();
        let err = try_substitute(&reg, "a[]b").unwrap_err();
        assert!(matches!(err, TokenError::UnknownNamespace { ref name, .. } if name.is_empty()));
    }

    #[test]
    fn expansions_are_rescanned() {
        let mut reg = registry();
        reg.hard_override(Some("[ARCAN_RESOURCEPATH]/appl"), NamespaceMask::APPL_PATH);
        assert_eq!(substitute_one(&reg, "[ARCAN_APPLPATH]"), "/res/appl");
    }

    #[test]
    fn self_referential_binding_terminates() {
        let mut reg = NamespaceTable::new();
        reg.hard_override(Some("x[ARCAN_APPLPATH]"), NamespaceMask::APPL_PATH);
        let err = try_substitute(&reg, "[ARCAN_APPLPATH]").unwrap_err();
        assert!(matches!(err, TokenError::TooDeep { .. }));
    }

    #[test]
    fn empty_binding_removes_token() {
        let mut reg = NamespaceTable::new();
        reg.hard_override(Some(""), NamespaceMask::APPL_TEMP_PATH);
        assert_eq!(substitute_one(&reg, "a[ARCAN_APPLTEMPPATH]b"), "ab");
    }

    #[test]
    fn expand_tokens_rewrites_each_argument() {
        let reg = registry();
        let mut argv = vec![
            "-p".to_string(),
            "[ARCAN_RESOURCEPATH]".to_string(),
            "font=[ARCAN_FONTPATH]/default.ttf".to_string(),
            "[MISSING]".to_string(),
        ];
        expand_tokens(&reg, &mut argv);
        assert_eq!(
            argv,
            vec!["-p", "/res", "font=/fonts/default.ttf", "[MISSING]"]
        );
    }

    #[test]
    fn expand_tokens_owned_handles_empty_argv() {
        let reg = registry();
        assert!(expand_tokens_owned(&reg, Vec::new()).is_empty());
    }
}
