//! Alloy identifier grammar tables.
//!
//! Fixed configuration consumed by the name normalizer: the characters that
//! can never appear in an identifier, the words an identifier may not be, and
//! the built-in signatures the generated module refers to without declaring.

/// Characters stripped from raw element names.
pub const FORBIDDEN_CHARACTERS: &[char] = &[
    ' ', '\t', '\n', '\r', '!', '@', '#', '$', '%', '&', '*', '(', ')', '-', '+', '=', '{', '}',
    '[', ']', '|', '\\', ';', ':', ',', '.', '<', '>', '/', '?', '`', '~', '\'', '"', '^',
];

/// Words a normalized identifier may not be.
///
/// Alloy 6 keywords plus every name the generated module declares itself or
/// imports from the world-structure and ontological-properties libraries.
pub const RESERVED_KEYWORDS: &[&str] = &[
    // Alloy keywords
    "abstract",
    "after",
    "all",
    "always",
    "and",
    "as",
    "assert",
    "before",
    "but",
    "check",
    "disj",
    "else",
    "enum",
    "eventually",
    "exactly",
    "expect",
    "extends",
    "fact",
    "for",
    "fun",
    "historically",
    "iden",
    "iff",
    "implies",
    "in",
    "Int",
    "int",
    "let",
    "lone",
    "module",
    "no",
    "none",
    "not",
    "once",
    "one",
    "open",
    "or",
    "pred",
    "private",
    "releases",
    "run",
    "seq",
    "set",
    "sig",
    "since",
    "some",
    "steps",
    "sum",
    "this",
    "triggered",
    "univ",
    "until",
    "var",
    // Names declared by the generated module
    "World",
    "exists",
    "Endurant",
    "Object",
    "Aspect",
    "Datatype",
    "visible",
    // Library predicates and functions referenced by emitted facts
    "rigidity",
    "antirigidity",
    "continuous_existence",
    "elements_existence",
    "immutable_source",
    "immutable_target",
    "select13",
    "isSeq",
    "elems",
];

/// Alloy built-in signatures: referenced as property types, never redeclared.
pub const BUILTIN_SIGNATURES: &[&str] = &["String"];

/// Indentation used inside every emitted block.
pub const INDENT: &str = "        ";

/// Returns `true` if `c` may not appear in an identifier: any Unicode
/// whitespace or one of [`FORBIDDEN_CHARACTERS`].
#[must_use]
pub fn is_forbidden(c: char) -> bool {
    c.is_whitespace() || FORBIDDEN_CHARACTERS.contains(&c)
}

/// Returns `true` if `word` is reserved (case-sensitive).
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED_KEYWORDS.contains(&word)
}

/// Returns `true` if `name` is one of Alloy's built-in signatures.
#[must_use]
pub fn is_builtin_signature(name: &str) -> bool {
    BUILTIN_SIGNATURES.contains(&name)
}

/// Returns `true` if `ident` is a legal identifier as produced by normalization.
#[must_use]
pub fn is_legal_identifier(ident: &str) -> bool {
    match ident.chars().next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => !ident.chars().any(is_forbidden) && !is_reserved(ident),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_case_sensitive() {
        assert!(is_reserved("abstract"));
        assert!(!is_reserved("Abstract"));
        assert!(is_reserved("Int"));
        assert!(!is_reserved("String"));
    }

    #[test]
    fn legal_identifiers() {
        assert!(is_legal_identifier("Person"));
        assert!(is_legal_identifier("class_123Person"));
        assert!(!is_legal_identifier("123Person"));
        assert!(!is_legal_identifier("Happy Person"));
        assert!(!is_legal_identifier("Happy\u{a0}Person"));
        assert!(!is_legal_identifier("sig"));
        assert!(!is_legal_identifier(""));
    }

    #[test]
    fn builtin_signatures() {
        assert!(is_builtin_signature("String"));
        assert!(!is_builtin_signature("Date"));
    }
}
