//! Name normalization and alias resolution.
//!
//! A [`Namer`] owns the per-run registries: the normalization record (element
//! id → normalized name), the alias record (element id → accessor alias) and
//! the set of every identifier handed out so far. Both operations are cached
//! per element, so repeated lookups agree across emission sites.

use std::collections::{HashMap, HashSet};

use ontouml_model::{Element, ElementId, ElementKind};

use crate::grammar::{is_builtin_signature, is_forbidden, is_reserved};

/// Per-run identifier registries.
#[derive(Debug, Default)]
pub struct Namer {
    normalized: HashMap<ElementId, String>,
    aliases: HashMap<ElementId, String>,
    used: HashSet<String>,
    // base → smallest suffix that may still be free
    next_suffix: HashMap<String, u32>,
}

impl Namer {
    /// Creates empty registries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the normalized identifier of `element`, computing and reserving
    /// it on first use.
    pub fn normalize<E: Element + ?Sized>(&mut self, element: &E) -> String {
        let base = base_name(element.name(), element.kind());
        self.normalize_from(element, base)
    }

    /// Like [`Namer::normalize`], for an element the module declares itself:
    /// a name equal to a built-in signature gets the kind tag, as a reserved
    /// word would.
    pub fn normalize_declared<E: Element + ?Sized>(&mut self, element: &E) -> String {
        let mut base = base_name(element.name(), element.kind());
        if is_builtin_signature(&base) {
            base = format!("{base}_{}", element.kind().tag());
        }
        self.normalize_from(element, base)
    }

    fn normalize_from<E: Element + ?Sized>(&mut self, element: &E, base: String) -> String {
        if let Some(name) = self.normalized.get(element.id()) {
            return name.clone();
        }
        let name = self.reserve_unique(&base);
        tracing::trace!(element = %element.id(), %name, "normalized");
        self.normalized.insert(element.id().clone(), name.clone());
        name
    }

    /// Returns the accessor alias of `element`, minting one from `base` on
    /// first use. The alias never equals a normalized name or another alias.
    pub fn alias<E: Element + ?Sized>(&mut self, element: &E, base: &str) -> String {
        if let Some(alias) = self.aliases.get(element.id()) {
            return alias.clone();
        }
        let alias = self.reserve_unique(base);
        tracing::trace!(element = %element.id(), %alias, "aliased");
        self.aliases.insert(element.id().clone(), alias.clone());
        alias
    }

    /// The normalized identifier already assigned to `id`, if any.
    #[must_use]
    pub fn normalized_name(&self, id: &ElementId) -> Option<&str> {
        self.normalized.get(id).map(String::as_str)
    }

    /// The alias already assigned to `id`, if any.
    #[must_use]
    pub fn alias_of(&self, id: &ElementId) -> Option<&str> {
        self.aliases.get(id).map(String::as_str)
    }

    /// Returns `true` if `ident` has been handed out in this run.
    #[must_use]
    pub fn is_used(&self, ident: &str) -> bool {
        self.used.contains(ident)
    }

    /// Reserves `base` itself, or `base` followed by the smallest positive
    /// integer that yields an unused identifier.
    fn reserve_unique(&mut self, base: &str) -> String {
        let candidate = if self.used.contains(base) {
            let mut n = self.next_suffix.get(base).copied().unwrap_or(1);
            while self.used.contains(&format!("{base}{n}")) {
                n += 1;
            }
            self.next_suffix.insert(base.to_string(), n + 1);
            format!("{base}{n}")
        } else {
            base.to_string()
        };
        self.used.insert(candidate.clone());
        candidate
    }
}

/// Computes the collision-free part of normalization: empty-name
/// substitution, forbidden-character stripping, keyword and leading-digit
/// rules. Case is preserved.
#[must_use]
pub fn base_name(raw: Option<&str>, kind: ElementKind) -> String {
    let tag = kind.tag();
    let stripped: String = raw
        .unwrap_or_default()
        .chars()
        .filter(|c| !is_forbidden(*c))
        .collect();

    let mut name = if stripped.is_empty() {
        tag.to_string()
    } else {
        stripped
    };

    if is_reserved(&name) {
        name = format!("{name}_{tag}");
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name = format!("{tag}_{name}");
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontouml_model::{Class, Relation};

    fn class(id: &str, name: &str) -> Class {
        Class::new(id.into(), Some(name), None)
    }

    #[test]
    fn base_name_rules() {
        assert_eq!(base_name(Some("Person"), ElementKind::Class), "Person");
        assert_eq!(base_name(None, ElementKind::Relation), "relation");
        assert_eq!(base_name(Some("!!!"), ElementKind::Class), "class");
        assert_eq!(base_name(Some("sig"), ElementKind::Property), "sig_property");
        assert_eq!(base_name(Some("9 lives"), ElementKind::Class), "class_9lives");
    }

    #[test]
    fn normalization_is_cached_per_element() {
        let mut namer = Namer::new();
        let a = class("a", "Person");
        let b = class("b", "Person");
        assert_eq!(namer.normalize(&a), "Person");
        assert_eq!(namer.normalize(&b), "Person1");
        assert_eq!(namer.normalize(&a), "Person");
        assert_eq!(namer.normalized_name(&"b".into()), Some("Person1"));
    }

    #[test]
    fn suffix_skips_names_already_taken() {
        let mut namer = Namer::new();
        assert_eq!(namer.normalize(&class("a", "Person")), "Person");
        assert_eq!(namer.normalize(&class("b", "Person1")), "Person1");
        assert_eq!(namer.normalize(&class("c", "Person")), "Person2");
        assert_eq!(namer.normalize(&class("d", "Person")), "Person3");
    }

    #[test]
    fn aliases_avoid_normalized_names() {
        let mut namer = Namer::new();
        let person = class("a", "Person");
        let relation = Relation {
            id: "r".into(),
            name: None,
            stereotype: None,
            properties: Vec::new(),
        };
        assert_eq!(namer.normalize(&person), "Person");
        assert_eq!(namer.alias(&person, "Person"), "Person1");
        assert_eq!(namer.alias(&person, "anything"), "Person1");
        assert_eq!(namer.alias_of(&"a".into()), Some("Person1"));
        assert_eq!(namer.alias_of(&"r".into()), None);
        assert_eq!(namer.alias(&relation, "relation"), "relation");
        assert!(namer.is_used("relation"));
        assert_eq!(namer.normalize(&class("b", "relation")), "relation1");
    }

    #[test]
    fn declared_names_avoid_builtin_signatures() {
        let mut namer = Namer::new();
        let text = class("a", "String");
        assert_eq!(namer.normalize_declared(&text), "String_class");
        assert_eq!(namer.normalize(&text), "String_class");
        assert_eq!(namer.normalize(&class("b", "String")), "String");
        assert_eq!(namer.normalize_declared(&class("c", "Person")), "Person");
    }
}
