//! Output accumulator.
//!
//! [`AlloyFragments`] collects every text fragment a transformation run emits,
//! grouped by the place it takes in the final module. Collections keep
//! insertion order and allow duplicates (several `fact multiplicity` blocks
//! are legal Alloy), so the output is stable for a given model.

/// A datatype signature and the inline fields gathered under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatatypeSig {
    /// Normalized name of the datatype class; also the signature name.
    pub name: String,
    /// Inline field declarations, e.g. `day: one Int`.
    pub fields: Vec<String>,
    /// `false` for Alloy built-ins that are referenced but never declared.
    pub declared: bool,
}

/// Fragments emitted by one transformation run.
#[derive(Debug, Default)]
pub struct AlloyFragments {
    world_fields: Vec<String>,
    world_facts: Vec<String>,
    facts: Vec<String>,
    relation_properties: Vec<String>,
    funs: Vec<String>,
    visible: Vec<String>,
    enums: Vec<String>,
    datatypes: Vec<DatatypeSig>,
}

impl AlloyFragments {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_world_field(&mut self, declaration: String) {
        self.world_fields.push(declaration);
    }

    pub(crate) fn add_world_fact(&mut self, constraint: String) {
        self.world_facts.push(constraint);
    }

    pub(crate) fn add_fact(&mut self, fact: String) {
        self.facts.push(fact);
    }

    pub(crate) fn add_relation_property(&mut self, constraint: String) {
        self.relation_properties.push(constraint);
    }

    pub(crate) fn add_fun(&mut self, fun: String) {
        self.funs.push(fun);
    }

    pub(crate) fn add_visible(&mut self, selector: String) {
        self.visible.push(selector);
    }

    pub(crate) fn add_enum(&mut self, declaration: String) {
        self.enums.push(declaration);
    }

    /// Registers a datatype signature. Registering the same name twice keeps
    /// the first entry.
    pub(crate) fn add_datatype(&mut self, name: &str, declared: bool) {
        if self.datatype(name).is_none() {
            self.datatypes.push(DatatypeSig {
                name: name.to_string(),
                fields: Vec::new(),
                declared,
            });
        }
    }

    /// The field list of datatype `name`, registering a declared datatype if
    /// none exists yet.
    pub(crate) fn datatype_fields(&mut self, name: &str) -> &mut Vec<String> {
        let index = match self.datatypes.iter().position(|d| d.name == name) {
            Some(index) => index,
            None => {
                self.add_datatype(name, true);
                self.datatypes.len() - 1
            }
        };
        &mut self.datatypes[index].fields
    }

    /// World-indexed field declarations, in emission order.
    #[must_use]
    pub fn world_fields(&self) -> &[String] {
        &self.world_fields
    }

    /// Constraints of the world signature's appended fact block.
    #[must_use]
    pub fn world_facts(&self) -> &[String] {
        &self.world_facts
    }

    /// Complete `fact` blocks.
    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// Lines of the `fact relationProperties` block.
    #[must_use]
    pub fn relation_properties(&self) -> &[String] {
        &self.relation_properties
    }

    /// Complete `fun` blocks.
    #[must_use]
    pub fn funs(&self) -> &[String] {
        &self.funs
    }

    /// Selectors summed into `fun visible`.
    #[must_use]
    pub fn visible(&self) -> &[String] {
        &self.visible
    }

    /// Complete `enum` declarations.
    #[must_use]
    pub fn enums(&self) -> &[String] {
        &self.enums
    }

    /// Datatype signatures, in registration order.
    #[must_use]
    pub fn datatypes(&self) -> &[DatatypeSig] {
        &self.datatypes
    }

    /// Looks up a datatype signature by name.
    #[must_use]
    pub fn datatype(&self, name: &str) -> Option<&DatatypeSig> {
        self.datatypes.iter().find(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_fields_register_on_demand() {
        let mut fragments = AlloyFragments::new();
        fragments.add_datatype("String", false);
        fragments.datatype_fields("Date").push("day: one Int".to_string());
        fragments.datatype_fields("Date").push("month: one Int".to_string());

        assert_eq!(fragments.datatypes().len(), 2);
        let date = fragments.datatype("Date");
        assert_eq!(date.map(|d| d.fields.len()), Some(2));
        assert_eq!(date.map(|d| d.declared), Some(true));
        assert_eq!(fragments.datatype("String").map(|d| d.declared), Some(false));
    }

    #[test]
    fn duplicates_are_kept_in_order() {
        let mut fragments = AlloyFragments::new();
        fragments.add_fact("fact a {}".to_string());
        fragments.add_fact("fact a {}".to_string());
        fragments.add_fact("fact b {}".to_string());
        assert_eq!(fragments.facts(), ["fact a {}", "fact a {}", "fact b {}"]);
    }
}
