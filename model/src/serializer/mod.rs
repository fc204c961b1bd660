//! Serializers for OntoUML models.
//!
//! The persisted form is a JSON document ([`json`]) with camelCase keys:
//! `name`, `classes`, `relations`, `generalizations`, `generalizationSets`.

pub mod json;
