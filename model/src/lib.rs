//! OntoUML conceptual models encoded as typed Rust data.
//!
//! The `ontouml-model` crate provides the element vocabulary of OntoUML
//! (classes, relations, properties, generalizations and their stereotypes),
//! the classification predicates model transformations query, a builder API
//! and a JSON serializer for the persisted form.
//!
//! # Building a model
//!
//! ```
//! use ontouml_model::Model;
//!
//! let mut model = Model::new("example");
//! let person = model.create_kind("Person");
//! let string = model.create_datatype("String");
//! model.create_attribute(&person, "name", &string);
//!
//! assert_eq!(model.attributes().count(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! # let model = ontouml_model::Model::new("example");
//! let json = ontouml_model::serializer::json::to_json(&model).unwrap_or_default();
//! let back = ontouml_model::serializer::json::from_json(&json);
//! assert!(back.is_ok());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

mod builder;
pub mod model;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use model::{
    Class, ClassStereotype, Element, ElementId, ElementKind, ElementRef, Generalization,
    GeneralizationSet, Literal, Model, Nature, Property, Relation, RelationStereotype,
};
