//! Transformation errors.
//!
//! Every variant is a model-shape defect: the run aborts and no partial
//! output is produced. Naming conflicts are never errors.

use ontouml_model::ElementId;

/// A defect in the input model that prevents transformation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransformError {
    /// A property has no type, or its type is neither a class nor a relation of the model.
    #[error("property {property} has no resolvable type")]
    UnresolvedType {
        /// The offending property.
        property: ElementId,
    },

    /// A relation lacks its source or target end.
    #[error("relation {relation} does not have both a source and a target end")]
    MissingRelationEnd {
        /// The offending relation.
        relation: ElementId,
    },

    /// A multiplicity expression could not be parsed.
    #[error("malformed cardinality `{cardinality}`")]
    InvalidCardinality {
        /// The raw expression.
        cardinality: String,
    },

    /// A generalization (or generalization set) refers to an element that is not in the model.
    #[error("{owner} refers to unknown element {element}")]
    DanglingReference {
        /// The generalization or generalization set holding the reference.
        owner: ElementId,
        /// The missing element.
        element: ElementId,
    },
}

/// Result alias used throughout the transformation.
pub type Result<T, E = TransformError> = std::result::Result<T, E>;
