//! OntoUML → Alloy transformation.
//!
//! Reads an [`ontouml_model::Model`] and generates an Alloy module that
//! encodes the model's dynamics as possible worlds: every class and every
//! mutable property becomes a field of `World`, every accessor function takes
//! the world as an explicit parameter, and immutability is stated as a
//! constraint across worlds.
//!
//! # Entry Point
//!
//! ```
//! use ontouml_model::Model;
//!
//! let mut model = Model::new("example");
//! model.create_kind("Person");
//!
//! let alloy = ontouml2alloy::transform(&model).unwrap_or_default();
//! assert!(alloy.contains("Person: set exists:>Object"));
//! ```
//!
//! # Passes
//!
//! A [`Transformer`] session visits the model once, in this order:
//! classes, generalizations, generalization sets, relations, properties.
//! Each pass appends to the session's [`AlloyFragments`] and reserves
//! identifiers in the session's [`Namer`]; [`emit::serialize`] then
//! assembles the module text.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod cardinality;
pub mod classes;
pub mod context;
pub mod emit;
pub mod error;
pub mod generalizations;
pub mod grammar;
pub mod naming;
pub mod options;
pub mod properties;
pub mod relations;

use std::collections::HashSet;

use ontouml_model::{Element, ElementId, Model};

pub use context::AlloyFragments;
pub use error::{Result, TransformError};
pub use naming::Namer;
pub use options::TransformOptions;

/// Summary of what a run emitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TransformReport {
    /// Number of world-indexed field declarations.
    pub world_field_count: usize,
    /// Number of `fact` blocks, excluding the fixed ones.
    pub fact_count: usize,
    /// Number of accessor functions.
    pub fun_count: usize,
    /// Number of declared datatype signatures.
    pub datatype_count: usize,
    /// Number of enumerations.
    pub enum_count: usize,
}

impl TransformReport {
    fn of(fragments: &AlloyFragments) -> Self {
        Self {
            world_field_count: fragments.world_fields().len(),
            fact_count: fragments.facts().len(),
            fun_count: fragments.funs().len(),
            datatype_count: fragments.datatypes().iter().filter(|d| d.declared).count(),
            enum_count: fragments.enums().len(),
        }
    }
}

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct Generated {
    /// The Alloy module text.
    pub source: String,
    /// Fragment counts.
    pub report: TransformReport,
}

/// One transformation session: the model, the naming registries and the
/// output accumulator. Build a fresh one per run.
pub struct Transformer<'m> {
    pub(crate) model: &'m Model,
    pub(crate) options: TransformOptions,
    pub(crate) namer: Namer,
    pub(crate) fragments: AlloyFragments,
    transformed: HashSet<ElementId>,
}

impl<'m> Transformer<'m> {
    /// Creates a session with default options.
    #[must_use]
    pub fn new(model: &'m Model) -> Self {
        Self::with_options(model, TransformOptions::default())
    }

    /// Creates a session with the given options.
    #[must_use]
    pub fn with_options(model: &'m Model, options: TransformOptions) -> Self {
        Self {
            model,
            options,
            namer: Namer::new(),
            fragments: AlloyFragments::new(),
            transformed: HashSet::new(),
        }
    }

    /// The model being transformed.
    #[must_use]
    pub fn model(&self) -> &'m Model {
        self.model
    }

    /// Normalized identifier of `element` in this session.
    pub fn normalize<E: Element + ?Sized>(&mut self, element: &E) -> String {
        self.namer.normalize(element)
    }

    /// Normalized identifier of an element the module declares itself; see
    /// [`Namer::normalize_declared`].
    pub fn normalize_declared<E: Element + ?Sized>(&mut self, element: &E) -> String {
        self.namer.normalize_declared(element)
    }

    /// Accessor alias of `element` in this session, seeded with `base`.
    pub fn alias<E: Element + ?Sized>(&mut self, element: &E, base: &str) -> String {
        self.namer.alias(element, base)
    }

    /// Fragments emitted so far.
    #[must_use]
    pub fn fragments(&self) -> &AlloyFragments {
        &self.fragments
    }

    /// Consumes the session and returns its fragments.
    #[must_use]
    pub fn into_fragments(self) -> AlloyFragments {
        self.fragments
    }

    /// Runs every pass and serializes the result.
    ///
    /// # Errors
    ///
    /// Returns the first model-shape defect encountered; nothing is emitted
    /// in that case.
    pub fn run(mut self) -> Result<Generated> {
        self.transform_model()?;
        let source = emit::serialize(&self.fragments, &self.options);
        let report = TransformReport::of(&self.fragments);
        tracing::info!(
            world_fields = report.world_field_count,
            facts = report.fact_count,
            funs = report.fun_count,
            datatypes = report.datatype_count,
            "transformation complete"
        );
        Ok(Generated { source, report })
    }

    /// Runs every pass, leaving the output in [`Transformer::fragments`].
    ///
    /// # Errors
    ///
    /// Returns the first model-shape defect encountered.
    pub fn transform_model(&mut self) -> Result<()> {
        let model = self.model;

        for class in &model.classes {
            classes::transform_class(self, class)?;
        }
        classes::transform_additional_class_constraints(self);

        for generalization in &model.generalizations {
            generalizations::transform_generalization(self, generalization)?;
        }
        for set in &model.generalization_sets {
            generalizations::transform_generalization_set(self, set)?;
        }

        for relation in &model.relations {
            relations::transform_relation(self, relation)?;
        }

        for (owner, property) in model.properties() {
            properties::transform_property(self, owner, property)?;
        }
        Ok(())
    }

    /// Marks `id` as transformed; returns `false` if it already was.
    pub(crate) fn mark_transformed(&mut self, id: &ElementId) -> bool {
        self.transformed.insert(id.clone())
    }
}

/// Transforms `model` with default options.
///
/// # Errors
///
/// Returns the first model-shape defect encountered.
pub fn transform(model: &Model) -> Result<String> {
    transform_with(model, TransformOptions::default())
}

/// Transforms `model` with the given options.
///
/// # Errors
///
/// Returns the first model-shape defect encountered.
pub fn transform_with(model: &Model, options: TransformOptions) -> Result<String> {
    Transformer::with_options(model, options)
        .run()
        .map(|generated| generated.source)
}
