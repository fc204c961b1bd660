//! Core OntoUML model types.
//!
//! These types represent an OntoUML conceptual model as typed Rust data. Every
//! element is owned by the [`Model`]; properties are owned by the class
//! (attributes) or relation (ends) that contains them, so a property's
//! container is always known.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier of a model element, unique within one [`Model`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct ElementId(String);

impl ElementId {
    /// Wraps a raw identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The kind tag of a model element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A class (type, kind, role, datatype, enumeration, ...).
    Class,
    /// A binary relation between two classes (or a relation and a class).
    Relation,
    /// An attribute of a class or an end of a relation.
    Property,
    /// A literal of an enumeration.
    Literal,
    /// A generalization between two classes or two relations.
    Generalization,
    /// A set of generalizations sharing the same general element.
    GeneralizationSet,
}

impl ElementKind {
    /// Returns the type name of the kind (e.g. `"Class"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Class => "Class",
            ElementKind::Relation => "Relation",
            ElementKind::Property => "Property",
            ElementKind::Literal => "Literal",
            ElementKind::Generalization => "Generalization",
            ElementKind::GeneralizationSet => "GeneralizationSet",
        }
    }

    /// Returns the lowercase kind tag (e.g. `"class"`, `"generalizationset"`).
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Class => "class",
            ElementKind::Relation => "relation",
            ElementKind::Property => "property",
            ElementKind::Literal => "literal",
            ElementKind::Generalization => "generalization",
            ElementKind::GeneralizationSet => "generalizationset",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common view over every named model element.
pub trait Element {
    /// Identity of the element.
    fn id(&self) -> &ElementId;
    /// Raw name, if any. An empty string counts as unnamed for most purposes.
    fn name(&self) -> Option<&str>;
    /// Kind tag.
    fn kind(&self) -> ElementKind;

    /// Returns `true` if the element carries a non-empty name.
    fn is_named(&self) -> bool {
        self.name().is_some_and(|n| !n.is_empty())
    }
}

/// OntoUML class stereotypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum ClassStereotype {
    /// `«type»` — a higher-order type.
    Type,
    /// `«historicalRole»`.
    HistoricalRole,
    /// `«historicalRoleMixin»`.
    HistoricalRoleMixin,
    /// `«event»`.
    Event,
    /// `«situation»`.
    Situation,
    /// `«category»` — rigid non-sortal.
    Category,
    /// `«mixin»` — semi-rigid non-sortal.
    Mixin,
    /// `«roleMixin»` — anti-rigid non-sortal.
    RoleMixin,
    /// `«phaseMixin»` — anti-rigid non-sortal.
    PhaseMixin,
    /// `«kind»` — rigid ultimate sortal of functional complexes.
    Kind,
    /// `«collective»`.
    Collective,
    /// `«quantity»`.
    Quantity,
    /// `«relator»`.
    Relator,
    /// `«quality»`.
    Quality,
    /// `«mode»`.
    Mode,
    /// `«subkind»`.
    Subkind,
    /// `«role»`.
    Role,
    /// `«phase»`.
    Phase,
    /// `«enumeration»`.
    Enumeration,
    /// `«datatype»`.
    Datatype,
    /// `«abstract»`.
    Abstract,
}

impl ClassStereotype {
    /// Rigid stereotypes: every instance is necessarily an instance.
    #[must_use]
    pub fn is_rigid(self) -> bool {
        matches!(
            self,
            ClassStereotype::Kind
                | ClassStereotype::Subkind
                | ClassStereotype::Collective
                | ClassStereotype::Quantity
                | ClassStereotype::Relator
                | ClassStereotype::Mode
                | ClassStereotype::Quality
                | ClassStereotype::Category
        )
    }

    /// Anti-rigid stereotypes: instances may cease to be instances.
    #[must_use]
    pub fn is_anti_rigid(self) -> bool {
        matches!(
            self,
            ClassStereotype::Role
                | ClassStereotype::Phase
                | ClassStereotype::RoleMixin
                | ClassStereotype::PhaseMixin
                | ClassStereotype::HistoricalRole
                | ClassStereotype::HistoricalRoleMixin
        )
    }

    /// Ultimate sortals: kinds, collectives and quantities.
    #[must_use]
    pub fn is_ultimate_sortal(self) -> bool {
        matches!(
            self,
            ClassStereotype::Kind | ClassStereotype::Collective | ClassStereotype::Quantity
        )
    }

    /// Stereotypes of individual moments (relators, modes, qualities).
    #[must_use]
    pub fn is_moment(self) -> bool {
        matches!(
            self,
            ClassStereotype::Relator | ClassStereotype::Mode | ClassStereotype::Quality
        )
    }
}

/// Ontological natures a class can be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Nature {
    /// Functional complexes (the default nature of kinds).
    FunctionalComplex,
    /// Collectives.
    Collective,
    /// Quantities.
    Quantity,
    /// Relators.
    Relator,
    /// Intrinsic modes.
    IntrinsicMode,
    /// Extrinsic modes.
    ExtrinsicMode,
    /// Qualities.
    Quality,
    /// Events.
    Event,
    /// Situations.
    Situation,
    /// Higher-order types.
    Type,
    /// Abstract individuals (datatypes, enumerations).
    Abstract,
}

impl Nature {
    /// Substantial natures (objects).
    #[must_use]
    pub fn is_substantial(self) -> bool {
        matches!(
            self,
            Nature::FunctionalComplex | Nature::Collective | Nature::Quantity
        )
    }

    /// Moment natures (aspects).
    #[must_use]
    pub fn is_moment(self) -> bool {
        matches!(
            self,
            Nature::Relator | Nature::IntrinsicMode | Nature::ExtrinsicMode | Nature::Quality
        )
    }
}

/// OntoUML relation stereotypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum RelationStereotype {
    /// `«material»`.
    Material,
    /// `«derivation»` — links a material relation to its truthmaker relator.
    Derivation,
    /// `«comparative»`.
    Comparative,
    /// `«mediation»` — a relator existentially depends on the mediated entity.
    Mediation,
    /// `«characterization»` — a mode or quality inheres in its bearer.
    Characterization,
    /// `«externalDependence»`.
    ExternalDependence,
    /// `«componentOf»`.
    ComponentOf,
    /// `«memberOf»`.
    MemberOf,
    /// `«subCollectionOf»`.
    SubCollectionOf,
    /// `«subQuantityOf»`.
    SubQuantityOf,
    /// `«instantiation»`.
    Instantiation,
    /// `«termination»`.
    Termination,
    /// `«participational»`.
    Participational,
    /// `«participation»`.
    Participation,
    /// `«historicalDependence»`.
    HistoricalDependence,
    /// `«creation»`.
    Creation,
    /// `«manifestation»`.
    Manifestation,
    /// `«bringsAbout»`.
    BringsAbout,
    /// `«triggers»`.
    Triggers,
}

fn default_cardinality() -> String {
    "0..*".to_string()
}

/// An attribute of a class or an end of a relation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Property {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// The class (or, for derivation sources, relation) typing the property.
    #[cfg_attr(feature = "serde", serde(default))]
    pub property_type: Option<ElementId>,
    /// Multiplicity expression, e.g. `"1"`, `"0..*"`, `"2..5"`.
    #[cfg_attr(feature = "serde", serde(default = "default_cardinality"))]
    pub cardinality: String,
    /// Whether the values form an ordered sequence.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_ordered: bool,
    /// Whether the value is fixed once set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_read_only: bool,
}

impl Property {
    /// Creates a property with the default `0..*` cardinality.
    pub fn new(id: ElementId, name: Option<&str>, property_type: Option<ElementId>) -> Self {
        Self {
            id,
            name: name.map(str::to_string),
            property_type,
            cardinality: default_cardinality(),
            is_ordered: false,
            is_read_only: false,
        }
    }
}

impl Element for Property {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::Property
    }
}

/// A literal of an enumeration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Literal {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
}

impl Element for Literal {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::Literal
    }
}

/// An OntoUML class.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Class {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Stereotype, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stereotype: Option<ClassStereotype>,
    /// Natures the instances are restricted to. Empty means "derive from the stereotype".
    #[cfg_attr(feature = "serde", serde(default))]
    pub restricted_to: Vec<Nature>,
    /// Whether the class is abstract.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_abstract: bool,
    /// Owned attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Vec<Property>,
    /// Owned literals (enumerations only).
    #[cfg_attr(feature = "serde", serde(default))]
    pub literals: Vec<Literal>,
}

impl Class {
    /// Creates an empty class.
    pub fn new(id: ElementId, name: Option<&str>, stereotype: Option<ClassStereotype>) -> Self {
        Self {
            id,
            name: name.map(str::to_string),
            stereotype,
            restricted_to: Vec::new(),
            is_abstract: false,
            attributes: Vec::new(),
            literals: Vec::new(),
        }
    }

    /// Returns `true` if the class carries the given stereotype.
    #[must_use]
    pub fn has_stereotype(&self, stereotype: ClassStereotype) -> bool {
        self.stereotype == Some(stereotype)
    }

    /// Returns `true` for `«datatype»` classes.
    #[must_use]
    pub fn has_datatype_stereotype(&self) -> bool {
        self.has_stereotype(ClassStereotype::Datatype)
    }

    /// Returns `true` for `«enumeration»` classes.
    #[must_use]
    pub fn has_enumeration_stereotype(&self) -> bool {
        self.has_stereotype(ClassStereotype::Enumeration)
    }

    /// Natures of the class: the explicit restriction when present, otherwise
    /// the natures implied by the stereotype.
    #[must_use]
    pub fn natures(&self) -> Vec<Nature> {
        if !self.restricted_to.is_empty() {
            return self.restricted_to.clone();
        }
        let Some(stereotype) = self.stereotype else {
            return Vec::new();
        };
        match stereotype {
            ClassStereotype::Kind
            | ClassStereotype::Subkind
            | ClassStereotype::Role
            | ClassStereotype::Phase
            | ClassStereotype::HistoricalRole => vec![Nature::FunctionalComplex],
            ClassStereotype::Collective => vec![Nature::Collective],
            ClassStereotype::Quantity => vec![Nature::Quantity],
            ClassStereotype::Relator => vec![Nature::Relator],
            ClassStereotype::Mode => vec![Nature::IntrinsicMode, Nature::ExtrinsicMode],
            ClassStereotype::Quality => vec![Nature::Quality],
            ClassStereotype::Event => vec![Nature::Event],
            ClassStereotype::Situation => vec![Nature::Situation],
            ClassStereotype::Type => vec![Nature::Type],
            ClassStereotype::Abstract
            | ClassStereotype::Datatype
            | ClassStereotype::Enumeration => vec![Nature::Abstract],
            ClassStereotype::Category
            | ClassStereotype::Mixin
            | ClassStereotype::RoleMixin
            | ClassStereotype::PhaseMixin
            | ClassStereotype::HistoricalRoleMixin => Vec::new(),
        }
    }
}

impl Element for Class {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::Class
    }
}

/// A binary OntoUML relation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Relation {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Stereotype, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stereotype: Option<RelationStereotype>,
    /// Relation ends: index 0 is the source end, index 1 the target end.
    #[cfg_attr(feature = "serde", serde(default))]
    pub properties: Vec<Property>,
}

impl Relation {
    /// Returns `true` if the relation carries the given stereotype.
    #[must_use]
    pub fn has_stereotype(&self, stereotype: RelationStereotype) -> bool {
        self.stereotype == Some(stereotype)
    }

    /// Returns `true` for `«derivation»` relations.
    #[must_use]
    pub fn has_derivation_stereotype(&self) -> bool {
        self.has_stereotype(RelationStereotype::Derivation)
    }

    /// Returns `true` for `«mediation»` relations.
    #[must_use]
    pub fn has_mediation_stereotype(&self) -> bool {
        self.has_stereotype(RelationStereotype::Mediation)
    }

    /// Returns `true` for `«characterization»` relations.
    #[must_use]
    pub fn has_characterization_stereotype(&self) -> bool {
        self.has_stereotype(RelationStereotype::Characterization)
    }

    /// The source end, if present.
    #[must_use]
    pub fn source_end(&self) -> Option<&Property> {
        self.properties.first()
    }

    /// The target end, if present.
    #[must_use]
    pub fn target_end(&self) -> Option<&Property> {
        self.properties.get(1)
    }

    /// Returns `true` if `property` is this relation's source end.
    #[must_use]
    pub fn is_source_end(&self, property: &Property) -> bool {
        self.source_end().is_some_and(|end| end.id == property.id)
    }

    /// The end opposite to `property`, if `property` is one of the two ends.
    #[must_use]
    pub fn opposite_end(&self, property: &Property) -> Option<&Property> {
        match (self.source_end(), self.target_end()) {
            (Some(source), Some(target)) if source.id == property.id => Some(target),
            (Some(source), Some(target)) if target.id == property.id => Some(source),
            _ => None,
        }
    }

    /// Returns `true` if either end is ordered.
    #[must_use]
    pub fn has_ordered_end(&self) -> bool {
        self.properties.iter().any(|end| end.is_ordered)
    }
}

impl Element for Relation {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::Relation
    }
}

/// A generalization between two classes or two relations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Generalization {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// The more general element.
    pub general: ElementId,
    /// The more specific element.
    pub specific: ElementId,
}

impl Element for Generalization {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::Generalization
    }
}

/// A set of generalizations sharing one general element.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GeneralizationSet {
    /// Identity.
    pub id: ElementId,
    /// Raw name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Whether the specifics are mutually exclusive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_disjoint: bool,
    /// Whether the specifics cover the general element.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_complete: bool,
    /// Member generalizations.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generalizations: Vec<ElementId>,
}

impl Element for GeneralizationSet {
    fn id(&self) -> &ElementId {
        &self.id
    }
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    fn kind(&self) -> ElementKind {
        ElementKind::GeneralizationSet
    }
}

/// A borrowed reference to a class or a relation: the possible types of a
/// property and the possible containers of a property.
#[derive(Debug, Clone, Copy)]
pub enum ElementRef<'a> {
    /// A class.
    Class(&'a Class),
    /// A relation.
    Relation(&'a Relation),
}

impl ElementRef<'_> {
    /// Returns `true` for a `«datatype»` class.
    #[must_use]
    pub fn is_datatype(&self) -> bool {
        matches!(self, ElementRef::Class(class) if class.has_datatype_stereotype())
    }
}

impl Element for ElementRef<'_> {
    fn id(&self) -> &ElementId {
        match self {
            ElementRef::Class(class) => &class.id,
            ElementRef::Relation(relation) => &relation.id,
        }
    }
    fn name(&self) -> Option<&str> {
        match self {
            ElementRef::Class(class) => class.name(),
            ElementRef::Relation(relation) => relation.name(),
        }
    }
    fn kind(&self) -> ElementKind {
        match self {
            ElementRef::Class(_) => ElementKind::Class,
            ElementRef::Relation(_) => ElementKind::Relation,
        }
    }
}

/// A complete OntoUML model.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Model {
    /// Model name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// All classes, in model order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub classes: Vec<Class>,
    /// All relations, in model order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relations: Vec<Relation>,
    /// All generalizations, in model order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generalizations: Vec<Generalization>,
    /// All generalization sets, in model order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub generalization_sets: Vec<GeneralizationSet>,
}

impl Model {
    /// Looks up a class by id.
    #[must_use]
    pub fn find_class(&self, id: &ElementId) -> Option<&Class> {
        self.classes.iter().find(|c| &c.id == id)
    }

    /// Looks up a relation by id.
    #[must_use]
    pub fn find_relation(&self, id: &ElementId) -> Option<&Relation> {
        self.relations.iter().find(|r| &r.id == id)
    }

    /// Looks up a generalization by id.
    #[must_use]
    pub fn find_generalization(&self, id: &ElementId) -> Option<&Generalization> {
        self.generalizations.iter().find(|g| &g.id == id)
    }

    /// Looks up a class or relation by id.
    #[must_use]
    pub fn find(&self, id: &ElementId) -> Option<ElementRef<'_>> {
        self.find_class(id)
            .map(ElementRef::Class)
            .or_else(|| self.find_relation(id).map(ElementRef::Relation))
    }

    /// Resolves the type of a property.
    #[must_use]
    pub fn type_of(&self, property: &Property) -> Option<ElementRef<'_>> {
        property.property_type.as_ref().and_then(|id| self.find(id))
    }

    /// The element typing the relation's source end.
    #[must_use]
    pub fn source_of(&self, relation: &Relation) -> Option<ElementRef<'_>> {
        relation.source_end().and_then(|end| self.type_of(end))
    }

    /// The element typing the relation's target end.
    #[must_use]
    pub fn target_of(&self, relation: &Relation) -> Option<ElementRef<'_>> {
        relation.target_end().and_then(|end| self.type_of(end))
    }

    /// Every class attribute, paired with its owning class, in model order.
    pub fn attributes(&self) -> impl Iterator<Item = (&Class, &Property)> {
        self.classes
            .iter()
            .flat_map(|class| class.attributes.iter().map(move |attr| (class, attr)))
    }

    /// Every relation end, paired with its owning relation, in model order.
    pub fn relation_ends(&self) -> impl Iterator<Item = (&Relation, &Property)> {
        self.relations
            .iter()
            .flat_map(|relation| relation.properties.iter().map(move |end| (relation, end)))
    }

    /// Every property with its container: attributes first, then relation ends.
    pub fn properties(&self) -> impl Iterator<Item = (ElementRef<'_>, &Property)> {
        self.attributes()
            .map(|(class, attr)| (ElementRef::Class(class), attr))
            .chain(
                self.relation_ends()
                    .map(|(relation, end)| (ElementRef::Relation(relation), end)),
            )
    }

    /// The derivation relation whose source is `relation`, if any.
    #[must_use]
    pub fn derivation_of(&self, relation: &Relation) -> Option<&Relation> {
        self.relations.iter().find(|candidate| {
            candidate.has_derivation_stereotype()
                && candidate
                    .source_end()
                    .and_then(|end| end.property_type.as_ref())
                    == Some(&relation.id)
        })
    }

    /// Returns `true` for a `«material»` relation that is the source of a
    /// `«derivation»` relation.
    #[must_use]
    pub fn is_material_connected_to_derivation(&self, relation: &Relation) -> bool {
        relation.has_stereotype(RelationStereotype::Material)
            && self.derivation_of(relation).is_some()
    }

    /// Returns `true` if both ends of the relation are typed by `«datatype»` classes.
    #[must_use]
    pub fn holds_between_datatypes(&self, relation: &Relation) -> bool {
        matches!(
            (self.source_of(relation), self.target_of(relation)),
            (Some(source), Some(target)) if source.is_datatype() && target.is_datatype()
        )
    }

    /// Returns `true` if any element (including properties and literals) uses `id`.
    #[must_use]
    pub fn contains_id(&self, id: &ElementId) -> bool {
        self.classes.iter().any(|c| {
            &c.id == id
                || c.attributes.iter().any(|a| &a.id == id)
                || c.literals.iter().any(|l| &l.id == id)
        }) || self
            .relations
            .iter()
            .any(|r| &r.id == id || r.properties.iter().any(|p| &p.id == id))
            || self.generalizations.iter().any(|g| &g.id == id)
            || self.generalization_sets.iter().any(|s| &s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn datatype(id: &str, name: &str) -> Class {
        Class::new(id.into(), Some(name), Some(ClassStereotype::Datatype))
    }

    fn relation(id: &str, stereotype: Option<RelationStereotype>, source: &str, target: &str) -> Relation {
        Relation {
            id: id.into(),
            name: None,
            stereotype,
            properties: vec![
                Property::new(format!("{id}-src").as_str().into(), None, Some(source.into())),
                Property::new(format!("{id}-tgt").as_str().into(), None, Some(target.into())),
            ],
        }
    }

    #[test]
    fn kind_tags_are_lowercase() {
        assert_eq!(ElementKind::Class.tag(), "class");
        assert_eq!(ElementKind::GeneralizationSet.tag(), "generalizationset");
        assert_eq!(ElementKind::Relation.as_str(), "Relation");
    }

    #[test]
    fn natures_follow_stereotype_when_unrestricted() {
        let kind = Class::new("k".into(), Some("Person"), Some(ClassStereotype::Kind));
        assert_eq!(kind.natures(), vec![Nature::FunctionalComplex]);

        let mut restricted = Class::new("c".into(), Some("Thing"), Some(ClassStereotype::Category));
        assert!(restricted.natures().is_empty());
        restricted.restricted_to = vec![Nature::Collective];
        assert_eq!(restricted.natures(), vec![Nature::Collective]);
    }

    #[test]
    fn relation_between_datatypes() {
        let model = Model {
            classes: vec![datatype("d1", "Date"), datatype("d2", "String")],
            relations: vec![relation("r", None, "d1", "d2")],
            ..Model::default()
        };
        assert!(model.holds_between_datatypes(&model.relations[0]));
    }

    #[test]
    fn material_connected_to_derivation() {
        let model = Model {
            classes: vec![
                Class::new("a".into(), Some("A"), Some(ClassStereotype::Kind)),
                Class::new("b".into(), Some("B"), Some(ClassStereotype::Kind)),
                Class::new("r".into(), Some("R"), Some(ClassStereotype::Relator)),
            ],
            relations: vec![
                relation("m", Some(RelationStereotype::Material), "a", "b"),
                relation("d", Some(RelationStereotype::Derivation), "m", "r"),
            ],
            ..Model::default()
        };
        let material = &model.relations[0];
        assert!(model.is_material_connected_to_derivation(material));
        assert_eq!(
            model.derivation_of(material).map(|d| d.id.as_str()),
            Some("d")
        );
        assert!(!model.is_material_connected_to_derivation(&model.relations[1]));
    }

    #[test]
    fn opposite_end_lookup() {
        let rel = relation("r", None, "a", "b");
        let source = &rel.properties[0];
        let target = &rel.properties[1];
        assert!(rel.is_source_end(source));
        assert_eq!(rel.opposite_end(source).map(|p| &p.id), Some(&target.id));
        assert_eq!(rel.opposite_end(target).map(|p| &p.id), Some(&source.id));
    }
}
