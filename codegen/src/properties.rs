//! Property pass.
//!
//! Every attribute and relation end is classified once into a
//! [`PropertyCategory`] and handled by a single `match`. Attributes of
//! datatypes are inline signature fields; every other attribute becomes a
//! world field with an accessor function; relation ends only contribute an
//! accessor, since the relation pass already declared the field.
//!
//! All accessors take the world explicitly:
//!
//! ```text
//! fun name [x: World.Owner, w: World] : set Type {
//!         x.(w.name)
//! }
//! ```

use ontouml_model::{Class, Element, ElementRef, Model, Property, Relation};

use crate::cardinality::Multiplicity;
use crate::classes::{across_worlds, has_signature, has_world_field, in_world, signature_of};
use crate::emit::block;
use crate::error::{Result, TransformError};
use crate::relations::{end_types, relation_is_represented, relation_name};
use crate::Transformer;

/// Why a property produces no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// End of a relation between two datatypes; the relation pass inlined it.
    DatatypeRelation,
    /// End of a derivation relation.
    DerivationRelation,
    /// The owner has no Alloy counterpart.
    UnrepresentedOwner,
    /// The attribute's type has no Alloy signature.
    UnrepresentedType,
}

/// Which end of its relation a property is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndRole {
    /// Index 0.
    Source,
    /// Index 1.
    Target,
}

/// Classification of a property, decided once before emission.
#[derive(Debug, Clone, Copy)]
pub enum PropertyCategory<'m> {
    /// Attribute of a `«datatype»` class.
    DatatypeAttribute(&'m Class),
    /// Ordered attribute of a world-field class.
    OrderedAttribute(&'m Class),
    /// Any other attribute of a world-field class.
    GeneralAttribute(&'m Class),
    /// End of a represented relation.
    RelationEnd(&'m Relation, EndRole),
    /// Nothing is emitted.
    Skip(SkipReason),
}

/// Classifies `property`, owned by `owner`.
#[must_use]
pub fn classify<'m>(
    model: &Model,
    owner: ElementRef<'m>,
    property: &Property,
) -> PropertyCategory<'m> {
    match owner {
        ElementRef::Class(class) if class.has_datatype_stereotype() => {
            PropertyCategory::DatatypeAttribute(class)
        }
        ElementRef::Class(class) => {
            if !has_world_field(owner) {
                PropertyCategory::Skip(SkipReason::UnrepresentedOwner)
            } else if !model.type_of(property).map_or(true, has_signature) {
                PropertyCategory::Skip(SkipReason::UnrepresentedType)
            } else if property.is_ordered {
                PropertyCategory::OrderedAttribute(class)
            } else {
                PropertyCategory::GeneralAttribute(class)
            }
        }
        ElementRef::Relation(relation) if model.holds_between_datatypes(relation) => {
            PropertyCategory::Skip(SkipReason::DatatypeRelation)
        }
        ElementRef::Relation(relation) if relation.has_derivation_stereotype() => {
            PropertyCategory::Skip(SkipReason::DerivationRelation)
        }
        ElementRef::Relation(relation) if !relation_is_represented(model, relation) => {
            PropertyCategory::Skip(SkipReason::UnrepresentedOwner)
        }
        ElementRef::Relation(relation) if relation.is_source_end(property) => {
            PropertyCategory::RelationEnd(relation, EndRole::Source)
        }
        ElementRef::Relation(relation) => PropertyCategory::RelationEnd(relation, EndRole::Target),
    }
}

/// Emits the fragments of one property. A property already transformed in
/// this session is ignored.
///
/// # Errors
///
/// [`TransformError::UnresolvedType`] when the property's type (or a
/// relation end's type) is not in the model;
/// [`TransformError::InvalidCardinality`] for a malformed multiplicity.
pub fn transform_property(
    t: &mut Transformer<'_>,
    owner: ElementRef<'_>,
    property: &Property,
) -> Result<()> {
    if !t.mark_transformed(&property.id) {
        return Ok(());
    }
    let category = classify(t.model, owner, property);
    tracing::debug!(property = %property.id, ?category, "transforming property");

    match category {
        PropertyCategory::DatatypeAttribute(class) => transform_datatype_attribute(t, class, property),
        PropertyCategory::OrderedAttribute(class) => transform_ordered_attribute(t, class, property),
        PropertyCategory::GeneralAttribute(class) => transform_general_attribute(t, class, property),
        PropertyCategory::RelationEnd(relation, role) => {
            transform_relation_end(t, relation, property, role)
        }
        PropertyCategory::Skip(_) => Ok(()),
    }
}

/// Formats a bound check on `term`, or `None` when neither bound is set.
fn bound_constraint(term: &str, (lower, upper): (Option<u32>, Option<u32>)) -> Option<String> {
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some(format!("{term}>={lower} and {term}<={upper}")),
        (Some(lower), None) => Some(format!("{term}>={lower}")),
        (None, Some(upper)) => Some(format!("{term}<={upper}")),
        (None, None) => None,
    }
}

fn multiplicity_fact(quantification: &str, constraint: &str) -> String {
    block(
        "fact multiplicity",
        &[format!("{quantification} | {constraint}")],
    )
}

fn accessor(alias: &str, domain: &str, range: &str, body: String) -> String {
    block(
        &format!("fun {alias} [x: {domain}, w: World] : set {range}"),
        &[body],
    )
}

/// The signature of an attribute's values.
fn attribute_type(t: &mut Transformer<'_>, attribute: &Property) -> Result<String> {
    let unresolved = || TransformError::UnresolvedType {
        property: attribute.id.clone(),
    };
    let model = t.model;
    let ty = model.type_of(attribute).ok_or_else(unresolved)?;
    signature_of(t, ty).ok_or_else(unresolved)
}

fn transform_datatype_attribute(
    t: &mut Transformer<'_>,
    owner: &Class,
    attribute: &Property,
) -> Result<()> {
    let name = t.normalize(attribute);
    let owner_name = t.normalize(owner);
    let ty = attribute_type(t, attribute)?;
    let multiplicity = Multiplicity::parse(&attribute.cardinality)?;

    t.fragments
        .datatype_fields(&owner_name)
        .push(format!("{name}: {} {ty}", multiplicity.keyword()));

    if multiplicity.is_custom() {
        if let Some(constraint) = bound_constraint(&format!("#x.{name}"), multiplicity.bounds()) {
            t.fragments.add_fact(multiplicity_fact(
                &format!("all x: {owner_name}"),
                &constraint,
            ));
        }
    }
    Ok(())
}

fn transform_ordered_attribute(
    t: &mut Transformer<'_>,
    owner: &Class,
    attribute: &Property,
) -> Result<()> {
    let name = t.normalize(attribute);
    let owner_name = t.normalize(owner);
    let ty = attribute_type(t, attribute)?;
    let alias = t.alias(attribute, &name);

    t.fragments.add_world_field(format!(
        "{name}: set {owner_name} set -> set Int set -> set {ty}"
    ));
    t.fragments.add_fact(block(
        "fact ordering",
        &[
            format!("all w: World, x: w.{owner_name} | isSeq[x.(w.{name})]"),
            format!("all w: World, x: w.{owner_name}, i: Int | lone i.(x.(w.{name}))"),
        ],
    ));
    t.fragments.add_fun(accessor(
        &alias,
        &format!("World.{owner_name}"),
        &ty,
        format!("elems[x.(w.{name})]"),
    ));

    if attribute.is_read_only {
        t.fragments
            .add_relation_property(format!("immutable_target[{owner_name},{name}]"));
    }
    Ok(())
}

fn transform_general_attribute(
    t: &mut Transformer<'_>,
    owner: &Class,
    attribute: &Property,
) -> Result<()> {
    let name = t.normalize(attribute);
    let owner_name = t.normalize(owner);
    let ty = attribute_type(t, attribute)?;
    let multiplicity = Multiplicity::parse(&attribute.cardinality)?;
    let alias = t.alias(attribute, &name);

    t.fragments.add_world_field(format!(
        "{name}: set {owner_name} set -> {} {ty}",
        multiplicity.keyword()
    ));
    t.fragments
        .add_fun(accessor(
            &alias,
            &format!("World.{owner_name}"),
            &ty,
            format!("x.(w.{name})"),
        ));

    if attribute.is_read_only {
        t.fragments
            .add_relation_property(format!("immutable_target[{owner_name},{name}]"));
    }

    if multiplicity.is_custom() {
        if let Some(constraint) =
            bound_constraint(&format!("#{alias}[x,w]"), multiplicity.bounds())
        {
            t.fragments.add_fact(multiplicity_fact(
                &format!("all w: World, x: w.{owner_name}"),
                &constraint,
            ));
        }
    }

    t.fragments.add_visible(format!("select13[{name}]"));
    Ok(())
}

/// Accessor, immutability and multiplicity of one relation end. The accessor
/// maps an instance of the opposite end's type to the instances at this end;
/// an end typed by a datatype or enumeration ranges over its signature
/// directly.
fn transform_relation_end(
    t: &mut Transformer<'_>,
    relation: &Relation,
    end: &Property,
    role: EndRole,
) -> Result<()> {
    let model = t.model;
    let (source, target) = end_types(model, relation)?;
    let (own, opposite) = match role {
        EndRole::Source => (source, target),
        EndRole::Target => (target, source),
    };

    let name = relation_name(t, relation);
    let own_name = t.normalize(&own);
    let opposite_name = t.normalize(&opposite);
    let end_name = if end.is_named() {
        t.normalize(end)
    } else {
        own_name.clone()
    };
    let alias = t.alias(end, &end_name);

    let derived = model.is_material_connected_to_derivation(relation);
    let field = if derived || relation.has_ordered_end() {
        format!("select13[w.{name}]")
    } else {
        format!("w.{name}")
    };
    let body = match role {
        EndRole::Source => format!("({field}).x"),
        EndRole::Target => format!("x.({field})"),
    };
    t.fragments.add_fun(accessor(
        &alias,
        &across_worlds(opposite, &opposite_name),
        &across_worlds(own, &own_name),
        body,
    ));

    match role {
        EndRole::Source if end.is_read_only => {
            t.fragments
                .add_relation_property(format!("immutable_source[{opposite_name},{name}]"));
        }
        EndRole::Target
            if end.is_read_only
                || relation.has_mediation_stereotype()
                || relation.has_characterization_stereotype() =>
        {
            t.fragments
                .add_relation_property(format!("immutable_target[{opposite_name},{name}]"));
        }
        _ => {}
    }

    let multiplicity = Multiplicity::parse(&end.cardinality)?;
    if multiplicity.is_custom() || derived {
        if let Some(constraint) =
            bound_constraint(&format!("#{alias}[x,w]"), multiplicity.bounds())
        {
            t.fragments.add_fact(multiplicity_fact(
                &format!("all w: World, x: {}", in_world(opposite, &opposite_name)),
                &constraint,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ontouml_model::{ClassStereotype, RelationStereotype};

    #[test]
    fn bound_constraints() {
        assert_eq!(
            bound_constraint("#a[x,w]", (Some(2), Some(5))).as_deref(),
            Some("#a[x,w]>=2 and #a[x,w]<=5")
        );
        assert_eq!(bound_constraint("#x.a", (Some(2), None)).as_deref(), Some("#x.a>=2"));
        assert_eq!(bound_constraint("#x.a", (None, Some(4))).as_deref(), Some("#x.a<=4"));
        assert_eq!(bound_constraint("#x.a", (None, None)), None);
    }

    #[test]
    fn classification_precedence() {
        let mut model = Model::new("m");
        let person = model.create_kind("Person");
        let date = model.create_datatype("Date");
        let int = model.create_datatype("Integer");
        let birth = model.create_class("Birth", Some(ClassStereotype::Event));
        let day = model.create_attribute(&date, "day", &int).unwrap();
        let born = model.create_attribute(&person, "born", &date).unwrap();
        let when = model.create_attribute(&birth, "when", &date).unwrap();
        let marks = model.create_attribute(&person, "marks", &birth).unwrap();
        model.property_mut(&born).unwrap().is_ordered = true;
        let between = model.create_binary_relation(&date, &int, None);
        let knows = model.create_binary_relation(&person, &person, None);
        model.create_binary_relation(&knows, &person, Some(RelationStereotype::Derivation));

        let category = |id: &ontouml_model::ElementId| {
            let (owner, property) = model.properties().find(|(_, p)| &p.id == id).unwrap();
            classify(&model, owner, property)
        };
        assert!(matches!(category(&day), PropertyCategory::DatatypeAttribute(_)));
        assert!(matches!(category(&born), PropertyCategory::OrderedAttribute(_)));
        assert!(matches!(
            category(&when),
            PropertyCategory::Skip(SkipReason::UnrepresentedOwner)
        ));
        assert!(matches!(
            category(&marks),
            PropertyCategory::Skip(SkipReason::UnrepresentedType)
        ));
        let between = model.find_relation(&between).unwrap();
        assert!(matches!(
            classify(&model, ElementRef::Relation(between), &between.properties[0]),
            PropertyCategory::Skip(SkipReason::DatatypeRelation)
        ));
        let knows = model.find_relation(&knows).unwrap();
        assert!(matches!(
            classify(&model, ElementRef::Relation(knows), &knows.properties[1]),
            PropertyCategory::RelationEnd(_, EndRole::Target)
        ));
        let derivation = model.relations.last().unwrap();
        assert!(matches!(
            classify(&model, ElementRef::Relation(derivation), &derivation.properties[0]),
            PropertyCategory::Skip(SkipReason::DerivationRelation)
        ));
    }

    #[test]
    fn properties_are_transformed_once() {
        let mut model = Model::new("m");
        let person = model.create_kind("Person");
        let string = model.create_datatype("String");
        model.create_attribute(&person, "nickname", &string).unwrap();

        let mut t = Transformer::new(&model);
        let (owner, property) = model.properties().next().unwrap();
        transform_property(&mut t, owner, property).unwrap();
        transform_property(&mut t, owner, property).unwrap();
        assert_eq!(t.fragments().funs().len(), 1);
        assert_eq!(t.fragments().visible(), ["select13[nickname]"]);
    }
}
