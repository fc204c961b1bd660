//! Relation pass.
//!
//! A relation becomes a world field whose shape depends on its role in the
//! model: an inline field of a datatype, a ternary field for a material
//! relation derived from a relator, an `Int`-indexed field for an ordered
//! relation, or a plain binary field.

use ontouml_model::{Class, Element, ElementRef, Model, Property, Relation};

use crate::cardinality::Multiplicity;
use crate::classes::{has_signature, has_world_field, in_world};
use crate::emit::block;
use crate::error::{Result, TransformError};
use crate::Transformer;

/// The identifier of a relation's world field: its normalized name when
/// named, otherwise an alias seeded with `relation`.
pub fn relation_name(t: &mut Transformer<'_>, relation: &Relation) -> String {
    if relation.is_named() {
        t.normalize(relation)
    } else {
        t.alias(relation, "relation")
    }
}

/// Returns `true` if the relation has a world field: both ends have a
/// signature and at least one is a world-field class, or it is a derivation
/// from a relation to a world-field class.
#[must_use]
pub fn relation_is_represented(model: &Model, relation: &Relation) -> bool {
    match (model.source_of(relation), model.target_of(relation)) {
        (Some(ElementRef::Relation(_)), Some(target)) if relation.has_derivation_stereotype() => {
            has_world_field(target)
        }
        (Some(source), Some(target)) => {
            has_signature(source)
                && has_signature(target)
                && (has_world_field(source) || has_world_field(target))
        }
        _ => false,
    }
}

/// Resolves both end types of a relation.
pub(crate) fn end_types<'m>(model: &'m Model, relation: &Relation) -> Result<(ElementRef<'m>, ElementRef<'m>)> {
    let (Some(source_end), Some(target_end)) = (relation.source_end(), relation.target_end())
    else {
        return Err(TransformError::MissingRelationEnd {
            relation: relation.id.clone(),
        });
    };
    let resolve = |end: &Property| {
        model
            .type_of(end)
            .ok_or_else(|| TransformError::UnresolvedType {
                property: end.id.clone(),
            })
    };
    Ok((resolve(source_end)?, resolve(target_end)?))
}

/// Emits the field (and, for derivations and ordered relations, the facts)
/// of one relation.
///
/// # Errors
///
/// [`TransformError::MissingRelationEnd`] when the relation lacks two ends,
/// [`TransformError::UnresolvedType`] when an end's type is not in the
/// model, [`TransformError::InvalidCardinality`] for a malformed end
/// multiplicity.
pub fn transform_relation(t: &mut Transformer<'_>, relation: &Relation) -> Result<()> {
    let model = t.model;
    let (source, target) = end_types(model, relation)?;

    if model.holds_between_datatypes(relation) {
        let name = relation_name(t, relation);
        let source = t.normalize(&source);
        let target = t.normalize(&target);
        t.fragments
            .datatype_fields(&source)
            .push(format!("{name}: {target}"));
        return Ok(());
    }

    if !relation_is_represented(model, relation) {
        tracing::debug!(relation = %relation.id, "relation not represented");
        return Ok(());
    }

    if relation.has_derivation_stereotype() {
        if let (ElementRef::Relation(material), ElementRef::Class(relator)) = (source, target) {
            transform_derivation(t, material, relator)?;
        }
        return Ok(());
    }

    let name = relation_name(t, relation);
    let source_name = t.normalize(&source);
    let target_name = t.normalize(&target);

    let derived_from = match model.derivation_of(relation) {
        Some(derivation) if model.is_material_connected_to_derivation(relation) => {
            Some(end_types(model, derivation)?.1)
        }
        _ => None,
    };

    if let Some(relator) = derived_from {
        let relator_name = t.normalize(&relator);
        t.fragments.add_world_field(format!(
            "{name}: set {source_name} -> set {relator_name} -> set {target_name}"
        ));
    } else if relation.has_ordered_end() {
        t.fragments.add_world_field(format!(
            "{name}: set {source_name} set -> set Int set -> set {target_name}"
        ));
        let sources = in_world(source, &source_name);
        t.fragments.add_fact(block(
            "fact ordering",
            &[format!("all w: World, x: {sources} | isSeq[x.(w.{name})]")],
        ));
    } else {
        let keyword = |end: Option<&Property>| -> Result<&'static str> {
            match end {
                Some(end) => Ok(Multiplicity::parse(&end.cardinality)?.keyword()),
                None => Ok("set"),
            }
        };
        let source_keyword = keyword(relation.source_end())?;
        let target_keyword = keyword(relation.target_end())?;
        t.fragments.add_world_field(format!(
            "{name}: set {source_name} {source_keyword} -> {target_keyword} {target_name}"
        ));
    }
    Ok(())
}

/// Ties a derived material relation to the relator's mediations:
/// `x -> r -> y` holds exactly when `r` mediates both `x` and `y`.
fn transform_derivation(t: &mut Transformer<'_>, material: &Relation, relator: &Class) -> Result<()> {
    let model = t.model;
    let (source, target) = end_types(model, material)?;
    let (Some(source_mediation), Some(target_mediation)) = (
        find_mediation(model, relator, source),
        find_mediation(model, relator, target),
    ) else {
        tracing::debug!(relation = %material.id, relator = %relator.id, "mediations not found");
        return Ok(());
    };

    let material_name = relation_name(t, material);
    let source_mediation = relation_name(t, source_mediation);
    let target_mediation = relation_name(t, target_mediation);
    let relator_name = t.normalize(relator);
    let sources = in_world(source, &t.normalize(&source));
    let targets = in_world(target, &t.normalize(&target));

    t.fragments.add_fact(block(
        "fact derivations",
        &[format!(
            "all w: World, x: {sources}, y: {targets}, r: w.{relator_name} | \
             x -> r -> y in w.{material_name} iff x in r.(w.{source_mediation}) and y in r.(w.{target_mediation})"
        )],
    ));
    Ok(())
}

/// The mediation from `relator` to `mediated`, matched by direct end types.
fn find_mediation<'m>(
    model: &'m Model,
    relator: &Class,
    mediated: ElementRef<'_>,
) -> Option<&'m Relation> {
    model.relations.iter().find(|candidate| {
        candidate.has_mediation_stereotype()
            && matches!(
                (model.source_of(candidate), model.target_of(candidate)),
                (Some(s), Some(m)) if s.id() == &relator.id && m.id() == mediated.id()
            )
    })
}
