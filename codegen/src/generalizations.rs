//! Generalization and generalization-set pass.
//!
//! Classes and relations are both world fields, so subsumption is plain
//! inclusion between the two fields and a generalization set is a
//! disjointness/covering constraint over them.

use ontouml_model::{ElementId, ElementRef, Generalization, GeneralizationSet};

use crate::classes::has_world_field;
use crate::emit::block;
use crate::error::{Result, TransformError};
use crate::relations::{relation_is_represented, relation_name};
use crate::Transformer;

/// World-field name of a class or relation taking part in a generalization,
/// or `None` when the element has no world field.
fn field_name(t: &mut Transformer<'_>, element: ElementRef<'_>) -> Option<String> {
    match element {
        ElementRef::Class(class) if has_world_field(element) => Some(t.normalize(class)),
        ElementRef::Relation(relation) if relation_is_represented(t.model, relation) => {
            Some(relation_name(t, relation))
        }
        _ => None,
    }
}

fn resolve<'m>(
    t: &Transformer<'m>,
    owner: &ElementId,
    id: &ElementId,
) -> Result<ElementRef<'m>> {
    let model: &'m ontouml_model::Model = t.model;
    model.find(id).ok_or_else(|| TransformError::DanglingReference {
        owner: owner.clone(),
        element: id.clone(),
    })
}

/// `(general, specific)` field names, or `None` if the pair is not
/// represented (datatypes, unrepresented classes, mixed class/relation).
fn field_pair(
    t: &mut Transformer<'_>,
    generalization: &Generalization,
) -> Result<Option<(String, String)>> {
    let general = resolve(t, &generalization.id, &generalization.general)?;
    let specific = resolve(t, &generalization.id, &generalization.specific)?;
    if std::mem::discriminant(&general) != std::mem::discriminant(&specific) {
        return Ok(None);
    }
    let (Some(general), Some(specific)) = (field_name(t, general), field_name(t, specific)) else {
        return Ok(None);
    };
    Ok(Some((general, specific)))
}

/// Emits `Specific in General`.
///
/// # Errors
///
/// [`TransformError::DanglingReference`] if either end is not in the model.
pub fn transform_generalization(
    t: &mut Transformer<'_>,
    generalization: &Generalization,
) -> Result<()> {
    let Some((general, specific)) = field_pair(t, generalization)? else {
        tracing::debug!(generalization = %generalization.id, "generalization not represented");
        return Ok(());
    };
    t.fragments.add_fact(block(
        "fact generalization",
        &[format!("{specific} in {general}")],
    ));
    Ok(())
}

/// Emits pairwise disjointness and/or completeness of a generalization set.
///
/// # Errors
///
/// [`TransformError::DanglingReference`] if a member generalization, or one
/// of its ends, is not in the model.
pub fn transform_generalization_set(t: &mut Transformer<'_>, set: &GeneralizationSet) -> Result<()> {
    if !(set.is_disjoint || set.is_complete) || set.generalizations.is_empty() {
        return Ok(());
    }

    let model = t.model;
    let mut general = None;
    let mut specifics = Vec::with_capacity(set.generalizations.len());
    for id in &set.generalizations {
        let generalization =
            model
                .find_generalization(id)
                .ok_or_else(|| TransformError::DanglingReference {
                    owner: set.id.clone(),
                    element: id.clone(),
                })?;
        let Some((g, s)) = field_pair(t, generalization)? else {
            tracing::debug!(set = %set.id, member = %id, "generalization set not represented");
            return Ok(());
        };
        general.get_or_insert(g);
        specifics.push(s);
    }

    let mut lines = Vec::new();
    if set.is_disjoint {
        for (i, a) in specifics.iter().enumerate() {
            for b in &specifics[i + 1..] {
                lines.push(format!("no {a} & {b}"));
            }
        }
    }
    if let (true, Some(general)) = (set.is_complete, general) {
        lines.push(format!("{general} = {}", specifics.join("+")));
    }
    if !lines.is_empty() {
        t.fragments.add_fact(block("fact generalizationSet", &lines));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ontouml_model::{ClassStereotype, Model};

    #[test]
    fn disjoint_complete_set() {
        let mut model = Model::new("m");
        let person = model.create_kind("Person");
        let child = model.create_class("Child", Some(ClassStereotype::Phase));
        let adult = model.create_class("Adult", Some(ClassStereotype::Phase));
        let g1 = model.create_generalization(&person, &child);
        let g2 = model.create_generalization(&person, &adult);
        model.create_generalization_set(&[g1, g2], true, true);

        let mut t = Transformer::new(&model);
        t.transform_model().unwrap();
        let facts = t.fragments().facts();
        assert!(facts.contains(&"fact generalization {\n        Child in Person\n}".to_string()));
        assert!(facts.contains(
            &"fact generalizationSet {\n        no Child & Adult\n        Person = Child+Adult\n}"
                .to_string()
        ));
    }

    #[test]
    fn incomplete_overlapping_set_emits_nothing() {
        let mut model = Model::new("m");
        let person = model.create_kind("Person");
        let student = model.create_class("Student", Some(ClassStereotype::Role));
        let g = model.create_generalization(&person, &student);
        model.create_generalization_set(&[g], false, false);

        let mut t = Transformer::new(&model);
        t.transform_model().unwrap();
        assert!(!t
            .fragments()
            .facts()
            .iter()
            .any(|f| f.starts_with("fact generalizationSet")));
    }

    #[test]
    fn datatype_generalization_is_skipped() {
        let mut model = Model::new("m");
        let text = model.create_datatype("Text");
        let name = model.create_datatype("Name");
        model.create_generalization(&text, &name);

        let mut t = Transformer::new(&model);
        t.transform_model().unwrap();
        assert!(t.fragments().facts().is_empty());
    }

    #[test]
    fn dangling_member_is_an_error() {
        let mut model = Model::new("m");
        model.create_generalization_set(&[ElementId::new("generalization-99")], true, false);

        let err = Transformer::new(&model).transform_model().unwrap_err();
        assert!(matches!(err, TransformError::DanglingReference { .. }));
    }
}
