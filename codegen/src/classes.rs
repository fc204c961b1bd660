//! Class pass.
//!
//! Datatypes become `sig … in Datatype`, enumerations become `enum`, and every
//! other represented class becomes a world-indexed set of endurants with its
//! rigidity stated through the ontological-properties library.

use std::fmt;

use ontouml_model::{Class, ClassStereotype, Element, ElementRef, Nature};

use crate::emit::block;
use crate::error::Result;
use crate::grammar::is_builtin_signature;
use crate::Transformer;

/// The base signature a class's instances are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassNature {
    /// Substantials: functional complexes, collectives, quantities.
    Object,
    /// Moments: relators, modes, qualities.
    Aspect,
    /// Mixed or unknown.
    Endurant,
}

impl ClassNature {
    /// Name of the base signature.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClassNature::Object => "Object",
            ClassNature::Aspect => "Aspect",
            ClassNature::Endurant => "Endurant",
        }
    }
}

impl fmt::Display for ClassNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The nature of a class that is encoded as a world field, or `None` for
/// datatypes, enumerations, events, situations, types and abstracts.
#[must_use]
pub fn nature_of(class: &Class) -> Option<ClassNature> {
    if matches!(
        class.stereotype,
        Some(
            ClassStereotype::Datatype
                | ClassStereotype::Enumeration
                | ClassStereotype::Event
                | ClassStereotype::Situation
                | ClassStereotype::Type
                | ClassStereotype::Abstract
        )
    ) {
        return None;
    }

    let natures = class.natures();
    let is_endurant = |n: &Nature| n.is_substantial() || n.is_moment();
    if natures.is_empty() {
        return Some(ClassNature::Endurant);
    }
    if !natures.iter().any(is_endurant) {
        return None;
    }
    if natures.iter().all(|n| n.is_substantial()) {
        Some(ClassNature::Object)
    } else if natures.iter().all(|n| n.is_moment()) {
        Some(ClassNature::Aspect)
    } else {
        Some(ClassNature::Endurant)
    }
}

/// Returns `true` if the class is an enumeration with at least one literal.
fn is_enum(class: &Class) -> bool {
    class.has_enumeration_stereotype() && !class.literals.is_empty()
}

/// Returns `true` if values of `element` have an Alloy signature: datatypes,
/// enumerations and world-field classes.
#[must_use]
pub fn has_signature(element: ElementRef<'_>) -> bool {
    match element {
        ElementRef::Class(class) => {
            class.has_datatype_stereotype()
                || class.has_enumeration_stereotype()
                || nature_of(class).is_some()
        }
        ElementRef::Relation(_) => false,
    }
}

/// Returns `true` if `element` is a class encoded as a world field.
#[must_use]
pub fn has_world_field(element: ElementRef<'_>) -> bool {
    matches!(element, ElementRef::Class(class) if nature_of(class).is_some())
}

/// The signature that values typed by `element` belong to: the datatype or
/// enumeration itself, or the base signature of a world-field class.
pub(crate) fn signature_of(t: &mut Transformer<'_>, element: ElementRef<'_>) -> Option<String> {
    let ElementRef::Class(class) = element else {
        return None;
    };
    if class.has_datatype_stereotype() || class.has_enumeration_stereotype() {
        return Some(t.normalize(class));
    }
    nature_of(class).map(|nature| nature.as_str().to_string())
}

/// The instances of `element` inside world `w`: `w.Name` for a world-field
/// class, the signature `Name` itself for a datatype or enumeration.
pub(crate) fn in_world(element: ElementRef<'_>, name: &str) -> String {
    if has_world_field(element) {
        format!("w.{name}")
    } else {
        name.to_string()
    }
}

/// The instances of `element` across all worlds: `World.Name` for a
/// world-field class, the signature `Name` otherwise.
pub(crate) fn across_worlds(element: ElementRef<'_>, name: &str) -> String {
    if has_world_field(element) {
        format!("World.{name}")
    } else {
        name.to_string()
    }
}

/// Emits the declarations of one class.
///
/// # Errors
///
/// Currently infallible; returns `Result` to match the other passes.
pub fn transform_class(t: &mut Transformer<'_>, class: &Class) -> Result<()> {
    if class.has_datatype_stereotype()
        || (class.has_enumeration_stereotype() && class.literals.is_empty())
    {
        let name = t.normalize(class);
        let declared = !is_builtin_signature(&name);
        t.fragments.add_datatype(&name, declared);
        return Ok(());
    }

    if is_enum(class) {
        let name = t.normalize_declared(class);
        let literals: Vec<String> = class.literals.iter().map(|l| t.normalize(l)).collect();
        t.fragments
            .add_enum(format!("enum {name} {{ {} }}", literals.join(", ")));
        return Ok(());
    }

    let Some(nature) = nature_of(class) else {
        tracing::debug!(class = %class.id(), stereotype = ?class.stereotype, "class not represented");
        return Ok(());
    };

    let name = t.normalize_declared(class);
    t.fragments
        .add_world_field(format!("{name}: set exists:>{nature}"));

    if let Some(stereotype) = class.stereotype {
        if stereotype.is_rigid() {
            t.fragments.add_fact(block(
                "fact rigid",
                &[format!("rigidity[{name},{nature},exists]")],
            ));
        } else if stereotype.is_anti_rigid() {
            t.fragments.add_fact(block(
                "fact antirigid",
                &[format!("antirigidity[{name},{nature},exists]")],
            ));
        }
    }
    Ok(())
}

/// Emits the world-signature facts that tie the base signatures to the
/// classes covering them: ultimate sortals cover `Object`, moment classes
/// cover `Aspect`.
pub fn transform_additional_class_constraints(t: &mut Transformer<'_>) {
    let model = t.model;
    let mut sortals = Vec::new();
    let mut moments = Vec::new();

    for class in &model.classes {
        let (Some(stereotype), Some(nature)) = (class.stereotype, nature_of(class)) else {
            continue;
        };
        if stereotype.is_ultimate_sortal() && nature == ClassNature::Object {
            sortals.push(t.normalize(class));
        } else if stereotype.is_moment() && nature == ClassNature::Aspect {
            moments.push(t.normalize(class));
        }
    }

    if !sortals.is_empty() {
        t.fragments
            .add_world_fact(format!("exists:>Object in {}", sortals.join("+")));
    }
    if !moments.is_empty() {
        t.fragments
            .add_world_fact(format!("exists:>Aspect in {}", moments.join("+")));
    }
}
