//! Programmatic model construction.
//!
//! Mirrors the way a modeling tool builds a model element by element: every
//! `create_*` method allocates a fresh [`ElementId`], appends the element in
//! model order and returns the id so later calls can refer to it.

use crate::model::{
    Class, ClassStereotype, Element, ElementId, ElementKind, Generalization, GeneralizationSet,
    Literal, Model, Property, Relation, RelationStereotype,
};

impl Model {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Allocates an id of the form `<kind>-<n>` not yet used in the model.
    pub fn fresh_id(&self, kind: ElementKind) -> ElementId {
        let mut n = self.classes.len()
            + self.relations.len()
            + self.generalizations.len()
            + self.generalization_sets.len()
            + 1;
        loop {
            let id = ElementId::new(format!("{}-{n}", kind.tag()));
            if !self.contains_id(&id) {
                return id;
            }
            n += 1;
        }
    }

    /// Creates a class with the given stereotype.
    pub fn create_class(&mut self, name: &str, stereotype: Option<ClassStereotype>) -> ElementId {
        let id = self.fresh_id(ElementKind::Class);
        self.classes.push(Class::new(id.clone(), Some(name), stereotype));
        id
    }

    /// Creates a `«kind»` class.
    pub fn create_kind(&mut self, name: &str) -> ElementId {
        self.create_class(name, Some(ClassStereotype::Kind))
    }

    /// Creates a `«datatype»` class.
    pub fn create_datatype(&mut self, name: &str) -> ElementId {
        self.create_class(name, Some(ClassStereotype::Datatype))
    }

    /// Creates an `«enumeration»` with one literal per name.
    pub fn create_enumeration(&mut self, name: &str, literals: &[&str]) -> ElementId {
        let id = self.create_class(name, Some(ClassStereotype::Enumeration));
        let literal_ids: Vec<ElementId> = literals
            .iter()
            .enumerate()
            .map(|(i, _)| ElementId::new(format!("{id}-literal-{}", i + 1)))
            .collect();
        if let Some(class) = self.class_mut(&id) {
            class.literals = literal_ids
                .into_iter()
                .zip(literals)
                .map(|(lit_id, lit_name)| Literal {
                    id: lit_id,
                    name: Some((*lit_name).to_string()),
                })
                .collect();
        }
        id
    }

    /// Creates an unnamed binary relation from `source` to `target`.
    pub fn create_binary_relation(
        &mut self,
        source: &ElementId,
        target: &ElementId,
        stereotype: Option<RelationStereotype>,
    ) -> ElementId {
        let id = self.fresh_id(ElementKind::Relation);
        let source_end = Property::new(
            ElementId::new(format!("{id}-source")),
            None,
            Some(source.clone()),
        );
        let target_end = Property::new(
            ElementId::new(format!("{id}-target")),
            None,
            Some(target.clone()),
        );
        self.relations.push(Relation {
            id: id.clone(),
            name: None,
            stereotype,
            properties: vec![source_end, target_end],
        });
        id
    }

    /// Creates a named `«material»` relation.
    pub fn create_material_relation(
        &mut self,
        name: &str,
        source: &ElementId,
        target: &ElementId,
    ) -> ElementId {
        let id = self.create_binary_relation(source, target, Some(RelationStereotype::Material));
        if let Some(relation) = self.relation_mut(&id) {
            relation.name = Some(name.to_string());
        }
        id
    }

    /// Adds an attribute to a class. Returns `None` if the class does not exist.
    pub fn create_attribute(
        &mut self,
        class: &ElementId,
        name: &str,
        property_type: &ElementId,
    ) -> Option<ElementId> {
        let owner = self.class_mut(class)?;
        let id = ElementId::new(format!("{}-attribute-{}", owner.id, owner.attributes.len() + 1));
        owner.attributes.push(Property::new(
            id.clone(),
            Some(name),
            Some(property_type.clone()),
        ));
        Some(id)
    }

    /// Creates a generalization from `specific` to `general`.
    pub fn create_generalization(&mut self, general: &ElementId, specific: &ElementId) -> ElementId {
        let id = self.fresh_id(ElementKind::Generalization);
        self.generalizations.push(Generalization {
            id: id.clone(),
            name: None,
            general: general.clone(),
            specific: specific.clone(),
        });
        id
    }

    /// Creates a generalization set over existing generalizations.
    pub fn create_generalization_set(
        &mut self,
        generalizations: &[ElementId],
        is_disjoint: bool,
        is_complete: bool,
    ) -> ElementId {
        let id = self.fresh_id(ElementKind::GeneralizationSet);
        self.generalization_sets.push(GeneralizationSet {
            id: id.clone(),
            name: None,
            is_disjoint,
            is_complete,
            generalizations: generalizations.to_vec(),
        });
        id
    }

    /// Mutable access to a class.
    pub fn class_mut(&mut self, id: &ElementId) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| &c.id == id)
    }

    /// Mutable access to a relation.
    pub fn relation_mut(&mut self, id: &ElementId) -> Option<&mut Relation> {
        self.relations.iter_mut().find(|r| &r.id == id)
    }

    /// Mutable access to any attribute or relation end.
    pub fn property_mut(&mut self, id: &ElementId) -> Option<&mut Property> {
        let in_classes = self
            .classes
            .iter_mut()
            .flat_map(|c| c.attributes.iter_mut());
        let in_relations = self
            .relations
            .iter_mut()
            .flat_map(|r| r.properties.iter_mut());
        in_classes.chain(in_relations).find(|p| p.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_fresh() {
        let mut model = Model::new("test");
        let a = model.create_kind("A");
        let b = model.create_kind("B");
        let r = model.create_binary_relation(&a, &b, None);
        assert_ne!(a, b);
        assert_ne!(a, r);
        assert!(model.contains_id(&r));
        assert!(model.contains_id(&ElementId::new(format!("{r}-source"))));
    }

    #[test]
    fn attributes_are_owned_by_their_class() {
        let mut model = Model::new("test");
        let person = model.create_kind("Person");
        let string = model.create_datatype("String");
        let name = model.create_attribute(&person, "name", &string);
        let pairs: Vec<(ElementId, ElementId)> = model
            .attributes()
            .map(|(c, a)| (c.id.clone(), a.id.clone()))
            .collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(Some(&pairs[0].1), name.as_ref());
        assert_eq!(pairs[0].0, person);
        assert_eq!(model.create_attribute(&ElementId::new("nope"), "x", &string), None);
    }

    #[test]
    fn property_mut_reaches_relation_ends() {
        let mut model = Model::new("test");
        let a = model.create_kind("A");
        let b = model.create_kind("B");
        let r = model.create_binary_relation(&a, &b, None);
        let target = ElementId::new(format!("{r}-target"));
        if let Some(end) = model.property_mut(&target) {
            end.is_read_only = true;
        }
        assert!(model.relations[0].properties[1].is_read_only);
    }

    #[test]
    fn enumeration_literals() {
        let mut model = Model::new("test");
        let color = model.create_enumeration("Color", &["red", "green"]);
        let class = model.find_class(&color);
        assert_eq!(class.map(|c| c.literals.len()), Some(2));
    }
}
