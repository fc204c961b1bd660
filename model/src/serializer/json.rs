//! JSON reader and writer for [`Model`].

use crate::model::Model;

/// Parses a model from its JSON form.
///
/// # Errors
///
/// Returns an error if the text is not valid JSON or does not match the
/// model schema (unknown stereotype, missing `id`, ...).
pub fn from_json(text: &str) -> Result<Model, serde_json::Error> {
    serde_json::from_str(text)
}

/// Serializes a model to pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails; with the derived impls this only
/// happens on I/O-free formatter failures.
pub fn to_json(model: &Model) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassStereotype, Nature, RelationStereotype};

    #[test]
    fn reads_camel_case_document() {
        let text = r#"{
            "name": "Hospital",
            "classes": [
                { "id": "c1", "name": "Person", "stereotype": "kind",
                  "restrictedTo": ["functional-complex"],
                  "attributes": [
                      { "id": "a1", "name": "name", "propertyType": "c2",
                        "cardinality": "1", "isReadOnly": true }
                  ] },
                { "id": "c2", "name": "String", "stereotype": "datatype" },
                { "id": "c3", "name": "Patient", "stereotype": "roleMixin" }
            ],
            "relations": [
                { "id": "r1", "stereotype": "externalDependence",
                  "properties": [
                      { "id": "r1s", "propertyType": "c1" },
                      { "id": "r1t", "propertyType": "c3", "isOrdered": true }
                  ] }
            ],
            "generalizationSets": []
        }"#;

        let model = from_json(text).unwrap_or_default();
        assert_eq!(model.classes.len(), 3);
        assert_eq!(model.classes[0].restricted_to, vec![Nature::FunctionalComplex]);
        assert_eq!(model.classes[2].stereotype, Some(ClassStereotype::RoleMixin));
        let attr = &model.classes[0].attributes[0];
        assert!(attr.is_read_only);
        assert_eq!(attr.cardinality, "1");

        let relation = &model.relations[0];
        assert_eq!(relation.stereotype, Some(RelationStereotype::ExternalDependence));
        assert_eq!(relation.properties[0].cardinality, "0..*");
        assert!(relation.properties[1].is_ordered);
    }

    #[test]
    fn round_trips_through_text() {
        let mut model = Model::new("m");
        let a = model.create_kind("A");
        let b = model.create_datatype("B");
        model.create_attribute(&a, "b", &b);

        let text = to_json(&model).unwrap_or_default();
        assert!(text.contains("\"propertyType\""));
        assert_eq!(from_json(&text).ok(), Some(model));
    }

    #[test]
    fn rejects_unknown_stereotype() {
        let text = r#"{ "classes": [ { "id": "c", "stereotype": "gadget" } ] }"#;
        assert!(from_json(text).is_err());
    }
}
