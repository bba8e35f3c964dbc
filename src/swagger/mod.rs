//! Swagger 2.0 output model
//!
//! Serde types for the generated document, ready to be written as JSON or YAML.

mod types;

pub use types::{
    Info, Operation, Parameter, PathItem, Paths, Responses, SwaggerDocument, SWAGGER_VERSION,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SchemaType, SwaggerSchema};
    use crate::types::ParameterLocation;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_typed_parameter_json() {
        let param = Parameter::typed(ParameterLocation::Query, "page", SchemaType::String, false);
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"in": "query", "name": "page", "type": "string"})
        );

        let param = Parameter::typed(ParameterLocation::Header, "X-Id", SchemaType::String, true);
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"in": "header", "name": "X-Id", "required": true, "type": "string"})
        );
    }

    #[test]
    fn test_body_parameter_json() {
        let param = Parameter::body("body", SwaggerSchema::Boolean, true);
        assert_eq!(
            serde_json::to_value(&param).unwrap(),
            json!({"in": "body", "name": "body", "required": true, "schema": {"type": "boolean"}})
        );
    }

    #[test]
    fn test_document_skips_unset_fields() {
        let doc = SwaggerDocument {
            swagger: SWAGGER_VERSION.to_string(),
            info: Info {
                title: "API".to_string(),
                description: "No description".to_string(),
                version: "1.0.0".to_string(),
            },
            host: None,
            basepath: Some("/v1".to_string()),
            schemes: vec!["https".to_string()],
            consumes: None,
            produces: None,
            paths: Paths::new(),
        };

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            value,
            json!({
                "swagger": "2.0",
                "info": {"title": "API", "description": "No description", "version": "1.0.0"},
                "basepath": "/v1",
                "schemes": ["https"],
                "paths": {}
            })
        );
        assert_eq!(doc.operation_count(), 0);
        assert_eq!(doc.parameter_count(), 0);
    }
}
