//! Schema inference module
//!
//! Maps example request bodies to inlined Swagger 2.0 schema fragments.
//!
//! # Rules
//!
//! - **Objects**: `type: object` with one property per key, in insertion order
//! - **Arrays**: `type: array`, items inferred from the first element
//! - **Scalars**: `number`, `string` and `boolean`
//! - **Null**: rejected with [`crate::Error::UnsupportedType`]

mod inference;
mod types;

pub use inference::infer_schema;
pub use types::{SchemaType, SwaggerSchema};
