//! Parameter extraction module
//!
//! Turns the parts of a captured request into Swagger parameters.
//!
//! # Extractors
//!
//! - **Header**: one `string` parameter per header not listed in `omit.headers`
//! - **Body**: one parameter whose schema is inferred from the JSON or JSON5 payload
//! - **Path**: one `string` parameter per `{{name}}` segment
//! - **Query**: one parameter per query entry, typed by its captured value
//!
//! `require_all` marks every parameter of a listed category as required.

mod body;
mod extractors;

pub use body::{parse_body, BodyValue};

pub use extractors::{
    extract_body_params, extract_header_params, extract_parameters, extract_path_params,
    extract_query_params, placeholder_name, DEFAULT_BODY_NAME,
};
