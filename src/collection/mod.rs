//! Collection module
//!
//! Input model for Postman-style collection exports.
//!
//! # Overview
//!
//! - `Collection` - metadata plus a tree of `Node`s
//! - `Group` - named folder whose name tags its items
//! - `Item` - one captured request and the responses seen for it

mod parser;
mod types;

pub use parser::{load_collection, load_collection_from_str};
pub use types::{
    Body, Collection, CollectionInfo, Description, Group, Item, KeyValue, Node, Request, Response,
    Url,
};
