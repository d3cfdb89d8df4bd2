//! Typed Elasticsearch index templates with a deterministic JSON codec.
//!
//! Optional attributes are `Option`s and are omitted from the encoded output
//! when unset. Every map is a `BTreeMap`, so encoding is byte-stable.

pub mod config;
pub mod error;
pub mod es;
pub mod models;

pub use error::CodecError;
pub use es::codec::{DocumentKind, decode, encode};
pub use models::{
    Alias, All, Mappings, Property, PropertyType, Settings, Source, Template, TypeMapping,
};
