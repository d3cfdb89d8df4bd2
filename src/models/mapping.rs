use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::property::Property;

/// Type name -> mapping, as found under a template's `mappings` key.
pub type Mappings = BTreeMap<String, TypeMapping>;

/// Field mappings for one document type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeMapping {
    #[serde(rename = "_all", skip_serializing_if = "Option::is_none")]
    pub all: Option<All>,
    #[serde(rename = "_source", skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: BTreeMap<String, Property>,
}

/// Controls the catch-all `_all` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct All {
    pub enabled: bool,
}

/// Controls storage of the original document in `_source`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub includes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

impl TypeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_all(mut self, enabled: bool) -> Self {
        self.all = Some(All { enabled });
        self
    }

    pub fn with_source(mut self, enabled: bool) -> Self {
        self.source = Some(Source {
            enabled,
            ..Source::default()
        });
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, property: Property) -> Self {
        self.properties.insert(name.into(), property);
        self
    }
}
