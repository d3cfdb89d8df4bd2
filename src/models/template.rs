use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::CodecError;
use crate::es::codec;
use crate::models::mapping::{Mappings, TypeMapping};

/// An index template: applied to every new index whose name matches `template`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Index name pattern, e.g. `logs-*`.
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "Settings::is_empty"
    )]
    pub settings: Settings,
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub mappings: Mappings,
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub aliases: BTreeMap<String, Alias>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_shards: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_replicas: Option<u32>,
    /// Duration string such as `30s`, or `-1` to disable refresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_interval: Option<String>,
}

impl Settings {
    pub fn is_empty(&self) -> bool {
        self.number_of_shards.is_none()
            && self.number_of_replicas.is_none()
            && self.refresh_interval.is_none()
    }
}

/// Alias attached to indices created from the template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Alias {
    /// Query DSL, kept as raw JSON. `Some(Value::Null)` is treated as unset.
    #[serde(skip_serializing_if = "filter_is_unset")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_routing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_routing: Option<String>,
}

fn filter_is_unset(filter: &Option<Value>) -> bool {
    matches!(filter, None | Some(Value::Null))
}

impl Template {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            template: pattern.into(),
            order: None,
            version: None,
            settings: Settings::default(),
            mappings: Mappings::new(),
            aliases: BTreeMap::new(),
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_version(mut self, version: i64) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_shards(mut self, shards: u32) -> Self {
        self.settings.number_of_shards = Some(shards);
        self
    }

    pub fn with_replicas(mut self, replicas: u32) -> Self {
        self.settings.number_of_replicas = Some(replicas);
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_mapping(mut self, type_name: impl Into<String>, mapping: TypeMapping) -> Self {
        self.mappings.insert(type_name.into(), mapping);
        self
    }

    pub fn with_alias(mut self, name: impl Into<String>, alias: Alias) -> Self {
        self.aliases.insert(name.into(), alias);
        self
    }

    pub fn to_json(&self) -> Result<String, CodecError> {
        codec::encode_template(self)
    }

    pub fn from_json(input: &str) -> Result<Self, CodecError> {
        codec::decode_template(input)
    }
}
