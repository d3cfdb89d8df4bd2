use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Indexing definition for a single field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub kind: PropertyType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_analyzer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_values: Option<bool>,
    #[serde(rename = "fielddata", skip_serializing_if = "Option::is_none")]
    pub field_data: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_above: Option<u32>,
    /// Multi-fields: the same source value indexed another way.
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub fields: BTreeMap<String, Property>,
    /// Sub-properties of a `nested` or `object` field.
    #[serde(
        default,
        deserialize_with = "crate::models::null_as_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub properties: BTreeMap<String, Property>,
}

impl Property {
    pub fn new(kind: PropertyType) -> Self {
        Self {
            kind,
            format: None,
            analyzer: None,
            search_analyzer: None,
            index: None,
            doc_values: None,
            field_data: None,
            ignore_above: None,
            fields: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    pub fn text() -> Self {
        Self::new(PropertyType::Text)
    }

    pub fn keyword() -> Self {
        Self::new(PropertyType::Keyword)
    }

    pub fn integer() -> Self {
        Self::new(PropertyType::Integer)
    }

    pub fn long() -> Self {
        Self::new(PropertyType::Long)
    }

    pub fn date() -> Self {
        Self::new(PropertyType::Date)
    }

    pub fn boolean() -> Self {
        Self::new(PropertyType::Boolean)
    }

    pub fn geo_point() -> Self {
        Self::new(PropertyType::GeoPoint)
    }

    /// A `nested` field whose sub-documents are matched independently.
    pub fn nested<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Property)>,
        K: Into<String>,
    {
        Self::container(PropertyType::Nested, properties)
    }

    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Property)>,
        K: Into<String>,
    {
        Self::container(PropertyType::Object, properties)
    }

    fn container<I, K>(kind: PropertyType, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Property)>,
        K: Into<String>,
    {
        let mut property = Self::new(kind);
        property.properties = properties
            .into_iter()
            .map(|(name, p)| (name.into(), p))
            .collect();
        property
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.analyzer = Some(analyzer.into());
        self
    }

    pub fn with_search_analyzer(mut self, analyzer: impl Into<String>) -> Self {
        self.search_analyzer = Some(analyzer.into());
        self
    }

    pub fn with_index(mut self, index: bool) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_doc_values(mut self, doc_values: bool) -> Self {
        self.doc_values = Some(doc_values);
        self
    }

    pub fn with_field_data(mut self, enabled: bool) -> Self {
        self.field_data = Some(enabled);
        self
    }

    pub fn with_ignore_above(mut self, limit: u32) -> Self {
        self.ignore_above = Some(limit);
        self
    }

    /// Add a multi-field, e.g. a `keyword` variant under a `text` field.
    pub fn with_field(mut self, name: impl Into<String>, field: Property) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}

/// Elasticsearch field datatype. Unrecognized names are kept verbatim in `Other`.
///
/// Equality goes by wire name, so `Other("keyword")` equals `Keyword`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyType {
    Text,
    Keyword,
    Long,
    Integer,
    Short,
    Byte,
    Double,
    Float,
    HalfFloat,
    ScaledFloat,
    Date,
    Boolean,
    Binary,
    Ip,
    Object,
    Nested,
    GeoPoint,
    GeoShape,
    Completion,
    TokenCount,
    Other(String),
}

impl PropertyType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Keyword => "keyword",
            Self::Long => "long",
            Self::Integer => "integer",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::Double => "double",
            Self::Float => "float",
            Self::HalfFloat => "half_float",
            Self::ScaledFloat => "scaled_float",
            Self::Date => "date",
            Self::Boolean => "boolean",
            Self::Binary => "binary",
            Self::Ip => "ip",
            Self::Object => "object",
            Self::Nested => "nested",
            Self::GeoPoint => "geo_point",
            Self::GeoShape => "geo_shape",
            Self::Completion => "completion",
            Self::TokenCount => "token_count",
            Self::Other(name) => name,
        }
    }

    /// Whether fields of this type hold sub-properties.
    pub fn is_container(&self) -> bool {
        matches!(self.as_str(), "object" | "nested")
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for PropertyType {}

impl std::hash::Hash for PropertyType {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<String> for PropertyType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "text" => Self::Text,
            "keyword" => Self::Keyword,
            "long" => Self::Long,
            "integer" => Self::Integer,
            "short" => Self::Short,
            "byte" => Self::Byte,
            "double" => Self::Double,
            "float" => Self::Float,
            "half_float" => Self::HalfFloat,
            "scaled_float" => Self::ScaledFloat,
            "date" => Self::Date,
            "boolean" => Self::Boolean,
            "binary" => Self::Binary,
            "ip" => Self::Ip,
            "object" => Self::Object,
            "nested" => Self::Nested,
            "geo_point" => Self::GeoPoint,
            "geo_shape" => Self::GeoShape,
            "completion" => Self::Completion,
            "token_count" => Self::TokenCount,
            _ => Self::Other(name),
        }
    }
}

impl From<&str> for PropertyType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<PropertyType> for String {
    fn from(kind: PropertyType) -> Self {
        match kind {
            PropertyType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
