//! Typed model of the `_template` API body.

pub mod mapping;
pub mod property;
pub mod template;

pub use mapping::{All, Mappings, Source, TypeMapping};
pub use property::{Property, PropertyType};
pub use template::{Alias, Settings, Template};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the empty value, the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
