//! Repository item model
//!
//! Mirrors the JSON the DSpace REST API reports for items expanded with
//! `expand=metadata`. Members the lookups never read (`expand`,
//! `parentCollection`, `bitstreams`, ...) are ignored when decoding.

use crate::keys;
use serde::{Deserialize, Deserializer, Serialize};

/// Accept a JSON `null` wherever a string is expected
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn nullable_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A single `schema.element.qualifier` = value pair on an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    #[serde(default, deserialize_with = "nullable_string")]
    pub key: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl MetadataField {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }
}

/// Body of a `find-by-metadata-field` request.
///
/// Empty members are left out of the JSON so the repository matches on the
/// key alone where only a key is given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetadataQuery {
    pub key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

impl MetadataQuery {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    /// Query for items authored by `name` (already in `family, given` order)
    pub fn author(name: impl Into<String>) -> Self {
        Self::new(keys::AUTHOR, name)
    }
}

/// A repository item: identifier, display title, location and metadata.
///
/// The item type is not a member of its own; it lives in the metadata under
/// `dc.type` and is filtered like any other field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(rename = "uuid", default, deserialize_with = "nullable_string")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(default, deserialize_with = "nullable_vec")]
    pub metadata: Vec<MetadataField>,
}

impl Document {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder method to append a metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataField::new(key, value));
        self
    }

    /// Value of the first field with `key`.
    ///
    /// Only the first match is returned, so multi-valued keys such as
    /// authors need [`Document::values`].
    pub fn first_value(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// Every value recorded under `key`, in metadata order
    pub fn values<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.metadata
            .iter()
            .filter(move |m| m.key == key)
            .map(|m| m.value.as_str())
    }

    /// `dc.title`, falling back to the item name
    pub fn title(&self) -> Option<&str> {
        self.first_value(keys::TITLE)
            .or(Some(self.name.as_str()))
            .filter(|t| !t.is_empty())
    }

    /// `dc.identifier.uri`, falling back to the REST link
    pub fn uri(&self) -> Option<&str> {
        self.first_value(keys::URI)
            .or(self.link.as_deref())
            .filter(|u| !u.is_empty())
    }

    /// Year from `dc.date.issued` (`2019`, `2019-06`, `2019-06-03T...`)
    pub fn year(&self) -> Option<u16> {
        let issued = self.first_value(keys::DATE_ISSUED)?.trim();
        let digits = issued.get(..4)?;
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok()
    }

    pub fn advisors(&self) -> impl Iterator<Item = &str> {
        self.values(keys::ADVISOR)
    }
}
