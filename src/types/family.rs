//! Product family resource.

use super::response::{ListResponse, ResponseLinks};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product family. `code` is its identity and never changes.
///
/// Optional fields left empty are omitted on the wire, so a `Family` with
/// only some fields set acts as a partial update when upserted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub code: String,
    #[serde(default)]
    pub attribute_as_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_as_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<String>,
    /// Channel code -> attribute codes required on that channel.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attribute_requirements: BTreeMap<String, Vec<String>>,
    /// Locale code -> label.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
}

impl Family {
    pub fn new(code: impl Into<String>, attribute_as_label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            attribute_as_label: attribute_as_label.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute_as_image(mut self, attribute: impl Into<String>) -> Self {
        self.attribute_as_image = Some(attribute.into());
        self
    }

    pub fn with_attributes<I, S>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(Into::into));
        self
    }

    pub fn with_requirement<I, S>(mut self, channel: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_requirements.insert(
            channel.into(),
            attributes.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_label(mut self, locale: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(locale.into(), label.into());
        self
    }

    pub fn label(&self, locale: &str) -> Option<&str> {
        self.labels.get(locale).map(String::as_str)
    }
}

/// A family as returned inside a list page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FamilyItem {
    #[serde(flatten)]
    pub family: Family,
    #[serde(rename = "_links", default)]
    pub links: ResponseLinks,
}

pub type FamiliesResponse = ListResponse<FamilyItem>;

impl FamiliesResponse {
    /// Drop the per-item links and keep the families, in page order.
    pub fn into_families(self) -> Vec<Family> {
        self.embedded.items.into_iter().map(|item| item.family).collect()
    }
}
