use std::{
    collections::BTreeMap,
    fmt::{Display, Formatter},
    str::FromStr,
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::OgTagsError;

/// Keys of the resolved metadata mapping. Declaration order is the tag
/// emission order: properties first, then name tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKey {
    Url,
    Title,
    Image,
    ImageWidth,
    ImageHeight,
    Video,
    VideoWidth,
    VideoHeight,
    Description,
    Canonical,
    Author,
    Robots,
}

impl MetaKey {
    pub const ALL: [MetaKey; 12] = [
        MetaKey::Url,
        MetaKey::Title,
        MetaKey::Image,
        MetaKey::ImageWidth,
        MetaKey::ImageHeight,
        MetaKey::Video,
        MetaKey::VideoWidth,
        MetaKey::VideoHeight,
        MetaKey::Description,
        MetaKey::Canonical,
        MetaKey::Author,
        MetaKey::Robots,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKey::Url => "url",
            MetaKey::Title => "title",
            MetaKey::Image => "image",
            MetaKey::ImageWidth => "image:width",
            MetaKey::ImageHeight => "image:height",
            MetaKey::Video => "video",
            MetaKey::VideoWidth => "video:width",
            MetaKey::VideoHeight => "video:height",
            MetaKey::Description => "description",
            MetaKey::Canonical => "canonical",
            MetaKey::Author => "author",
            MetaKey::Robots => "robots",
        }
    }
}

impl FromStr for MetaKey {
    type Err = OgTagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "url" => Ok(MetaKey::Url),
            "title" => Ok(MetaKey::Title),
            "image" => Ok(MetaKey::Image),
            "image:width" => Ok(MetaKey::ImageWidth),
            "image:height" => Ok(MetaKey::ImageHeight),
            "video" => Ok(MetaKey::Video),
            "video:width" => Ok(MetaKey::VideoWidth),
            "video:height" => Ok(MetaKey::VideoHeight),
            "description" => Ok(MetaKey::Description),
            "canonical" => Ok(MetaKey::Canonical),
            "author" => Ok(MetaKey::Author),
            "robots" => Ok(MetaKey::Robots),
            _ => Err(OgTagsError::UnknownKey(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetaValue {
    Number(u32),
    Text(Arc<str>),
}

impl MetaValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetaValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            MetaValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, MetaValue::Text(text) if text.is_empty())
    }
}

impl Display for MetaValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaValue::Number(number) => write!(f, "{number}"),
            MetaValue::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<&str> for MetaValue {
    fn from(value: &str) -> Self {
        MetaValue::Text(value.into())
    }
}

impl From<String> for MetaValue {
    fn from(value: String) -> Self {
        MetaValue::Text(value.into())
    }
}

impl From<Arc<str>> for MetaValue {
    fn from(value: Arc<str>) -> Self {
        MetaValue::Text(value)
    }
}

impl From<u32> for MetaValue {
    fn from(value: u32) -> Self {
        MetaValue::Number(value)
    }
}

// emptiness checks compare plain strings, so url is evaluated right away
impl From<&Url> for MetaValue {
    fn from(value: &Url) -> Self {
        MetaValue::Text(value.as_str().into())
    }
}

impl From<Url> for MetaValue {
    fn from(value: Url) -> Self {
        MetaValue::Text(value.as_str().into())
    }
}

impl TryFrom<&Value> for MetaValue {
    type Error = OgTagsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(text.as_str().into()),
            Value::Number(number) => number
                .as_u64()
                .and_then(|number| u32::try_from(number).ok())
                .map(MetaValue::Number)
                .ok_or_else(|| OgTagsError::UnsupportedValue(value.to_string())),
            _ => Err(OgTagsError::UnsupportedValue(value.to_string())),
        }
    }
}

/// Mapping from meta key to value. Iteration yields keys in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaMap(BTreeMap<MetaKey, MetaValue>);

impl MetaMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, key: MetaKey, value: impl Into<MetaValue>) {
        self.0.insert(key, value.into());
    }

    pub fn get(&self, key: &MetaKey) -> Option<&MetaValue> {
        self.0.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MetaKey, &MetaValue)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn extend(&mut self, other: MetaMap) {
        self.0.extend(other.0);
    }

    /// Overlay that skips empty values. A value explicitly set to the empty
    /// string must not erase a good one underneath.
    pub fn merge_non_empty(&mut self, other: MetaMap) {
        for (key, value) in other.0 {
            if !value.is_empty() {
                self.0.insert(key, value);
            }
        }
    }
}

impl FromIterator<(MetaKey, MetaValue)> for MetaMap {
    fn from_iter<T: IntoIterator<Item = (MetaKey, MetaValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<&Value> for MetaMap {
    type Error = OgTagsError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value
            .as_object()
            .ok_or_else(|| OgTagsError::UnsupportedValue(value.to_string()))?;
        let mut map = MetaMap::new();
        for (key, value) in object {
            map.insert(key.parse()?, MetaValue::try_from(value)?);
        }
        Ok(map)
    }
}
