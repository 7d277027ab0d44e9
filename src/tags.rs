use std::fmt::{Display, Formatter};

use crate::values::{MetaKey, MetaMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Property,
    Name,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub kind: TagKind,
    pub key: &'static str,
    pub value: String,
}

// values are written as is, escaping is on the templating layer
impl Display for MetaTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TagKind::Property => {
                write!(f, "<meta property=\"{}\" content=\"{}\">", self.key, self.value)
            }
            TagKind::Name => write!(f, "<meta name=\"{}\" content=\"{}\">", self.key, self.value),
        }
    }
}

fn tag_key(key: &MetaKey) -> (TagKind, &'static str) {
    match key {
        MetaKey::Url => (TagKind::Property, "og:url"),
        MetaKey::Title => (TagKind::Property, "og:title"),
        MetaKey::Image => (TagKind::Property, "og:image"),
        MetaKey::ImageWidth => (TagKind::Property, "og:image:width"),
        MetaKey::ImageHeight => (TagKind::Property, "og:image:height"),
        MetaKey::Video => (TagKind::Property, "og:video"),
        MetaKey::VideoWidth => (TagKind::Property, "og:video:width"),
        MetaKey::VideoHeight => (TagKind::Property, "og:video:height"),
        MetaKey::Description => (TagKind::Name, "description"),
        MetaKey::Canonical => (TagKind::Name, "canonical"),
        MetaKey::Author => (TagKind::Name, "author"),
        MetaKey::Robots => (TagKind::Name, "robots"),
    }
}

/// Ordered tag sequence. og:type comes first, og:url second, the rest in
/// MetaKey order. Empty values are omitted, description is always emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTags(Vec<MetaTag>);

impl MetaTags {
    pub fn new(resolved: &MetaMap) -> Self {
        let mut tags = vec![MetaTag {
            kind: TagKind::Property,
            key: "og:type",
            value: "website".to_string(),
        }];
        for key in MetaKey::ALL {
            let value = resolved.get(&key).filter(|value| !value.is_empty());
            let (kind, name) = tag_key(&key);
            match value {
                Some(value) => tags.push(MetaTag {
                    kind,
                    key: name,
                    value: value.to_string(),
                }),
                None if key == MetaKey::Description => tags.push(MetaTag {
                    kind,
                    key: name,
                    value: String::new(),
                }),
                None => {}
            }
        }
        Self(tags)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MetaTag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for MetaTags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|tag| tag.to_string())
                .collect::<Vec<String>>()
                .join("\n  ")
        )
    }
}
