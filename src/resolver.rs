use tracing::debug;
use url::Url;

use crate::{
    fields::MetaFields,
    media::{image_entries, video_entries},
    values::{MetaKey, MetaMap, MetaValue},
};

/// Capabilities of an object that owns metadata. A host without an attached
/// record contributes nothing; title and image are fallbacks for hosts that
/// expose them.
pub trait MetaSource {
    fn meta(&self) -> Option<&MetaFields>;

    fn title(&self) -> Option<&str> {
        None
    }

    fn image(&self) -> Option<&Url> {
        None
    }
}

/// A record is its own source.
impl MetaSource for MetaFields {
    fn meta(&self) -> Option<&MetaFields> {
        Some(self)
    }
}

fn record_entries(source: &dyn MetaSource) -> MetaMap {
    let mut entries = MetaMap::new();
    let Some(fields) = source.meta() else {
        return entries;
    };
    let title = if fields.title.is_empty() {
        source.title().unwrap_or_default()
    } else {
        fields.title.as_str()
    };
    entries.insert(MetaKey::Title, title);
    entries.insert(MetaKey::Description, fields.description.as_str());
    entries.insert(MetaKey::Canonical, fields.canonical.as_str());
    // a non-empty canonical overrides the caller supplied url, an empty one
    // is skipped when merging
    entries.insert(MetaKey::Url, fields.canonical.as_str());
    entries.insert(MetaKey::Author, fields.author.as_str());
    entries.insert(MetaKey::Robots, fields.robots.as_str());
    entries.extend(image_entries(fields, source));
    entries.extend(video_entries(fields));
    entries
}

/// Merge defaults, the attached record, and explicit overrides into one
/// resolved mapping. Per key: override if non-empty, else record value if
/// non-empty, else default. Never fails, absent inputs degrade to empty
/// strings.
pub fn resolve(
    url: impl Into<MetaValue>,
    source: Option<&dyn MetaSource>,
    defaults: &MetaMap,
    overrides: &MetaMap,
) -> MetaMap {
    let url = url.into();
    debug!("resolve meta tags for {}", url);
    let mut resolved = MetaMap::new();
    resolved.insert(MetaKey::Title, "");
    resolved.insert(MetaKey::Description, "");
    resolved.insert(MetaKey::Image, "");
    resolved.insert(MetaKey::Url, url);
    resolved.extend(defaults.clone());
    if let Some(source) = source {
        resolved.merge_non_empty(record_entries(source));
    }
    resolved.merge_non_empty(overrides.clone());
    resolved
}
