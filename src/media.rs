use std::{collections::HashMap, sync::Arc};

use cloudinary::transformation::{Image, Transformations, crop_mode::CropMode, gravity::Gravity};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    error::OgTagsError,
    fields::MetaFields,
    resolver::MetaSource,
    values::{MetaKey, MetaMap},
};

pub const RECOMMENDED: &str = "recommended";
pub const RECOMMENDED_WIDTH: u32 = 1200;
pub const RECOMMENDED_HEIGHT: u32 = 630;

fn fill_crop(url: &Url, width: u32, height: u32) -> Url {
    match Image::try_from(url.clone()) {
        Ok(image) => image
            .add_transformation(Transformations::Crop(CropMode::Fill {
                width,
                height,
                gravity: Some(Gravity::AutoClassic),
            }))
            .build(),
        // not a cloudinary url, serve the stored file as is
        Err(_) => url.clone(),
    }
}

/// Stored media file with a set of named derived crops.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MediaReference {
    url: Url,
    #[serde(default)]
    crops: HashMap<Arc<str>, Url>,
}

impl MediaReference {
    pub fn new(url: Url) -> Self {
        let mut crops = HashMap::new();
        crops.insert(
            Arc::from(RECOMMENDED),
            fill_crop(&url, RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT),
        );
        Self { url, crops }
    }

    /// Uploaded video file. Only mp4 is accepted. Video references carry no
    /// crops.
    pub fn video(url: Url) -> Result<Self, OgTagsError> {
        if !url.path().ends_with(".mp4") {
            return Err(OgTagsError::UnsupportedVideoFormat(url.to_string()));
        }
        Ok(Self {
            url,
            crops: HashMap::new(),
        })
    }

    pub fn with_crop(mut self, name: &str, width: u32, height: u32) -> Self {
        self.crops
            .insert(Arc::from(name), fill_crop(&self.url, width, height));
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn crop(&self, name: &str) -> Option<&Url> {
        self.crops.get(name)
    }

    pub fn recommended(&self) -> Url {
        self.crops.get(RECOMMENDED).cloned().unwrap_or_else(|| {
            fill_crop(&self.url, RECOMMENDED_WIDTH, RECOMMENDED_HEIGHT)
        })
    }
}

/// Image entries for the resolved mapping. The recommended crop dimensions
/// are fixed, the crop itself enforces the aspect ratio.
pub fn image_entries(fields: &MetaFields, source: &dyn MetaSource) -> MetaMap {
    let mut entries = MetaMap::new();
    if let Some(image) = &fields.image {
        entries.insert(MetaKey::Image, image.recommended());
        entries.insert(MetaKey::ImageWidth, RECOMMENDED_WIDTH);
        entries.insert(MetaKey::ImageHeight, RECOMMENDED_HEIGHT);
    } else if let Some(image) = source.image() {
        // the fallback source has no derived crops, so no dimensions
        entries.insert(MetaKey::Image, image);
    } else {
        // explicit empty marker, the renderer treats it as "omit"
        entries.insert(MetaKey::Image, "");
    }
    entries
}

/// Video entries for the resolved mapping. Only the uploaded file is
/// surfaced, video_url stays schema-only.
pub fn video_entries(fields: &MetaFields) -> MetaMap {
    let mut entries = MetaMap::new();
    if let Some(video) = &fields.video {
        entries.insert(MetaKey::Video, video.url());
        entries.insert(MetaKey::VideoWidth, fields.video_width);
        entries.insert(MetaKey::VideoHeight, fields.video_height);
    }
    entries
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::values::MetaValue;

    struct Host {
        meta: Option<MetaFields>,
        image: Option<Url>,
    }

    impl MetaSource for Host {
        fn meta(&self) -> Option<&MetaFields> {
            self.meta.as_ref()
        }

        fn image(&self) -> Option<&Url> {
            self.image.as_ref()
        }
    }

    fn url(input: &str) -> Url {
        Url::parse(input).unwrap()
    }

    #[test]
    fn recommended_crop_for_cloudinary_hosted_image() {
        let image = MediaReference::new(url(
            "https://res.cloudinary.com/demo/image/upload/sample.jpg",
        ));
        let recommended = image.recommended();

        assert!(recommended.as_str().contains("1200"));
        assert!(recommended.as_str().contains("630"));
    }

    #[test]
    fn recommended_crop_falls_back_to_stored_url() {
        let image = MediaReference::new(url("https://example.com/media/cat.jpg"));

        assert_eq!(image.recommended(), url("https://example.com/media/cat.jpg"));
    }

    #[test]
    fn video_must_be_mp4() {
        assert!(MediaReference::video(url("https://example.com/media/clip.mov")).is_err());
        assert!(MediaReference::video(url("https://example.com/media/clip.mp4")).is_ok());
    }

    #[test]
    fn record_image_wins_over_host_image() {
        let host = Host {
            meta: Some(MetaFields {
                image: Some(MediaReference::new(url("https://example.com/meta.jpg"))),
                ..MetaFields::default()
            }),
            image: Some(url("https://example.com/plain.jpg")),
        };
        let entries = image_entries(host.meta().unwrap(), &host);

        assert_eq!(
            entries.get(&MetaKey::Image),
            Some(&"https://example.com/meta.jpg".into())
        );
        assert_eq!(entries.get(&MetaKey::ImageWidth), Some(&1200.into()));
        assert_eq!(entries.get(&MetaKey::ImageHeight), Some(&630.into()));
    }

    #[test]
    fn host_image_has_no_dimensions() {
        let host = Host {
            meta: Some(MetaFields::default()),
            image: Some(url("https://example.com/plain.jpg")),
        };
        let entries = image_entries(host.meta().unwrap(), &host);

        assert_eq!(
            entries.get(&MetaKey::Image),
            Some(&"https://example.com/plain.jpg".into())
        );
        assert_eq!(entries.get(&MetaKey::ImageWidth), None);
        assert_eq!(entries.get(&MetaKey::ImageHeight), None);
    }

    #[test]
    fn no_image_yields_empty_marker() {
        let host = Host {
            meta: Some(MetaFields::default()),
            image: None,
        };
        let entries = image_entries(host.meta().unwrap(), &host);

        assert_eq!(entries.get(&MetaKey::Image), Some(&MetaValue::from("")));
    }

    #[test]
    fn no_uploaded_video_yields_no_entries() {
        let fields = MetaFields {
            video_url: "https://example.com/media/clip.mp4".to_string(),
            video_width: 640,
            video_height: 480,
            ..MetaFields::default()
        };

        assert!(video_entries(&fields).is_empty());
    }

    #[test]
    fn uploaded_video_carries_dimensions() {
        let fields = MetaFields {
            video: Some(MediaReference::video(url("https://example.com/media/clip.mp4")).unwrap()),
            ..MetaFields::default()
        };
        let entries = video_entries(&fields);

        assert_eq!(
            entries.get(&MetaKey::Video),
            Some(&"https://example.com/media/clip.mp4".into())
        );
        assert_eq!(entries.get(&MetaKey::VideoWidth), Some(&1920.into()));
        assert_eq!(entries.get(&MetaKey::VideoHeight), Some(&1080.into()));
    }
}
