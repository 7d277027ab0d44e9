use serde::{Deserialize, Serialize};

use crate::media::MediaReference;

fn default_width() -> u32 {
    1920
}

fn default_height() -> u32 {
    1080
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    SummaryLargeImage,
    Player,
}

/// Raw metadata of one content item. Every field is independently optional,
/// the empty string stands for "unset".
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct MetaFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<MediaReference>,
    #[serde(default)]
    pub video_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<MediaReference>,
    #[serde(default = "default_width")]
    pub video_width: u32,
    #[serde(default = "default_height")]
    pub video_height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<CardType>,
    #[serde(default)]
    pub twitter_site: String,
    #[serde(default = "default_width")]
    pub player_width: u32,
    #[serde(default = "default_height")]
    pub player_height: u32,
    #[serde(default)]
    pub player: String,
    #[serde(default)]
    pub canonical: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub robots: String,
}

impl Default for MetaFields {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            image: None,
            video_url: String::new(),
            video: None,
            video_width: default_width(),
            video_height: default_height(),
            card_type: None,
            twitter_site: String::new(),
            player_width: default_width(),
            player_height: default_height(),
            player: String::new(),
            canonical: String::new(),
            author: String::new(),
            robots: String::new(),
        }
    }
}
