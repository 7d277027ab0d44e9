pub mod error;
pub mod fields;
pub mod media;
pub mod resolver;
pub mod tags;
pub mod templating;
pub mod values;

pub use error::OgTagsError;
pub use fields::{CardType, MetaFields};
pub use media::{MediaReference, RECOMMENDED, RECOMMENDED_HEIGHT, RECOMMENDED_WIDTH};
pub use resolver::{MetaSource, resolve};
pub use tags::{MetaTag, MetaTags, TagKind};
pub use values::{MetaKey, MetaMap, MetaValue};
