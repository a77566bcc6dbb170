use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::asset::{self, Asset};
use crate::embed::{self, EmbedOptions};
use crate::status::ObjectStatus;
use crate::timestamp;
use crate::value;
use crate::Payload;

const HASHED_ID_KEYS: &[&str] = &["hashedId", "hashed_id"];

/// A video or other uploaded file, identified publicly by its hashed id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Media {
    pub hashed_id: String,
    /// Internal numeric id; not every endpoint returns it
    pub media_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: ObjectStatus,
    /// Length in seconds
    pub duration: f64,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    /// 360° video
    pub spherical: bool,
    pub thumbnail: Option<Thumbnail>,
    pub distillery_url: Option<String>,
    pub account_key: Option<String>,
    pub media_key: Option<String>,
    pub embed_options: Option<EmbedOptions>,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: i64,
    pub height: i64,
}

/// Back-reference from an asset to the media that owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MediaRef {
    pub hashed_id: String,
    pub media_id: Option<i64>,
}

impl MediaRef {
    pub fn is_for(&self, media: &Media) -> bool {
        self.hashed_id == media.hashed_id && self.media_id == media.media_id
    }
}

impl Media {
    pub fn reference(&self) -> MediaRef {
        MediaRef {
            hashed_id: self.hashed_id.clone(),
            media_id: self.media_id,
        }
    }

    pub fn distillery_url(&self) -> Option<Url> {
        Url::parse(self.distillery_url.as_deref()?).ok()
    }

    /// First asset of the given type, e.g. `"OriginalFile"`.
    pub fn asset_of_type(&self, kind: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.kind == kind)
    }
}

fn status_from(map: &Payload) -> ObjectStatus {
    if let Some(s) = value::string(map, "status") {
        ObjectStatus::from_raw_str(s)
    } else if let Some(code) = value::int(map, "status") {
        ObjectStatus::from_raw(code)
    } else {
        ObjectStatus::Failed
    }
}

/// All three parts or nothing.
fn thumbnail_from(map: &Payload) -> Option<Thumbnail> {
    let thumb = value::object(map, "thumbnail")?;
    Some(Thumbnail {
        url: value::owned_string(thumb, "url")?,
        width: value::int(thumb, "width")?,
        height: value::int(thumb, "height")?,
    })
}

fn timestamp_from(map: &Payload, key: &str) -> Option<DateTime<Utc>> {
    value::string(map, key).and_then(timestamp::parse)
}

/// Build a media, or `None` when `duration` or the hashed id is missing.
pub fn from_map(map: &Payload) -> Option<Media> {
    let duration = value::float(map, "duration")?;
    let hashed_id = value::first_of(map, HASHED_ID_KEYS, value::owned_string)?;

    let mut media = Media {
        hashed_id,
        media_id: value::int(map, "id"),
        name: value::owned_string(map, "name"),
        description: value::owned_string(map, "description"),
        status: status_from(map),
        duration,
        created: timestamp_from(map, "created"),
        updated: timestamp_from(map, "updated"),
        spherical: value::boolean(map, "spherical").unwrap_or(false),
        thumbnail: thumbnail_from(map),
        distillery_url: value::owned_string(map, "distilleryUrl"),
        account_key: value::owned_string(map, "accountKey"),
        media_key: value::owned_string(map, "mediaKey"),
        embed_options: embed::from_map(value::object(map, "embed_options")),
        assets: Vec::new(),
    };

    // assets point back at the finished media, so they go in last
    if let Some(raw_assets) = value::object_list(map, "assets") {
        media.assets = asset::list_from_maps(raw_assets, &media.reference());
    }

    Some(media)
}

/// Build every media that can be built, in order.
pub fn list_from_maps<'a, I>(maps: I) -> Vec<Media>
where
    I: IntoIterator<Item = &'a Payload>,
{
    maps.into_iter().filter_map(from_map).collect()
}
