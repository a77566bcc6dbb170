use serde::Serialize;
use url::Url;

use crate::media::{Media, MediaRef};
use crate::status::ObjectStatus;
use crate::value;
use crate::Payload;

const SIZE_KEYS: &[&str] = &["size", "filesize"];

/// One encoded file of a media (original upload, mp4 renditions, still images, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Asset {
    /// The media this asset belongs to. A key, not an owner.
    pub media: MediaRef,
    pub url: String,
    pub width: i64,
    pub height: i64,
    /// Size in bytes
    pub size: Option<i64>,
    /// Asset type, e.g. `OriginalFile`, `IphoneVideoFile`, `HdMp4VideoFile`
    #[serde(rename = "type")]
    pub kind: String,
    pub status: Option<ObjectStatus>,
    pub slug: Option<String>,
    pub display_name: Option<String>,
    pub container: Option<String>,
    pub codec: Option<String>,
    pub ext: Option<String>,
    pub bitrate: Option<i64>,
}

impl Asset {
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }

    /// MIME type guessed from the extension, or the container when no extension is given.
    pub fn mime_type(&self) -> Option<mime_guess::Mime> {
        self.ext
            .as_deref()
            .or(self.container.as_deref())
            .and_then(|ext| mime_guess::from_ext(ext).first())
    }

    pub fn belongs_to(&self, media: &Media) -> bool {
        self.media.is_for(media)
    }
}

/// Build a single asset, or `None` if `width`, `height`, `type` or `url` is missing.
pub fn from_map(map: &Payload, media: &MediaRef) -> Option<Asset> {
    let width = value::int(map, "width")?;
    let height = value::int(map, "height")?;
    let kind = value::owned_string(map, "type")?;
    let url = value::owned_string(map, "url")?;

    Some(Asset {
        media: media.clone(),
        url,
        width,
        height,
        size: value::first_of(map, SIZE_KEYS, value::int),
        kind,
        // assets only ever carry numeric codes
        status: value::int(map, "status").map(ObjectStatus::from_raw),
        slug: value::owned_string(map, "slug"),
        display_name: value::owned_string(map, "display_name"),
        container: value::owned_string(map, "container"),
        codec: value::owned_string(map, "codec"),
        ext: value::owned_string(map, "ext"),
        bitrate: value::int(map, "bitrate"),
    })
}

/// Build the assets of `media`, dropping malformed entries and keeping order.
pub fn list_from_maps<'a, I>(maps: I, media: &MediaRef) -> Vec<Asset>
where
    I: IntoIterator<Item = &'a Payload>,
{
    maps.into_iter()
        .filter_map(|map| from_map(map, media))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn parent() -> MediaRef {
        MediaRef {
            hashed_id: "abc123".to_string(),
            media_id: Some(42),
        }
    }

    fn build(v: Value) -> Option<Asset> {
        from_map(v.as_object().unwrap(), &parent())
    }

    #[test]
    fn test_required_fields() {
        let a = build(json!({
            "width": 640, "height": 480, "type": "Mp4VideoFile", "url": "http://x/y.mp4"
        }))
        .unwrap();
        assert_eq!(a.width, 640);
        assert_eq!(a.height, 480);
        assert_eq!(a.kind, "Mp4VideoFile");
        assert_eq!(a.url, "http://x/y.mp4");
        assert_eq!(a.media, parent());
        assert_eq!(a.size, None);
        assert_eq!(a.status, None);

        assert!(build(json!({"height": 480, "type": "t", "url": "u"})).is_none());
        assert!(build(json!({"width": 640, "type": "t", "url": "u"})).is_none());
        assert!(build(json!({"width": 640, "height": 480, "url": "u"})).is_none());
        assert!(build(json!({"width": 640, "height": 480, "type": "t"})).is_none());
        assert!(build(json!({"width": "640", "height": 480, "type": "t", "url": "u"})).is_none());
    }

    #[test]
    fn test_size_alias_order() {
        let base = json!({"width": 1, "height": 1, "type": "t", "url": "u"});
        let with = |extra: Value| {
            let mut v = base.clone();
            for (k, val) in extra.as_object().unwrap() {
                v[k] = val.clone();
            }
            build(v).unwrap().size
        };
        assert_eq!(with(json!({"size": 1000})), Some(1000));
        assert_eq!(with(json!({"filesize": 2000})), Some(2000));
        assert_eq!(with(json!({"size": 1000, "filesize": 2000})), Some(1000));
        assert_eq!(with(json!({"size": "1000", "filesize": 2000})), Some(2000));
        assert_eq!(with(json!({"size": 5_000_000_000_i64})), Some(5_000_000_000));
        assert_eq!(with(json!({"filesize": 1.5})), None);
    }

    #[test]
    fn test_status_is_numeric_only() {
        let a = build(json!({"width": 1, "height": 1, "type": "t", "url": "u", "status": 2})).unwrap();
        assert_eq!(a.status, Some(ObjectStatus::Ready));
        let a = build(json!({"width": 1, "height": 1, "type": "t", "url": "u", "status": 99})).unwrap();
        assert_eq!(a.status, Some(ObjectStatus::Failed));
        let a = build(json!({"width": 1, "height": 1, "type": "t", "url": "u", "status": "ready"})).unwrap();
        assert_eq!(a.status, None);
    }

    #[test]
    fn test_optional_fields() {
        let a = build(json!({
            "width": 1280, "height": 720, "type": "HdMp4VideoFile", "url": "https://x/y.bin",
            "display_name": "720p", "container": "mp4", "codec": "h264",
            "ext": "mp4", "slug": "hd_mp4_720p", "bitrate": 2048
        }))
        .unwrap();
        assert_eq!(a.display_name.as_deref(), Some("720p"));
        assert_eq!(a.container.as_deref(), Some("mp4"));
        assert_eq!(a.codec.as_deref(), Some("h264"));
        assert_eq!(a.ext.as_deref(), Some("mp4"));
        assert_eq!(a.slug.as_deref(), Some("hd_mp4_720p"));
        assert_eq!(a.bitrate, Some(2048));
        assert_eq!(a.mime_type().map(|m| m.to_string()).as_deref(), Some("video/mp4"));
        assert_eq!(a.url().map(|u| u.host_str().map(str::to_string)), Some(Some("x".to_string())));
    }

    #[test]
    fn test_list_keeps_order_and_drops_bad() {
        let raw = json!([
            {"width": 1, "height": 1, "type": "a", "url": "u1"},
            {"width": 1},
            {"width": 2, "height": 2, "type": "b", "url": "u2"},
            {"type": "c"},
            {"width": 3, "height": 3, "type": "c", "url": "u3"}
        ]);
        let maps: Vec<&Payload> = raw.as_array().unwrap().iter().filter_map(Value::as_object).collect();
        let assets = list_from_maps(maps, &parent());
        let kinds: Vec<&str> = assets.iter().map(|a| a.kind.as_str()).collect();
        assert_eq!(kinds, ["a", "b", "c"]);
        assert!(assets.iter().all(|a| a.media == parent()));
    }

    #[test]
    fn test_serialized_type_key() {
        let a = build(json!({"width": 1, "height": 1, "type": "OriginalFile", "url": "u"})).unwrap();
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["type"], "OriginalFile");
        assert_eq!(v["media"]["hashed_id"], "abc123");
    }
}
