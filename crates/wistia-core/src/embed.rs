use serde::Serialize;
use url::Url;

use crate::coerce::value_bool;
use crate::color::PlayerColor;
use crate::value;
use crate::Payload;

/// Presentation settings for a media's player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedOptions {
    pub player_color: PlayerColor,
    pub big_play_button: bool,
    pub small_play_button: bool,
    pub playbar: bool,
    pub fullscreen_button: bool,
    pub controls_visible_on_load: bool,
    pub autoplay: bool,
    /// Raw behavior code (`pause`, `reset`, `loop`, ...); interpreted by the player.
    pub end_video_behavior: String,
    pub still_url: Option<Url>,
    /// Set when the social bar plugin is configured.
    pub action_button: bool,
    pub captions: bool,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        Self {
            player_color: PlayerColor::default(),
            big_play_button: true,
            small_play_button: true,
            playbar: true,
            fullscreen_button: true,
            controls_visible_on_load: true,
            autoplay: false,
            end_video_behavior: "pause".to_string(),
            still_url: None,
            action_button: false,
            captions: false,
        }
    }
}

/// Build embed options from the `embed_options` map of a media.
///
/// Returns `None` only when there is no map at all. Every key that is present
/// and coercible overrides the matching default; anything else is ignored.
pub fn from_map(map: Option<&Payload>) -> Option<EmbedOptions> {
    let map = map?;
    let mut options = EmbedOptions::default();

    if let Some(color) = value::string(map, "playerColor").and_then(PlayerColor::from_hex) {
        options.player_color = color;
    }

    let flags: [(&str, &mut bool); 6] = [
        ("playButton", &mut options.big_play_button),
        ("smallPlayButton", &mut options.small_play_button),
        ("playbar", &mut options.playbar),
        ("fullscreenButton", &mut options.fullscreen_button),
        ("controlsVisibleOnLoad", &mut options.controls_visible_on_load),
        ("autoPlay", &mut options.autoplay),
    ];
    for (key, slot) in flags {
        if let Some(flag) = map.get(key).and_then(value_bool) {
            *slot = flag;
        }
    }

    if let Some(behavior) = value::owned_string(map, "endVideoBehavior") {
        options.end_video_behavior = behavior;
    }

    if let Some(still) = value::string(map, "stillUrl").and_then(|s| Url::parse(s).ok()) {
        options.still_url = Some(still);
    }

    if let Some(plugin) = value::object(map, "plugin") {
        if plugin.contains_key("socialbar-v1") {
            options.action_button = true;
        }
        if let Some(on) = value::object(plugin, "captions-v1")
            .and_then(|captions| captions.get("onByDefault"))
            .and_then(value_bool)
        {
            options.captions = on;
        }
    }

    Some(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn build(v: Value) -> EmbedOptions {
        from_map(v.as_object()).unwrap()
    }

    #[test]
    fn test_absent_map() {
        assert_eq!(from_map(None), None);
    }

    #[test]
    fn test_empty_map_is_all_defaults() {
        assert_eq!(build(json!({})), EmbedOptions::default());
    }

    #[test]
    fn test_overrides() {
        let o = build(json!({
            "playerColor": "ff0000",
            "playButton": "false",
            "smallPlayButton": "0",
            "playbar": "no",
            "fullscreenButton": "f",
            "controlsVisibleOnLoad": "false",
            "autoPlay": "true",
            "endVideoBehavior": "loop",
            "stillUrl": "https://embed-ssl.wistia.com/deliveries/abc.jpg",
            "plugin": {
                "socialbar-v1": {},
                "captions-v1": {"onByDefault": "true"}
            }
        }));
        assert_eq!(o.player_color, PlayerColor::rgb(255, 0, 0));
        assert!(!o.big_play_button);
        assert!(!o.small_play_button);
        assert!(!o.playbar);
        assert!(!o.fullscreen_button);
        assert!(!o.controls_visible_on_load);
        assert!(o.autoplay);
        assert_eq!(o.end_video_behavior, "loop");
        assert_eq!(
            o.still_url.as_ref().map(Url::as_str),
            Some("https://embed-ssl.wistia.com/deliveries/abc.jpg")
        );
        assert!(o.action_button);
        assert!(o.captions);
    }

    #[test]
    fn test_bad_values_keep_defaults() {
        let o = build(json!({
            "playerColor": "not a color",
            "playButton": null,
            "playbar": ["true"],
            "endVideoBehavior": 3,
            "stillUrl": "not a url",
            "plugin": "socialbar-v1"
        }));
        assert_eq!(o, EmbedOptions::default());
    }

    #[test]
    fn test_flags_only_read_from_strings() {
        let o = build(json!({
            "playButton": false,
            "playbar": 0,
            "autoPlay": true,
            "plugin": {"captions-v1": {"onByDefault": true}}
        }));
        assert!(o.big_play_button);
        assert!(o.playbar);
        assert!(!o.autoplay);
        assert!(!o.captions);
    }

    #[test]
    fn test_captions_without_socialbar() {
        let o = build(json!({"plugin": {"captions-v1": {"onByDefault": "1"}}}));
        assert!(!o.action_button);
        assert!(o.captions);

        let o = build(json!({"plugin": {"captions-v1": {}}}));
        assert!(!o.captions);
    }
}
