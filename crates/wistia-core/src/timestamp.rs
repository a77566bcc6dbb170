use std::sync::LazyLock;

use chrono::format::{parse as parse_items, Item, Parsed, StrftimeItems};
use chrono::{DateTime, Utc};
use regex::Regex;

/// `yyyy-MM-dd'T'HH:mm:ssZZZZZ`. Purely numeric, so no locale is involved.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

static WIRE_ITEMS: LazyLock<Vec<Item<'static>>> =
    LazyLock::new(|| StrftimeItems::new(WIRE_FORMAT).collect());

// chrono alone accepts `+0000`, a space before the zone and unpadded fields
static WIRE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(Z|[+-]\d{2}:\d{2})$").unwrap()
});

/// Parse an API timestamp such as `2016-05-04T15:30:00Z` or `2016-05-04T15:30:00-04:00`.
pub fn parse(s: &str) -> Option<DateTime<Utc>> {
    if !WIRE_SHAPE_RE.is_match(s) {
        return None;
    }

    // ZZZZZ writes a zero offset as a bare `Z`
    let normalized;
    let s = match s.strip_suffix('Z') {
        Some(rest) => {
            normalized = format!("{}+00:00", rest);
            normalized.as_str()
        }
        None => s,
    };

    let mut parsed = Parsed::new();
    parse_items(&mut parsed, s, WIRE_ITEMS.iter()).ok()?;
    let dt = parsed.to_datetime().ok()?;
    Some(dt.with_timezone(&Utc))
}

/// Render an instant in the wire format (offset `+00:00`).
pub fn format(dt: &DateTime<Utc>) -> String {
    dt.format_with_items(WIRE_ITEMS.iter()).to_string()
}
