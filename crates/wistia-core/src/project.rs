use serde::Serialize;

use crate::media::{self, Media};
use crate::value;
use crate::Payload;

const HASHED_ID_KEYS: &[&str] = &["hashed_id", "hashedId"];

/// A folder of medias.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub project_id: i64,
    pub hashed_id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub media_count: Option<i64>,
    /// `None` when the payload had no `medias` list, as opposed to an empty one.
    pub medias: Option<Vec<Media>>,
}

/// Build a project, or `None` when `id` or the hashed id is missing.
pub fn from_map(map: &Payload) -> Option<Project> {
    let project_id = value::int(map, "id")?;
    let hashed_id = value::first_of(map, HASHED_ID_KEYS, value::owned_string)?;

    Some(Project {
        project_id,
        hashed_id,
        name: value::owned_string(map, "name"),
        description: value::owned_string(map, "description"),
        media_count: value::int(map, "mediaCount"),
        medias: value::object_list(map, "medias").map(media::list_from_maps),
    })
}
