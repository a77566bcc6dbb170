//! API capabilities of the records, as request paths.
//!
//! Sending the requests is the caller's job; this only knows where they go.

use crate::media::Media;
use crate::project::Project;

/// Records that have a collection endpoint.
pub trait Listable {
    const LIST_PATH: &'static str;

    fn list_path() -> &'static str {
        Self::LIST_PATH
    }
}

/// Records that can be fetched one at a time by hashed id.
pub trait Showable {
    const SINGULAR_PATH: &'static str;

    fn id(&self) -> &str;

    fn show_path(&self) -> String {
        format!("{}/{}.json", Self::SINGULAR_PATH, self.id())
    }
}

/// Records that can be created through the API.
pub trait Creatable {
    const CREATE_PATH: &'static str;

    /// Form fields for the create request.
    fn create_params(&self) -> Vec<(&'static str, String)>;
}

impl Listable for Project {
    const LIST_PATH: &'static str = "projects.json";
}

impl Showable for Project {
    const SINGULAR_PATH: &'static str = "projects";

    fn id(&self) -> &str {
        &self.hashed_id
    }
}

impl Creatable for Project {
    const CREATE_PATH: &'static str = "projects.json";

    fn create_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(name) = &self.name {
            params.push(("name", name.clone()));
        }
        if let Some(description) = &self.description {
            params.push(("description", description.clone()));
        }
        params
    }
}

impl Listable for Media {
    const LIST_PATH: &'static str = "medias.json";
}

impl Showable for Media {
    const SINGULAR_PATH: &'static str = "medias";

    fn id(&self) -> &str {
        &self.hashed_id
    }
}
