use serde::Serialize;

/// Processing state shared by medias and assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectStatus {
    #[default]
    Failed,
    Queued,
    Processing,
    Ready,
}

impl ObjectStatus {
    /// Numeric code as the API sends it.
    pub fn code(self) -> i64 {
        match self {
            ObjectStatus::Failed => -1,
            ObjectStatus::Queued => 0,
            ObjectStatus::Processing => 1,
            ObjectStatus::Ready => 2,
        }
    }

    /// Never fails: codes outside the known set resolve to `Failed`.
    pub fn from_raw(code: i64) -> Self {
        match code {
            0 => ObjectStatus::Queued,
            1 => ObjectStatus::Processing,
            2 => ObjectStatus::Ready,
            _ => ObjectStatus::Failed,
        }
    }

    /// Case-insensitive; unknown names resolve to `Failed`.
    pub fn from_raw_str(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "queued" => ObjectStatus::Queued,
            "processing" => ObjectStatus::Processing,
            "ready" => ObjectStatus::Ready,
            _ => ObjectStatus::Failed,
        }
    }

    pub fn is_ready(self) -> bool {
        self == ObjectStatus::Ready
    }
}
