//! Entry points for whole response bodies.
//!
//! The builders work on already-decoded maps and answer "absent"; these
//! functions take the raw body, unwrap the optional `{"data": ...}` envelope
//! and turn "absent" into a [`DecodeError`].

use serde::Serialize;
use serde_json::Value;

use crate::account::{self, Account};
use crate::error::{DecodeError, RecordKind};
use crate::media::{self, Media};
use crate::project::{self, Project};
use crate::Payload;

/// Any top-level record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Account(Account),
    Project(Project),
    Media(Media),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Account(_) => RecordKind::Account,
            Record::Project(_) => RecordKind::Project,
            Record::Media(_) => RecordKind::Media,
        }
    }
}

/// Some responses nest the object under a single `data` key.
pub fn unwrap_data(value: &Value) -> &Value {
    match value.get("data") {
        Some(inner @ (Value::Object(_) | Value::Array(_))) => inner,
        _ => value,
    }
}

fn build(kind: RecordKind, map: &Payload) -> Option<Record> {
    match kind {
        RecordKind::Account => account::from_map(map).map(Record::Account),
        RecordKind::Project => project::from_map(map).map(Record::Project),
        RecordKind::Media => media::from_map(map).map(Record::Media),
    }
}

/// Decode an already-parsed document.
///
/// An object yields exactly one record or [`DecodeError::Missing`]. A list
/// yields every element that builds, possibly none.
pub fn decode(kind: RecordKind, value: &Value) -> Result<Vec<Record>, DecodeError> {
    match unwrap_data(value) {
        Value::Object(map) => build(kind, map)
            .map(|record| vec![record])
            .ok_or(DecodeError::Missing(kind)),
        Value::Array(items) => Ok(items
            .iter()
            .filter_map(Value::as_object)
            .filter_map(|map| build(kind, map))
            .collect()),
        _ => Err(DecodeError::NotAnObject),
    }
}

fn single(kind: RecordKind, bytes: &[u8]) -> Result<Record, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    let map = unwrap_data(&value)
        .as_object()
        .ok_or(DecodeError::NotAnObject)?;
    build(kind, map).ok_or(DecodeError::Missing(kind))
}

fn many(kind: RecordKind, bytes: &[u8]) -> Result<Vec<Record>, DecodeError> {
    let value: Value = serde_json::from_slice(bytes)?;
    if !unwrap_data(&value).is_array() {
        return Err(DecodeError::NotAnObject);
    }
    decode(kind, &value)
}

pub fn account(bytes: &[u8]) -> Result<Account, DecodeError> {
    match single(RecordKind::Account, bytes)? {
        Record::Account(a) => Ok(a),
        _ => Err(DecodeError::Missing(RecordKind::Account)),
    }
}

pub fn project(bytes: &[u8]) -> Result<Project, DecodeError> {
    match single(RecordKind::Project, bytes)? {
        Record::Project(p) => Ok(p),
        _ => Err(DecodeError::Missing(RecordKind::Project)),
    }
}

pub fn media(bytes: &[u8]) -> Result<Media, DecodeError> {
    match single(RecordKind::Media, bytes)? {
        Record::Media(m) => Ok(m),
        _ => Err(DecodeError::Missing(RecordKind::Media)),
    }
}

pub fn projects(bytes: &[u8]) -> Result<Vec<Project>, DecodeError> {
    Ok(many(RecordKind::Project, bytes)?
        .into_iter()
        .filter_map(|r| match r {
            Record::Project(p) => Some(p),
            _ => None,
        })
        .collect())
}

pub fn medias(bytes: &[u8]) -> Result<Vec<Media>, DecodeError> {
    Ok(many(RecordKind::Media, bytes)?
        .into_iter()
        .filter_map(|r| match r {
            Record::Media(m) => Some(m),
            _ => None,
        })
        .collect())
}
