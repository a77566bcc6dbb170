use serde::Serialize;
use url::Url;

use crate::value;
use crate::Payload;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub account_id: i64,
    pub name: String,
    pub account_url: String,
    pub media_count: i64,
}

impl Account {
    pub fn url(&self) -> Option<Url> {
        Url::parse(&self.account_url).ok()
    }
}

/// Build an account; all four fields are required.
pub fn from_map(map: &Payload) -> Option<Account> {
    Some(Account {
        account_id: value::int(map, "id")?,
        name: value::owned_string(map, "name")?,
        account_url: value::owned_string(map, "url")?,
        media_count: value::int(map, "mediaCount")?,
    })
}
