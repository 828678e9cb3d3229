//! Book (catalog record) model and related types.
//!
//! Structures mirror the wire contract: camelCase field names, optional
//! fields omitted from JSON when absent. `finished` is derived state and
//! is never taken from a payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Full book record as stored in the catalog and returned by the API.
///
/// `id` and `inserted_at` are fixed at creation; every other field is
/// replaced wholesale on update. The page counters are optional because a
/// payload may omit them, and `finished` compares them as options: two
/// absent counters count as equal.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque unique identifier, assigned at creation
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_page: Option<i32>,
    /// Derived: true iff `page_count == read_page`
    pub finished: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<bool>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Build a fresh record from an accepted payload: random id, both
    /// timestamps stamped now, `finished` derived from the counters.
    ///
    /// `name` is passed separately because the caller has already checked
    /// it for presence; the payload copy is ignored.
    pub fn new(name: String, data: NewBook) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().simple().to_string(),
            name,
            year: data.year,
            author: data.author,
            summary: data.summary,
            publisher: data.publisher,
            page_count: data.page_count,
            read_page: data.read_page,
            finished: data.page_count == data.read_page,
            reading: data.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every caller-editable field with the payload's values,
    /// recompute `finished` and refresh `updated_at`. `id` and
    /// `inserted_at` stay untouched.
    pub fn apply(&mut self, name: String, data: NewBook) {
        self.name = name;
        self.year = data.year;
        self.author = data.author;
        self.summary = data.summary;
        self.publisher = data.publisher;
        self.finished = data.page_count == data.read_page;
        self.page_count = data.page_count;
        self.read_page = data.read_page;
        self.reading = data.reading;
        self.updated_at = Utc::now();
    }
}

/// Short book representation for listings
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Create/update request payload. Both operations accept the same fields
/// and apply the same rules, so they share one type.
///
/// Every field is optional at the serde level; presence rules (`name`) and
/// consistency rules (`read_page` vs `page_count`) are enforced by the
/// catalog service, not the deserializer, so violations surface as
/// validation failures rather than parse rejections.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    /// Required, non-empty
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: Option<i32>,
    pub read_page: Option<i32>,
    pub reading: Option<bool>,
}

impl NewBook {
    /// True when both counters are present and the pages read exceed the
    /// total. A missing counter can never violate the rule.
    pub fn read_page_exceeds_count(&self) -> bool {
        match (self.read_page, self.page_count) {
            (Some(read), Some(total)) => read > total,
            _ => false,
        }
    }
}

/// Book listing query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct BookQuery {
    /// Case-insensitive substring match on the book name
    pub name: Option<String>,
    /// "1"/"true" or "0"/"false"; other values mean no constraint
    pub reading: Option<String>,
    /// "1"/"true" or "0"/"false"; other values mean no constraint
    pub finished: Option<String>,
}

impl BookQuery {
    pub fn reading_flag(&self) -> Option<bool> {
        parse_flag(self.reading.as_deref())
    }

    pub fn finished_flag(&self) -> Option<bool> {
        parse_flag(self.finished.as_deref())
    }
}

/// Lenient boolean filter parsing: unrecognized values are treated as an
/// absent filter instead of an error.
fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value {
        Some("1") | Some("true") => Some(true),
        Some("0") | Some("false") => Some(false),
        _ => None,
    }
}
