//! To-do Model
//!
//! Data structures matching the records owned by the Store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque, stable identifier of a to-do within a user's list
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToDoId(String);

impl ToDoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToDoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ToDoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Caller-supplied user identity, passed through to every Store call untouched
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A to-do record (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: ToDoId,
    pub title: String,
    /// `true` once the to-do is complete
    pub status: bool,
    /// Creation timestamp
    pub date: DateTime<Utc>,
}

impl ToDo {
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: bool, date: DateTime<Utc>) -> Self {
        Self {
            id: ToDoId::new(id),
            title: title.into(),
            status,
            date,
        }
    }
}
