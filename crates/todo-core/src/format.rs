//! Row Formatting
//!
//! Everything the item renderer shows, computed without touching the DOM.

use chrono::{DateTime, TimeZone};

use crate::model::{ToDo, ToDoId};

/// `14:05:PM, 01/05` - hour:minute, English AM/PM marker, day/month
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%p, %d/%m";

pub const COMPLETE_COLOR: &str = "#00FF00";
pub const INCOMPLETE_COLOR: &str = "#FF6666";

pub fn format_timestamp<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format(TIMESTAMP_FORMAT).to_string()
}

pub fn status_color(status: bool) -> &'static str {
    if status {
        COMPLETE_COLOR
    } else {
        INCOMPLETE_COLOR
    }
}

/// Display data for one to-do row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub id: ToDoId,
    pub timestamp: String,
    pub status_color: &'static str,
    pub title: String,
}

impl ItemRow {
    /// Build the row, showing the timestamp in `tz`
    pub fn new<Tz>(todo: &ToDo, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            id: todo.id.clone(),
            timestamp: format_timestamp(&todo.date.with_timezone(tz)),
            status_color: status_color(todo.status),
            title: todo.title.clone(),
        }
    }
}
