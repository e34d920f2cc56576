//! Per-date free-text notes, tracked separately for each calendar side.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::slot::NOTE_SLOT;

/// Which calendar a value belongs to. On the wire the simulation side is
/// the `is_right`/`right_deleted` "right calendar".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Live,
    Simulation,
}

impl Side {
    pub fn is_right(&self) -> bool {
        matches!(self, Side::Simulation)
    }

    pub fn from_flag(is_right: bool) -> Self {
        if is_right { Side::Simulation } else { Side::Live }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Live => f.write_str("live"),
            Side::Simulation => f.write_str("simulation"),
        }
    }
}

impl FromStr for Side {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "live" | "left" => Ok(Side::Live),
            "simulation" | "sim" | "right" => Ok(Side::Simulation),
            other => Err(ScheduleError::InvalidSide(other.to_string())),
        }
    }
}

/// One note row as exchanged with the backend. Notes are stored under the
/// synthetic `"all"` slot so the three daily rows share a single note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRow {
    #[serde(default)]
    pub id: i64,
    pub date: NaiveDate,
    pub shift_time: String,
    pub content: String,
    pub is_right: bool,
}

impl NoteRow {
    pub fn new(date: NaiveDate, side: Side, content: String) -> Self {
        NoteRow {
            id: 0,
            date,
            shift_time: NOTE_SLOT.to_string(),
            content,
            is_right: side.is_right(),
        }
    }
}

/// Month-scoped note cache, both sides.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: HashMap<(NaiveDate, Side), String>,
}

impl NoteStore {
    pub fn from_rows(rows: Vec<NoteRow>) -> Self {
        let mut store = NoteStore::default();
        for row in rows {
            store
                .notes
                .insert((row.date, Side::from_flag(row.is_right)), row.content);
        }
        store
    }

    /// The note for a date on one side, empty when there is none.
    pub fn get(&self, date: NaiveDate, side: Side) -> &str {
        self.notes
            .get(&(date, side))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn set(&mut self, date: NaiveDate, side: Side, content: String) {
        if content.is_empty() {
            self.notes.remove(&(date, side));
        } else {
            self.notes.insert((date, side), content);
        }
    }
}
