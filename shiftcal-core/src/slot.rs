//! Time slots and cell identity.
//!
//! Every schedule day is divided into the three fixed slots the backend
//! knows about. A grid cell is addressed by (employee, date, slot); that
//! triple is the key of both the live and the simulation store.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Synthetic wire slot used for per-date notes, shared by all three rows.
pub const NOTE_SLOT: &str = "all";

/// One of the three daily periods tracked per employee per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Day,
    Night,
}

impl TimeSlot {
    /// Grid row order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Day, TimeSlot::Night];

    /// The name used on the wire and in the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "morning",
            TimeSlot::Day => "day",
            TimeSlot::Night => "night",
        }
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeSlot {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(TimeSlot::Morning),
            "day" => Ok(TimeSlot::Day),
            "night" => Ok(TimeSlot::Night),
            other => Err(ScheduleError::InvalidSlot(other.to_string())),
        }
    }
}

/// Identity of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub employee_id: i64,
    pub date: NaiveDate,
    pub slot: TimeSlot,
}

impl SlotKey {
    pub fn new(employee_id: i64, date: NaiveDate, slot: TimeSlot) -> Self {
        SlotKey {
            employee_id,
            date,
            slot,
        }
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.employee_id, self.date, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for slot in TimeSlot::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.as_str()));
            let back: TimeSlot = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slot);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_slot() {
        assert!("evening".parse::<TimeSlot>().is_err());
        assert!("all".parse::<TimeSlot>().is_err());
    }
}
