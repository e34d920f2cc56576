//! Shift assignment rows as exchanged with the backend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::slot::{SlotKey, TimeSlot};

/// One live-schedule assignment: the pattern an employee works in one slot
/// of one date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftAssignment {
    #[serde(default)]
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "shift_time")]
    pub slot: TimeSlot,
    #[serde(rename = "kintai_pattern_id")]
    pub pattern_id: i64,
}

impl ShiftAssignment {
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.employee_id, self.date, self.slot)
    }
}

/// One row of the simulation view fetch.
///
/// The backend serves the merged simulation view: live rows overlaid with
/// simulation-table rows, plus suppression tombstones flagged
/// `right_deleted`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRow {
    #[serde(default)]
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "shift_time")]
    pub slot: TimeSlot,
    #[serde(rename = "kintai_pattern_id")]
    pub pattern_id: i64,
    #[serde(default)]
    pub right_deleted: bool,
}

impl SimulationRow {
    pub fn key(&self) -> SlotKey {
        SlotKey::new(self.employee_id, self.date, self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_wire_shape() {
        let json = r#"{"id":9,"employee_id":1,"date":"2024-05-01","shift_time":"morning","kintai_pattern_id":3}"#;
        let row: ShiftAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(row.employee_id, 1);
        assert_eq!(row.slot, TimeSlot::Morning);
        assert_eq!(row.pattern_id, 3);
        assert_eq!(row.date, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_simulation_row_right_deleted_defaults_false() {
        let json = r#"{"employee_id":1,"date":"2024-05-01","shift_time":"night","kintai_pattern_id":5}"#;
        let row: SimulationRow = serde_json::from_str(json).unwrap();
        assert!(!row.right_deleted);
    }
}
