//! Month grid construction.
//!
//! Pure view model: one day group per date, three slot rows per group, one
//! cell per employee with the resolved pattern name. The terminal renderer
//! only decides colors and column widths on top of this.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::employee::Employee;
use crate::holiday::HolidaySet;
use crate::month::YearMonth;
use crate::note::{NoteStore, Side};
use crate::pattern::PatternCatalog;
use crate::slot::{SlotKey, TimeSlot};

/// Styling class of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    Weekday,
    Saturday,
    Sunday,
    Holiday,
}

/// One employee cell of one slot row.
#[derive(Debug, Clone)]
pub struct GridCell {
    pub employee_id: i64,
    pub pattern_id: Option<i64>,
    pub pattern_name: String,
}

/// One of the three rows of a date.
#[derive(Debug, Clone)]
pub struct SlotRow {
    pub slot: TimeSlot,
    pub cells: Vec<GridCell>,
}

/// One date of the month with its three slot rows.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub kind: DayKind,
    pub holiday: Option<String>,
    pub is_today: bool,
    pub hidden: bool,
    pub note: String,
    pub rows: Vec<SlotRow>,
}

/// The full grid for one month and one side.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub employees: Vec<Employee>,
    pub days: Vec<DayGroup>,
}

impl MonthGrid {
    /// Index of today's day group, when the month contains it.
    pub fn today_index(&self) -> Option<usize> {
        self.days.iter().position(|d| d.is_today)
    }
}

fn day_kind(date: NaiveDate, holidays: &HolidaySet) -> DayKind {
    if holidays.is_holiday(date) {
        DayKind::Holiday
    } else {
        match date.weekday() {
            Weekday::Sun => DayKind::Sunday,
            Weekday::Sat => DayKind::Saturday,
            _ => DayKind::Weekday,
        }
    }
}

/// Build the grid for one side of the calendar.
///
/// `lookup` is the side's resolved pattern lookup: the live store's
/// `pattern_id` or the simulation store's `resolved`, so suppressed cells
/// arrive here already blank.
#[allow(clippy::too_many_arguments)]
pub fn build_grid(
    month: YearMonth,
    employees: &[Employee],
    catalog: &PatternCatalog,
    lookup: &dyn Fn(SlotKey) -> Option<i64>,
    holidays: &HolidaySet,
    notes: &NoteStore,
    side: Side,
    hidden_dates: &HashSet<NaiveDate>,
    today: NaiveDate,
) -> MonthGrid {
    let days = month
        .dates()
        .map(|date| {
            let rows = TimeSlot::ALL
                .iter()
                .map(|&slot| SlotRow {
                    slot,
                    cells: employees
                        .iter()
                        .map(|employee| {
                            let pattern_id = lookup(SlotKey::new(employee.id, date, slot));
                            GridCell {
                                employee_id: employee.id,
                                pattern_id,
                                pattern_name: pattern_id
                                    .map(|id| catalog.name_of(id).to_string())
                                    .unwrap_or_default(),
                            }
                        })
                        .collect(),
                })
                .collect();

            DayGroup {
                date,
                kind: day_kind(date, holidays),
                holiday: holidays.name_of(date).map(str::to_string),
                is_today: date == today,
                hidden: hidden_dates.contains(&date),
                note: notes.get(date, side).to_string(),
                rows,
            }
        })
        .collect();

    MonthGrid {
        month,
        employees: employees.to_vec(),
        days,
    }
}
