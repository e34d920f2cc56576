//! CSV export of the month schedule.
//!
//! One row per date and slot, one column per employee, with the weekday
//! column carrying the holiday name when there is one. Hidden dates are
//! left out, matching the grid.

use shiftcal_core::grid::MonthGrid;

/// Assemble the CSV body for a rendered month.
pub fn month_csv(grid: &MonthGrid) -> String {
    let mut out = String::new();

    let mut header = vec!["Date".to_string(), "Weekday".to_string(), "Slot".to_string()];
    header.extend(grid.employees.iter().map(|e| e.name.clone()));
    push_record(&mut out, &header);

    for day in &grid.days {
        if day.hidden {
            continue;
        }

        let weekday = match &day.holiday {
            Some(name) => format!("{} ({})", day.date.format("%a"), name),
            None => day.date.format("%a").to_string(),
        };

        for row in &day.rows {
            let mut record = vec![
                day.date.to_string(),
                weekday.clone(),
                row.slot.as_str().to_string(),
            ];
            record.extend(row.cells.iter().map(|c| c.pattern_name.clone()));
            push_record(&mut out, &record);
        }
    }

    out
}

fn push_record(out: &mut String, fields: &[String]) {
    let line = fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",");
    out.push_str(&line);
    out.push('\n');
}

/// Quote a field when it contains a delimiter, quote or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiftcal_core::grid::build_grid;
    use shiftcal_core::{
        Employee, HolidaySet, NoteStore, PatternCatalog, ShiftAssignment, ShiftPattern,
        ShiftStore, Side, TimeSlot, YearMonth,
    };
    use chrono::NaiveDate;
    use std::collections::{HashMap, HashSet};

    fn grid() -> MonthGrid {
        let month: YearMonth = "2024-05".parse().unwrap();
        let employees = vec![
            Employee {
                id: 1,
                name: "Sato".to_string(),
                memo: String::new(),
                display_order: 1,
            },
            Employee {
                id: 2,
                name: "Tanaka, Y".to_string(),
                memo: String::new(),
                display_order: 2,
            },
        ];
        let catalog = PatternCatalog::new(vec![ShiftPattern {
            id: 3,
            name: "early".to_string(),
            description: String::new(),
        }]);
        let live = ShiftStore::from_rows(vec![ShiftAssignment {
            id: 0,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            slot: TimeSlot::Morning,
            pattern_id: 3,
        }]);
        let mut raw = HashMap::new();
        raw.insert("2024-05-03".to_string(), "Constitution Day".to_string());

        build_grid(
            month,
            &employees,
            &catalog,
            &|key| live.pattern_id(key),
            &HolidaySet::from_feed(raw),
            &NoteStore::default(),
            Side::Live,
            &HashSet::new(),
            NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
        )
    }

    #[test]
    fn test_header_and_first_rows() {
        let csv = month_csv(&grid());
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some("Date,Weekday,Slot,Sato,\"Tanaka, Y\""));
        assert_eq!(lines.next(), Some("2024-05-01,Wed,morning,early,"));
        assert_eq!(lines.next(), Some("2024-05-01,Wed,day,,"));
        assert_eq!(lines.next(), Some("2024-05-01,Wed,night,,"));
    }

    #[test]
    fn test_holiday_name_in_weekday_column() {
        let csv = month_csv(&grid());
        assert!(csv.contains("2024-05-03,Fri (Constitution Day),morning,,"));
    }

    #[test]
    fn test_row_count_covers_month() {
        let csv = month_csv(&grid());
        // Header plus 31 days of three slots.
        assert_eq!(csv.lines().count(), 1 + 31 * 3);
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("early"), "early");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
