//! Month-scoped in-memory stores for the two schedule sides.
//!
//! Both stores are plain keyed maps seeded from one month fetch and mutated
//! only after the backend confirmed the matching write. The simulation
//! store additionally tracks where each entry came from, which is what the
//! reconciliation policy decides on.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::assignment::{ShiftAssignment, SimulationRow};
use crate::slot::SlotKey;

/// The live schedule for one month.
#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    entries: HashMap<SlotKey, ShiftAssignment>,
}

impl ShiftStore {
    pub fn from_rows(rows: Vec<ShiftAssignment>) -> Self {
        let entries = rows.into_iter().map(|r| (r.key(), r)).collect();
        ShiftStore { entries }
    }

    pub fn get(&self, key: SlotKey) -> Option<&ShiftAssignment> {
        self.entries.get(&key)
    }

    pub fn pattern_id(&self, key: SlotKey) -> Option<i64> {
        self.entries.get(&key).map(|r| r.pattern_id)
    }

    /// Install the authoritative row the server returned for an upsert.
    pub fn insert(&mut self, row: ShiftAssignment) {
        self.entries.insert(row.key(), row);
    }

    pub fn remove(&mut self, key: SlotKey) -> Option<ShiftAssignment> {
        self.entries.remove(&key)
    }

    /// Remove every assignment of one date, returning the removed keys.
    pub fn remove_date(&mut self, date: NaiveDate) -> Vec<SlotKey> {
        let keys: Vec<SlotKey> = self
            .entries
            .keys()
            .filter(|k| k.date == date)
            .copied()
            .collect();
        for key in &keys {
            self.entries.remove(key);
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Where a simulation entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    /// Mirrors the live value; carries no simulation-only data.
    Inherited,
    /// Simulation-only value, independent of the live schedule.
    Override,
}

/// One materialized cell of the simulation view.
#[derive(Debug, Clone, Copy)]
pub struct SimEntry {
    pub pattern_id: i64,
    pub right_deleted: bool,
    pub provenance: Provenance,
}

/// Reconciliation state of a key, seen from the simulation side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    /// No entry on either side.
    Unset,
    /// Simulation shows the live value; no simulation-specific data exists.
    Inherited(i64),
    /// Simulation holds its own value, distinct from whatever live has.
    Overridden(i64),
    /// A live value exists but is hidden on the simulation side only.
    Suppressed,
}

/// The simulation schedule for one month.
#[derive(Debug, Clone, Default)]
pub struct SimulationStore {
    entries: HashMap<SlotKey, SimEntry>,
}

impl SimulationStore {
    /// Seed the store from the merged simulation fetch.
    ///
    /// The wire does not say which rows are simulation-table rows and which
    /// were merged in from the live schedule, so provenance is recovered by
    /// comparison: a row equal to the live value is inherited, a differing
    /// row is an override. Tombstone rows keep their flag.
    pub fn seed(rows: Vec<SimulationRow>, live: &ShiftStore) -> Self {
        let mut entries = HashMap::new();
        for row in rows {
            let key = row.key();
            let provenance = match live.pattern_id(key) {
                Some(live_pattern) if live_pattern == row.pattern_id => Provenance::Inherited,
                _ => Provenance::Override,
            };
            entries.insert(
                key,
                SimEntry {
                    pattern_id: row.pattern_id,
                    right_deleted: row.right_deleted,
                    provenance,
                },
            );
        }
        SimulationStore { entries }
    }

    pub fn get(&self, key: SlotKey) -> Option<&SimEntry> {
        self.entries.get(&key)
    }

    pub fn state(&self, key: SlotKey) -> SimState {
        match self.entries.get(&key) {
            None => SimState::Unset,
            Some(e) if e.right_deleted => SimState::Suppressed,
            Some(e) => match e.provenance {
                Provenance::Inherited => SimState::Inherited(e.pattern_id),
                Provenance::Override => SimState::Overridden(e.pattern_id),
            },
        }
    }

    /// The pattern the simulation view renders for a key, if any.
    /// Suppressed entries resolve as unassigned.
    pub fn resolved(&self, key: SlotKey) -> Option<i64> {
        match self.state(key) {
            SimState::Inherited(id) | SimState::Overridden(id) => Some(id),
            SimState::Unset | SimState::Suppressed => None,
        }
    }

    /// Record a confirmed simulation-side upsert. Replaces any tombstone:
    /// an explicit simulation edit is the one way suppression clears.
    pub fn set_override(&mut self, key: SlotKey, pattern_id: i64) {
        self.entries.insert(
            key,
            SimEntry {
                pattern_id,
                right_deleted: false,
                provenance: Provenance::Override,
            },
        );
    }

    /// Refresh an inherited cell after a live edit (cache-only, never sent
    /// to the backend).
    pub fn mirror_live(&mut self, key: SlotKey, pattern_id: i64) {
        self.entries.insert(
            key,
            SimEntry {
                pattern_id,
                right_deleted: false,
                provenance: Provenance::Inherited,
            },
        );
    }

    /// Record a confirmed suppression for a key.
    pub fn suppress(&mut self, key: SlotKey) {
        let pattern_id = self.entries.get(&key).map(|e| e.pattern_id).unwrap_or(0);
        self.entries.insert(
            key,
            SimEntry {
                pattern_id,
                right_deleted: true,
                provenance: Provenance::Inherited,
            },
        );
    }

    pub fn clear(&mut self, key: SlotKey) -> Option<SimEntry> {
        self.entries.remove(&key)
    }

    pub fn keys_for_date(&self, date: NaiveDate) -> Vec<SlotKey> {
        self.entries
            .keys()
            .filter(|k| k.date == date)
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
