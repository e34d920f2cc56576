//! Month-scoped session state.
//!
//! All caches for the displayed month live in one [`MonthData`] value:
//! created by a load, replaced by the next load, never shared between
//! months. Loads are tagged with a monotonic epoch so a slow fetch kicked
//! off before a month switch can never overwrite the newer month's data.

use std::collections::HashSet;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use shiftcal_core::grid::{MonthGrid, build_grid};
use shiftcal_core::policy::{self, Effect};
use shiftcal_core::protocol::UpsertShiftRequest;
use shiftcal_core::{
    Employee, HolidaySet, NoteRow, NoteStore, PatternCatalog, ShiftStore, Side, SimulationStore,
    SlotKey, UNASSIGNED, YearMonth,
};

use crate::client::ApiClient;
use crate::holidays;

/// Collapse an ancillary fetch failure to an empty layer.
fn ancillary<T>(result: Result<Vec<T>>, layer: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(layer, error = %e, "ancillary fetch failed, continuing without it");
        Vec::new()
    })
}

/// Everything cached for one displayed month.
pub struct MonthData {
    pub month: YearMonth,
    pub employees: Vec<Employee>,
    pub catalog: PatternCatalog,
    pub live: ShiftStore,
    pub simulation: SimulationStore,
    pub notes: NoteStore,
    pub holidays: HolidaySet,
    pub hidden_dates: HashSet<NaiveDate>,
    epoch: u64,
}

/// Session state: the backend client plus the current month's caches.
pub struct MonthSession {
    client: ApiClient,
    holiday_feed_url: String,
    month: YearMonth,
    epoch: u64,
    data: Option<MonthData>,
}

impl MonthSession {
    pub fn new(client: ApiClient, holiday_feed_url: String, month: YearMonth) -> Self {
        MonthSession {
            client,
            holiday_feed_url,
            month,
            epoch: 0,
            data: None,
        }
    }

    pub fn data(&self) -> Result<&MonthData> {
        self.data.as_ref().context("No month data loaded")
    }

    /// Fetch and install the current month.
    pub async fn load(&mut self) -> Result<()> {
        let epoch = self.begin_load();
        let data = self.fetch_month(epoch).await?;
        self.install(data);
        Ok(())
    }

    fn begin_load(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }

    /// Install fetched month data unless a newer load has started since.
    fn install(&mut self, data: MonthData) -> bool {
        if data.epoch != self.epoch {
            warn!(
                stale = data.epoch,
                current = self.epoch,
                "discarding stale month fetch"
            );
            return false;
        }
        self.data = Some(data);
        true
    }

    /// Fetch one month in dependency order: the catalog and employee list
    /// first (the grid is meaningless without them), then live shifts, then
    /// the simulation view (its seeding compares against live), then the
    /// ancillary layers. Ancillary fetches degrade to an empty layer with a
    /// warning; only the schedule itself is load-fatal.
    async fn fetch_month(&self, epoch: u64) -> Result<MonthData> {
        let month = self.month;

        let catalog = PatternCatalog::new(self.client.patterns().await?);
        let employees = self.client.employees().await?;

        let live = ShiftStore::from_rows(self.client.shifts(month).await?);
        let simulation =
            SimulationStore::seed(self.client.simulation_shifts(month).await?, &live);

        let mut note_rows = ancillary(self.client.notes(month, Side::Live).await, "notes");
        note_rows.extend(ancillary(
            self.client.notes(month, Side::Simulation).await,
            "notes",
        ));
        let notes = NoteStore::from_rows(note_rows);

        let hidden_dates: HashSet<NaiveDate> =
            ancillary(self.client.deleted_dates(month).await, "hidden dates")
                .into_iter()
                .collect();

        let holidays = holidays::fetch(&self.holiday_feed_url).await;

        Ok(MonthData {
            month,
            employees,
            catalog,
            live,
            simulation,
            notes,
            holidays,
            hidden_dates,
            epoch,
        })
    }

    /// The pattern one side currently shows for a key.
    pub fn resolved(&self, side: Side, key: SlotKey) -> Result<Option<i64>> {
        let data = self.data()?;
        Ok(match side {
            Side::Live => data.live.pattern_id(key),
            Side::Simulation => data.simulation.resolved(key),
        })
    }

    /// Assign a pattern to a cell on one side.
    pub async fn set_shift(&mut self, side: Side, key: SlotKey, pattern_id: i64) -> Result<()> {
        let data = self.data()?;
        let effects = match side {
            Side::Live => policy::plan_live_edit(&data.simulation, key, pattern_id),
            Side::Simulation => policy::plan_simulation_edit(key, pattern_id),
        };
        self.apply(effects).await
    }

    /// Cycle a cell to the next catalog pattern, returning the new id.
    pub async fn cycle_shift(&mut self, side: Side, key: SlotKey) -> Result<i64> {
        let current = self.resolved(side, key)?.unwrap_or(UNASSIGNED);
        let next = self
            .data()?
            .catalog
            .next_after(current)
            .context("No attendance patterns available")?;
        self.set_shift(side, key, next).await?;
        Ok(next)
    }

    /// Clear a cell on one side, with the reconciliation semantics of that
    /// side (suppression for live-backed simulation cells).
    pub async fn clear_shift(&mut self, side: Side, key: SlotKey) -> Result<()> {
        let data = self.data()?;
        let effects = match side {
            Side::Live => policy::plan_live_delete(&data.simulation, key),
            Side::Simulation => policy::plan_simulation_delete(&data.live, key),
        };
        self.apply(effects).await
    }

    /// Wipe one date on one side.
    pub async fn clear_date(&mut self, side: Side, date: NaiveDate) -> Result<()> {
        let effects = match side {
            Side::Live => policy::plan_live_date_clear(date),
            Side::Simulation => policy::plan_simulation_date_clear(date),
        };
        self.apply(effects).await
    }

    /// Hide or unhide a date on the grid.
    pub async fn set_date_hidden(&mut self, date: NaiveDate, hidden: bool) -> Result<()> {
        self.client.toggle_date_deletion(date, hidden).await?;
        let data = self.data.as_mut().context("No month data loaded")?;
        if hidden {
            data.hidden_dates.insert(date);
        } else {
            data.hidden_dates.remove(&date);
        }
        Ok(())
    }

    /// Save the note for a date on one side.
    pub async fn save_note(&mut self, side: Side, date: NaiveDate, content: String) -> Result<()> {
        let saved = self
            .client
            .save_note(&NoteRow::new(date, side, content))
            .await?;
        let data = self.data.as_mut().context("No month data loaded")?;
        data.notes
            .set(date, Side::from_flag(saved.is_right), saved.content);
        Ok(())
    }

    /// Execute a plan: each server effect is sent first and the matching
    /// cache mutation applied only once the backend confirmed it. Cache-only
    /// effects always follow a confirmed server effect of the same plan.
    async fn apply(&mut self, effects: Vec<Effect>) -> Result<()> {
        for effect in effects {
            match effect {
                Effect::UpsertLive { key, pattern_id } => {
                    let row = self
                        .client
                        .upsert_shift(&UpsertShiftRequest {
                            employee_id: key.employee_id,
                            date: key.date,
                            slot: key.slot,
                            pattern_id,
                        })
                        .await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.live.insert(row);
                }
                Effect::UpsertSimulation { key, pattern_id } => {
                    let row = self
                        .client
                        .upsert_simulation_shift(&UpsertShiftRequest {
                            employee_id: key.employee_id,
                            date: key.date,
                            slot: key.slot,
                            pattern_id,
                        })
                        .await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.simulation.set_override(row.key(), row.pattern_id);
                }
                Effect::DeleteLive { key } => {
                    self.client.delete_shift(key).await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.live.remove(key);
                }
                Effect::DeleteSimulation { key } => {
                    self.client.delete_simulation_shift(key).await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.simulation.clear(key);
                }
                Effect::Suppress { key } => {
                    self.client.mark_right_deleted(key).await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.simulation.suppress(key);
                }
                Effect::MirrorSimulation { key, pattern_id } => {
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.simulation.mirror_live(key, pattern_id);
                }
                Effect::ClearSimulation { key } => {
                    let data = self.data.as_mut().context("No month data loaded")?;
                    data.simulation.clear(key);
                }
                Effect::DeleteLiveDate { date } => {
                    self.client.delete_date_shifts(date).await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    policy::apply_live_date_clear(&mut data.live, &mut data.simulation, date);
                }
                Effect::DeleteSimulationDate { date } => {
                    self.client.delete_date_simulation_shifts(date).await?;
                    let data = self.data.as_mut().context("No month data loaded")?;
                    policy::apply_simulation_date_clear(&data.live, &mut data.simulation, date);
                }
            }
        }
        Ok(())
    }

    /// Build the grid for one side.
    pub fn grid(&self, side: Side, today: NaiveDate) -> Result<MonthGrid> {
        let data = self.data()?;
        let live = &data.live;
        let simulation = &data.simulation;

        let grid = match side {
            Side::Live => build_grid(
                data.month,
                &data.employees,
                &data.catalog,
                &|key| live.pattern_id(key),
                &data.holidays,
                &data.notes,
                side,
                &data.hidden_dates,
                today,
            ),
            Side::Simulation => build_grid(
                data.month,
                &data.employees,
                &data.catalog,
                &|key| simulation.resolved(key),
                &data.holidays,
                &data.notes,
                side,
                &data.hidden_dates,
                today,
            ),
        };
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_data(month: YearMonth, epoch: u64) -> MonthData {
        MonthData {
            month,
            employees: Vec::new(),
            catalog: PatternCatalog::default(),
            live: ShiftStore::default(),
            simulation: SimulationStore::default(),
            notes: NoteStore::default(),
            holidays: HolidaySet::default(),
            hidden_dates: HashSet::new(),
            epoch,
        }
    }

    fn session() -> MonthSession {
        MonthSession::new(
            ApiClient::new("http://127.0.0.1:1"),
            String::new(),
            "2024-05".parse().unwrap(),
        )
    }

    #[test]
    fn test_stale_epoch_is_discarded() {
        let mut session = session();
        let month = session.month;

        // Two loads start; the first finishes last.
        let first = session.begin_load();
        let second = session.begin_load();

        assert!(session.install(empty_data(month, second)));
        assert!(!session.install(empty_data(month, first)));
        assert!(session.data().is_ok());
    }

    #[test]
    fn test_nothing_loaded_is_an_error() {
        let session = session();
        assert!(session.data().is_err());
    }
}
