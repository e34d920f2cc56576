//! Reconciliation policy between the live and the simulation schedule.
//!
//! Every edit is planned here as a list of effects before anything is sent
//! to the backend. Server effects map one-to-one onto API calls; cache
//! effects are applied locally once the preceding call succeeded. Keeping
//! the decision pure makes the state machine testable without a server.
//!
//! The states per key, from the simulation side, are the four variants of
//! [`SimState`](crate::store::SimState): Unset, Inherited, Overridden and
//! Suppressed.

use chrono::NaiveDate;

use crate::slot::SlotKey;
use crate::store::{ShiftStore, SimState, SimulationStore};

/// One planned step of an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST /api/updateShift, then install the returned row.
    UpsertLive { key: SlotKey, pattern_id: i64 },
    /// POST /api/updateShiftSimulation, then record the override.
    UpsertSimulation { key: SlotKey, pattern_id: i64 },
    /// POST /api/deleteShift, then drop the live entry.
    DeleteLive { key: SlotKey },
    /// POST /api/deleteShiftSimulation, then drop the simulation entry.
    DeleteSimulation { key: SlotKey },
    /// POST /api/markShiftAsRightDeleted, then record the tombstone.
    Suppress { key: SlotKey },
    /// Cache-only: refresh an inherited simulation cell after a live edit.
    MirrorSimulation { key: SlotKey, pattern_id: i64 },
    /// Cache-only: drop a simulation entry whose live backing went away.
    ClearSimulation { key: SlotKey },
    /// POST /api/deleteDateShifts, then drop the date's live entries.
    DeleteLiveDate { date: NaiveDate },
    /// POST /api/deleteDateShiftsSimulation, then suppress/drop the date's
    /// simulation entries.
    DeleteSimulationDate { date: NaiveDate },
}

/// Plan an edit of a live cell.
///
/// The live store always takes the write. The simulation view follows only
/// while it has no simulation-specific data for the key: unset and inherited
/// cells are refreshed with a mirror entry, overrides keep their own value,
/// and a suppressed cell stays suppressed no matter what the live side does.
pub fn plan_live_edit(simulation: &SimulationStore, key: SlotKey, pattern_id: i64) -> Vec<Effect> {
    let mut effects = vec![Effect::UpsertLive { key, pattern_id }];
    match simulation.state(key) {
        SimState::Unset | SimState::Inherited(_) => {
            effects.push(Effect::MirrorSimulation { key, pattern_id });
        }
        SimState::Overridden(_) | SimState::Suppressed => {}
    }
    effects
}

/// Plan an edit of a simulation cell. Live is never touched.
pub fn plan_simulation_edit(key: SlotKey, pattern_id: i64) -> Vec<Effect> {
    vec![Effect::UpsertSimulation { key, pattern_id }]
}

/// Plan the removal of a live cell.
///
/// Removal propagates to the simulation side only when the entry there was
/// inherited; overrides and tombstones hold simulation-only data and stay.
pub fn plan_live_delete(simulation: &SimulationStore, key: SlotKey) -> Vec<Effect> {
    let mut effects = vec![Effect::DeleteLive { key }];
    if let SimState::Inherited(_) = simulation.state(key) {
        effects.push(Effect::ClearSimulation { key });
    }
    effects
}

/// Plan the removal of a simulation cell.
///
/// With a live value underneath, the live record must survive: the key gets
/// a suppression tombstone instead of a delete. A pure simulation-only entry
/// is hard-deleted.
pub fn plan_simulation_delete(live: &ShiftStore, key: SlotKey) -> Vec<Effect> {
    if live.get(key).is_some() {
        vec![Effect::Suppress { key }]
    } else {
        vec![Effect::DeleteSimulation { key }]
    }
}

/// Plan wiping one date off the live schedule.
pub fn plan_live_date_clear(date: NaiveDate) -> Vec<Effect> {
    vec![Effect::DeleteLiveDate { date }]
}

/// Plan wiping one date off the simulation schedule. The backend pairs the
/// bulk delete with suppression of the date's live rows; the cache applies
/// the same rule per key.
pub fn plan_simulation_date_clear(date: NaiveDate) -> Vec<Effect> {
    vec![Effect::DeleteSimulationDate { date }]
}

/// Apply the cache side of a date-level simulation wipe: live-backed keys
/// become tombstones, simulation-only keys disappear.
pub fn apply_simulation_date_clear(
    live: &ShiftStore,
    simulation: &mut SimulationStore,
    date: NaiveDate,
) {
    for key in simulation.keys_for_date(date) {
        if live.get(key).is_some() {
            simulation.suppress(key);
        } else {
            simulation.clear(key);
        }
    }
}

/// Apply the cache side of a date-level live wipe: live rows go away and
/// inherited simulation entries follow, per the per-key propagation rule.
pub fn apply_live_date_clear(
    live: &mut ShiftStore,
    simulation: &mut SimulationStore,
    date: NaiveDate,
) {
    for key in live.remove_date(date) {
        if let SimState::Inherited(_) = simulation.state(key) {
            simulation.clear(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::{ShiftAssignment, SimulationRow};
    use crate::slot::TimeSlot;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, day).unwrap()
    }

    fn key(employee_id: i64, day: u32, slot: TimeSlot) -> SlotKey {
        SlotKey::new(employee_id, date(day), slot)
    }

    fn live_store(rows: &[(i64, u32, TimeSlot, i64)]) -> ShiftStore {
        ShiftStore::from_rows(
            rows.iter()
                .map(|&(employee_id, day, slot, pattern_id)| ShiftAssignment {
                    id: 0,
                    employee_id,
                    date: date(day),
                    slot,
                    pattern_id,
                })
                .collect(),
        )
    }

    fn sim_store(live: &ShiftStore, rows: &[(i64, u32, TimeSlot, i64)]) -> SimulationStore {
        SimulationStore::seed(
            rows.iter()
                .map(|&(employee_id, day, slot, pattern_id)| SimulationRow {
                    id: 0,
                    employee_id,
                    date: date(day),
                    slot,
                    pattern_id,
                    right_deleted: false,
                })
                .collect(),
            live,
        )
    }

    /// Applies a plan's cache effects the way the session does after the
    /// backend confirmed each call.
    fn apply(effects: &[Effect], live: &mut ShiftStore, simulation: &mut SimulationStore) {
        for effect in effects {
            match *effect {
                Effect::UpsertLive { key, pattern_id } => live.insert(ShiftAssignment {
                    id: 0,
                    employee_id: key.employee_id,
                    date: key.date,
                    slot: key.slot,
                    pattern_id,
                }),
                Effect::UpsertSimulation { key, pattern_id } => {
                    simulation.set_override(key, pattern_id)
                }
                Effect::DeleteLive { key } => {
                    live.remove(key);
                }
                Effect::DeleteSimulation { key } => {
                    simulation.clear(key);
                }
                Effect::Suppress { key } => simulation.suppress(key),
                Effect::MirrorSimulation { key, pattern_id } => {
                    simulation.mirror_live(key, pattern_id)
                }
                Effect::ClearSimulation { key } => {
                    simulation.clear(key);
                }
                Effect::DeleteLiveDate { date } => {
                    apply_live_date_clear(live, simulation, date);
                }
                Effect::DeleteSimulationDate { date } => {
                    apply_simulation_date_clear(live, simulation, date);
                }
            }
        }
    }

    #[test]
    fn test_live_edit_mirrors_into_inherited_cell() {
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 3)]);

        let plan = plan_live_edit(&sim, k, 7);
        assert!(plan.contains(&Effect::MirrorSimulation { key: k, pattern_id: 7 }));
        apply(&plan, &mut live, &mut sim);

        assert_eq!(live.pattern_id(k), Some(7));
        assert_eq!(sim.resolved(k), Some(7));
        assert_eq!(sim.state(k), SimState::Inherited(7));
    }

    #[test]
    fn test_live_edit_mirrors_into_unset_cell() {
        let k = key(2, 1, TimeSlot::Night);
        let mut live = live_store(&[]);
        let mut sim = sim_store(&live, &[]);

        apply(&plan_live_edit(&sim, k, 3), &mut live, &mut sim);

        assert_eq!(sim.resolved(k), Some(3));
    }

    #[test]
    fn test_override_survives_live_edit() {
        // Live 3, simulation overridden to 5, live edited to 7:
        // live shows 7, simulation still shows 5.
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 3)]);

        apply(&plan_simulation_edit(k, 5), &mut live, &mut sim);
        assert_eq!(live.pattern_id(k), Some(3));

        let plan = plan_live_edit(&sim, k, 7);
        assert_eq!(plan, vec![Effect::UpsertLive { key: k, pattern_id: 7 }]);
        apply(&plan, &mut live, &mut sim);

        assert_eq!(live.pattern_id(k), Some(7));
        assert_eq!(sim.resolved(k), Some(5));
    }

    #[test]
    fn test_live_delete_propagates_to_inherited_cell() {
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 3)]);

        apply(&plan_live_delete(&sim, k), &mut live, &mut sim);

        assert_eq!(live.pattern_id(k), None);
        assert_eq!(sim.resolved(k), None);
        assert_eq!(sim.state(k), SimState::Unset);
    }

    #[test]
    fn test_live_delete_leaves_override_alone() {
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 5)]);

        apply(&plan_live_delete(&sim, k), &mut live, &mut sim);

        assert_eq!(live.pattern_id(k), None);
        assert_eq!(sim.resolved(k), Some(5));
    }

    #[test]
    fn test_simulation_delete_suppresses_live_backed_entry() {
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 3)]);

        let plan = plan_simulation_delete(&live, k);
        assert_eq!(plan, vec![Effect::Suppress { key: k }]);
        apply(&plan, &mut live, &mut sim);

        // The live record survives; the simulation side renders unassigned.
        assert_eq!(live.pattern_id(k), Some(3));
        assert_eq!(sim.state(k), SimState::Suppressed);
        assert_eq!(sim.resolved(k), None);
    }

    #[test]
    fn test_simulation_delete_hard_deletes_pure_entry() {
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 5)]);

        let plan = plan_simulation_delete(&live, k);
        assert_eq!(plan, vec![Effect::DeleteSimulation { key: k }]);
        apply(&plan, &mut live, &mut sim);

        assert_eq!(sim.state(k), SimState::Unset);
    }

    #[test]
    fn test_suppression_survives_live_edit() {
        // Deliberate: a suppressed cell stays blank on the simulation side
        // even after the live value changes. Only an explicit simulation
        // edit of the key clears the tombstone.
        let k = key(1, 1, TimeSlot::Morning);
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3)]);
        let mut sim = sim_store(&live, &[(1, 1, TimeSlot::Morning, 3)]);

        apply(&plan_simulation_delete(&live, k), &mut live, &mut sim);
        apply(&plan_live_edit(&sim, k, 7), &mut live, &mut sim);

        assert_eq!(live.pattern_id(k), Some(7));
        assert_eq!(sim.state(k), SimState::Suppressed);
        assert_eq!(sim.resolved(k), None);

        apply(&plan_simulation_edit(k, 5), &mut live, &mut sim);
        assert_eq!(sim.resolved(k), Some(5));
    }

    #[test]
    fn test_simulation_date_clear_suppresses_and_deletes_per_key() {
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3), (2, 1, TimeSlot::Day, 5)]);
        let mut sim = sim_store(
            &live,
            &[
                (1, 1, TimeSlot::Morning, 3), // live-backed, inherited
                (2, 1, TimeSlot::Day, 7),     // live-backed, overridden
                (3, 1, TimeSlot::Night, 5),   // simulation-only
                (1, 2, TimeSlot::Morning, 3), // other date, untouched
            ],
        );

        apply(
            &plan_simulation_date_clear(date(1)),
            &mut live,
            &mut sim,
        );

        assert_eq!(sim.state(key(1, 1, TimeSlot::Morning)), SimState::Suppressed);
        assert_eq!(sim.state(key(2, 1, TimeSlot::Day)), SimState::Suppressed);
        assert_eq!(sim.state(key(3, 1, TimeSlot::Night)), SimState::Unset);
        assert_eq!(sim.resolved(key(1, 2, TimeSlot::Morning)), Some(3));
        // The live schedule is never touched by a simulation-side wipe.
        assert_eq!(live.len(), 2);
    }

    #[test]
    fn test_live_date_clear_propagates_to_inherited_cells_only() {
        let mut live = live_store(&[(1, 1, TimeSlot::Morning, 3), (2, 1, TimeSlot::Day, 5)]);
        let mut sim = sim_store(
            &live,
            &[
                (1, 1, TimeSlot::Morning, 3), // inherited
                (2, 1, TimeSlot::Day, 7),     // overridden
            ],
        );

        apply(&plan_live_date_clear(date(1)), &mut live, &mut sim);

        assert!(live.is_empty());
        assert_eq!(sim.state(key(1, 1, TimeSlot::Morning)), SimState::Unset);
        assert_eq!(sim.resolved(key(2, 1, TimeSlot::Day)), Some(7));
    }
}
