//! Request and acknowledgement bodies of the backend API.
//!
//! Field names follow the backend's JSON contract; the row types it serves
//! live next to their domain types (`assignment`, `employee`, `pattern`,
//! `note`).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::slot::TimeSlot;

/// Body of `/api/updateShift` and `/api/updateShiftSimulation`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertShiftRequest {
    pub employee_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "shift_time")]
    pub slot: TimeSlot,
    #[serde(rename = "kintai_pattern_id")]
    pub pattern_id: i64,
}

/// Body of the keyed delete and suppression endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteShiftRequest {
    pub employee_id: i64,
    pub date: NaiveDate,
    #[serde(rename = "shift_time")]
    pub slot: TimeSlot,
}

/// Body of the date-level bulk endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRequest {
    pub date: NaiveDate,
}

/// Body of `/api/toggleDateDeletion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleDateDeletionRequest {
    pub date: NaiveDate,
    pub is_deleted: bool,
}

/// Generic acknowledgement for destructive endpoints. Deletes of missing
/// rows still ack with `success: true`; the message says so.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: String,
}
