//! HTTP client for the schedule backend.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::debug;

use shiftcal_core::protocol::{
    Ack, DateRequest, DeleteShiftRequest, ToggleDateDeletionRequest, UpsertShiftRequest,
};
use shiftcal_core::{
    Employee, NoteRow, ShiftAssignment, ShiftPattern, Side, SimulationRow, SlotKey, YearMonth,
};

/// HTTP client for the schedule backend.
///
/// One method per endpoint; every body is JSON. Non-2xx responses carry a
/// plain-text error which is surfaced verbatim.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        ApiClient {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        anyhow::bail!("Backend returned {}: {}", status, body.trim())
    }

    /// GET /api/employees
    pub async fn employees(&self) -> Result<Vec<Employee>> {
        debug!("fetching employees");
        let resp = self
            .http
            .get(format!("{}/api/employees", self.base_url))
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /api/kintai_patterns
    pub async fn patterns(&self) -> Result<Vec<ShiftPattern>> {
        debug!("fetching pattern catalog");
        let resp = self
            .http
            .get(format!("{}/api/kintai_patterns", self.base_url))
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /api/shifts?yearMonth=YYYY-MM
    pub async fn shifts(&self, month: YearMonth) -> Result<Vec<ShiftAssignment>> {
        debug!(%month, "fetching live shifts");
        let resp = self
            .http
            .get(format!("{}/api/shifts", self.base_url))
            .query(&[("yearMonth", month.to_string())])
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /api/shifts_simulation?yearMonth=YYYY-MM
    pub async fn simulation_shifts(&self, month: YearMonth) -> Result<Vec<SimulationRow>> {
        debug!(%month, "fetching simulation shifts");
        let resp = self
            .http
            .get(format!("{}/api/shifts_simulation", self.base_url))
            .query(&[("yearMonth", month.to_string())])
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/updateShift
    pub async fn upsert_shift(&self, req: &UpsertShiftRequest) -> Result<ShiftAssignment> {
        debug!(employee = req.employee_id, date = %req.date, slot = %req.slot, pattern = req.pattern_id, "upserting live shift");
        let resp = self
            .http
            .post(format!("{}/api/updateShift", self.base_url))
            .json(req)
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/updateShiftSimulation
    pub async fn upsert_simulation_shift(&self, req: &UpsertShiftRequest) -> Result<SimulationRow> {
        debug!(employee = req.employee_id, date = %req.date, slot = %req.slot, pattern = req.pattern_id, "upserting simulation shift");
        let resp = self
            .http
            .post(format!("{}/api/updateShiftSimulation", self.base_url))
            .json(req)
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/deleteShift
    pub async fn delete_shift(&self, key: SlotKey) -> Result<Ack> {
        debug!(%key, "deleting live shift");
        self.keyed_post("deleteShift", key).await
    }

    /// POST /api/deleteShiftSimulation
    pub async fn delete_simulation_shift(&self, key: SlotKey) -> Result<Ack> {
        debug!(%key, "deleting simulation shift");
        self.keyed_post("deleteShiftSimulation", key).await
    }

    /// POST /api/markShiftAsRightDeleted
    pub async fn mark_right_deleted(&self, key: SlotKey) -> Result<Ack> {
        debug!(%key, "suppressing shift on simulation side");
        self.keyed_post("markShiftAsRightDeleted", key).await
    }

    async fn keyed_post(&self, endpoint: &str, key: SlotKey) -> Result<Ack> {
        let req = DeleteShiftRequest {
            employee_id: key.employee_id,
            date: key.date,
            slot: key.slot,
        };
        let resp = self
            .http
            .post(format!("{}/api/{}", self.base_url, endpoint))
            .json(&req)
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /api/memos?yearMonth=YYYY-MM&isRight=bool
    pub async fn notes(&self, month: YearMonth, side: Side) -> Result<Vec<NoteRow>> {
        debug!(%month, %side, "fetching notes");
        let resp = self
            .http
            .get(format!("{}/api/memos", self.base_url))
            .query(&[
                ("yearMonth", month.to_string()),
                ("isRight", side.is_right().to_string()),
            ])
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/saveNoteMemo
    pub async fn save_note(&self, note: &NoteRow) -> Result<NoteRow> {
        debug!(date = %note.date, is_right = note.is_right, "saving note");
        let resp = self
            .http
            .post(format!("{}/api/saveNoteMemo", self.base_url))
            .json(note)
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// GET /api/deleted_dates?yearMonth=YYYY-MM
    pub async fn deleted_dates(&self, month: YearMonth) -> Result<Vec<NaiveDate>> {
        debug!(%month, "fetching hidden dates");
        let resp = self
            .http
            .get(format!("{}/api/deleted_dates", self.base_url))
            .query(&[("yearMonth", month.to_string())])
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        // The backend serves null instead of [] for an empty month.
        let dates: Option<Vec<NaiveDate>> = Self::check(resp).await?.json().await?;
        Ok(dates.unwrap_or_default())
    }

    /// POST /api/toggleDateDeletion
    pub async fn toggle_date_deletion(&self, date: NaiveDate, is_deleted: bool) -> Result<Ack> {
        debug!(%date, is_deleted, "toggling date deletion");
        let resp = self
            .http
            .post(format!("{}/api/toggleDateDeletion", self.base_url))
            .json(&ToggleDateDeletionRequest { date, is_deleted })
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/deleteDateShifts
    pub async fn delete_date_shifts(&self, date: NaiveDate) -> Result<Ack> {
        debug!(%date, "deleting all live shifts of date");
        let resp = self
            .http
            .post(format!("{}/api/deleteDateShifts", self.base_url))
            .json(&DateRequest { date })
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }

    /// POST /api/deleteDateShiftsSimulation
    pub async fn delete_date_simulation_shifts(&self, date: NaiveDate) -> Result<Ack> {
        debug!(%date, "deleting all simulation shifts of date");
        let resp = self
            .http
            .post(format!("{}/api/deleteDateShiftsSimulation", self.base_url))
            .json(&DateRequest { date })
            .send()
            .await
            .context("Failed to connect to schedule backend")?;

        Ok(Self::check(resp).await?.json().await?)
    }
}
