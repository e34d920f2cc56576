//! Employee rows as served by the backend.

use serde::{Deserialize, Serialize};

/// One employee column of the grid.
///
/// The backend returns employees already sorted by their user-defined
/// display order; the list order is authoritative and the renderer never
/// re-sorts it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub display_order: i64,
}
