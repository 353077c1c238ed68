//! Persisted record models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::record::Record;

/// One refueling event.
///
/// `id`, `created_at`, and `updated_at` are assigned and maintained by the
/// store; application code never writes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Refuel {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Odometer reading at the pump, in km.
    pub odometer: f64,
    /// Fuel added, in liters.
    pub fuel_volume: f64,
    /// Tank was filled to full.
    pub is_full: bool,
    /// The previous refueling was not logged.
    pub skipped_previous: bool,
}

impl Record for Refuel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuel_table_name() {
        assert_eq!(Refuel::table_name(), "refuel");
    }
}
