//! Shared shape for persisted record types
//!
//! Every record table carries the same leading columns: a store-assigned
//! id plus creation and last-update timestamps, both maintained by the
//! store itself. Table names are derived mechanically from the type name.

/// Columns common to every record table. Interpolated into each
/// CREATE TABLE statement so all record types stay on the same base shape.
pub(crate) const BASE_COLUMNS: &str = "\
id BIGSERIAL PRIMARY KEY,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()";

/// A persisted record type.
pub trait Record {
    /// Table name, derived from the type name, lowercased.
    fn table_name() -> String
    where
        Self: Sized,
    {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FuelStop;
    impl Record for FuelStop {}

    #[test]
    fn table_name_is_lowercased_type_name() {
        assert_eq!(FuelStop::table_name(), "fuelstop");
    }
}
