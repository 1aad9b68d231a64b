//! Vehicle domain entity

use chrono::{DateTime, Utc};

/// An electric vehicle in the active catalog
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    /// Manufacturer name
    pub brand: String,
    /// Model designation
    pub model: String,
    /// Production year
    pub year: i32,
    /// Battery capacity in kWh
    pub battery_kwh: f64,
    /// Rated range in km
    pub range_km: f64,
    /// Whether the vehicle is currently available
    pub available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Draft for creating a vehicle; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub available: bool,
    pub image_url: Option<String>,
}

/// Partial update: only present fields mutate the record.
///
/// `image_url` is doubly optional so that "field omitted" and
/// "field explicitly set to null" stay distinguishable.
#[derive(Debug, Clone, Default)]
pub struct VehiclePatch {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub battery_kwh: Option<f64>,
    pub range_km: Option<f64>,
    pub available: Option<bool>,
    pub image_url: Option<Option<String>>,
}

impl VehiclePatch {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.battery_kwh.is_none()
            && self.range_km.is_none()
            && self.available.is_none()
            && self.image_url.is_none()
    }
}

impl Vehicle {
    /// Apply a partial update, field by field. Omitted fields keep
    /// their prior value.
    pub fn apply_patch(&mut self, patch: VehiclePatch) {
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(battery_kwh) = patch.battery_kwh {
            self.battery_kwh = battery_kwh;
        }
        if let Some(range_km) = patch.range_km {
            self.range_km = range_km;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

/// A vehicle moved to the history table by delete.
///
/// Keeps the original id so history consumers can correlate it with
/// references captured before the delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedVehicle {
    pub id: i32,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub battery_kwh: f64,
    pub range_km: f64,
    pub available: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vehicle() -> Vehicle {
        Vehicle {
            id: 1,
            brand: "Tesla".into(),
            model: "Model 3".into(),
            year: 2023,
            battery_kwh: 75.0,
            range_km: 500.0,
            available: true,
            image_url: Some("/images/model3.jpg".into()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut v = sample_vehicle();
        let before = v.clone();
        assert!(VehiclePatch::default().is_empty());
        v.apply_patch(VehiclePatch::default());
        assert_eq!(v, before);
    }

    #[test]
    fn patch_mutates_only_present_fields() {
        let mut v = sample_vehicle();
        v.apply_patch(VehiclePatch {
            range_km: Some(600.0),
            ..Default::default()
        });
        assert_eq!(v.range_km, 600.0);
        assert_eq!(v.brand, "Tesla");
        assert_eq!(v.year, 2023);
        assert_eq!(v.image_url.as_deref(), Some("/images/model3.jpg"));
    }

    #[test]
    fn patch_can_clear_image_url() {
        let mut v = sample_vehicle();
        v.apply_patch(VehiclePatch {
            image_url: Some(None),
            ..Default::default()
        });
        assert_eq!(v.image_url, None);
    }

    #[test]
    fn omitted_image_url_is_kept() {
        let mut v = sample_vehicle();
        v.apply_patch(VehiclePatch {
            brand: Some("Nissan".into()),
            ..Default::default()
        });
        assert_eq!(v.image_url.as_deref(), Some("/images/model3.jpg"));
    }
}
