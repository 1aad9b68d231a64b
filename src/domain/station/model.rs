//! Charging station domain entity

use chrono::{DateTime, Utc};

/// Connector standard offered by a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConnectorType {
    Ccs,
    Chademo,
    Type2,
    Schuko,
    Tesla,
    Other,
}

impl ConnectorType {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CCS" => Some(Self::Ccs),
            "CHAdeMO" => Some(Self::Chademo),
            "Type2" => Some(Self::Type2),
            "Schuko" => Some(Self::Schuko),
            "Tesla" => Some(Self::Tesla),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for ConnectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ccs => write!(f, "CCS"),
            Self::Chademo => write!(f, "CHAdeMO"),
            Self::Type2 => write!(f, "Type2"),
            Self::Schuko => write!(f, "Schuko"),
            Self::Tesla => write!(f, "Tesla"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A public or private charging station
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub connector_type: ConnectorType,
    /// Delivered power in kW
    pub power_kw: f64,
    pub connector_count: i32,
    pub public_access: bool,
    /// Human-readable opening hours, e.g. "24/7"
    pub opening_hours: String,
    /// Price per kWh in the local currency
    pub cost_per_kwh: f64,
    pub operator: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewStation {
    pub name: String,
    pub location: String,
    pub connector_type: ConnectorType,
    pub power_kw: f64,
    pub connector_count: i32,
    pub public_access: bool,
    pub opening_hours: String,
    pub cost_per_kwh: f64,
    pub operator: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct StationPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub connector_type: Option<ConnectorType>,
    pub power_kw: Option<f64>,
    pub connector_count: Option<i32>,
    pub public_access: Option<bool>,
    pub opening_hours: Option<String>,
    pub cost_per_kwh: Option<f64>,
    pub operator: Option<String>,
    pub image_url: Option<Option<String>>,
}

impl StationPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.location.is_none()
            && self.connector_type.is_none()
            && self.power_kw.is_none()
            && self.connector_count.is_none()
            && self.public_access.is_none()
            && self.opening_hours.is_none()
            && self.cost_per_kwh.is_none()
            && self.operator.is_none()
            && self.image_url.is_none()
    }
}

impl Station {
    pub fn apply_patch(&mut self, patch: StationPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(connector_type) = patch.connector_type {
            self.connector_type = connector_type;
        }
        if let Some(power_kw) = patch.power_kw {
            self.power_kw = power_kw;
        }
        if let Some(connector_count) = patch.connector_count {
            self.connector_count = connector_count;
        }
        if let Some(public_access) = patch.public_access {
            self.public_access = public_access;
        }
        if let Some(opening_hours) = patch.opening_hours {
            self.opening_hours = opening_hours;
        }
        if let Some(cost_per_kwh) = patch.cost_per_kwh {
            self.cost_per_kwh = cost_per_kwh;
        }
        if let Some(operator) = patch.operator {
            self.operator = operator;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

/// Station moved to the history table by delete; keeps the original id.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedStation {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub connector_type: ConnectorType,
    pub power_kw: f64,
    pub connector_count: i32,
    pub public_access: bool,
    pub opening_hours: String,
    pub cost_per_kwh: f64,
    pub operator: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connector_type_parse_round_trip() {
        for s in ["CCS", "CHAdeMO", "Type2", "Schuko", "Tesla", "Other"] {
            assert_eq!(ConnectorType::parse(s).unwrap().to_string(), s);
        }
        assert!(ConnectorType::parse("ccs").is_none());
        assert!(ConnectorType::parse("GB/T").is_none());
    }

    #[test]
    fn patch_mutates_only_present_fields() {
        let mut s = Station {
            id: 1,
            name: "Supercharger Centro".into(),
            location: "Av. Principal 123".into(),
            connector_type: ConnectorType::Tesla,
            power_kw: 250.0,
            connector_count: 8,
            public_access: true,
            opening_hours: "24/7".into(),
            cost_per_kwh: 0.25,
            operator: "Tesla".into(),
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let before = s.clone();

        s.apply_patch(StationPatch::default());
        assert_eq!(s, before);

        s.apply_patch(StationPatch {
            power_kw: Some(300.0),
            ..Default::default()
        });
        assert_eq!(s.power_kw, 300.0);
        assert_eq!(s.name, "Supercharger Centro");
        assert_eq!(s.connector_count, 8);
    }
}
