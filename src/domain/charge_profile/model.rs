//! Charging-difficulty profile domain entity

use chrono::{DateTime, Utc};

/// Standard under which the rated range was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStandard {
    Wltp,
    Epa,
    Nedc,
    Other,
}

impl RangeStandard {
    /// Strict parse; unknown values are a validation error, not a
    /// silent default.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "WLTP" => Some(Self::Wltp),
            "EPA" => Some(Self::Epa),
            "NEDC" => Some(Self::Nedc),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for RangeStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wltp => write!(f, "WLTP"),
            Self::Epa => write!(f, "EPA"),
            Self::Nedc => write!(f, "NEDC"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// How hard it is to charge the vehicle at home
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeDifficulty {
    Low,
    Medium,
    High,
}

impl ChargeDifficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for ChargeDifficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Charging profile for a vehicle model
#[derive(Debug, Clone, PartialEq)]
pub struct ChargeProfile {
    pub id: i32,
    /// Vehicle model the profile applies to
    pub vehicle_model: String,
    pub range_standard: RangeStandard,
    /// Consumption in kWh per 100 km
    pub consumption_kwh_100km: f64,
    /// Full-charge time in hours
    pub charge_time_hours: f64,
    pub charge_difficulty: ChargeDifficulty,
    /// Whether a dedicated home installation is required
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewChargeProfile {
    pub vehicle_model: String,
    pub range_standard: RangeStandard,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    pub charge_difficulty: ChargeDifficulty,
    pub home_install_required: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ChargeProfilePatch {
    pub vehicle_model: Option<String>,
    pub range_standard: Option<RangeStandard>,
    pub consumption_kwh_100km: Option<f64>,
    pub charge_time_hours: Option<f64>,
    pub charge_difficulty: Option<ChargeDifficulty>,
    pub home_install_required: Option<bool>,
    pub image_url: Option<Option<String>>,
}

impl ChargeProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.vehicle_model.is_none()
            && self.range_standard.is_none()
            && self.consumption_kwh_100km.is_none()
            && self.charge_time_hours.is_none()
            && self.charge_difficulty.is_none()
            && self.home_install_required.is_none()
            && self.image_url.is_none()
    }
}

impl ChargeProfile {
    pub fn apply_patch(&mut self, patch: ChargeProfilePatch) {
        if let Some(vehicle_model) = patch.vehicle_model {
            self.vehicle_model = vehicle_model;
        }
        if let Some(range_standard) = patch.range_standard {
            self.range_standard = range_standard;
        }
        if let Some(consumption) = patch.consumption_kwh_100km {
            self.consumption_kwh_100km = consumption;
        }
        if let Some(charge_time) = patch.charge_time_hours {
            self.charge_time_hours = charge_time;
        }
        if let Some(difficulty) = patch.charge_difficulty {
            self.charge_difficulty = difficulty;
        }
        if let Some(home_install) = patch.home_install_required {
            self.home_install_required = home_install;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
    }
}

/// Profile moved to the history table by delete; keeps the original id.
#[derive(Debug, Clone, PartialEq)]
pub struct DeletedChargeProfile {
    pub id: i32,
    pub vehicle_model: String,
    pub range_standard: RangeStandard,
    pub consumption_kwh_100km: f64,
    pub charge_time_hours: f64,
    pub charge_difficulty: ChargeDifficulty,
    pub home_install_required: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub deleted_at: DateTime<Utc>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_standard_parse_round_trip() {
        for s in ["WLTP", "EPA", "NEDC", "Other"] {
            assert_eq!(RangeStandard::parse(s).unwrap().to_string(), s);
        }
        assert!(RangeStandard::parse("wltp").is_none());
        assert!(RangeStandard::parse("JC08").is_none());
    }

    #[test]
    fn charge_difficulty_parse_round_trip() {
        for s in ["low", "medium", "high"] {
            assert_eq!(ChargeDifficulty::parse(s).unwrap().to_string(), s);
        }
        assert!(ChargeDifficulty::parse("extreme").is_none());
        assert!(ChargeDifficulty::parse("Low").is_none());
    }

    #[test]
    fn patch_mutates_only_present_fields() {
        let mut p = ChargeProfile {
            id: 1,
            vehicle_model: "Model 3".into(),
            range_standard: RangeStandard::Epa,
            consumption_kwh_100km: 15.0,
            charge_time_hours: 8.0,
            charge_difficulty: ChargeDifficulty::Low,
            home_install_required: false,
            image_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let before = p.clone();

        p.apply_patch(ChargeProfilePatch::default());
        assert_eq!(p, before);

        p.apply_patch(ChargeProfilePatch {
            charge_difficulty: Some(ChargeDifficulty::Medium),
            ..Default::default()
        });
        assert_eq!(p.charge_difficulty, ChargeDifficulty::Medium);
        assert_eq!(p.vehicle_model, "Model 3");
        assert_eq!(p.consumption_kwh_100km, 15.0);
    }
}
