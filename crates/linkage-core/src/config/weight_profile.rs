//! Named weight profiles for the multi-criteria scorer.
//!
//! A profile assigns each comparison criterion a share of 100 points.
//! Two profiles ship built in; more can be defined via TOML.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::PROFILE_WEIGHT_TOTAL;
use crate::errors::{LinkageError, LinkageResult};

/// Criterion weights, summing to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightProfile {
    #[serde(skip)]
    pub name: String,
    pub crime_type: f64,
    pub modus_operandi: f64,
    pub area: f64,
    pub time_of_day: f64,
    pub evidence: f64,
    pub characteristics: f64,
}

impl WeightProfile {
    /// The default balance: crime type and modus operandi dominate.
    pub fn standard() -> Self {
        Self {
            name: "standard".to_string(),
            crime_type: 25.0,
            modus_operandi: 25.0,
            area: 20.0,
            time_of_day: 10.0,
            evidence: 15.0,
            characteristics: 5.0,
        }
    }

    /// Emphasizes where and when over how: area 40, time-of-day 25.
    /// Characteristics carry no weight under this profile.
    pub fn geography_emphasis() -> Self {
        Self {
            name: "geography_emphasis".to_string(),
            crime_type: 20.0,
            modus_operandi: 10.0,
            area: 40.0,
            time_of_day: 25.0,
            evidence: 5.0,
            characteristics: 0.0,
        }
    }

    pub fn total(&self) -> f64 {
        self.crime_type
            + self.modus_operandi
            + self.area
            + self.time_of_day
            + self.evidence
            + self.characteristics
    }

    /// Check that the weights sum to 100 (within float tolerance) and that
    /// none is negative.
    pub fn validate(&self) -> LinkageResult<()> {
        let total = self.total();
        let negative = [
            self.crime_type,
            self.modus_operandi,
            self.area,
            self.time_of_day,
            self.evidence,
            self.characteristics,
        ]
        .iter()
        .any(|w| *w < 0.0);
        if negative || (total - PROFILE_WEIGHT_TOTAL).abs() > 1e-6 {
            return Err(LinkageError::InvalidProfile {
                name: self.name.clone(),
                total,
            });
        }
        Ok(())
    }
}

impl Default for WeightProfile {
    fn default() -> Self {
        Self::standard()
    }
}

/// Immutable name → profile lookup table, built once at startup.
#[derive(Debug, Clone)]
pub struct ProfileRegistry {
    profiles: HashMap<String, WeightProfile>,
}

#[derive(Debug, Default, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profiles: HashMap<String, WeightProfile>,
}

impl ProfileRegistry {
    /// Registry containing only the built-in profiles.
    pub fn builtin() -> Self {
        let mut profiles = HashMap::new();
        for profile in [WeightProfile::standard(), WeightProfile::geography_emphasis()] {
            profiles.insert(profile.name.clone(), profile);
        }
        Self { profiles }
    }

    /// Parse `[profiles.<name>]` tables from TOML and merge them over the
    /// built-ins. Every resulting profile is validated.
    pub fn from_toml_str(raw: &str) -> LinkageResult<Self> {
        let file: ProfilesFile = toml::from_str(raw)?;
        let mut registry = Self::builtin();
        for (name, mut profile) in file.profiles {
            profile.name = name.clone();
            registry.profiles.insert(name, profile);
        }
        for profile in registry.profiles.values() {
            profile.validate()?;
        }
        Ok(registry)
    }

    /// Look up a profile by name.
    pub fn get(&self, name: &str) -> LinkageResult<&WeightProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| LinkageError::UnknownProfile {
                name: name.to_string(),
            })
    }

    /// Names of all registered profiles, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ProfileRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
