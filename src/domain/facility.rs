use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstructionType {
    HospitalRenovation,
    CleanShell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostRegion {
    LowCost,
    ModerateCost,
    HighCost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QualityLevel {
    Budget,
    Standard,
    Premium,
}

/// Audio-visual recording and debrief package fitted to every room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvTier {
    Basic,
    Standard,
    Premium,
}

/// Which utilization figure drives maintenance, consumables and utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OpexModel {
    RoomBased,
    SessionsBased,
}

impl ConstructionType {
    pub fn key(&self) -> &'static str {
        match self {
            ConstructionType::HospitalRenovation => "hospital-renovation",
            ConstructionType::CleanShell => "clean-shell",
        }
    }
}

impl CostRegion {
    pub fn key(&self) -> &'static str {
        match self {
            CostRegion::LowCost => "low-cost",
            CostRegion::ModerateCost => "moderate-cost",
            CostRegion::HighCost => "high-cost",
        }
    }
}

impl QualityLevel {
    pub fn key(&self) -> &'static str {
        match self {
            QualityLevel::Budget => "budget",
            QualityLevel::Standard => "standard",
            QualityLevel::Premium => "premium",
        }
    }
}

impl AvTier {
    pub fn key(&self) -> &'static str {
        match self {
            AvTier::Basic => "basic",
            AvTier::Standard => "standard",
            AvTier::Premium => "premium",
        }
    }
}

impl OpexModel {
    pub fn key(&self) -> &'static str {
        match self {
            OpexModel::RoomBased => "room-based",
            OpexModel::SessionsBased => "sessions-based",
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase()
}

impl FromStr for ConstructionType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "hospital-renovation" => Ok(ConstructionType::HospitalRenovation),
            "clean-shell" => Ok(ConstructionType::CleanShell),
            _ => Err(ValidationError::UnknownCategory {
                kind: "construction type",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for CostRegion {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "low-cost" => Ok(CostRegion::LowCost),
            "moderate-cost" => Ok(CostRegion::ModerateCost),
            "high-cost" => Ok(CostRegion::HighCost),
            _ => Err(ValidationError::UnknownCategory {
                kind: "cost region",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for QualityLevel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "budget" => Ok(QualityLevel::Budget),
            "standard" => Ok(QualityLevel::Standard),
            "premium" => Ok(QualityLevel::Premium),
            _ => Err(ValidationError::UnknownCategory {
                kind: "quality level",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for AvTier {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "basic" => Ok(AvTier::Basic),
            "standard" => Ok(AvTier::Standard),
            "premium" => Ok(AvTier::Premium),
            _ => Err(ValidationError::UnknownCategory {
                kind: "A/V tier",
                value: value.to_string(),
            }),
        }
    }
}

impl FromStr for OpexModel {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize(value).as_str() {
            "room-based" => Ok(OpexModel::RoomBased),
            "sessions-based" => Ok(OpexModel::SessionsBased),
            _ => Err(ValidationError::UnknownCategory {
                kind: "OPEX model",
                value: value.to_string(),
            }),
        }
    }
}

macro_rules! display_by_key {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.key())
                }
            }
        )*
    };
}

display_by_key!(ConstructionType, CostRegion, QualityLevel, AvTier, OpexModel);
