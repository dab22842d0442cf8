//! Water source categories offered to the user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The six source categories. The label is passed through untouched into the
/// advisory prompt and plays no role in guideline comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterSource {
    River,
    Lake,
    Sea,
    AquiferGroundwater,
    NaturalSpring,
    #[default]
    Unspecified,
}

impl WaterSource {
    pub const ALL: [Self; 6] = [
        Self::River,
        Self::Lake,
        Self::Sea,
        Self::AquiferGroundwater,
        Self::NaturalSpring,
        Self::Unspecified,
    ];

    /// Human-readable label used in prompts and display.
    pub fn label(self) -> &'static str {
        match self {
            Self::River => "River Water",
            Self::Lake => "Lake Water",
            Self::Sea => "Sea Water",
            Self::AquiferGroundwater => "Aquifer Groundwater",
            Self::NaturalSpring => "Natural Spring",
            Self::Unspecified => "Source Unspecified Water",
        }
    }
}

impl fmt::Display for WaterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
