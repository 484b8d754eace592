//! Growth-rate curves, level inversion, and knockout experience awards

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::FormulaError;

/// The six growth-rate curves relating level to cumulative experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrowthRate {
    Slow,
    Medium,
    Fast,
    MediumSlow,
    Erratic,
    Fluctuating,
}

impl GrowthRate {
    /// All six curves
    pub const ALL: [GrowthRate; 6] = [
        GrowthRate::Slow,
        GrowthRate::Medium,
        GrowthRate::Fast,
        GrowthRate::MediumSlow,
        GrowthRate::Erratic,
        GrowthRate::Fluctuating,
    ];

    /// Parse a catalog name (case-insensitive).
    ///
    /// Accepts the descriptive aliases some catalogs use for the
    /// piecewise curves: `slow-then-very-fast` (erratic) and
    /// `fast-then-very-slow` (fluctuating).
    pub fn from_name(name: &str) -> Result<Self, FormulaError> {
        match name.to_lowercase().as_str() {
            "slow" => Ok(GrowthRate::Slow),
            "medium" => Ok(GrowthRate::Medium),
            "fast" => Ok(GrowthRate::Fast),
            "medium-slow" => Ok(GrowthRate::MediumSlow),
            "erratic" | "slow-then-very-fast" => Ok(GrowthRate::Erratic),
            "fluctuating" | "fast-then-very-slow" => Ok(GrowthRate::Fluctuating),
            other => Err(FormulaError::UnknownGrowthRate(other.to_string())),
        }
    }

    /// Canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthRate::Slow => "slow",
            GrowthRate::Medium => "medium",
            GrowthRate::Fast => "fast",
            GrowthRate::MediumSlow => "medium-slow",
            GrowthRate::Erratic => "erratic",
            GrowthRate::Fluctuating => "fluctuating",
        }
    }
}

impl fmt::Display for GrowthRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GrowthRate {
    type Err = FormulaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Total experience required to reach `level` on the given curve.
///
/// The medium-slow curve dips below zero under level 3, which is why
/// experience is signed throughout the engine.
pub fn exp_for_level(rate: GrowthRate, level: u8) -> i64 {
    let l = f64::from(level);
    let raw = match rate {
        GrowthRate::Slow => 5.0 * l.powi(3) / 4.0,
        GrowthRate::Medium => l.powi(3),
        GrowthRate::Fast => 4.0 * l.powi(3) / 5.0,
        GrowthRate::MediumSlow => 6.0 * l.powi(3) / 5.0 - 15.0 * l.powi(2) + 100.0 * l - 140.0,
        GrowthRate::Erratic => {
            if level <= 50 {
                l.powi(3) * (100.0 - l) / 50.0
            } else if level <= 68 {
                l.powi(3) * (150.0 - l) / 100.0
            } else if level <= 98 {
                let m = f64::from(level % 3);
                let third = f64::from(level / 3);
                l.powi(3) * (1274.0 + m * m - 9.0 * m - 20.0 * third) / 1000.0
            } else {
                l.powi(3) * (160.0 - l) / 100.0
            }
        }
        GrowthRate::Fluctuating => {
            if level <= 15 {
                l.powi(3) * (24.0 + f64::from((u32::from(level) + 1) / 3)) / 50.0
            } else if level <= 35 {
                l.powi(3) * (14.0 + l) / 50.0
            } else {
                l.powi(3) * (32.0 + f64::from(level / 2)) / 50.0
            }
        }
    };
    raw.floor() as i64
}

/// The level reached with `exp` total experience on the given curve.
///
/// Scans levels 1..=100 and returns the last one whose requirement
/// does not exceed `exp`. The curves are monotone step functions over
/// this domain and the piecewise ones have no closed-form inverse, so
/// the scan is the only inversion that round-trips exactly.
pub fn level_for_exp(rate: GrowthRate, exp: i64) -> u8 {
    let mut level = 1;
    for candidate in 1..=100u8 {
        if exp_for_level(rate, candidate) <= exp {
            level = candidate;
        }
    }
    level
}

/// Experience earned for knocking out a defender.
///
/// `health_fraction` is the winner's remaining HP as a true ratio in
/// `0.0..=1.0`. Flooring it to an integer first would collapse the
/// full-health and 75% bonuses into the base tier.
pub fn exp_award(base_exp: i64, defender_level: u8, attacker_level: u8, health_fraction: f64) -> i64 {
    let diff = f64::from(defender_level) - f64::from(attacker_level);
    let level_modifier = (1.0 + diff * 0.05).max(0.1);

    let victory_bonus = if health_fraction >= 1.0 {
        1.2
    } else if health_fraction >= 0.75 {
        1.1
    } else {
        1.0
    };

    let raw = (base_exp as f64 * level_modifier * victory_bonus).floor() as i64;
    raw.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_known_values() {
        assert_eq!(exp_for_level(GrowthRate::Medium, 10), 1_000);
        assert_eq!(exp_for_level(GrowthRate::Slow, 10), 1_250);
        assert_eq!(exp_for_level(GrowthRate::Fast, 10), 800);
        // 6000/5 - 1500 + 1000 - 140
        assert_eq!(exp_for_level(GrowthRate::MediumSlow, 10), 560);
        assert_eq!(exp_for_level(GrowthRate::Erratic, 10), 1_800);
        // 1000 * (24 + floor(11/3)) / 50
        assert_eq!(exp_for_level(GrowthRate::Fluctuating, 10), 540);
    }

    #[test]
    fn test_medium_slow_is_negative_at_low_levels() {
        assert_eq!(exp_for_level(GrowthRate::MediumSlow, 1), -54);
        assert!(exp_for_level(GrowthRate::MediumSlow, 2) > 0);
    }

    #[test]
    fn test_curves_are_monotone() {
        for rate in GrowthRate::ALL {
            for level in 1..100u8 {
                assert!(
                    exp_for_level(rate, level + 1) > exp_for_level(rate, level),
                    "{rate} not increasing at level {level}"
                );
            }
        }
    }

    #[test]
    fn test_level_exp_round_trip_every_curve() {
        for rate in GrowthRate::ALL {
            for level in 1..=100u8 {
                let exp = exp_for_level(rate, level);
                assert_eq!(
                    level_for_exp(rate, exp),
                    level,
                    "round trip failed for {rate} at level {level}"
                );
            }
        }
    }

    #[test]
    fn test_level_for_exp_between_thresholds() {
        // One point shy of the next level stays on the current one
        let at_20 = exp_for_level(GrowthRate::Medium, 20);
        let at_21 = exp_for_level(GrowthRate::Medium, 21);
        assert_eq!(level_for_exp(GrowthRate::Medium, at_21 - 1), 20);
        assert_eq!(level_for_exp(GrowthRate::Medium, at_20 + 1), 20);
    }

    #[test]
    fn test_level_for_exp_floors_at_one() {
        assert_eq!(level_for_exp(GrowthRate::Medium, 0), 1);
        assert_eq!(level_for_exp(GrowthRate::Slow, -500), 1);
    }

    #[test]
    fn test_from_name_and_aliases() {
        assert_eq!(GrowthRate::from_name("Medium-Slow"), Ok(GrowthRate::MediumSlow));
        assert_eq!(
            GrowthRate::from_name("slow-then-very-fast"),
            Ok(GrowthRate::Erratic)
        );
        assert_eq!(
            GrowthRate::from_name("fast-then-very-slow"),
            Ok(GrowthRate::Fluctuating)
        );
        assert_eq!("erratic".parse(), Ok(GrowthRate::Erratic));
        assert_eq!(
            GrowthRate::from_name("parabolic"),
            Err(FormulaError::UnknownGrowthRate("parabolic".to_string()))
        );
    }

    #[test]
    fn test_award_victory_bonus_tiers() {
        // Equal levels: modifier is exactly 1
        assert_eq!(exp_award(100, 50, 50, 1.0), 120);
        assert_eq!(exp_award(100, 50, 50, 0.8), 110);
        assert_eq!(exp_award(100, 50, 50, 0.75), 110);
        assert_eq!(exp_award(100, 50, 50, 0.5), 100);
    }

    #[test]
    fn test_award_fraction_is_not_floored() {
        // 39/40 health is below full but well above the 75% tier
        assert_eq!(exp_award(100, 50, 50, 39.0 / 40.0), 110);
    }

    #[test]
    fn test_award_level_modifier_clamps() {
        // Much stronger attacker bottoms out at the 0.1 modifier
        assert_eq!(exp_award(100, 1, 100, 0.5), 10);
        // Underdog win scales up: 1 + 49 * 0.05 = 3.45
        assert_eq!(exp_award(100, 99, 50, 0.5), 345);
    }

    #[test]
    fn test_award_never_below_one() {
        assert_eq!(exp_award(0, 50, 50, 1.0), 1);
        assert_eq!(exp_award(3, 1, 100, 0.1), 1);
    }
}
