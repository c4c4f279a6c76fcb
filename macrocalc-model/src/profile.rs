#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

const CM_PER_INCH: f64 = 2.54;
const KG_PER_POUND: f64 = 0.453592;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    Light,
    Moderate,
    Heavy,
}

impl ActivityLevel {
    /// Factor applied to the basal metabolic rate to estimate total daily
    /// energy expenditure.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (Office job, little to no exercise)",
            ActivityLevel::Light => "Light Activity (1-2 days/week of exercise)",
            ActivityLevel::Moderate => "Moderate Exercise (3-5 days/week)",
            ActivityLevel::Heavy => "Heavy Exercise (6-7 days/week)",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Goal {
    #[default]
    Cutting,
    Bulking,
    Maintenance,
}

impl Goal {
    /// Daily calorie offset relative to TDEE, in kcal.
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Cutting => -500.0,
            Goal::Bulking => 500.0,
            Goal::Maintenance => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Goal::Cutting => "Cutting (weight loss)",
            Goal::Bulking => "Bulking (muscle gain)",
            Goal::Maintenance => "Maintenance",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::Cutting => "I want to burn fat and retain muscle",
            Goal::Bulking => "I want to build muscle and increase mass",
            Goal::Maintenance => "I want to keep my current weight",
        }
    }
}

/// Body metrics in imperial units, exactly as entered. Nothing here is
/// range-checked, NaN is a legal value for every numeric field.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Profile {
    pub gender: Gender,
    pub age: f64,
    pub weight_lb: f64,
    pub height_ft: f64,
    pub height_in: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl Profile {
    pub fn height_cm(&self) -> f64 {
        (self.height_ft * 12.0 + self.height_in) * CM_PER_INCH
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_lb * KG_PER_POUND
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    fn profile(height_ft: f64, height_in: f64, weight_lb: f64) -> Profile {
        Profile {
            gender: Gender::Male,
            age: 30.0,
            weight_lb,
            height_ft,
            height_in,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintenance,
        }
    }

    #[test]
    fn height_cm() {
        let test_data = [
            (5.0, 10.0, 177.8),
            (6.0, 0.0, 182.88),
            (0.0, 0.0, 0.0),
            (4.0, 13.0, 154.94),
        ];

        for (i, (feet, inches, expected)) in test_data.into_iter().enumerate() {
            let actual = profile(feet, inches, 150.0).height_cm();
            assert!(
                (actual - expected).abs() < 1e-9,
                "Test case #{}: {} != {}",
                i,
                actual,
                expected
            );
        }
    }

    #[test]
    fn weight_kg() {
        assert!((profile(5.0, 10.0, 180.0).weight_kg() - 81.64656).abs() < 1e-9);
        assert_eq!(profile(5.0, 10.0, 0.0).weight_kg(), 0.0);
        assert!(profile(5.0, 10.0, f64::NAN).weight_kg().is_nan());
    }

    #[test]
    fn activity_multipliers() {
        let expected = [1.2, 1.375, 1.55, 1.725];
        for (level, multiplier) in ActivityLevel::iter().zip(expected) {
            assert_eq!(level.multiplier(), multiplier, "{}", level);
        }
    }

    #[test]
    fn goal_adjustments() {
        assert_eq!(Goal::Cutting.calorie_adjustment(), -500.0);
        assert_eq!(Goal::Bulking.calorie_adjustment(), 500.0);
        assert_eq!(Goal::Maintenance.calorie_adjustment(), 0.0);
    }

    #[test]
    fn text_forms() {
        assert_eq!(Gender::from_str("MALE"), Ok(Gender::Male));
        assert_eq!(ActivityLevel::from_str("Moderate"), Ok(ActivityLevel::Moderate));
        assert_eq!(Goal::from_str("bulking"), Ok(Goal::Bulking));
        assert!(Goal::from_str("recomp").is_err());
        assert_eq!(ActivityLevel::Heavy.to_string(), "heavy");
        assert_eq!(Goal::Maintenance.to_string(), "maintenance");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn profile_from_json() {
        let profile: Profile = serde_json::from_str(
            r#"{
                "gender": "female",
                "age": 41,
                "weight_lb": 150.5,
                "height_ft": 5,
                "height_in": 6,
                "activity_level": "light",
                "goal": "maintenance"
            }"#,
        )
        .unwrap();

        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.weight_lb, 150.5);
        assert_eq!(profile.activity_level, ActivityLevel::Light);
        assert_eq!(profile.goal, Goal::Maintenance);
    }

    #[test]
    fn form_defaults() {
        assert_eq!(ActivityLevel::default(), ActivityLevel::Sedentary);
        assert_eq!(Goal::default(), Goal::Cutting);
    }
}
