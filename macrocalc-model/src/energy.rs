#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::profile::{Gender, Profile};

/// Intermediate results of the calorie estimate, before any rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnergyEstimate {
    pub bmr: f64,
    pub tdee: f64,
    pub calories: f64,
}

impl EnergyEstimate {
    pub fn for_profile(profile: &Profile) -> Self {
        let bmr = basal_metabolic_rate(
            profile.gender,
            profile.weight_kg(),
            profile.height_cm(),
            profile.age,
        );
        let tdee = bmr * profile.activity_level.multiplier();
        let calories = tdee + profile.goal.calorie_adjustment();

        Self {
            bmr,
            tdee,
            calories,
        }
    }
}

/// Mifflin-St Jeor resting energy expenditure, in kcal/day.
pub fn basal_metabolic_rate(gender: Gender, weight_kg: f64, height_cm: f64, age: f64) -> f64 {
    let offset = match gender {
        Gender::Male => 5.0,
        Gender::Female => -161.0,
    };

    10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + offset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Goal};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{} != {}",
            actual,
            expected
        );
    }

    fn reference_profile(gender: Gender, activity_level: ActivityLevel, goal: Goal) -> Profile {
        Profile {
            gender,
            age: 25.0,
            weight_lb: 180.0,
            height_ft: 5.0,
            height_in: 10.0,
            activity_level,
            goal,
        }
    }

    #[test]
    fn basal_metabolic_rate_by_gender() {
        assert_close(
            basal_metabolic_rate(Gender::Male, 81.64656, 177.8, 25.0),
            1807.7156,
        );
        assert_close(
            basal_metabolic_rate(Gender::Female, 81.64656, 177.8, 25.0),
            1641.7156,
        );
    }

    #[test]
    fn male_sedentary_cutting() {
        let estimate = EnergyEstimate::for_profile(&reference_profile(
            Gender::Male,
            ActivityLevel::Sedentary,
            Goal::Cutting,
        ));

        assert_close(estimate.bmr, 1807.7156);
        assert_close(estimate.tdee, 2169.25872);
        assert_close(estimate.calories, 1669.25872);
    }

    #[test]
    fn female_moderate_bulking() {
        let estimate = EnergyEstimate::for_profile(&reference_profile(
            Gender::Female,
            ActivityLevel::Moderate,
            Goal::Bulking,
        ));

        assert_close(estimate.bmr, 1641.7156);
        assert_close(estimate.tdee, 2544.65918);
        assert_close(estimate.calories, 3044.65918);
    }

    #[test]
    fn maintenance_keeps_tdee() {
        let estimate = EnergyEstimate::for_profile(&reference_profile(
            Gender::Male,
            ActivityLevel::Heavy,
            Goal::Maintenance,
        ));

        assert_eq!(estimate.calories, estimate.tdee);
    }

    #[test]
    fn bulking_and_cutting_are_1000_kcal_apart() {
        for activity_level in [
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Heavy,
        ] {
            for gender in [Gender::Male, Gender::Female] {
                let bulking = EnergyEstimate::for_profile(&reference_profile(
                    gender,
                    activity_level,
                    Goal::Bulking,
                ));
                let cutting = EnergyEstimate::for_profile(&reference_profile(
                    gender,
                    activity_level,
                    Goal::Cutting,
                ));
                assert_close(bulking.calories - cutting.calories, 1000.0);
            }
        }
    }

    #[test]
    fn nan_propagates() {
        let mut profile = reference_profile(Gender::Male, ActivityLevel::Light, Goal::Cutting);
        profile.age = f64::NAN;

        let estimate = EnergyEstimate::for_profile(&profile);
        assert!(estimate.bmr.is_nan());
        assert!(estimate.calories.is_nan());
    }
}
