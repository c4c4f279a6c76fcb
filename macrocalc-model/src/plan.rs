#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{energy::EnergyEstimate, profile::Profile, Error, Result};

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;
const FAT_SHARE: f64 = 0.25;

/// Daily targets, each rounded to a whole number. Fields are NaN when the
/// profile they were computed from was incomplete.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MacroPlan {
    pub calories: f64,
    pub protein_grams: f64,
    pub fat_grams: f64,
    pub carb_grams: f64,
}

impl MacroPlan {
    pub fn from_estimate(estimate: &EnergyEstimate, weight_lb: f64) -> Self {
        let calories = estimate.calories;
        // 1 g of protein per pound of body weight, independent of calories
        let protein = weight_lb;
        let fat = calories * FAT_SHARE / KCAL_PER_GRAM_FAT;
        let carbs = (calories - (protein * KCAL_PER_GRAM_PROTEIN + fat * KCAL_PER_GRAM_FAT))
            / KCAL_PER_GRAM_CARBS;

        Self {
            calories: round_half_up(calories),
            protein_grams: round_half_up(protein),
            fat_grams: round_half_up(fat),
            carb_grams: round_half_up(carbs),
        }
    }

    fn fields(&self) -> [f64; 4] {
        [
            self.calories,
            self.protein_grams,
            self.fat_grams,
            self.carb_grams,
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.fields().iter().all(|x| x.is_finite())
    }

    pub fn validate(self) -> Result<Self> {
        if self.is_complete() {
            Ok(self)
        } else {
            Err(Error::InvalidInput)
        }
    }

    /// Carbs absorb whatever protein and fat leave over, so a small calorie
    /// budget against a fixed protein target ends up negative.
    pub fn has_negative_carbs(&self) -> bool {
        self.carb_grams < 0.0
    }

    pub fn calories_kcal(&self) -> Option<i64> {
        as_whole(self.calories)
    }

    pub fn protein_g(&self) -> Option<i64> {
        as_whole(self.protein_grams)
    }

    pub fn fat_g(&self) -> Option<i64> {
        as_whole(self.fat_grams)
    }

    pub fn carbs_g(&self) -> Option<i64> {
        as_whole(self.carb_grams)
    }
}

fn as_whole(x: f64) -> Option<i64> {
    x.is_finite().then_some(x as i64)
}

/// Rounds halves towards positive infinity, so `-140.5` becomes `-140`.
/// NaN and infinities pass through.
pub fn round_half_up(x: f64) -> f64 {
    // x - floor(x) is exact, x + 0.5 is not
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

pub fn compute(profile: &Profile) -> MacroPlan {
    MacroPlan::from_estimate(&EnergyEstimate::for_profile(profile), profile.weight_lb)
}
