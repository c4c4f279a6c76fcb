use crate::profile::{ActivityLevel, Gender, Goal, Profile};

/// Raw field contents as typed by the user. Numeric fields that do not parse
/// become NaN in the resulting [`Profile`] instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroForm {
    pub gender: String,
    pub age: String,
    pub weight: String,
    pub height_ft: String,
    pub height_in: String,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

impl MacroForm {
    pub fn to_profile(&self) -> Profile {
        Profile {
            gender: parse_gender(&self.gender),
            age: parse_decimal(&self.age),
            weight_lb: parse_decimal(&self.weight),
            height_ft: parse_whole(&self.height_ft),
            height_in: parse_whole(&self.height_in),
            activity_level: self.activity_level,
            goal: self.goal,
        }
    }
}

pub fn parse_decimal(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Like [`parse_decimal`], truncated toward zero.
pub fn parse_whole(text: &str) -> f64 {
    parse_decimal(text).trunc()
}

/// Anything other than "male" counts as female, including an empty field.
pub fn parse_gender(text: &str) -> Gender {
    if text.trim().eq_ignore_ascii_case("male") {
        Gender::Male
    } else {
        Gender::Female
    }
}
