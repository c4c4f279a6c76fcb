pub mod logging;
pub mod presenter;
pub mod prompt;

use log::{debug, info, warn};
use macrocalc_model::{ActivityLevel, EnergyEstimate, Goal, MacroForm, MacroPlan, PlanState};

use crate::presenter::Presenter;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown {field} \"{value}\"")]
    UnknownChoice { field: Field, value: String },
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Gender,
    Age,
    Weight,
    HeightFt,
    HeightIn,
    ActivityLevel,
    Goal,
}

/// Holds the form being filled in and the last result, and pushes every
/// result change out through the presenter.
pub struct Calculator {
    form: MacroForm,
    state: PlanState,
    presenter: Box<dyn Presenter>,
}

impl Calculator {
    pub fn new(presenter: Box<dyn Presenter>) -> Self {
        Self {
            form: MacroForm::default(),
            state: PlanState::Pending,
            presenter,
        }
    }

    pub fn form(&self) -> &MacroForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut MacroForm {
        &mut self.form
    }

    pub fn state(&self) -> PlanState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        let unknown = || Error::UnknownChoice {
            field,
            value: value.to_owned(),
        };

        match field {
            Field::Gender => self.form.gender = value.to_owned(),
            Field::Age => self.form.age = value.to_owned(),
            Field::Weight => self.form.weight = value.to_owned(),
            Field::HeightFt => self.form.height_ft = value.to_owned(),
            Field::HeightIn => self.form.height_in = value.to_owned(),
            Field::ActivityLevel => {
                self.form.activity_level = value
                    .trim()
                    .parse::<ActivityLevel>()
                    .map_err(|_| unknown())?
            }
            Field::Goal => {
                self.form.goal = value.trim().parse::<Goal>().map_err(|_| unknown())?
            }
        }
        Ok(())
    }

    pub fn calculate(&mut self) -> Result<PlanState> {
        let profile = self.form.to_profile();
        let estimate = EnergyEstimate::for_profile(&profile);
        debug!("Energy estimate for {:?}: {:?}", profile, estimate);

        self.state = PlanState::from_plan(MacroPlan::from_estimate(&estimate, profile.weight_lb));
        match self.state.plan() {
            Some(plan) if plan.has_negative_carbs() => warn!(
                "Carb target is negative ({}g), calorie budget too small for protein and fat",
                plan.carb_grams
            ),
            Some(plan) => info!("Calculated {} kcal plan", plan.calories),
            None => info!("Form incomplete, nothing to calculate"),
        }

        self.show()?;
        Ok(self.state)
    }

    pub fn show(&mut self) -> Result<()> {
        match &self.state {
            PlanState::Pending => self.presenter.show_pending()?,
            PlanState::Ready(plan) => self.presenter.show_plan(plan)?,
            PlanState::Incomplete => self.presenter.show_incomplete()?,
        }
        Ok(())
    }
}
