use crate::plan::MacroPlan;

/// What the front end should be showing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PlanState {
    /// Nothing has been calculated yet.
    #[default]
    Pending,
    Ready(MacroPlan),
    /// The last calculation ran on a form with missing or non-numeric fields.
    Incomplete,
}

impl PlanState {
    pub fn from_plan(plan: MacroPlan) -> Self {
        match plan.validate() {
            Ok(plan) => PlanState::Ready(plan),
            Err(_) => PlanState::Incomplete,
        }
    }

    pub fn plan(&self) -> Option<&MacroPlan> {
        match self {
            PlanState::Ready(plan) => Some(plan),
            _ => None,
        }
    }
}
