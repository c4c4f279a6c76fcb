pub mod energy;
pub mod form;
pub mod plan;
pub mod profile;
pub mod state;

pub use energy::EnergyEstimate;
pub use form::MacroForm;
pub use plan::{compute, MacroPlan};
pub use profile::{ActivityLevel, Gender, Goal, Profile};
pub use state::PlanState;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid input, please fill in all fields")]
    InvalidInput,
}

pub type Result<T> = std::result::Result<T, Error>;
