//! Typed input model and validation for step alphabets and target distances

mod alphabet;
mod errors;
mod target;

pub use alphabet::StepAlphabet;
pub use errors::InputError;
pub use target::validate_target;
