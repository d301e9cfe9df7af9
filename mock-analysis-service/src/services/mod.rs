pub mod flags;
pub mod generator;
pub mod status;
pub mod templates;
pub mod validation;
