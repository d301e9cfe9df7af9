pub mod prompt;
pub mod providers;
pub mod validation;
