pub mod admin;
pub mod health;
pub mod public;
pub mod tournament;
pub mod validation;
