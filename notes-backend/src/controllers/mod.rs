pub mod grammar;
pub mod health;
pub mod notes;
