pub mod common;
pub mod flower;
pub mod health;
