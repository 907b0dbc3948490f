pub mod flower_check;
pub mod health;
pub mod server;
