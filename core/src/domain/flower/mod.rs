pub mod cache;
pub mod entities;
pub mod matcher;
pub mod normalizer;
pub mod ports;
pub mod prompt;
pub mod registry;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
