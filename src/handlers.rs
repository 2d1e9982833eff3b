pub mod health;
pub mod model;
