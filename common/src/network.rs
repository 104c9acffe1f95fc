pub mod range;
pub mod services;
