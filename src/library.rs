pub mod logger;
pub mod random;
