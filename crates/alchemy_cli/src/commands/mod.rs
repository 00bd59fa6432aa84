pub mod export;
pub mod rule;
pub mod validate;
