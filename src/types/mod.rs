pub mod config;
pub mod matrix;
pub mod result;
pub mod selection;
