pub mod catalog;
pub mod lint;
pub mod store;

use crate::error::Result;
use crate::types::matrix::ScoreMatrix;

pub use store::JsonDirectoryStore;

pub trait MatrixProvider {
    fn load(&self, vehicle: &str) -> Result<ScoreMatrix>;
}
