pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod report;
pub mod request;
pub mod telemetry;
pub mod types;

pub use engine::{aggregate, combine, CompanionFields};
pub use error::{Result, UvaError};
pub use matrix::{JsonDirectoryStore, MatrixProvider};
pub use types::matrix::{PetsScores, ScoreMatrix, ScoreMatrixEntry};
pub use types::result::{CombinedResult, SectionResult};
pub use types::selection::Selection;
