pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{CleanOutcome, CleanStats, Record};
pub use crate::domain::ports::{Pipeline, Storage};
pub use crate::utils::error::Result;
