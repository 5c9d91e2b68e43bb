pub mod etl;
pub mod pipeline;

pub use crate::domain::model::{NumberList, Operation, TransformResult, MAX_NUMBERS};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
