use crate::domain::model::{NumberList, Operation, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn operation(&self) -> Operation;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline {
    fn extract(&self) -> Result<NumberList>;
    fn transform(&self, data: NumberList) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;

    /// 來源識別字，用於錯誤訊息
    fn source(&self) -> &str;
}
