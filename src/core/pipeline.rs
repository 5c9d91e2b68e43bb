use crate::adapters::{NumberFileReader, NumberFileWriter};
use crate::core::{ConfigProvider, NumberList, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

/// 讀檔 -> 單一轉換 -> 寫檔
pub struct NumberPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NumberPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for NumberPipeline<S, C> {
    fn extract(&self) -> Result<NumberList> {
        tracing::debug!("Reading numbers from: {}", self.config.input_path());
        Ok(NumberFileReader::new(&self.storage).read(self.config.input_path()))
    }

    fn transform(&self, data: NumberList) -> Result<TransformResult> {
        let operation = self.config.operation();
        tracing::debug!("Applying '{}' to {} numbers", operation, data.len());

        Ok(TransformResult {
            operation,
            numbers: operation.apply(&data),
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        NumberFileWriter::new(&self.storage).write(output_path, &result.numbers)?;

        tracing::debug!("Result of '{}' saved", result.operation);
        Ok(output_path.to_string())
    }

    fn source(&self) -> &str {
        self.config.input_path()
    }
}
