use crate::core::Pipeline;
use crate::utils::error::{EtlError, Result};
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        let monitor = SystemMonitor::new(monitor_enabled);
        if monitor.is_enabled() {
            tracing::info!("🔍 System monitoring enabled");
        }

        Self { pipeline, monitor }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitor.is_enabled()
    }

    /// 執行 extract -> transform -> load，回傳輸出路徑
    pub fn run(&self) -> Result<String> {
        tracing::info!("Starting ETL process");

        // Extract
        let numbers = self.pipeline.extract()?;
        tracing::info!("Extracted {} numbers", numbers.len());
        self.monitor.log_stats("Extract");

        // 讀到空列表代表來源無法開啟或沒有可解析的數字
        if numbers.is_empty() {
            return Err(EtlError::EmptyInput {
                path: self.pipeline.source().to_string(),
            });
        }

        // Transform
        let result = self.pipeline.transform(numbers)?;
        tracing::info!(
            "Applied '{}' to {} numbers",
            result.operation,
            result.numbers.len()
        );
        self.monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);
        self.monitor.log_stats("Load");
        self.monitor.log_final_stats();

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NumberList, Operation, TransformResult};
    use std::cell::RefCell;

    struct StubPipeline {
        input: Vec<i32>,
        loaded: RefCell<Option<Vec<i32>>>,
    }

    impl StubPipeline {
        fn new(input: Vec<i32>) -> Self {
            Self {
                input,
                loaded: RefCell::new(None),
            }
        }
    }

    impl Pipeline for StubPipeline {
        fn extract(&self) -> Result<NumberList> {
            NumberList::try_from(self.input.clone())
        }

        fn transform(&self, data: NumberList) -> Result<TransformResult> {
            Ok(TransformResult {
                operation: Operation::Reverse,
                numbers: Operation::Reverse.apply(&data),
            })
        }

        fn load(&self, result: TransformResult) -> Result<String> {
            *self.loaded.borrow_mut() = Some(result.numbers.into_vec());
            Ok("stub-out".to_string())
        }

        fn source(&self) -> &str {
            "stub-in"
        }
    }

    #[test]
    fn test_run_passes_through_all_phases() {
        let engine = EtlEngine::new(StubPipeline::new(vec![3, -1, 2]));
        let output = engine.run().unwrap();

        assert_eq!(output, "stub-out");
        assert!(!engine.monitoring_enabled());
        assert_eq!(*engine.pipeline.loaded.borrow(), Some(vec![2, -1, 3]));
    }

    #[test]
    fn test_empty_extract_aborts_before_load() {
        let engine = EtlEngine::new(StubPipeline::new(vec![]));

        match engine.run() {
            Err(EtlError::EmptyInput { path }) => assert_eq!(path, "stub-in"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(engine.pipeline.loaded.borrow().is_none());
    }
}
