use crate::config::cli::LocalStorage;
use crate::config::JobConfig;
use crate::core::etl::EtlEngine;
use crate::core::pipeline::NumberPipeline;
use crate::core::Operation;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

const EXIT_CODE: i64 = 4;

/// 以空白切分輸入，行為類似 `cin >> token`
struct TokenReader<R: BufRead> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// 輸入結束時回傳 None
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// 丟棄目前這一行剩下的 token
    fn discard_line(&mut self) {
        self.pending.clear();
    }
}

/// 互動選單：選擇操作、輸入檔名、執行
pub struct MenuShell<R: BufRead, W: Write> {
    tokens: TokenReader<R>,
    out: W,
    base_dir: String,
    monitor_enabled: bool,
}

impl<R: BufRead, W: Write> MenuShell<R, W> {
    pub fn new(input: R, out: W, base_dir: String, monitor_enabled: bool) -> Self {
        Self {
            tokens: TokenReader::new(input),
            out,
            base_dir,
            monitor_enabled,
        }
    }

    pub fn print_menu(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "Program for working with integer array (up to {} numbers)",
            crate::core::MAX_NUMBERS
        )?;
        writeln!(self.out, "Choose operation:")?;
        for op in Operation::ALL {
            writeln!(self.out, "{}. {}", op.menu_code(), op.menu_label())?;
        }
        writeln!(self.out, "{}. Exit program", EXIT_CODE)?;
        write!(self.out, "Enter operation number or '--help' to show menu: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// 主迴圈，選擇 4 或輸入結束時返回
    pub fn run(&mut self) -> Result<()> {
        self.print_menu()?;

        while let Some(input) = self.tokens.next_token()? {
            if input == "--help" {
                self.print_menu()?;
                continue;
            }

            // 整個 token 都必須是整數
            let choice = match input.parse::<i64>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(
                        self.out,
                        "Invalid input. Enter number from 1 to {} or '--help'.",
                        EXIT_CODE
                    )?;
                    self.tokens.discard_line();
                    continue;
                }
            };

            if choice == EXIT_CODE {
                writeln!(self.out, "Program termination.")?;
                break;
            }

            let Some(operation) = Operation::from_menu_code(choice) else {
                writeln!(self.out, "Invalid choice. Try again.")?;
                continue;
            };

            let Some(input_path) = self.prompt("Enter input filename: ")? else {
                break;
            };
            let Some(output_path) = self.prompt("Enter output filename: ")? else {
                break;
            };

            let job = JobConfig::new(operation, input_path, output_path);
            match self.run_job(&job) {
                Ok(output_path) => writeln!(
                    self.out,
                    "Operation completed. Result written to file {}.",
                    output_path
                )?,
                Err(e @ EtlError::EmptyInput { .. }) => {
                    tracing::warn!("{}", e);
                    writeln!(self.out, "{}", e.user_friendly_message())?;
                }
                Err(e) => {
                    tracing::error!("❌ Operation failed: {} (Category: {:?})", e, e.category());
                    writeln!(self.out, "❌ {}", e.user_friendly_message())?;
                }
            }
            self.out.flush()?;
        }

        Ok(())
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.out, "{}", message)?;
        self.out.flush()?;
        Ok(self.tokens.next_token()?)
    }

    fn run_job(&self, job: &JobConfig) -> Result<String> {
        job.validate()?;
        tracing::debug!("Menu job: {:?}", job);

        let storage = LocalStorage::new(self.base_dir.clone());
        let pipeline = NumberPipeline::new(storage, job.clone());
        EtlEngine::new_with_monitoring(pipeline, self.monitor_enabled).run()
    }

    pub fn into_output(self) -> W {
        self.out
    }
}
