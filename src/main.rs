use clap::Parser;
use numfile_etl::utils::{logger, validation::Validate};
use numfile_etl::{
    CliConfig, EtlEngine, EtlError, JobConfig, LocalStorage, MenuShell, NumberPipeline, TomlConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting numfile-etl");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if config.is_interactive() {
        if let Err(e) = config.check_interactive() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }

        let base_dir = config.base_dir(None);
        let monitor_enabled = config.monitoring_enabled(None);
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        let mut shell = MenuShell::new(stdin.lock(), stdout.lock(), base_dir, monitor_enabled);

        if let Err(e) = shell.run() {
            tracing::error!("❌ Interactive session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        return Ok(());
    }

    // 載入 TOML 作業檔
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading job file from: {}", path);
            match TomlConfig::from_file(path) {
                Ok(file_config) => Some(file_config),
                Err(e) => {
                    eprintln!("❌ Failed to load job file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    std::process::exit(1);
                }
            }
        }
        None => None,
    };

    // 驗證配置
    let job = match validate_and_resolve(&config, file_config.as_ref()) {
        Ok(job) => job,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.severity().exit_code());
        }
    };

    let base_dir = config.base_dir(file_config.as_ref());
    let monitor_enabled = config.monitoring_enabled(file_config.as_ref());

    if config.dry_run {
        display_job_summary(&job, file_config.as_ref(), &base_dir, monitor_enabled);
        return Ok(());
    }

    let storage = LocalStorage::new(base_dir);
    let pipeline = NumberPipeline::new(storage, job);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ Operation completed");
            println!("Operation completed. Result written to file {}.", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Operation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            std::process::exit(e.severity().exit_code());
        }
    }

    Ok(())
}

fn validate_and_resolve(
    config: &CliConfig,
    file_config: Option<&TomlConfig>,
) -> Result<JobConfig, EtlError> {
    if let Some(file_config) = file_config {
        file_config.validate()?;
    }
    config.resolve_job(file_config)
}

fn display_job_summary(
    job: &JobConfig,
    file_config: Option<&TomlConfig>,
    base_dir: &str,
    monitor_enabled: bool,
) {
    println!("📋 Job Summary:");
    if let Some(file_config) = file_config {
        println!("  Job: {}", file_config.job.name);
        if let Some(description) = &file_config.job.description {
            println!("  Description: {}", description);
        }
    }
    println!(
        "  Operation: {} ({})",
        job.operation,
        job.operation.menu_label()
    );
    println!("  Input: {}", job.input_path);
    println!("  Output: {}", job.output_path);
    if !base_dir.is_empty() {
        println!("  Base directory: {}", base_dir);
    }
    println!("  Monitoring: {}", monitor_enabled);
    println!("  🔍 DRY RUN MODE - no files were read or written");
}
