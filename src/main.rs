use clap::Parser;
use logsmith::app::commands;
use logsmith::utils::error::{ErrorSeverity, LogError};
use logsmith::utils::{logger, validation::Validate};
use logsmith::CliConfig;

fn exit_code(e: &LogError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,      // 警告，但成功
        ErrorSeverity::Medium => 2,   // 輸入錯誤
        ErrorSeverity::High => 1,     // 配置錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    }
}

fn report(e: &LogError) {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        logger::init_cli_logger(cli.verbose);
        report(&e);
        std::process::exit(exit_code(&e));
    }

    let config = match cli.logger_config() {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            report(&e);
            std::process::exit(exit_code(&e));
        }
    };

    // 初始化日誌
    let verbose = cli.verbose || config.verbose();
    if config.json_diagnostics() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("Logger config: {:?}", config);

    let sink = config.build()?;

    if let Err(e) = commands::execute(&cli.command, &sink) {
        report(&e);
        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }

    Ok(())
}
