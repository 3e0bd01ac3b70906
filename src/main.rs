use anyhow::Context;
use clap::Parser;
use plot_planner::utils::error::ErrorSeverity;
use plot_planner::utils::{logger, validation::Validate};
use plot_planner::{CliConfig, LocalStorage, PlanEngine, PlannerError};
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting plot-planner");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let plan = match config.to_plan_file() {
        Ok(plan) => plan,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = plan.validate() {
        tracing::error!("❌ Plan file validation failed: {}", e);
        exit_with(&e);
    }

    let engine = PlanEngine::new(plan, LocalStorage::new(".".to_string()));

    match engine.run() {
        Ok(report) => match report.saved_to {
            Some(path) => {
                tracing::info!("📁 Plan saved to: {}", path);
                println!("✅ Plan saved to: {}", path);
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", report.rendered).context("failed to write plan to stdout")?;
            }
        },
        Err(e) => exit_with(&e),
    }

    Ok(())
}

fn exit_with(e: &PlannerError) -> ! {
    tracing::error!(
        "❌ Plan failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    if let Some(index) = e.room_index() {
        tracing::debug!("🏠 Offending room: {}", index);
    }
    tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Medium => 2,   // 輸入錯誤，使用者可修正
        ErrorSeverity::High => 1,     // 設定錯誤
        ErrorSeverity::Critical => 3, // 系統錯誤
    };
    std::process::exit(exit_code);
}
