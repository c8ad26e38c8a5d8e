use clap::Parser;
use credit_tally::utils::{logger, validation::Validate};
use credit_tally::{CliConfig, LocalStorage, TallyApp, TallyError};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting credit-tally");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            tracing::error!("Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let app = TallyApp::new(config, LocalStorage::default());
    let session = tokio::task::spawn_blocking(move || {
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        app.run(stdin, stdout)
    });

    // Ctrl+C 結束程式，不輸出任何訊息
    let result = tokio::select! {
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::debug!("Interrupted by signal");
            std::process::exit(0);
        }
        joined = session => joined,
    };

    let exit_code = match result {
        Ok(Ok(session)) => {
            tracing::info!("Recorded {} outcomes", session.len());
            0
        }
        Ok(Err(TallyError::Interrupted)) => 0,
        Ok(Err(e)) => {
            tracing::error!(
                "credit-tally failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            e.exit_code()
        }
        Err(join_error) => {
            tracing::error!("Session task failed: {}", join_error);
            3
        }
    };

    // stdin 可能仍被阻塞中的讀取佔用，直接結束程序
    std::process::exit(exit_code);
}
