use clap::Parser;
use list_json::utils::{logger, validation::Validate};
use list_json::{CliConfig, EtlEngine, ListPipeline, LocalStorage};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting list-json");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.severity().exit_code());
    }

    // 讀寫都在目前工作目錄
    let storage = LocalStorage::new(".");
    let pipeline = ListPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            println!("{}", summary);
        }
        Err(e) => {
            tracing::error!(
                "Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("error: {}", e.user_friendly_message());
            eprintln!("hint: {}", e.recovery_suggestion());
            std::process::exit(e.severity().exit_code());
        }
    }
}
