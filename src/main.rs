use clap::Parser;
use consulta_cep::utils::{logger, validation::Validate};
use consulta_cep::{CepLookupTool, CliConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // Logging
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting consulta-cep CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Merge file and flags, then validate
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // Build the lookup tool
    let tool = match CepLookupTool::from_config(&settings) {
        Ok(tool) => tool,
        Err(e) => {
            tracing::error!("❌ Could not build the HTTP client: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    // Lookup outcomes never change the exit code
    let response = tool.lookup(&config.cep).await;

    // Output
    if config.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.text.trim_end());
    }

    Ok(())
}
