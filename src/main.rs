use brix_calc::config::interactive::prompt_process_input;
use brix_calc::core::Reporter;
use brix_calc::utils::{logger, validation::Validate};
use brix_calc::{BalanceEngine, BrixError, CliConfig, Settings};
use clap::Parser;

fn main() {
    let args = CliConfig::parse();

    // Resolve settings first; the log level may come from the config file.
    let settings = args.resolve_settings();
    let level = settings.as_ref().ok().and_then(|s| s.log_level.clone());
    if args.json_logs {
        logger::init_json_logger(level.as_deref());
    } else {
        logger::init_cli_logger(args.verbose, level.as_deref());
    }

    tracing::info!("Starting brix-calc");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    if let Err(e) = settings.and_then(|settings| run(&args, settings)) {
        tracing::error!(
            "Calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(args: &CliConfig, mut settings: Settings) -> Result<(), BrixError> {
    settings.validate()?;

    if args.interactive {
        let stdin = std::io::stdin();
        let mut reader = stdin.lock();
        let mut writer = std::io::stderr();
        settings.input = prompt_process_input(&mut reader, &mut writer, settings.input)?;
    }

    let engine = BalanceEngine::default();
    let report = engine.run(&settings)?;

    let rendered = settings.reporter().render(&report)?;
    println!("{}", rendered.trim_end());

    Ok(())
}
