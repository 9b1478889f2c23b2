use clap::Parser;
use restoops_client::render::format::display_offset;
use restoops_client::utils::error::{ErrorSeverity, RestoError};
use restoops_client::utils::{logger, validation::Validate};
use restoops_client::{
    CliArgs, ClientConfig, Command, DurationFilter, HttpRestoApi, RenderContext, RestoOpsApp,
};
use std::sync::Arc;
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();

    // 初始化日誌
    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Starting restoops client");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    if let Err(e) = run(args).await {
        tracing::error!(
            "❌ restoops failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &RestoError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

async fn run(args: CliArgs) -> Result<(), RestoError> {
    let config: ClientConfig = args.resolve_config()?;

    // 驗證配置
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);

    let api = HttpRestoApi::from_config(&config)?;
    let ctx = RenderContext::new(api.base_url(), display_offset(config.utc_offset_hours));
    let app = RestoOpsApp::new(Arc::new(api), ctx);

    match args.command() {
        Command::Home => println!("{}", app.landing()),
        Command::Menu {
            filter,
            interactive: true,
        } => {
            app.menu_interactive(filter, BufReader::new(tokio::io::stdin()), tokio::io::stdout())
                .await?;
        }
        Command::Menu { filter, .. } => {
            let state = app.menu_once(filter).await;
            println!("{}", app.render_menu(&state));
            if state.error().is_some() {
                std::process::exit(2);
            }
        }
        Command::Reservations {
            min_duration,
            interactive: true,
        } => {
            app.reservations_interactive(
                DurationFilter::from(min_duration),
                BufReader::new(tokio::io::stdin()),
                tokio::io::stdout(),
            )
            .await?;
        }
        Command::Reservations { min_duration, .. } => {
            let state = app.reservations_once(DurationFilter::from(min_duration)).await;
            println!("{}", app.render_reservations(&state));
            if state.error().is_some() {
                std::process::exit(2);
            }
        }
    }

    Ok(())
}
