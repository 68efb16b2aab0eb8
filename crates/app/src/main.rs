use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt as tracing_fmt};

use induct_api::{ApiConfig, HttpApi, TrainingApi};
use induct_core::model::SessionId;
use induct_services::{JoinService, SessionDirectoryService};
use induct_ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSessionId { raw: String },
    InvalidApiUrl { raw: String },
    MissingApiUrl,
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSessionId { raw } => write!(f, "invalid --session-id value: {raw}"),
            ArgsError::InvalidApiUrl { raw } => write!(f, "invalid --api-url value: {raw}"),
            ArgsError::MissingApiUrl => {
                write!(f, "no API base URL; pass --api-url or set INDUCT_API_URL")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    session_id: SessionId,
    join_service: Arc<JoinService>,
    session_directory: Arc<SessionDirectoryService>,
}

impl UiApp for DesktopApp {
    fn default_session_id(&self) -> SessionId {
        self.session_id
    }

    fn join_service(&self) -> Arc<JoinService> {
        Arc::clone(&self.join_service)
    }

    fn session_directory(&self) -> Arc<SessionDirectoryService> {
        Arc::clone(&self.session_directory)
    }
}

struct Args {
    api_url: String,
    session_id: SessionId,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  induct-app [--api-url <url>] [--session-id <id>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --session-id 1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INDUCT_API_URL, INDUCT_SESSION_ID, RUST_LOG");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut api_url = ApiConfig::from_env().map(|config| config.base_url);
        let mut session_id = std::env::var("INDUCT_SESSION_ID")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .map_or_else(|| SessionId::new(1), SessionId::new);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--api-url" => {
                    let value = require_value(args, "--api-url")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidApiUrl { raw: value });
                    }
                    api_url = Some(value);
                }
                "--session-id" => {
                    let value = require_value(args, "--session-id")?;
                    let parsed: u64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidSessionId { raw: value.clone() })?;
                    session_id = SessionId::new(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        let api_url = api_url.ok_or(ArgsError::MissingApiUrl)?;
        Ok(Self {
            api_url,
            session_id,
        })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    info!(api_url = %parsed.api_url, session_id = %parsed.session_id, "starting induct client");

    let api: Arc<dyn TrainingApi> = Arc::new(HttpApi::new(ApiConfig::new(parsed.api_url)));
    let join_service = Arc::new(JoinService::new(Arc::clone(&api)));
    let session_directory = Arc::new(SessionDirectoryService::new(api));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        session_id: parsed.session_id,
        join_service,
        session_directory,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Induct")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
