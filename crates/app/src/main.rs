use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use learn_core::model::LessonTotal;
use learn_core::ProgressState;
use services::{AppServices, Clock, ProgressService};
use tracing_subscriber::EnvFilter;
use ui::{App, PageLayout, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "learn_ai=info,learn_core=info,services=info,storage=info,ui=info";

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

/// Track lesson completion for a multi-week course.
#[derive(Debug, Parser)]
#[command(name = "learn-ai", version)]
struct Args {
    /// SQLite database holding the progress record.
    #[arg(long = "db", env = "LEARN_AI_DB_URL", default_value = "sqlite://progress.sqlite3")]
    db_url: String,

    /// Course definition (JSON). The bundled sample course is used when absent.
    #[arg(long, env = "LEARN_AI_COURSE")]
    course: Option<PathBuf>,

    /// Directory that exported snapshots are written to.
    #[arg(long, env = "LEARN_AI_EXPORT_DIR")]
    export_dir: Option<PathBuf>,

    /// Fixed lesson total used for percentages.
    #[arg(long, env = "LEARN_AI_TOTAL_LESSONS")]
    total_lessons: Option<u32>,
}

impl Args {
    fn lesson_total(&self) -> LessonTotal {
        self.total_lessons.map_or(LessonTotal::Derived, LessonTotal::Fixed)
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| {
            std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
        })
    }
}

struct DesktopApp {
    progress_service: Arc<ProgressService>,
    initial_state: ProgressState,
    export_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn progress_service(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress_service)
    }

    fn initial_state(&self) -> ProgressState {
        self.initial_state.clone()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }

    fn layout(&self) -> PageLayout {
        PageLayout::default()
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path_str = trimmed.strip_prefix("sqlite:").unwrap_or(trimmed);
    let path = std::path::Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter()))
        .with_target(false)
        .init();
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.db_url.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: args.db_url }.into());
    }
    let db_url = normalize_sqlite_url(&args.db_url);

    // Open + migrate SQLite at startup so the UI only ever sees a ready store.
    prepare_sqlite_file(&db_url)?;
    let services = AppServices::new_sqlite(
        &db_url,
        Clock::default(),
        args.course.as_deref(),
        args.lesson_total(),
    )
    .await?;

    let export_dir = args.export_dir();
    tracing::info!(db = %db_url, export_dir = %export_dir.display(), "launching tracker");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        progress_service: services.progress(),
        initial_state: services.initial_state().clone(),
        export_dir,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Learn AI")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(err) = run(args).await {
        tracing::error!(error = %err, "startup failed");
        eprintln!("{err}");
        std::process::exit(2);
    }
}
