use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::{Context, Result};
use golf_companion::args::{self, CleanArgs, ConfigSourceArg};
use golf_companion::config::{
    FileConfigSource, HttpConfigSource, RemoteConfigSource, ZoneConfigCache, spawn_poller,
};
use golf_companion::controller::{self, AppState};
use golf_companion::geofence::GeofenceEngine;
use golf_companion::model::CourseData;
use golf_companion::mvu::notify::LogNotifier;
use golf_companion::storage::{MemoryStorage, PlayerLocks, SqliteStorage, Storage};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const REMOTE_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = args::args_checks()?;
    let state = build_state(&args).await?;

    info!(bind = %args.bind, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .configure(controller::configure)
    })
    .bind(&args.bind)
    .with_context(|| format!("bind {}", args.bind))?
    .run()
    .await?;
    Ok(())
}

async fn build_state(args: &CleanArgs) -> Result<AppState> {
    let course = match &args.course_data {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("read course data {}", path.display()))?;
            CourseData::from_json(&contents)
                .with_context(|| format!("parse course data {}", path.display()))?
        }
        None => CourseData::built_in(),
    };

    let storage: Arc<dyn Storage> = match &args.db_path {
        Some(path) => Arc::new(
            SqliteStorage::open(path)
                .with_context(|| format!("open sqlite database {}", path.display()))?,
        ),
        None => {
            warn!("no --db-path given, round history will not survive a restart");
            Arc::new(MemoryStorage::new())
        }
    };

    let config = ZoneConfigCache::new();
    let source: Option<Arc<dyn RemoteConfigSource>> = match &args.remote_config {
        ConfigSourceArg::Url(url) => Some(Arc::new(HttpConfigSource::new(
            url.clone(),
            REMOTE_FETCH_TIMEOUT,
        )?)),
        ConfigSourceArg::File(path) => Some(Arc::new(FileConfigSource::new(path.clone()))),
        ConfigSourceArg::None => {
            info!("no remote zone configuration, using local course data");
            None
        }
    };
    if let Some(source) = source {
        // first tick of the poller fires immediately
        spawn_poller(
            config.clone(),
            source,
            Duration::from_secs(args.poll_secs),
        );
    }

    Ok(AppState {
        engine: GeofenceEngine::new(course),
        config,
        storage,
        locks: PlayerLocks::new(),
        notifier: Arc::new(LogNotifier),
    })
}
