use std::sync::Arc;
use tera::Tera;
use tracing::info;

use crate::background::VerdictTicker;
use crate::config::Config;
use crate::domain::ports::EventSource;
use crate::domain::services::assets::AssetResolver;
use crate::domain::services::catalog::EventCatalog;
use crate::domain::services::verdict_board::VerdictBoard;
use crate::error::AppError;
use crate::infra::sources::{file_event_source::FileEventSource, http_event_source::HttpEventSource};
use crate::state::AppState;

pub fn load_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("events.html", include_str!("../../templates/events.html")),
        ("event_detail.html", include_str!("../../templates/event_detail.html")),
        ("error.html", include_str!("../../templates/error.html")),
    ])?;
    Ok(tera)
}

pub fn event_source_for(config: &Config) -> Result<Arc<dyn EventSource>, AppError> {
    let source = config.events_source.trim();
    if source.starts_with("http://") || source.starts_with("https://") {
        info!("Using HTTP event source: {}", source);
        Ok(Arc::new(HttpEventSource::new(source.to_string(), config.http_timeout)?))
    } else {
        info!("Using file event source: {}", source);
        Ok(Arc::new(FileEventSource::new(source)))
    }
}

pub fn build_state(config: &Config, source: Arc<dyn EventSource>) -> Result<AppState, AppError> {
    let catalog = Arc::new(EventCatalog::new(source, config.timezone));
    let board = Arc::new(VerdictBoard::new(config.timezone));
    let ticker = Arc::new(VerdictTicker::new(catalog.clone(), board.clone(), config.tick_interval));

    Ok(AppState {
        config: config.clone(),
        catalog,
        board,
        ticker,
        assets: Arc::new(AssetResolver::new(config.static_dir.clone())),
        templates: Arc::new(load_templates()?),
    })
}

pub fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let source = event_source_for(config)?;
    build_state(config, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        let tera = load_templates().unwrap();
        let names: Vec<&str> = tera.get_template_names().collect();
        for expected in ["base.html", "events.html", "event_detail.html", "error.html"] {
            assert!(names.contains(&expected), "missing template {}", expected);
        }
    }
}
