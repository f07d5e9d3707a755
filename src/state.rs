use std::sync::Arc;
use crate::background::VerdictTicker;
use crate::config::Config;
use crate::domain::services::assets::AssetResolver;
use crate::domain::services::catalog::EventCatalog;
use crate::domain::services::verdict_board::VerdictBoard;
use tera::Tera;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<EventCatalog>,
    pub board: Arc<VerdictBoard>,
    pub ticker: Arc<VerdictTicker>,
    pub assets: Arc<AssetResolver>,
    pub templates: Arc<Tera>,
}
