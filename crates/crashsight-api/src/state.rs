//! Application state
//!
//! Constructed once at startup and passed explicitly into the handlers.

use crashsight_core::Config;
use crashsight_vision::VisionClient;

pub struct AppState {
    pub config: Config,
    pub vision: VisionClient,
}
