use std::sync::Arc;

use macrolens_core::application::MacrolensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MacrolensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MacrolensService) -> Self {
        Self { args, service }
    }
}
