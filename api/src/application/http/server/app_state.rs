use std::sync::Arc;

use bloomcheck_core::application::BloomCheckService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: BloomCheckService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: BloomCheckService) -> Self {
        Self { args, service }
    }
}
