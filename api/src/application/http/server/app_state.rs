use std::sync::Arc;

use companies_core::application::CompaniesService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CompaniesService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CompaniesService) -> Self {
        Self { args, service }
    }
}
