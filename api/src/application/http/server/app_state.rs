use std::sync::Arc;

use hungry_owl_core::application::HungryOwlService;

use crate::{application::auth::IdentityVerifier, args::Args};

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HungryOwlService,
    pub identity_verifier: Arc<IdentityVerifier>,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HungryOwlService, identity_verifier: IdentityVerifier) -> Self {
        Self {
            args,
            service,
            identity_verifier: Arc::new(identity_verifier),
        }
    }
}
