use std::sync::Arc;

use crate::storage::VoteStore;
use crate::utils::clock::Clock;
use crate::utils::token::TokenVerifier;

#[derive(Clone)]
pub struct AppState<S: VoteStore> {
    pub store: S,
    pub verifier: Arc<dyn TokenVerifier>,
    pub clock: Arc<dyn Clock>,
}

impl<S: VoteStore> AppState<S> {
    pub fn new(store: S, verifier: Arc<dyn TokenVerifier>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            verifier,
            clock,
        }
    }
}
