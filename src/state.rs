// src/state.rs

use crate::controller::OfferListController;
use crate::errors::ServerError;
use crate::loader::{self, LoadError, OfferSource};
use std::sync::{RwLock, RwLockReadGuard};

/// Shared by every worker thread for the life of the server.
pub struct AppState {
    controller: RwLock<OfferListController>,
    source: Box<dyn OfferSource>,
}

impl AppState {
    pub fn new(controller: OfferListController, source: Box<dyn OfferSource>) -> Self {
        Self {
            controller: RwLock::new(controller),
            source,
        }
    }

    pub fn controller(&self) -> Result<RwLockReadGuard<'_, OfferListController>, ServerError> {
        self.controller
            .read()
            .map_err(|_| ServerError::Internal("controller lock poisoned".into()))
    }

    /// Loads from the configured source, replacing whatever was there.
    /// The fetch runs unlocked; the write lock is held only for the swap.
    /// The outer `Result` is about the lock, the inner one about the load.
    pub fn reload(&self) -> Result<Result<usize, LoadError>, ServerError> {
        let outcome = loader::load(self.source.as_ref());

        let mut controller = self
            .controller
            .write()
            .map_err(|_| ServerError::Internal("controller lock poisoned".into()))?;

        Ok(controller.apply(outcome))
    }
}
