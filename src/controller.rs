// src/controller.rs

use crate::display::{to_display_records, BadgeMap, DisplayRecord, Locale, PresentationSurface};
use crate::domain::{visible_offers, OfferCollection, OfferQuery, SortOrder};
use crate::loader::{self, LoadError, OfferSource};
use chrono::{DateTime, Utc};
use tracing::{debug, error};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    NotLoaded,
    Loaded { at: DateTime<Utc> },
    Failed(LoadError),
}

/// Display settings that stay fixed for the life of the controller.
#[derive(Debug, Clone)]
pub struct ListSettings {
    pub active_only: bool,
    pub sort: SortOrder,
    pub badges: BadgeMap,
    pub locale: Locale,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            active_only: true,
            sort: SortOrder::default(),
            badges: BadgeMap::default(),
            locale: Locale::default(),
        }
    }
}

/// Owns the loaded offers and turns a query into something drawn on a surface.
pub struct OfferListController {
    offers: OfferCollection,
    state: LoadState,
    settings: ListSettings,
}

impl OfferListController {
    pub fn new(settings: ListSettings) -> Self {
        Self {
            offers: OfferCollection::default(),
            state: LoadState::NotLoaded,
            settings,
        }
    }

    /// Runs the loader once. Success replaces the collection; failure clears it.
    /// Returns the number of offers loaded.
    pub fn load(&mut self, source: &dyn OfferSource) -> Result<usize, LoadError> {
        self.apply(loader::load(source))
    }

    /// Installs the outcome of a load that ran elsewhere (without any lock held).
    pub fn apply(
        &mut self,
        outcome: Result<OfferCollection, LoadError>,
    ) -> Result<usize, LoadError> {
        match outcome {
            Ok(collection) => {
                let count = collection.len();
                self.offers = collection;
                self.state = LoadState::Loaded { at: Utc::now() };
                Ok(count)
            }
            Err(e) => {
                error!(error = %e, status = ?e.status(), "failed to load offers");
                self.offers = OfferCollection::default();
                self.state = LoadState::Failed(e.clone());
                Err(e)
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn offers(&self) -> &OfferCollection {
        &self.offers
    }

    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    pub fn query(&self, text: &str) -> OfferQuery {
        OfferQuery {
            active_only: self.settings.active_only,
            sort: self.settings.sort,
            ..OfferQuery::default()
        }
        .with_text(text)
    }

    /// Filter + projection for `text`.
    /// `Err` holds the neutral message when the last load failed.
    pub fn display_records(&self, text: &str) -> Result<Vec<DisplayRecord>, &'static str> {
        if let LoadState::Failed(e) = &self.state {
            return Err(e.user_message(self.settings.locale));
        }

        let query = self.query(text);
        let visible = visible_offers(&self.offers, &query);
        debug!(
            query = %query.text,
            visible = visible.len(),
            total = self.offers.len(),
            "filtered offers"
        );

        Ok(to_display_records(&visible, &self.settings.badges, self.settings.locale))
    }

    /// Draws the current visible set. Exactly one surface call per invocation.
    pub fn render(&self, text: &str, surface: &mut dyn PresentationSurface) {
        match self.display_records(text) {
            Err(message) => surface.render_error(message),
            Ok(records) => match records.as_slice() {
                [DisplayRecord::NoResults { message }] => surface.render_empty_state(message),
                _ => surface.render_list(&records),
            },
        }
    }

    /// Input hook: re-filters the in-memory collection, no fetch.
    pub fn on_query_change(&self, text: &str, surface: &mut dyn PresentationSurface) {
        debug!(query = %text.trim(), "query changed");
        self.render(text, surface);
    }
}
