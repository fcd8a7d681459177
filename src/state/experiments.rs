//! Experiment-list state shared by the experiment pages.

#[cfg(test)]
#[path = "experiments_test.rs"]
mod experiments_test;

use crate::net::types::{Experiment, ExperimentPage};

/// Paged experiment list plus the currently opened detail.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentsState {
    pub items: Vec<Experiment>,
    pub current: Option<Experiment>,
    pub loading: bool,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}

impl Default for ExperimentsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            total: 0,
            page: 1,
            limit: 10,
        }
    }
}

impl ExperimentsState {
    /// Replace the list with one fetched page.
    pub fn apply_page(&mut self, page: i64, limit: i64, fetched: ExperimentPage) {
        self.page = page;
        self.limit = limit;
        self.items = fetched.data;
        self.total = fetched.total;
        self.loading = false;
    }

    pub fn apply_detail(&mut self, experiment: Experiment) {
        self.current = Some(experiment);
        self.loading = false;
    }

    /// Back to the pristine state, e.g. after logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
