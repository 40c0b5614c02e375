//! Dashboard session state
//!
//! One filter session shared by every connected browser, so a selection made
//! in one tab is applied in every other tab as well. Each applied selection
//! bumps the session revision; view updates carry it so browsers can discard
//! anything older than what they already show.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{Mutex, MutexGuard};

use engine::{EngineResult, FilterEngine, FilterView, SelectionAction};
use ingest::DatasetOrigin;
use shared::{LogicModelDataset, Relation};

use crate::types::ClientMessage;

/// The shared engine and the revision of its current view
pub struct Session {
    engine: FilterEngine,
    revision: u64,
}

impl Session {
    fn new(engine: FilterEngine) -> Self {
        Self { engine, revision: 0 }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn view(&self) -> &FilterView {
        self.engine.view()
    }

    /// Apply a selection; on error neither the view nor the revision changes
    pub fn apply(&mut self, action: SelectionAction) -> EngineResult<FilterView> {
        let view = self.engine.dispatch(action)?.clone();
        self.revision += 1;
        Ok(view)
    }

    pub fn connected_items(&self, relation: Relation) -> BTreeSet<usize> {
        self.engine.connected_items(relation)
    }

    /// Current view as a push message
    pub fn view_update(&self) -> ClientMessage {
        ClientMessage::ViewUpdate {
            revision: self.revision,
            view: self.engine.view().clone(),
        }
    }
}

pub struct DashboardState {
    dataset: Arc<LogicModelDataset>,
    origin: DatasetOrigin,
    session: Mutex<Session>,
    started_at: Instant,
}

impl DashboardState {
    pub fn new(dataset: LogicModelDataset, origin: DatasetOrigin) -> Self {
        let dataset = Arc::new(dataset);
        Self {
            session: Mutex::new(Session::new(FilterEngine::new(dataset.clone()))),
            dataset,
            origin,
            started_at: Instant::now(),
        }
    }

    pub fn dataset(&self) -> &Arc<LogicModelDataset> {
        &self.dataset
    }

    pub fn origin(&self) -> DatasetOrigin {
        self.origin
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    /// Exclusive access to the session; hold it across apply and broadcast
    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    pub async fn connected_items(&self, relation: Relation) -> BTreeSet<usize> {
        self.session.lock().await.connected_items(relation)
    }
}
