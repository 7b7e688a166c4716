//! Session orchestration state machine.
//!
//! Owns the top-level mode (`Home`, `Map`, `AwaitingScan`, `Training`,
//! `Summary`), the equipment being trained, the completed-equipment
//! history, and the plan queue, and drives every transition among them.
//! The presentation layer only sends commands and subscribes to events;
//! it never mutates session state directly.
//!
//! Invalid commands are defensively ignored. The presentation layer is
//! expected to only expose valid actions for the current mode, but a
//! stray command must never crash or corrupt the session.

use std::sync::Arc;

use gymkit_core::data::{Catalog, EquipmentRecord, Mode};
use gymkit_core::{AppEvent, EventBus, MapEvent, PlanEvent, ScanEvent, SessionEvent};
use gymkit_core::{Error, Result};
use gymkit_map::{build_plan, MapView, PlanIntent, PlanQueue};

use crate::scan::{EquipmentResolver, FirstAvailableResolver, ScanGate, ScanOutcome};
use crate::timer::{Ticker, TrainingClock};
use crate::workout::{SessionSummary, SetLog};

/// Top-level state machine for one gym session.
pub struct SessionOrchestrator {
    catalog: Arc<Catalog>,
    bus: Arc<EventBus>,
    resolver: Box<dyn EquipmentResolver>,

    mode: Mode,
    active: Option<EquipmentRecord>,
    completed: Vec<EquipmentRecord>,
    queue: PlanQueue,

    /// Map screen state; `Some` only while the map is open so the
    /// viewport comes back at the identity transform on re-entry.
    map: Option<MapView>,

    /// Set log for the active equipment.
    set_log: SetLog,
    /// Running clock for the current training block.
    clock: Option<TrainingClock>,
    /// Tick task scoped to training; dropped on exit.
    ticker: Option<Ticker>,
    /// Training seconds banked from earlier blocks of this session.
    trained_secs: u64,
    /// Volume banked from finished equipment.
    banked_volume_kg: f32,

    /// Equipment the pending scan should confirm, if predetermined.
    pending_target: Option<String>,
    /// Mode to restore when a scan is cancelled.
    return_mode: Mode,
    /// Guards against overlapping scan drivers.
    scan_pending: bool,
}

impl SessionOrchestrator {
    /// Create an orchestrator at `Home` with an empty session.
    ///
    /// Blind scans resolve through [`FirstAvailableResolver`]; use
    /// [`SessionOrchestrator::with_resolver`] to inject another policy.
    pub fn new(catalog: Arc<Catalog>, bus: Arc<EventBus>) -> Self {
        Self::with_resolver(catalog, bus, Box::new(FirstAvailableResolver))
    }

    /// Create an orchestrator with a custom blind-scan resolution policy.
    pub fn with_resolver(
        catalog: Arc<Catalog>,
        bus: Arc<EventBus>,
        resolver: Box<dyn EquipmentResolver>,
    ) -> Self {
        Self {
            catalog,
            bus,
            resolver,
            mode: Mode::Home,
            active: None,
            completed: Vec::new(),
            queue: PlanQueue::new(),
            map: None,
            set_log: SetLog::new(),
            clock: None,
            ticker: None,
            trained_secs: 0,
            banked_volume_kg: 0.0,
            pending_target: None,
            return_mode: Mode::Home,
            scan_pending: false,
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The equipment currently being trained.
    pub fn active_equipment(&self) -> Option<&EquipmentRecord> {
        self.active.as_ref()
    }

    /// Equipment completed this session, in order.
    pub fn completed(&self) -> &[EquipmentRecord] {
        &self.completed
    }

    /// The remaining plan queue.
    pub fn queue(&self) -> &PlanQueue {
        &self.queue
    }

    /// The map screen state while the map is open.
    pub fn map(&self) -> Option<&MapView> {
        self.map.as_ref()
    }

    /// Mutable map access for viewport gestures.
    pub fn map_mut(&mut self) -> Option<&mut MapView> {
        self.map.as_mut()
    }

    /// The catalog backing this session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Set log for the active equipment.
    pub fn set_log(&self) -> &SetLog {
        &self.set_log
    }

    /// Mutable set log for checking off and adding sets.
    pub fn set_log_mut(&mut self) -> &mut SetLog {
        &mut self.set_log
    }

    /// The target the pending scan should confirm, if any.
    pub fn pending_target(&self) -> Option<&str> {
        self.pending_target.as_deref()
    }

    /// Training seconds accumulated this session, including the running
    /// block.
    pub fn training_secs(&self) -> u64 {
        self.trained_secs + self.clock.as_ref().map_or(0, TrainingClock::elapsed_secs)
    }

    /// Whether the explicit "view summary" action should be offered:
    /// training with nothing active and at least one completed exercise.
    pub fn summary_available(&self) -> bool {
        self.mode == Mode::Training && self.active.is_none() && !self.completed.is_empty()
    }

    /// Build a workout route for the intent and open the map.
    ///
    /// Only valid from `Home`; restarts the session history.
    pub fn request_plan(&mut self, intent: PlanIntent) {
        if self.mode != Mode::Home {
            tracing::debug!(mode = %self.mode, "Ignoring plan request outside Home");
            return;
        }
        self.completed.clear();
        self.queue = build_plan(intent, &self.catalog);
        self.publish_queue();
        self.open_map();
    }

    /// Open the map without a planned route.
    ///
    /// Only valid from `Home`; queue and history are left as they are.
    pub fn request_free_browse(&mut self) {
        if self.mode != Mode::Home {
            tracing::debug!(mode = %self.mode, "Ignoring browse request outside Home");
            return;
        }
        self.open_map();
    }

    /// Leave the map back to the home screen.
    pub fn return_home(&mut self) {
        if self.mode != Mode::Map {
            return;
        }
        self.map = None;
        self.enter_mode(Mode::Home);
    }

    /// Focus equipment on the open map.
    pub fn select_on_map(&mut self, id: &str) {
        let Some(map) = self.map.as_mut() else {
            return;
        };
        if map.select_equipment(&self.catalog, id) {
            self.bus.publish(AppEvent::Map(MapEvent::SelectionChanged {
                id: Some(id.to_string()),
            }));
        }
    }

    /// Clear the explicit map focus.
    pub fn clear_map_selection(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.clear_selection();
            self.bus
                .publish(AppEvent::Map(MapEvent::SelectionChanged { id: None }));
        }
    }

    /// Switch the visible map floor.
    pub fn set_map_floor(&mut self, floor: i32) {
        if let Some(map) = self.map.as_mut() {
            if map.active_floor() != floor {
                map.set_floor(floor);
                self.bus
                    .publish(AppEvent::Map(MapEvent::FloorChanged { floor }));
            }
        }
    }

    /// Zoom the map in one step.
    pub fn map_zoom_in(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.viewport_mut().zoom_in();
            let scale = map.viewport().scale();
            self.bus
                .publish(AppEvent::Map(MapEvent::ZoomChanged { scale }));
        }
    }

    /// Zoom the map out one step.
    pub fn map_zoom_out(&mut self) {
        if let Some(map) = self.map.as_mut() {
            map.viewport_mut().zoom_out();
            let scale = map.viewport().scale();
            self.bus
                .publish(AppEvent::Map(MapEvent::ZoomChanged { scale }));
        }
    }

    /// Arm the scan gate.
    ///
    /// Two entries exist: from the map with a chosen target, and from
    /// training (nothing active) as a blind scan with no target. Any
    /// other combination is ignored, as is a target id the catalog does
    /// not know.
    pub fn request_scan(&mut self, target: Option<&str>) {
        match (self.mode, target) {
            (Mode::Map, Some(id)) => {
                if self.catalog.get(id).is_none() {
                    tracing::debug!(id, "Ignoring scan request for unknown equipment");
                    return;
                }
                self.pending_target = Some(id.to_string());
                self.return_mode = Mode::Map;
                self.bus.publish(AppEvent::Scan(ScanEvent::Started {
                    target: Some(id.to_string()),
                }));
                self.enter_mode(Mode::AwaitingScan);
            }
            (Mode::Training, None) if self.active.is_none() => {
                self.pending_target = None;
                self.return_mode = Mode::Training;
                self.bus
                    .publish(AppEvent::Scan(ScanEvent::Started { target: None }));
                self.enter_mode(Mode::AwaitingScan);
            }
            _ => {
                tracing::debug!(mode = %self.mode, ?target, "Ignoring scan request");
            }
        }
    }

    /// Abort the pending scan and restore the pre-scan mode.
    ///
    /// A no-op outside `AwaitingScan`, which makes cancellation after a
    /// delivered success harmless.
    pub fn cancel_scan(&mut self) {
        if self.mode != Mode::AwaitingScan {
            return;
        }
        self.pending_target = None;
        self.bus.publish(AppEvent::Scan(ScanEvent::Cancelled));
        self.enter_mode(self.return_mode);
    }

    /// Deliver a successful scan and start training.
    ///
    /// The confirmed equipment is the pending target when one was armed,
    /// otherwise whatever the blind-scan resolver identifies. If nothing
    /// resolves (empty catalog), the session falls back to the pre-scan
    /// mode.
    pub fn confirm_scan_success(&mut self) {
        if self.mode != Mode::AwaitingScan {
            tracing::debug!(mode = %self.mode, "Ignoring scan confirmation");
            return;
        }
        let resolved = match self.pending_target.take() {
            Some(id) => self.catalog.get(&id).cloned(),
            None => self.resolver.resolve(&self.catalog),
        };
        let Some(equipment) = resolved else {
            tracing::warn!("Scan resolved no equipment");
            self.enter_mode(self.return_mode);
            return;
        };

        self.bus.publish(AppEvent::Scan(ScanEvent::Succeeded {
            equipment_id: equipment.id.clone(),
        }));
        self.map = None;
        self.set_log = SetLog::standard();
        self.active = Some(equipment.clone());
        self.bus
            .publish(AppEvent::Session(SessionEvent::ActiveEquipmentChanged {
                equipment: Some(equipment),
            }));
        self.enter_mode(Mode::Training);
    }

    /// Drive one armed scan through the gate to completion.
    ///
    /// Applies the outcome to the state machine: success confirms and
    /// starts training, cancellation restores the pre-scan mode. Errors
    /// if no scan is armed or one is already being driven.
    pub async fn run_scan(&mut self, gate: &dyn ScanGate) -> Result<ScanOutcome> {
        if self.mode != Mode::AwaitingScan {
            return Err(Error::ScanNotArmed { mode: self.mode });
        }
        if self.scan_pending {
            return Err(Error::ScanAlreadyPending);
        }
        self.scan_pending = true;
        let outcome = gate.start_scan(self.pending_target.as_deref()).await;
        self.scan_pending = false;
        match outcome {
            ScanOutcome::Success => self.confirm_scan_success(),
            ScanOutcome::Cancelled => self.cancel_scan(),
        }
        Ok(outcome)
    }

    /// Finish the active exercise.
    ///
    /// Appends it to the history, removes it from the queue, and clears
    /// the active slot. Completing the last stop of a planned route goes
    /// to `Summary`; otherwise the mode stays `Training` with the
    /// scan-next prompt. Ad-hoc sessions never auto-summarize.
    pub fn request_finish(&mut self) {
        if self.mode != Mode::Training {
            tracing::debug!(mode = %self.mode, "Ignoring finish outside Training");
            return;
        }
        let Some(equipment) = self.active.take() else {
            tracing::debug!("Ignoring finish with no active equipment");
            return;
        };

        let had_queue = !self.queue.is_empty();
        self.banked_volume_kg += self.set_log.completed_volume_kg();
        self.set_log = SetLog::new();

        self.completed.push(equipment.clone());
        self.bus
            .publish(AppEvent::Session(SessionEvent::HistoryAppended {
                equipment: equipment.clone(),
            }));
        if self.queue.advance(&equipment.id) {
            self.publish_queue();
        }
        self.bus
            .publish(AppEvent::Session(SessionEvent::ActiveEquipmentChanged {
                equipment: None,
            }));

        // Only completing a planned route triggers the automatic summary
        if had_queue && self.queue.is_empty() {
            self.enter_mode(Mode::Summary);
        }
    }

    /// Explicitly end the session and view the summary.
    ///
    /// Offered whenever training is idle with history accumulated; see
    /// [`SessionOrchestrator::summary_available`].
    pub fn request_summary(&mut self) {
        if !self.summary_available() {
            tracing::debug!(mode = %self.mode, "Ignoring summary request");
            return;
        }
        self.enter_mode(Mode::Summary);
    }

    /// The summary figures for the session so far.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            duration_secs: self.training_secs(),
            total_volume_kg: self.banked_volume_kg + self.set_log.completed_volume_kg(),
            equipment_used: self.completed.iter().map(|e| e.name.clone()).collect(),
        }
    }

    /// Dismiss the summary and reset for the next session.
    pub fn dismiss_summary(&mut self) {
        if self.mode != Mode::Summary {
            return;
        }
        self.completed.clear();
        self.queue.clear();
        self.publish_queue();
        self.trained_secs = 0;
        self.banked_volume_kg = 0.0;
        self.set_log = SetLog::new();
        self.enter_mode(Mode::Home);
    }

    fn open_map(&mut self) {
        self.map = Some(MapView::new());
        self.enter_mode(Mode::Map);
    }

    fn publish_queue(&self) {
        self.bus.publish(AppEvent::Plan(PlanEvent::QueueChanged {
            ids: self.queue.ids(),
        }));
    }

    /// Switch modes, scoping the training clock and tick task to
    /// `Training` so the timer can never outlive the screen.
    fn enter_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        if self.mode == Mode::Training {
            if let Some(clock) = self.clock.take() {
                self.trained_secs += clock.elapsed_secs();
            }
            self.ticker = None;
        }
        if mode == Mode::Training {
            self.clock = Some(TrainingClock::start());
            // Headless tests run the machine without a reactor
            if tokio::runtime::Handle::try_current().is_ok() {
                self.ticker = Some(Ticker::start(self.bus.clone()));
            }
        }
        self.mode = mode;
        tracing::info!(mode = %mode, "Session mode changed");
        self.bus
            .publish(AppEvent::Session(SessionEvent::ModeChanged { mode }));
    }
}

impl std::fmt::Debug for SessionOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionOrchestrator")
            .field("mode", &self.mode)
            .field("active", &self.active.as_ref().map(|e| &e.id))
            .field("completed", &self.completed.len())
            .field("queue", &self.queue.ids())
            .finish()
    }
}
