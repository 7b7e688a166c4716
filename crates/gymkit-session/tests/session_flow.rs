//! End-to-end session flows through the async scan gate.

use std::sync::Arc;
use std::time::Duration;

use std::collections::VecDeque;
use std::sync::Mutex;

use gymkit_core::data::{Catalog, EquipmentRecord, Mode};
use gymkit_core::{AppEvent, Error, EventBus, SessionEvent};
use gymkit_map::PlanIntent;
use gymkit_session::{
    EquipmentResolver, ScanOutcome, SessionOrchestrator, SimulatedGate,
};

/// Blind-scan resolver that identifies a scripted sequence of equipment,
/// standing in for the user walking from machine to machine.
struct ScriptedResolver(Mutex<VecDeque<&'static str>>);

impl ScriptedResolver {
    fn new(ids: &[&'static str]) -> Self {
        Self(Mutex::new(ids.iter().copied().collect()))
    }
}

impl EquipmentResolver for ScriptedResolver {
    fn resolve(&self, catalog: &Catalog) -> Option<EquipmentRecord> {
        let id = self.0.lock().unwrap().pop_front()?;
        catalog.get(id).cloned()
    }
}

fn new_session() -> (SessionOrchestrator, Arc<EventBus>) {
    let bus = Arc::new(EventBus::new());
    let orc = SessionOrchestrator::new(Arc::new(Catalog::demo_floor()), bus.clone());
    (orc, bus)
}

#[tokio::test(start_paused = true)]
async fn scan_gate_drives_map_to_training() {
    let (mut orc, _bus) = new_session();
    orc.request_plan(PlanIntent::Chest);
    orc.request_scan(Some("b1"));

    let gate = SimulatedGate::new(Duration::from_secs(2));
    let outcome = orc.run_scan(&gate).await.unwrap();
    assert_eq!(outcome, ScanOutcome::Success);
    assert_eq!(orc.mode(), Mode::Training);
    assert_eq!(orc.active_equipment().unwrap().id, "b1");
    // The map is torn down; re-entry gets a fresh viewport
    assert!(orc.map().is_none());
}

#[tokio::test(start_paused = true)]
async fn run_scan_requires_an_armed_gate() {
    let (mut orc, _bus) = new_session();
    let gate = SimulatedGate::default();

    let err = orc.run_scan(&gate).await.unwrap_err();
    assert_eq!(err, Error::ScanNotArmed { mode: Mode::Home });
}

#[tokio::test(start_paused = true)]
async fn cancelled_scan_restores_the_map() {
    let (mut orc, _bus) = new_session();
    orc.request_plan(PlanIntent::Back);
    orc.request_scan(Some("r1"));

    let gate = SimulatedGate::new(Duration::from_secs(3600));
    let cancel = gate.cancel_handle();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        cancel.cancel();
    });

    let outcome = orc.run_scan(&gate).await.unwrap();
    assert_eq!(outcome, ScanOutcome::Cancelled);
    assert_eq!(orc.mode(), Mode::Map);
    assert!(orc.active_equipment().is_none());
    assert!(orc.map().is_some());
}

#[tokio::test(start_paused = true)]
async fn late_cancel_does_not_disturb_training() {
    let (mut orc, _bus) = new_session();
    orc.request_free_browse();
    orc.request_scan(Some("t2"));

    let gate = SimulatedGate::new(Duration::from_millis(100));
    let cancel = gate.cancel_handle();
    orc.run_scan(&gate).await.unwrap();
    assert_eq!(orc.mode(), Mode::Training);

    // Success already delivered; the cancel press changes nothing
    cancel.cancel();
    orc.cancel_scan();
    assert_eq!(orc.mode(), Mode::Training);
    assert_eq!(orc.active_equipment().unwrap().id, "t2");
}

#[tokio::test(start_paused = true)]
async fn training_entry_publishes_ticks_until_exit() {
    let (mut orc, bus) = new_session();
    let mut rx = bus.receiver();

    orc.request_free_browse();
    orc.request_scan(Some("l1"));
    let gate = SimulatedGate::new(Duration::from_millis(10));
    orc.run_scan(&gate).await.unwrap();
    assert_eq!(orc.mode(), Mode::Training);

    // Sleeping on the paused clock walks the tick task through each
    // one-second deadline
    tokio::time::sleep(Duration::from_millis(2500)).await;

    let mut ticks = 0;
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::Session(SessionEvent::TimerTick { .. }) = event {
            ticks += 1;
        }
    }
    assert_eq!(ticks, 2);
    assert_eq!(orc.training_secs(), 2);

    // Finishing the ad-hoc session keeps Training mode and the ticker,
    // but an explicit summary stops it
    orc.request_finish();
    orc.request_summary();
    assert_eq!(orc.mode(), Mode::Summary);
    tokio::task::yield_now().await;
    tokio::time::sleep(Duration::from_secs(5)).await;

    let mut ticks_after = 0;
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::Session(SessionEvent::TimerTick { .. }) = event {
            ticks_after += 1;
        }
    }
    assert_eq!(ticks_after, 0);
    assert_eq!(orc.summary().duration_secs, 2);
}

#[tokio::test(start_paused = true)]
async fn planned_route_end_to_end() {
    let bus = Arc::new(EventBus::new());
    let mut orc = SessionOrchestrator::with_resolver(
        Arc::new(Catalog::demo_floor()),
        bus.clone(),
        Box::new(ScriptedResolver::new(&["l1", "b1"])),
    );
    let mut rx = bus.receiver();
    orc.request_plan(PlanIntent::FullBody);
    assert_eq!(orc.queue().ids(), vec!["t1", "l1", "b1"]);

    let gate = SimulatedGate::new(Duration::from_millis(50));
    for expected in ["t1", "l1", "b1"] {
        if orc.mode() == Mode::Map {
            // First stop: picked on the map
            orc.request_scan(Some(expected));
        } else {
            // Later stops: blind scan from the scan-next prompt
            orc.request_scan(None);
        }
        orc.run_scan(&gate).await.unwrap();
        assert_eq!(orc.mode(), Mode::Training);
        assert_eq!(orc.active_equipment().unwrap().id, expected);
        orc.set_log_mut().toggle(1);
        orc.request_finish();
    }

    assert_eq!(orc.mode(), Mode::Summary);
    assert_eq!(orc.completed().len(), 3);
    // 3 equipment x 1 completed set x 10 reps x 20 kg
    assert_eq!(orc.summary().total_volume_kg, 600.0);

    orc.dismiss_summary();
    assert_eq!(orc.mode(), Mode::Home);
    assert!(orc.completed().is_empty());

    // ModeChanged events arrived in machine order
    let mut modes = Vec::new();
    while let Ok(event) = rx.try_recv() {
        if let AppEvent::Session(SessionEvent::ModeChanged { mode }) = event {
            modes.push(mode);
        }
    }
    assert_eq!(modes.first(), Some(&Mode::Map));
    assert_eq!(modes.last(), Some(&Mode::Home));
}
