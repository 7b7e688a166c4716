//! Scripted demo session: plan a chest day, walk the route through the
//! scan gate, and print the summary. Stands in for the excluded
//! presentation layer.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use gymkit::{
    init_logging, AppEvent, Catalog, EquipmentRecord, EquipmentResolver, EventBus, EventFilter,
    Mode, OccupancyModel, PlanIntent, RandomWalkFeed, SessionOrchestrator, SimulatedGate,
    BUILD_DATE, VERSION,
};

/// Stands in for real equipment detection: identifies the machines the
/// demo user "walks to", in order.
struct WalkthroughResolver(Mutex<VecDeque<String>>);

impl EquipmentResolver for WalkthroughResolver {
    fn resolve(&self, catalog: &Catalog) -> Option<EquipmentRecord> {
        let id = self.0.lock().ok()?.pop_front()?;
        catalog.get(&id).cloned()
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!("GymKit {} (built {})", VERSION, BUILD_DATE);

    let bus = Arc::new(EventBus::new());
    bus.subscribe(EventFilter::All, |event: AppEvent| {
        tracing::info!("{}", event.description());
    });

    let catalog = Arc::new(Catalog::demo_floor());
    let mut occupancy = OccupancyModel::new(8, 30, 3, 12);
    let mut feed = RandomWalkFeed::new(0x5eed);

    // The demo user follows the recommended chest route
    let resolver = WalkthroughResolver(Mutex::new(
        ["b2", "b3"].into_iter().map(String::from).collect(),
    ));
    let mut session =
        SessionOrchestrator::with_resolver(catalog.clone(), bus.clone(), Box::new(resolver));

    session.request_plan(PlanIntent::Chest);
    tracing::info!(
        "Route: {:?}, {} people on the floor ({}%)",
        session.queue().ids(),
        occupancy.count(),
        occupancy.percent()
    );

    // Pan around and pick the recommended bench
    if let Some(map) = session.map_mut() {
        map.viewport_mut().zoom_in();
        map.pointer_down(40.0, 40.0);
        map.pointer_move(80.0, 55.0);
        map.pointer_up();
        tracing::info!("Viewport: {}", map.viewport());
    }

    let gate = SimulatedGate::new(Duration::from_millis(300));
    while session.mode() != Mode::Summary {
        match session.mode() {
            // First stop is picked on the map; later stops come from the
            // scan-next prompt as blind scans
            Mode::Map => {
                let Some(target) = session.queue().head().map(|e| e.id.clone()) else {
                    break;
                };
                session.request_scan(Some(&target));
            }
            Mode::Training => session.request_scan(None),
            _ => break,
        }
        session.run_scan(&gate).await?;

        // Check off the standard sets and let a little time pass
        for number in 1..=3 {
            session.set_log_mut().toggle(number);
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
        occupancy.advance(&mut feed);
        session.request_finish();
    }

    let summary = session.summary();
    tracing::info!(
        "Session done in {}: {:.0} kg across {}",
        summary.duration_display(),
        summary.total_volume_kg,
        summary.equipment_used.join(", ")
    );
    session.dismiss_summary();

    Ok(())
}
