//! Floor occupancy model.
//!
//! Tracks a live people-count against facility capacity. The count is
//! advanced by a [`CrowdFeed`] supplied by the caller, so the model can be
//! driven by a real headcount source in production and by a deterministic
//! walk in tests and demos — there is no free-running ambient timer here.

/// Supplies per-step changes to the occupancy count.
pub trait CrowdFeed {
    /// The next delta to apply to the count.
    fn next_delta(&mut self) -> i32;
}

/// Occupancy counter clamped to a realistic band within capacity.
#[derive(Debug, Clone)]
pub struct OccupancyModel {
    count: u32,
    capacity: u32,
    min: u32,
    max: u32,
}

impl OccupancyModel {
    /// Create a model with the given starting count and capacity.
    ///
    /// The count is clamped to `[min, max]`; `max` is additionally capped
    /// at `capacity`.
    pub fn new(count: u32, capacity: u32, min: u32, max: u32) -> Self {
        let max = max.min(capacity);
        Self {
            count: count.clamp(min, max),
            capacity,
            min,
            max,
        }
    }

    /// Current people count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Facility capacity.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Occupancy as a rounded percentage of capacity.
    pub fn percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        ((self.count as f64 / self.capacity as f64) * 100.0).round() as u32
    }

    /// Apply one delta, clamping to the configured band.
    pub fn step(&mut self, delta: i32) -> u32 {
        let next = self.count as i64 + delta as i64;
        self.count = next.clamp(self.min as i64, self.max as i64) as u32;
        self.count
    }

    /// Advance the model by one reading from the feed.
    pub fn advance(&mut self, feed: &mut dyn CrowdFeed) -> u32 {
        self.step(feed.next_delta())
    }
}

/// Deterministic random-walk feed: each step is -1, 0, or +1.
///
/// Uses a seeded xorshift so demo runs are reproducible.
#[derive(Debug, Clone)]
pub struct RandomWalkFeed {
    state: u64,
}

impl RandomWalkFeed {
    /// Create a feed from a non-zero seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.max(1),
        }
    }
}

impl CrowdFeed for RandomWalkFeed {
    fn next_delta(&mut self) -> i32 {
        // xorshift64
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        (x % 3) as i32 - 1
    }
}
