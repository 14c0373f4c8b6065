//! Simulation state: the live circles and their insertion policy
//!
//! Circles are kept in insertion order, which is also draw order. The
//! collection is capped at `MAX_CIRCLES`; the oldest circle goes first.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use crate::consts::*;

/// Serializable view of the simulation at a frame boundary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub frame: u64,
    pub circles: Vec<Circle>,
}

/// Complete simulation state
///
/// The random source is injected so color choice is reproducible in tests;
/// `SimulationState::new` seeds a `Pcg32`.
#[derive(Debug, Clone)]
pub struct SimulationState<R = Pcg32> {
    /// Live circles, oldest first
    pub(crate) circles: Vec<Circle>,
    /// Color source
    rng: R,
    /// Completed frames
    pub(crate) frame: u64,
    /// Circles with an id below this were present when the current frame's tick ran
    pub(crate) frame_watermark: Option<u64>,
    /// Next entity ID
    next_id: u64,
}

impl SimulationState<Pcg32> {
    /// Create a state with a seeded color source and the default seed circle
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulationState<R> {
    /// Create a state around an existing random source
    ///
    /// Starts with a single circle at `SEED_POINT`.
    pub fn with_rng(rng: R) -> Self {
        let mut state = Self {
            circles: Vec::with_capacity(MAX_CIRCLES + 1),
            rng,
            frame: 0,
            frame_watermark: None,
            next_id: 1,
        };

        state.add_circle(SEED_POINT);

        state
    }

    /// Allocate a new entity ID
    fn next_entity_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a circle at `point`, evicting the oldest one past the cap
    pub fn add_circle(&mut self, point: Vec2) {
        let id = self.next_entity_id();
        let circle = Circle::with_random_color(id, point, &mut self.rng);
        self.circles.push(circle);

        if self.circles.len() > MAX_CIRCLES {
            let evicted = self.circles.remove(0);
            log::debug!("circle cap reached, evicted circle {}", evicted.id);
        }
    }

    /// Remove every circle
    pub fn clear(&mut self) {
        if !self.circles.is_empty() {
            log::info!("cleared {} circles", self.circles.len());
        }
        self.circles.clear();
    }

    /// Live circles in draw order
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Number of completed frames
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Copy of the current circles for logging or export
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            frame: self.frame,
            circles: self.circles.clone(),
        }
    }

    /// Entity id that the next added circle will get
    pub(crate) fn peek_next_id(&self) -> u64 {
        self.next_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_seed_circle() {
        let state = SimulationState::new(1);
        assert_eq!(state.len(), 1);
        assert_eq!(state.circles()[0].center(), SEED_POINT);
        assert_eq!(state.circles()[0].radius(), INITIAL_RADIUS);
    }

    #[test]
    fn test_add_circle_appends_in_order() {
        let mut state = SimulationState::new(1);
        state.add_circle(Vec2::new(10.0, 20.0));
        state.add_circle(Vec2::new(30.0, 40.0));
        assert_eq!(state.len(), 3);
        assert_eq!(state.circles()[1].center(), Vec2::new(10.0, 20.0));
        assert_eq!(state.circles()[2].center(), Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut state = SimulationState::new(1);
        state.clear();
        for i in 0..MAX_CIRCLES {
            state.add_circle(Vec2::new(i as f32, 0.0));
        }
        assert_eq!(state.len(), MAX_CIRCLES);
        let first_id = state.circles()[0].id;

        state.add_circle(Vec2::new(999.0, 0.0));
        assert_eq!(state.len(), MAX_CIRCLES);
        assert!(state.circles().iter().all(|c| c.id != first_id));
        assert_eq!(state.circles()[0].center(), Vec2::new(1.0, 0.0));
        assert_eq!(state.circles()[MAX_CIRCLES - 1].center(), Vec2::new(999.0, 0.0));
    }

    #[test]
    fn test_clear_empties() {
        let mut state = SimulationState::new(1);
        state.add_circle(Vec2::ZERO);
        state.clear();
        assert!(state.is_empty());
        // Clearing an empty state is fine
        state.clear();
        assert!(state.is_empty());
    }

    #[test]
    fn test_same_seed_same_colors() {
        let mut a = SimulationState::new(42);
        let mut b = SimulationState::new(42);
        for i in 0..20 {
            let p = Vec2::new(i as f32 * 3.0, 7.0);
            a.add_circle(p);
            b.add_circle(p);
        }
        let colors_a: Vec<_> = a.circles().iter().map(|c| c.color()).collect();
        let colors_b: Vec<_> = b.circles().iter().map(|c| c.color()).collect();
        assert_eq!(colors_a, colors_b);
    }

    #[test]
    fn test_ids_continue_past_u32_range() {
        let mut state = SimulationState::new(1);
        state.next_id = u32::MAX as u64;
        state.add_circle(Vec2::new(10.0, 10.0));
        state.add_circle(Vec2::new(20.0, 20.0));
        let ids: Vec<_> = state.circles().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, u32::MAX as u64, u32::MAX as u64 + 1]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = SimulationState::new(5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        assert!(json.contains("\"frame\":0"));
        assert!(json.contains("\"radius\":1.0"));
    }
}
