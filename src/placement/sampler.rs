//! Bounded rejection sampler.

use log::{debug, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::Point2D;
use crate::obstacle::ObstacleField;

use super::config::{EntityRole, PlacementBatch, PlacementConfig};
use super::error::PlacementError;

/// Rejection counts per constraint, reported when a spawn fails.
#[derive(Clone, Copy, Debug, Default)]
struct Rejections {
    contained: usize,
    crowded: usize,
    sealed: usize,
}

/// Draws spawn positions that avoid obstacles and each other.
#[derive(Debug)]
pub struct PlacementSampler {
    config: PlacementConfig,
    rng: StdRng,
}

impl PlacementSampler {
    /// Create a sampler. `Some(seed)` gives a reproducible sequence.
    pub fn new(config: PlacementConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    /// Place one entity and record it in `batch`.
    pub fn spawn<F: ObstacleField + ?Sized>(
        &mut self,
        field: &F,
        role: EntityRole,
        batch: &mut PlacementBatch,
    ) -> Result<Point2D, PlacementError> {
        self.spawn_with(field, role, batch, |_| {})
    }

    /// Place one entity, record it in `batch`, then run `on_accept` on it.
    ///
    /// Candidates are checked in order: not inside an obstacle, clear of
    /// every point already in the batch, and in line of sight of at least
    /// one anchor.
    pub fn spawn_with<F, C>(
        &mut self,
        field: &F,
        role: EntityRole,
        batch: &mut PlacementBatch,
        on_accept: C,
    ) -> Result<Point2D, PlacementError>
    where
        F: ObstacleField + ?Sized,
        C: FnOnce(Point2D),
    {
        let bounds = self.config.bounds;
        // Extents must be finite too; huge finite corners can overflow the span.
        if bounds.is_empty() || !bounds.width().is_finite() || !bounds.height().is_finite() {
            return Err(PlacementError::EmptyBounds);
        }

        let clearance = self.config.clearance(role);
        let mut rejections = Rejections::default();

        for attempt in 1..=self.config.max_attempts {
            let candidate = bounds.sample(&mut self.rng);

            if field.contains_point(candidate) {
                rejections.contained += 1;
                continue;
            }
            if batch.crowds(candidate, clearance) {
                rejections.crowded += 1;
                continue;
            }
            if !self.sees_anchor(field, candidate) {
                rejections.sealed += 1;
                continue;
            }

            trace!(
                "[Placement] {} accepted at {} after {} attempts",
                role, candidate, attempt
            );
            batch.push(candidate);
            on_accept(candidate);
            return Ok(candidate);
        }

        debug!(
            "[Placement] FAILED: {} infeasible after {} attempts (contained={}, crowded={}, sealed={})",
            role,
            self.config.max_attempts,
            rejections.contained,
            rejections.crowded,
            rejections.sealed
        );
        Err(PlacementError::Infeasible {
            role,
            attempts: self.config.max_attempts,
        })
    }

    fn sees_anchor<F: ObstacleField + ?Sized>(&self, field: &F, candidate: Point2D) -> bool {
        self.config.anchors.is_empty()
            || self
                .config
                .anchors
                .iter()
                .any(|&anchor| field.is_visible(candidate, anchor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Bounds;
    use crate::obstacle::{Obstacle, PolygonField};

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    fn rect(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Vec<Point2D> {
        vec![p(min_x, min_y), p(max_x, min_y), p(max_x, max_y), p(min_x, max_y)]
    }

    fn open_config() -> PlacementConfig {
        PlacementConfig::default()
            .with_bounds(Bounds::from_extents(0.0, 10.0, 0.0, 10.0))
            .with_anchors(Vec::new())
    }

    #[test]
    fn test_never_inside_obstacle() {
        let field = PolygonField::new(vec![
            Obstacle::blocking("block", rect(0.0, 5.0, 0.0, 10.0)),
            Obstacle::non_blocking("pond", rect(5.0, 10.0, 5.0, 10.0)),
        ]);
        let mut sampler = PlacementSampler::new(open_config(), Some(1));
        let mut batch = PlacementBatch::new();

        for _ in 0..20 {
            let pt = sampler.spawn(&field, EntityRole::Agent, &mut batch).unwrap();
            assert!(!field.contains_point(pt));
        }
    }

    #[test]
    fn test_clearance_within_batch() {
        let config = open_config()
            .with_bounds(Bounds::from_extents(0.0, 2.0, 0.0, 2.0))
            .with_clearance(0.3, 0.5);
        let field = PolygonField::default();
        let mut sampler = PlacementSampler::new(config, Some(2));
        let mut batch = PlacementBatch::new();

        for _ in 0..6 {
            sampler.spawn(&field, EntityRole::Target, &mut batch).unwrap();
        }
        let pts = batch.points();
        for i in 0..pts.len() {
            for j in (i + 1)..pts.len() {
                assert!(pts[i].distance_squared(pts[j]) >= 0.25);
            }
        }
    }

    #[test]
    fn test_fully_covered_bounds_is_infeasible() {
        let config = open_config().with_max_attempts(200);
        let field = PolygonField::new(vec![Obstacle::blocking(
            "cover",
            rect(-1.0, 11.0, -1.0, 11.0),
        )]);
        let mut sampler = PlacementSampler::new(config, Some(3));
        let mut batch = PlacementBatch::new();

        assert_eq!(
            sampler.spawn(&field, EntityRole::Agent, &mut batch),
            Err(PlacementError::Infeasible {
                role: EntityRole::Agent,
                attempts: 200
            })
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_empty_bounds() {
        let config = open_config().with_bounds(Bounds::empty());
        let mut sampler = PlacementSampler::new(config, Some(4));
        let mut batch = PlacementBatch::new();
        assert_eq!(
            sampler.spawn(&PolygonField::default(), EntityRole::Agent, &mut batch),
            Err(PlacementError::EmptyBounds)
        );
    }

    #[test]
    fn test_overflowing_extent_is_rejected() {
        // Both corners finite, but max - min overflows to infinity
        let config = open_config().with_bounds(Bounds::from_extents(-3.0e38, 3.0e38, 0.0, 1.0));
        let mut sampler = PlacementSampler::new(config, Some(8));
        let mut batch = PlacementBatch::new();
        assert_eq!(
            sampler.spawn(&PolygonField::default(), EntityRole::Target, &mut batch),
            Err(PlacementError::EmptyBounds)
        );
        assert!(batch.is_empty());
    }

    #[test]
    fn test_requires_anchor_line_of_sight() {
        // Wall at x in [4, 6] splits the area; the only anchor is on the right
        let field = PolygonField::new(vec![Obstacle::blocking("wall", rect(4.0, 6.0, -1.0, 11.0))]);
        let config = open_config().with_anchors(vec![p(9.0, 5.0)]);
        let mut sampler = PlacementSampler::new(config, Some(5));
        let mut batch = PlacementBatch::new();

        for _ in 0..20 {
            let pt = sampler.spawn(&field, EntityRole::Agent, &mut batch).unwrap();
            assert!(pt.x > 6.0);
        }
    }

    #[test]
    fn test_sealed_anchor_is_infeasible() {
        let field = PolygonField::new(vec![Obstacle::blocking("box", rect(8.0, 10.0, 4.0, 6.0))]);
        let config = open_config()
            .with_bounds(Bounds::from_extents(0.0, 5.0, 0.0, 10.0))
            .with_anchors(vec![p(9.0, 5.0)])
            .with_max_attempts(100);
        let mut sampler = PlacementSampler::new(config, Some(6));
        let mut batch = PlacementBatch::new();
        assert!(matches!(
            sampler.spawn(&field, EntityRole::Target, &mut batch),
            Err(PlacementError::Infeasible { .. })
        ));
    }

    #[test]
    fn test_seeded_sampler_is_reproducible() {
        let field = PolygonField::default();
        let run = |seed| {
            let mut sampler = PlacementSampler::new(open_config(), Some(seed));
            let mut batch = PlacementBatch::new();
            (0..5)
                .map(|_| sampler.spawn(&field, EntityRole::Agent, &mut batch).unwrap())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(42), run(42));
        assert_ne!(run(42), run(43));
    }

    #[test]
    fn test_on_accept_runs_once_with_point() {
        let mut sampler = PlacementSampler::new(open_config(), Some(7));
        let mut batch = PlacementBatch::new();
        let mut seen = Vec::new();
        let pt = sampler
            .spawn_with(&PolygonField::default(), EntityRole::Agent, &mut batch, |q| {
                seen.push(q)
            })
            .unwrap();
        assert_eq!(seen, vec![pt]);
        assert_eq!(batch.points(), &[pt]);
    }
}
