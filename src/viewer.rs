//! Change-gated icosphere regeneration for a per-frame update loop.
//!
//! [`ViewerParams`] tracks the two user-facing parameters that determine the
//! staged mesh: subdivision level and shading mode. Both carry dirty flags,
//! and [`ViewerParams::refresh`] — called once per update tick — regenerates
//! the icosphere and restages its buffers only when at least one of them
//! changed, so the expensive rebuild runs at most once per actual change
//! rather than once per frame.

use std::time::{Duration, Instant};

use crate::dirty::{clean_pair, DirtyProperty};
use crate::icosphere;
use crate::shading::{Shading, StagedMesh};

/// Largest subdivision level the setter accepts.
///
/// Bounds the triangle count at `20 * 4^8`; generation cost grows with the
/// same factor.
pub const MAX_SUBDIVISION_LEVEL: u8 = 8;

/// Tracked viewer parameters gating icosphere regeneration.
#[derive(Debug)]
pub struct ViewerParams {
    subdivision_level: DirtyProperty<u8>,
    shading: DirtyProperty<Shading>,
    generation_elapsed: Duration,
}

impl ViewerParams {
    /// Creates parameters at level 0 with Phong shading, both pending, so
    /// the first [`refresh`](Self::refresh) stages an initial mesh.
    pub fn new() -> Self {
        Self {
            subdivision_level: DirtyProperty::new(0),
            shading: DirtyProperty::new(Shading::default()),
            generation_elapsed: Duration::ZERO,
        }
    }

    /// Current subdivision level.
    pub fn subdivision_level(&self) -> u8 {
        *self.subdivision_level.value()
    }

    /// Sets the subdivision level, clamped to `0..=MAX_SUBDIVISION_LEVEL`.
    ///
    /// Range enforcement lives here, not in generation: by the time a level
    /// reaches [`icosphere::generate`] it is already bounded.
    pub fn set_subdivision_level(&mut self, level: i32) {
        self.subdivision_level
            .set(level.clamp(0, MAX_SUBDIVISION_LEVEL as i32) as u8);
    }

    /// Current shading mode, including the last staged statistics.
    pub fn shading(&self) -> &Shading {
        self.shading.value()
    }

    /// Sets the shading mode.
    pub fn set_shading(&mut self, shading: Shading) {
        self.shading.set(shading);
    }

    /// Wall-clock duration of the most recent regeneration, for display.
    pub fn generation_elapsed(&self) -> Duration {
        self.generation_elapsed
    }

    /// Regenerates the icosphere and hands the staged buffers to `upload`
    /// if a tracked parameter changed since the previous call.
    ///
    /// Runs the rebuild at most once per call and sees a consistent snapshot
    /// of both parameters together. Returns `true` if regeneration ran.
    pub fn refresh(&mut self, upload: impl FnOnce(StagedMesh)) -> bool {
        let elapsed = &mut self.generation_elapsed;
        clean_pair(
            &mut self.subdivision_level,
            &mut self.shading,
            |level, shading| {
                let start = Instant::now();
                let mesh = icosphere::generate(*level);
                let staged = StagedMesh::stage(mesh, shading);
                *elapsed = start.elapsed();

                log::debug!(
                    "regenerated icosphere: level {}, {}, {:.3} ms",
                    level,
                    shading.label(),
                    elapsed.as_secs_f64() * 1e3,
                );

                upload(staged);
            },
        )
        .is_some()
    }
}

impl Default for ViewerParams {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_refresh_stages_initial_mesh() {
        let mut params = ViewerParams::new();

        let mut staged = None;
        assert!(params.refresh(|s| staged = Some(s)));

        // Level 0, Phong by default: 12 shared positions, 60 indices.
        match staged.unwrap() {
            StagedMesh::Indexed {
                positions,
                triangle_indices,
            } => {
                assert_eq!(positions.len(), 12);
                assert_eq!(triangle_indices.len(), 20);
            }
            StagedMesh::Flat { .. } => panic!("default shading should be Phong"),
        }
        assert_eq!(
            *params.shading(),
            Shading::Phong {
                position_count: 12,
                index_count: 60,
            }
        );
    }

    #[test]
    fn test_refresh_skips_when_nothing_changed() {
        let mut params = ViewerParams::new();
        params.refresh(|_| ());

        assert!(!params.refresh(|_| panic!("no parameter changed")));
    }

    #[test]
    fn test_level_change_triggers_regeneration() {
        let mut params = ViewerParams::new();
        params.refresh(|_| ());

        params.set_subdivision_level(1);
        assert!(params.refresh(|_| ()));
        assert_eq!(
            *params.shading(),
            Shading::Phong {
                position_count: 42,
                index_count: 240,
            }
        );
    }

    #[test]
    fn test_shading_change_triggers_regeneration() {
        let mut params = ViewerParams::new();
        params.refresh(|_| ());

        params.set_shading(Shading::flat());
        let mut staged = None;
        assert!(params.refresh(|s| staged = Some(s)));

        assert!(matches!(staged, Some(StagedMesh::Flat { .. })));
        assert_eq!(*params.shading(), Shading::Flat { vertex_count: 60 });
    }

    #[test]
    fn test_setting_equal_level_still_regenerates() {
        let mut params = ViewerParams::new();
        params.set_subdivision_level(2);
        params.refresh(|_| ());

        // Value replacement marks the property dirty even without a change.
        params.set_subdivision_level(2);
        assert!(params.refresh(|_| ()));
    }

    #[test]
    fn test_level_is_clamped() {
        let mut params = ViewerParams::new();

        params.set_subdivision_level(99);
        assert_eq!(params.subdivision_level(), MAX_SUBDIVISION_LEVEL);

        params.set_subdivision_level(-3);
        assert_eq!(params.subdivision_level(), 0);
    }

    #[test]
    fn test_refresh_records_generation_time() {
        let mut params = ViewerParams::new();
        params.set_subdivision_level(3);

        params.refresh(|_| ());
        assert!(params.generation_elapsed() > Duration::ZERO);
    }
}
