pub mod opening;
pub mod wall;

pub use opening::{OpeningDescriptor, OpeningId, OpeningKind};
pub use wall::{WallDescriptor, WallId};

use rayon::prelude::*;
use slotmap::SlotMap;

use crate::error::{ModelError, Result};
use crate::member::WallFraming;
use crate::operations::framing::{FrameWall, FramingConfig};

/// Arena owning the walls and openings of a building model snapshot.
///
/// Walls and openings reference each other only through typed IDs
/// (generational indices). Openings keep their insertion order so that
/// framing output is deterministic.
#[derive(Debug, Default)]
pub struct ModelStore {
    walls: SlotMap<WallId, WallDescriptor>,
    openings: SlotMap<OpeningId, OpeningDescriptor>,
    opening_order: Vec<OpeningId>,
}

impl ModelStore {
    /// Creates a new, empty model store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Wall operations ---

    /// Inserts a wall and returns its ID.
    pub fn add_wall(&mut self, wall: WallDescriptor) -> WallId {
        self.walls.insert(wall)
    }

    /// Returns a reference to the wall, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if the ID is stale.
    pub fn wall(&self, id: WallId) -> Result<&WallDescriptor> {
        self.walls
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("wall").into())
    }

    /// Iterates over all walls.
    pub fn walls(&self) -> impl Iterator<Item = (WallId, &WallDescriptor)> {
        self.walls.iter()
    }

    // --- Opening operations ---

    /// Inserts an opening hosted on `host` and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if `host` is not in the store.
    pub fn add_opening(&mut self, host: WallId, opening: OpeningDescriptor) -> Result<OpeningId> {
        if !self.walls.contains_key(host) {
            return Err(ModelError::EntityNotFound("wall").into());
        }
        let id = self.openings.insert(opening.hosted_on(host));
        self.opening_order.push(id);
        Ok(id)
    }

    /// Returns a reference to the opening, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if the ID is stale.
    pub fn opening(&self, id: OpeningId) -> Result<&OpeningDescriptor> {
        self.openings
            .get(id)
            .ok_or_else(|| ModelError::EntityNotFound("opening").into())
    }

    /// Removes an opening and returns it.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::EntityNotFound` if the ID is stale.
    pub fn remove_opening(&mut self, id: OpeningId) -> Result<OpeningDescriptor> {
        let opening = self
            .openings
            .remove(id)
            .ok_or(ModelError::EntityNotFound("opening"))?;
        self.opening_order.retain(|&other| other != id);
        Ok(opening)
    }

    /// Returns the openings hosted on `wall`, in insertion order.
    #[must_use]
    pub fn openings_hosted_on(&self, wall: WallId) -> Vec<OpeningDescriptor> {
        self.opening_order
            .iter()
            .filter_map(|&id| self.openings.get(id))
            .filter(|opening| opening.host_wall() == Some(wall))
            .cloned()
            .collect()
    }

    // --- Framing ---

    /// Frames one wall together with the openings it hosts.
    ///
    /// # Errors
    ///
    /// Returns an error if the wall is not found or framing fails.
    pub fn frame_wall(&self, id: WallId, config: &FramingConfig) -> Result<WallFraming> {
        let wall = self.wall(id)?;
        let openings = self.openings_hosted_on(id);
        FrameWall::new(wall, &openings, config).execute()
    }

    /// Frames every wall in parallel. Results are returned in wall
    /// iteration order; a failure on one wall does not affect the others.
    #[must_use]
    pub fn frame_all(&self, config: &FramingConfig) -> Vec<(WallId, Result<WallFraming>)> {
        let jobs: Vec<(WallId, &WallDescriptor, Vec<OpeningDescriptor>)> = self
            .walls
            .iter()
            .map(|(id, wall)| (id, wall, self.openings_hosted_on(id)))
            .collect();

        jobs.into_par_iter()
            .map(|(id, wall, openings)| (id, FrameWall::new(wall, &openings, config).execute()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Aabb;
    use crate::math::Point3;
    use crate::member::MemberKind;

    fn wall(x0: f64, x1: f64) -> WallDescriptor {
        WallDescriptor::new(
            Point3::new(x0, 0.0, 0.0),
            Point3::new(x1, 0.0, 0.0),
            1.0,
            8.0,
            0.0,
        )
        .unwrap()
    }

    fn window_at(x: f64) -> OpeningDescriptor {
        OpeningDescriptor::window(Aabb::from_corners(
            Point3::new(x - 1.0, -0.5, 3.0),
            Point3::new(x + 1.0, 0.5, 5.0),
        ))
    }

    #[test]
    fn openings_are_filtered_by_host_in_insertion_order() {
        let mut store = ModelStore::new();
        let a = store.add_wall(wall(0.0, 10.0));
        let b = store.add_wall(wall(20.0, 30.0));
        store.add_opening(a, window_at(7.0)).unwrap();
        store.add_opening(b, window_at(25.0)).unwrap();
        store
            .add_opening(a, OpeningDescriptor::unresolved(OpeningKind::Door))
            .unwrap();

        let hosted = store.openings_hosted_on(a);
        assert_eq!(hosted.len(), 2);
        assert_eq!(hosted[0].kind(), OpeningKind::Window);
        assert_eq!(hosted[1].kind(), OpeningKind::Door);
        assert!(hosted.iter().all(|o| o.host_wall() == Some(a)));
        assert_eq!(store.openings_hosted_on(b).len(), 1);
    }

    #[test]
    fn add_opening_requires_existing_host() {
        let mut other = ModelStore::new();
        let foreign = other.add_wall(wall(0.0, 4.0));
        let mut store = ModelStore::new();
        assert!(store.add_opening(foreign, window_at(2.0)).is_err());
    }

    #[test]
    fn remove_opening_drops_it_from_framing_order() {
        let mut store = ModelStore::new();
        let a = store.add_wall(wall(0.0, 10.0));
        let first = store.add_opening(a, window_at(3.0)).unwrap();
        store.add_opening(a, window_at(7.0)).unwrap();

        let removed = store.remove_opening(first).unwrap();
        assert_eq!(removed.kind(), OpeningKind::Window);
        assert!(store.opening(first).is_err());
        assert!(store.remove_opening(first).is_err());
        assert_eq!(store.openings_hosted_on(a).len(), 1);
    }

    #[test]
    fn frame_wall_uses_hosted_openings() {
        let mut store = ModelStore::new();
        let a = store.add_wall(wall(0.0, 10.0));
        store.add_opening(a, window_at(5.0)).unwrap();

        let framing = store.frame_wall(a, &FramingConfig::default()).unwrap();
        assert_eq!(framing.count(MemberKind::Sill), 1);
        assert_eq!(framing.count(MemberKind::Jack), 2);
    }

    #[test]
    fn frame_all_matches_sequential_framing() {
        let mut store = ModelStore::new();
        let a = store.add_wall(wall(0.0, 10.0));
        let b = store.add_wall(wall(20.0, 26.0));
        store.add_opening(b, window_at(23.0)).unwrap();
        let config = FramingConfig::default();

        let results = store.frame_all(&config);
        assert_eq!(results.len(), 2);
        for (id, result) in results {
            let parallel = result.unwrap();
            let sequential = store.frame_wall(id, &config).unwrap();
            assert_eq!(parallel.members(), sequential.members());
            assert!(id == a || id == b);
        }
    }
}
