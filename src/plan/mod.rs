pub mod wall;

pub use wall::{Edge, Polygon, Wall, WallCorners};

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{PlanError, Result};
use crate::operations::corners::{miter_corners_with, miter_wall};
use crate::operations::junction::{detect_junctions, Junction, JunctionTable};
use crate::operations::{FloorPolygon, JoinParams, WallUnion};

slotmap::new_key_type! {
    /// Unique identifier for a wall in a [`WallPlan`].
    pub struct WallKey;
}

/// Arena owning a floor plan's walls, indexed by external id.
///
/// Every derived geometry query recomputes from the current walls; nothing
/// is cached between calls.
#[derive(Debug, Default)]
pub struct WallPlan {
    walls: SlotMap<WallKey, Wall>,
    order: Vec<WallKey>,
    by_id: HashMap<String, WallKey>,
    params: JoinParams,
}

impl WallPlan {
    /// Creates a new, empty plan with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty plan using `params` for every query.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the parameters are invalid.
    pub fn with_params(params: JoinParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn params(&self) -> &JoinParams {
        &self.params
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Inserts a wall and returns its key.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicateId` if a wall with the same id exists.
    pub fn insert(&mut self, wall: Wall) -> Result<WallKey> {
        if self.by_id.contains_key(&wall.id) {
            return Err(PlanError::DuplicateId(wall.id).into());
        }
        let id = wall.id.clone();
        let key = self.walls.insert(wall);
        self.order.push(key);
        self.by_id.insert(id, key);
        Ok(key)
    }

    /// Removes the wall with the given id and returns it.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if no such wall exists.
    pub fn remove(&mut self, id: &str) -> Result<Wall> {
        let key = self.key_of(id)?;
        self.by_id.remove(id);
        self.order.retain(|&k| k != key);
        self.walls
            .remove(key)
            .ok_or_else(|| PlanError::EntityNotFound(format!("wall {id}")).into())
    }

    #[must_use]
    pub fn get(&self, key: WallKey) -> Option<&Wall> {
        self.walls.get(key)
    }

    /// Returns the key for an external wall id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if no such wall exists.
    pub fn key_of(&self, id: &str) -> Result<WallKey> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| PlanError::EntityNotFound(format!("wall {id}")).into())
    }

    /// Returns the wall with the given external id.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if no such wall exists.
    pub fn wall(&self, id: &str) -> Result<&Wall> {
        let key = self.key_of(id)?;
        self.walls
            .get(key)
            .ok_or_else(|| PlanError::EntityNotFound(format!("wall {id}")).into())
    }

    /// Snapshot of all walls in insertion order.
    #[must_use]
    pub fn walls(&self) -> Vec<Wall> {
        self.order
            .iter()
            .filter_map(|&k| self.walls.get(k).cloned())
            .collect()
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        let key = self.key_of(id)?;
        self.order
            .iter()
            .position(|&k| k == key)
            .ok_or_else(|| PlanError::EntityNotFound(format!("wall {id}")).into())
    }

    /// Junctions of the current walls. Member indices follow [`Self::walls`].
    #[must_use]
    pub fn junctions(&self) -> JunctionTable {
        detect_junctions(&self.walls(), self.params.junction_tolerance)
    }

    /// Junctions the given wall takes part in.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if no such wall exists.
    pub fn junctions_of(&self, id: &str) -> Result<Vec<Junction>> {
        let index = self.index_of(id)?;
        Ok(self.junctions().touching(index).cloned().collect())
    }

    /// Mitered corners of the given wall.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::EntityNotFound` if no such wall exists.
    pub fn corners_of(&self, id: &str) -> Result<WallCorners> {
        let index = self.index_of(id)?;
        let walls = self.walls();
        let table = detect_junctions(&walls, self.params.junction_tolerance);
        Ok(miter_wall(&walls, index, &table, self.params.miter_limit))
    }

    /// Mitered corners of every wall, in insertion order.
    #[must_use]
    pub fn all_corners(&self) -> Vec<WallCorners> {
        let walls = self.walls();
        let table = detect_junctions(&walls, self.params.junction_tolerance);
        miter_corners_with(&walls, &table, &self.params)
    }

    /// Interior floor polygon, or `None` when the walls cannot enclose one.
    #[must_use]
    pub fn floor_polygon(&self) -> Option<Polygon> {
        let walls = self.walls();
        FloorPolygon::new(&walls).with_params(self.params).execute()
    }

    /// One merged outline per connected wall group.
    #[must_use]
    pub fn outlines(&self) -> Vec<Polygon> {
        let walls = self.walls();
        WallUnion::new(&walls).with_params(self.params).execute()
    }

    /// Merged outlines with collinear vertices removed.
    #[must_use]
    pub fn simplified_outlines(&self) -> Vec<Polygon> {
        self.outlines()
            .iter()
            .map(|p| p.simplified(self.params.simplify_tolerance))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::WallplanError;
    use crate::math::Point2;

    fn wall(id: &str, a: (f64, f64), b: (f64, f64)) -> Wall {
        Wall::new(id, Point2::new(a.0, a.1), Point2::new(b.0, b.1), 20.0, 240.0)
    }

    fn l_plan() -> WallPlan {
        let mut plan = WallPlan::new();
        plan.insert(wall("a", (0.0, 0.0), (100.0, 0.0))).unwrap();
        plan.insert(wall("b", (100.0, 0.0), (100.0, 100.0))).unwrap();
        plan
    }

    #[test]
    fn lookup_by_id() {
        let plan = l_plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.wall("b").unwrap().end, Point2::new(100.0, 100.0));
        let key = plan.key_of("a").unwrap();
        assert_eq!(plan.get(key).unwrap().id, "a");
    }

    #[test]
    fn missing_wall_is_a_typed_error() {
        let plan = l_plan();
        let err = plan.corners_of("ghost").unwrap_err();
        assert!(matches!(err, WallplanError::Plan(PlanError::EntityNotFound(_))), "{err}");
        assert!(plan.junctions_of("ghost").is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut plan = l_plan();
        let err = plan.insert(wall("a", (5.0, 5.0), (6.0, 6.0))).unwrap_err();
        assert!(matches!(err, WallplanError::Plan(PlanError::DuplicateId(_))), "{err}");
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut plan = l_plan();
        plan.insert(wall("c", (100.0, 100.0), (0.0, 100.0))).unwrap();
        let removed = plan.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        let ids: Vec<String> = plan.walls().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["a".to_owned(), "c".to_owned()]);
        assert!(plan.wall("b").is_err());
        assert!(plan.remove("b").is_err());
    }

    #[test]
    fn corners_of_matches_full_resolution() {
        let plan = l_plan();
        let all = plan.all_corners();
        assert_eq!(plan.corners_of("b").unwrap(), all[1]);
        assert_eq!(plan.junctions_of("a").unwrap().len(), 1);
    }

    #[test]
    fn outlines_recompute_after_edits() {
        let mut plan = l_plan();
        assert_eq!(plan.outlines().len(), 1);
        assert!(plan.floor_polygon().is_none());
        plan.insert(wall("far", (500.0, 500.0), (600.0, 500.0))).unwrap();
        assert_eq!(plan.outlines().len(), 2);
    }

    #[test]
    fn simplified_outline_drops_collinear_seam_points() {
        let mut plan = WallPlan::new();
        plan.insert(wall("a", (0.0, 0.0), (100.0, 0.0))).unwrap();
        plan.insert(wall("b", (100.0, 0.0), (200.0, 0.0))).unwrap();
        assert_eq!(plan.outlines()[0].len(), 6);
        assert_eq!(plan.simplified_outlines()[0].len(), 4);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = JoinParams::default().with_miter_limit(-1.0);
        assert!(WallPlan::with_params(params).is_err());
    }
}
