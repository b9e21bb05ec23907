use std::collections::HashMap;

use tracing::debug;

use crate::math::distance_2d::distance;
use crate::math::{Point2, Vector2};
use crate::plan::Wall;

/// One wall endpoint participating in a junction.
#[derive(Debug, Clone, PartialEq)]
pub struct JunctionMember {
    /// Index of the wall in the slice the table was built from.
    pub wall: usize,
    /// Whether the wall's start (rather than end) sits at the junction.
    pub is_start: bool,
    /// Unit direction pointing away from the junction along the wall.
    /// Zero for a zero-length wall.
    pub outward: Vector2,
}

/// A cluster of two or more wall endpoints treated as one meeting point.
#[derive(Debug, Clone, PartialEq)]
pub struct Junction {
    /// Mean of the clustered endpoint coordinates.
    pub point: Point2,
    pub members: Vec<JunctionMember>,
}

impl Junction {
    /// The first member that belongs to a wall other than `wall`.
    #[must_use]
    pub fn partner_of(&self, wall: usize) -> Option<&JunctionMember> {
        self.members.iter().find(|m| m.wall != wall)
    }

    #[must_use]
    pub fn member(&self, wall: usize, is_start: bool) -> Option<&JunctionMember> {
        self.members
            .iter()
            .find(|m| m.wall == wall && m.is_start == is_start)
    }
}

/// All junctions of a wall list plus an endpoint index for O(1) lookup.
#[derive(Debug, Clone, Default)]
pub struct JunctionTable {
    junctions: Vec<Junction>,
    by_endpoint: HashMap<(usize, bool), usize>,
}

impl JunctionTable {
    #[must_use]
    pub fn junctions(&self) -> &[Junction] {
        &self.junctions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.junctions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.junctions.is_empty()
    }

    /// The junction at the given endpoint of wall `wall`, if any.
    #[must_use]
    pub fn at(&self, wall: usize, is_start: bool) -> Option<&Junction> {
        self.by_endpoint
            .get(&(wall, is_start))
            .map(|&idx| &self.junctions[idx])
    }

    /// Every junction touching wall `wall`.
    pub fn touching(&self, wall: usize) -> impl Iterator<Item = &Junction> {
        [true, false]
            .into_iter()
            .filter_map(move |is_start| self.at(wall, is_start))
    }
}

/// Clusters wall endpoints into junctions.
///
/// Clustering is greedy and single-seed: the first unclustered endpoint seeds
/// a cluster, and every later unclustered endpoint within `tolerance` of the
/// seed itself is absorbed. Clusters with fewer than two members are dropped.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn detect_junctions(walls: &[Wall], tolerance: f64) -> JunctionTable {
    let endpoints: Vec<(usize, bool, Point2)> = walls
        .iter()
        .enumerate()
        .flat_map(|(i, w)| [(i, true, w.start), (i, false, w.end)])
        .collect();

    let mut clustered = vec![false; endpoints.len()];
    let mut table = JunctionTable::default();

    for seed in 0..endpoints.len() {
        if clustered[seed] {
            continue;
        }
        clustered[seed] = true;
        let seed_point = endpoints[seed].2;
        let mut cluster = vec![seed];

        for other in (seed + 1)..endpoints.len() {
            if !clustered[other] && distance(&seed_point, &endpoints[other].2) <= tolerance {
                clustered[other] = true;
                cluster.push(other);
            }
        }

        if cluster.len() < 2 {
            continue;
        }

        let sum = cluster
            .iter()
            .fold(Vector2::zeros(), |acc, &k| acc + endpoints[k].2.coords);
        let point = Point2::from(sum / cluster.len() as f64);

        let members: Vec<JunctionMember> = cluster
            .iter()
            .map(|&k| {
                let (wall, is_start, _) = endpoints[k];
                let dir = walls[wall].direction().unwrap_or_else(Vector2::zeros);
                JunctionMember {
                    wall,
                    is_start,
                    outward: if is_start { dir } else { -dir },
                }
            })
            .collect();

        let idx = table.junctions.len();
        for m in &members {
            table.by_endpoint.insert((m.wall, m.is_start), idx);
        }
        table.junctions.push(Junction { point, members });
    }

    debug!(
        walls = walls.len(),
        junctions = table.junctions.len(),
        tolerance,
        "detected wall junctions"
    );

    table
}
