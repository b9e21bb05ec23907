use crate::math::distance_2d::distance;
use crate::plan::Wall;

/// Splits walls into connected groups.
///
/// Two walls are connected when any pair of their endpoints lies within
/// `tolerance`; groups are closed under that relation. Each group lists wall
/// indices in ascending order; groups are ordered by their lowest index.
#[must_use]
pub fn connected_components(walls: &[Wall], tolerance: f64) -> Vec<Vec<usize>> {
    let n = walls.len();
    let mut assigned = vec![false; n];
    let mut components = Vec::new();

    for seed in 0..n {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut stack = vec![seed];
        let mut component = Vec::new();

        while let Some(i) = stack.pop() {
            component.push(i);
            for j in 0..n {
                if !assigned[j] && touches(&walls[i], &walls[j], tolerance) {
                    assigned[j] = true;
                    stack.push(j);
                }
            }
        }

        component.sort_unstable();
        components.push(component);
    }

    components
}

fn touches(a: &Wall, b: &Wall, tolerance: f64) -> bool {
    [a.start, a.end]
        .iter()
        .any(|p| [b.start, b.end].iter().any(|q| distance(p, q) <= tolerance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point2;

    fn wall(id: &str, a: (f64, f64), b: (f64, f64)) -> Wall {
        Wall::new(id, Point2::new(a.0, a.1), Point2::new(b.0, b.1), 10.0, 240.0)
    }

    #[test]
    fn chain_is_one_component() {
        // c touches b only, so a reaches c transitively.
        let walls = vec![
            wall("a", (0.0, 0.0), (10.0, 0.0)),
            wall("c", (20.0, 10.0), (20.0, 20.0)),
            wall("b", (10.0, 0.0), (20.0, 10.0)),
        ];
        assert_eq!(connected_components(&walls, 1.0), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn separate_groups() {
        let walls = vec![
            wall("a", (0.0, 0.0), (10.0, 0.0)),
            wall("far", (100.0, 100.0), (110.0, 100.0)),
            wall("b", (10.0, 0.0), (10.0, 10.0)),
        ];
        assert_eq!(connected_components(&walls, 1.0), vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn empty_input() {
        assert!(connected_components(&[], 1.0).is_empty());
    }
}
