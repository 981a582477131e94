// Navigation and Fuel Planning Module
// Ranks waypoints by straight-line distance against a ship's fuel budget

use std::fmt;
use tracing::debug;

use crate::models::*;

/// Euclidean distance between two grid points. Not rounded.
pub fn distance(from: Coordinates, to: Coordinates) -> f64 {
    let dx = f64::from(to.x) - f64::from(from.x);
    let dy = f64::from(to.y) - f64::from(from.y);
    (dx * dx + dy * dy).sqrt()
}

/// Rounds half away from zero. This value decides both reachability and order.
pub fn rounded_distance(distance: f64) -> i64 {
    distance.round() as i64
}

#[derive(Debug, Clone, Copy)]
pub struct RankedWaypoint<'a, W> {
    pub waypoint: &'a W,
    pub distance: f64,
    pub rounded: i64,
}

/// Shows the rounded distance, which is the value ranking uses, next to the true one.
impl<W: Positioned> fmt::Display for RankedWaypoint<'_, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.waypoint.coordinates();
        write!(
            f,
            "{:<14} ({},{})  {} ({:.2})",
            self.waypoint.symbol(),
            at.x,
            at.y,
            self.rounded,
            self.distance
        )
    }
}

#[derive(Debug, Clone)]
pub struct Reachability<'a, W> {
    pub reachable: Vec<RankedWaypoint<'a, W>>,
    pub unreachable: Vec<RankedWaypoint<'a, W>>,
}

impl<W> Reachability<'_, W> {
    pub fn len(&self) -> usize {
        self.reachable.len() + self.unreachable.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `waypoints` by whether the ship could cover the straight-line hop
/// from its route destination on its current fuel, nearest first.
///
/// The route destination is used rather than a live position, so a ship in
/// transit is ranked from where it is going. Fuel is treated as a plain range
/// budget: one unit per unit of rounded distance.
pub fn rank_reachable_waypoints<'a, W: Positioned>(
    ship: &Ship,
    waypoints: &'a [W],
) -> Reachability<'a, W> {
    let origin = ship.nav.route.destination.coordinates();
    let ranking = rank_from(origin, ship.fuel.current, waypoints);
    debug!(
        ship = %ship.symbol,
        fuel = ship.fuel.current,
        reachable = ranking.reachable.len(),
        unreachable = ranking.unreachable.len(),
        "Ranked waypoints"
    );
    ranking
}

/// Partitions on `rounded <= fuel`, so a hop of 5.4 on 5 fuel is reachable
/// while 5.5 is not.
pub fn rank_from<'a, W: Positioned>(
    origin: Coordinates,
    fuel: u32,
    waypoints: &'a [W],
) -> Reachability<'a, W> {
    let budget = i64::from(fuel);

    let (mut reachable, mut unreachable): (Vec<_>, Vec<_>) = waypoints
        .iter()
        .map(|waypoint| {
            let distance = distance(origin, waypoint.coordinates());
            RankedWaypoint {
                waypoint,
                distance,
                rounded: rounded_distance(distance),
            }
        })
        .partition(|ranked| ranked.rounded <= budget);

    // Stable: ties keep input order.
    reachable.sort_by_key(|ranked| ranked.rounded);
    unreachable.sort_by_key(|ranked| ranked.rounded);

    Reachability {
        reachable,
        unreachable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker {
        symbol: &'static str,
        at: Coordinates,
    }

    impl Positioned for Marker {
        fn symbol(&self) -> &str {
            self.symbol
        }

        fn coordinates(&self) -> Coordinates {
            self.at
        }
    }

    fn marker(symbol: &'static str, x: i32, y: i32) -> Marker {
        Marker {
            symbol,
            at: Coordinates::new(x, y),
        }
    }

    fn symbols<W: Positioned>(ranked: &[RankedWaypoint<'_, W>]) -> Vec<String> {
        ranked.iter().map(|r| r.waypoint.symbol().to_string()).collect()
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let points = [
            Coordinates::new(0, 0),
            Coordinates::new(3, 4),
            Coordinates::new(-17, 42),
            Coordinates::new(i32::MAX, i32::MIN),
        ];
        for a in points {
            assert_eq!(distance(a, a), 0.0);
            for b in points {
                assert_eq!(distance(a, b), distance(b, a));
            }
        }
    }

    #[test]
    fn distance_is_unrounded() {
        assert_eq!(distance(Coordinates::new(0, 0), Coordinates::new(3, 4)), 5.0);
        let diagonal = distance(Coordinates::new(0, 0), Coordinates::new(1, 1));
        assert!((diagonal - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn rounding_goes_half_away_from_zero() {
        assert_eq!(rounded_distance(2.5), 3);
        assert_eq!(rounded_distance(2.49), 2);
        assert_eq!(rounded_distance(0.0), 0);
    }

    #[test]
    fn partitions_by_rounded_distance_inclusive() {
        let waypoints = [
            marker("A", 10, 13),
            marker("B", 10, 20),
            marker("C", 7, 10),
        ];
        let ranking = rank_from(Coordinates::new(10, 10), 5, &waypoints);

        let mut reachable = symbols(&ranking.reachable);
        reachable.sort();
        assert_eq!(reachable, vec!["A", "C"]);
        assert_eq!(symbols(&ranking.unreachable), vec!["B"]);
        assert_eq!(ranking.unreachable[0].rounded, 10);
    }

    #[test]
    fn fuel_equal_to_distance_is_reachable() {
        let waypoints = [marker("EDGE", 3, 4)];
        let ranking = rank_from(Coordinates::new(0, 0), 5, &waypoints);
        assert_eq!(symbols(&ranking.reachable), vec!["EDGE"]);
        assert!(ranking.unreachable.is_empty());
    }

    #[test]
    fn distance_rounding_down_into_budget_is_reachable() {
        // sqrt(29) ~ 5.39 rounds to 5
        let waypoints = [marker("NEAR", 2, 5)];
        let ranking = rank_from(Coordinates::new(0, 0), 5, &waypoints);
        assert_eq!(ranking.reachable.len(), 1);
        assert!(ranking.reachable[0].distance > 5.0);
    }

    #[test]
    fn rounding_up_past_budget_is_unreachable() {
        // sqrt(29) ~ 5.39 rounds to 5, sqrt(32) ~ 5.66 rounds to 6
        let waypoints = [marker("IN", 2, 5), marker("OUT", 4, 4)];
        let ranking = rank_from(Coordinates::new(0, 0), 5, &waypoints);
        assert_eq!(symbols(&ranking.reachable), vec!["IN"]);
        assert_eq!(symbols(&ranking.unreachable), vec!["OUT"]);
        assert_eq!(ranking.unreachable[0].rounded, 6);
    }

    #[test]
    fn display_shows_rounded_and_true_distance() {
        let waypoints = [marker("NEAR", 2, 5)];
        let ranking = rank_from(Coordinates::new(0, 0), 5, &waypoints);
        let line = ranking.reachable[0].to_string();
        assert!(line.starts_with("NEAR"));
        assert!(line.contains("(2,5)"));
        assert!(line.ends_with("5 (5.39)"), "got {line:?}");
    }

    #[test]
    fn zero_fuel_only_reaches_the_origin() {
        let waypoints = [marker("HERE", 1, 1), marker("THERE", 0, 1), marker("SAME", 0, 0)];
        let ranking = rank_from(Coordinates::new(0, 0), 0, &waypoints);
        assert_eq!(symbols(&ranking.reachable), vec!["SAME"]);
        assert_eq!(ranking.unreachable.len(), 2);
    }

    #[test]
    fn both_classes_sorted_and_partition_input() {
        let waypoints = [
            marker("W1", 40, 0),
            marker("W2", 3, 0),
            marker("W3", -25, 0),
            marker("W4", 0, 8),
            marker("W5", 11, 11),
            marker("W6", 0, 0),
            marker("W7", -2, -2),
        ];
        let fuel = 10;
        let ranking = rank_from(Coordinates::new(0, 0), fuel, &waypoints);

        assert_eq!(ranking.len(), waypoints.len());
        let mut seen: Vec<String> = symbols(&ranking.reachable);
        seen.extend(symbols(&ranking.unreachable));
        seen.sort();
        let mut expected: Vec<String> = waypoints.iter().map(|w| w.symbol.to_string()).collect();
        expected.sort();
        assert_eq!(seen, expected);

        assert!(ranking.reachable.iter().all(|r| r.rounded <= i64::from(fuel)));
        assert!(ranking.unreachable.iter().all(|r| r.rounded > i64::from(fuel)));
        assert!(ranking.reachable.windows(2).all(|w| w[0].rounded <= w[1].rounded));
        assert!(ranking.unreachable.windows(2).all(|w| w[0].rounded <= w[1].rounded));
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        let waypoints: [Marker; 0] = [];
        let ranking = rank_from(Coordinates::new(5, 5), 100, &waypoints);
        assert!(ranking.is_empty());
    }
}
