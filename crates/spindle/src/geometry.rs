pub const FULL_TURN: f64 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Angle of `pointer` as seen from `center`, in degrees from the positive
/// x-axis. Same formula for mouse and touch input.
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    let (dx, dy) = (pointer.x - center.x, pointer.y - center.y);
    dy.atan2(dx).to_degrees()
}

/// Normalize an angle into [0, 360).
pub fn normalize_degrees(deg: f64) -> f64 {
    deg.rem_euclid(FULL_TURN)
}

/// Shortest unsigned angular distance between two angles, in [0, 180].
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs().rem_euclid(FULL_TURN);
    delta.min(FULL_TURN - delta)
}

/// Cartesian offset of the item at `index` from the dial center.
///
/// Each item sits at `index * 360 / item_count` degrees plus the current
/// rotation, at a fixed orbital `radius`. Must not be called with
/// `item_count == 0`; callers guard before doing any angle math.
pub fn item_offset(index: usize, item_count: usize, rotation: f64, radius: f64) -> Point {
    debug_assert!(item_count > 0);
    let angle = (index as f64 * FULL_TURN / item_count as f64 + rotation).to_radians();
    Point::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn pointer_angle_covers_all_quadrants() {
        let center = Point::new(100.0, 100.0);
        assert_close(pointer_angle(Point::new(150.0, 100.0), center), 0.0);
        assert_close(pointer_angle(Point::new(100.0, 150.0), center), 90.0);
        assert_close(pointer_angle(Point::new(50.0, 100.0), center), 180.0);
        assert_close(pointer_angle(Point::new(100.0, 50.0), center), -90.0);
    }

    #[test]
    fn normalize_wraps_negative_angles() {
        assert_close(normalize_degrees(-47.0), 313.0);
        assert_close(normalize_degrees(725.0), 5.0);
        assert_close(normalize_degrees(360.0), 0.0);
        assert_close(normalize_degrees(0.0), 0.0);
    }

    #[test]
    fn angle_difference_takes_shortest_path() {
        assert_close(angle_difference(350.0, 10.0), 20.0);
        assert_close(angle_difference(10.0, 350.0), 20.0);
        assert_close(angle_difference(90.0, 270.0), 180.0);
        assert_close(angle_difference(45.0, 45.0), 0.0);
    }

    #[test]
    fn item_offset_places_first_item_on_x_axis() {
        let p = item_offset(0, 8, 0.0, 120.0);
        assert_close(p.x, 120.0);
        assert_close(p.y, 0.0);
    }

    #[test]
    fn item_offset_applies_rotation() {
        // item 2 of 8 sits at 90 degrees; +90 rotation moves it to 180
        let p = item_offset(2, 8, 90.0, 100.0);
        assert_close(p.x, -100.0);
        assert_close(p.y, 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        assert_close(Point::new(0.0, 0.0).distance_to(Point::new(3.0, 4.0)), 5.0);
    }
}
