/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_four_five() {
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
    }

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(dist(12.5, -7.25, 12.5, -7.25), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let a = dist(1.0, 2.0, -40.0, 17.5);
        let b = dist(-40.0, 17.5, 1.0, 2.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_axis_aligned() {
        assert_eq!(dist(10.0, 0.0, 10.0, 250.0), 250.0);
        assert_eq!(dist(-3.0, 8.0, 5.0, 8.0), 8.0);
    }
}
