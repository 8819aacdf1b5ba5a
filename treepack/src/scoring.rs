/// Quality of a packing: squared side of the enclosing square divided by the number of shapes in it.
/// Lower is better. `None` when no shapes were placed, callers display it as `0`.
pub fn score(bbox_size: f64, n_shapes: usize) -> Option<f64> {
    match n_shapes {
        0 => None,
        n => Some(bbox_size * bbox_size / n as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(10.0, 1, Some(100.0); "single shape")]
    #[test_case(30.0, 4, Some(225.0); "four shapes")]
    #[test_case(0.0, 0, None; "nothing placed")]
    fn score_values(bbox_size: f64, n: usize, expected: Option<f64>) {
        assert_eq!(score(bbox_size, n), expected);
    }

    #[test]
    fn more_shapes_in_same_box_score_lower() {
        assert!(score(50.0, 10).unwrap() < score(50.0, 9).unwrap());
    }
}
