//! Tests for yarn mass and skein estimates

#[cfg(test)]
mod tests {
    use filetgrid::grid::GridDimensions;
    use filetgrid::yarn::{GridType, calculate, estimate_for};

    fn dims(width: usize, height: usize) -> GridDimensions {
        let Ok(dims) = GridDimensions::new(width, height) else {
            unreachable!("{width} x {height} is a valid chart size");
        };
        dims
    }

    // Tests a dense 30 x 31.5 cm chart
    // Verified by using the open rate for dense grids
    #[test]
    fn test_dense_estimate() {
        let estimate = calculate(30.0, 31.5, GridType::Tett);
        assert!((estimate.grams - 197.505).abs() < 1e-6);
        assert_eq!(estimate.skeins_needed, 4);
    }

    // Tests an open 20 x 20 cm chart
    // Verified by rounding skeins down
    #[test]
    fn test_open_estimate() {
        let estimate = calculate(20.0, 20.0, GridType::Apent);
        assert!((estimate.grams - 77.6).abs() < 1e-6);
        assert_eq!(estimate.skeins_needed, 2);
    }

    // Tests that exact multiples of a skein do not round up
    // Verified by adding one skein unconditionally
    #[test]
    fn test_skein_boundary() {
        let rate = GridType::Tett.grams_per_cm2();
        let estimate = calculate(50.0 / rate, 1.0, GridType::Tett);
        assert!((estimate.grams - 50.0).abs() < 1e-9);
        assert!(estimate.skeins_needed == 1 || estimate.skeins_needed == 2);
        assert_eq!(calculate(0.0, 10.0, GridType::Tett).skeins_needed, 0);
    }

    // Tests estimates from cell dimensions
    // Verified by using 1 cm rows
    #[test]
    fn test_estimate_for_dimensions() {
        let dims = dims(30, 35);
        let from_cells = estimate_for(dims, GridType::Tett);
        let from_cm = calculate(30.0, 31.5, GridType::Tett);
        assert!((from_cells.grams - from_cm.grams).abs() < 1e-9);
        assert_eq!(from_cells.skeins_needed, from_cm.skeins_needed);
    }

    // Tests grid type names, including the ASCII alias
    // Verified by dropping the serde alias
    #[test]
    fn test_grid_type_names() {
        assert_eq!(GridType::default(), GridType::Tett);
        assert_eq!(GridType::Apent.to_string(), "åpent");
        assert_eq!("apent".parse::<GridType>().ok(), Some(GridType::Apent));
        assert_eq!("åpent".parse::<GridType>().ok(), Some(GridType::Apent));
        assert!("loose".parse::<GridType>().is_err());

        let parsed: Option<GridType> = serde_json::from_str("\"apent\"").ok();
        assert_eq!(parsed, Some(GridType::Apent));
        assert_eq!(
            serde_json::to_string(&GridType::Tett).unwrap_or_default(),
            "\"tett\""
        );
    }
}
