//! Tests for manual per-cell overrides

#[cfg(test)]
mod tests {
    use filetgrid::grid::{CellKey, Side};
    use filetgrid::overlay::{FillColor, ManualFills};

    // Tests which colors fill a cell
    // Verified by treating white as filled
    #[test]
    fn test_fill_color_semantics() {
        assert!(!FillColor::White.is_filled());
        assert!(FillColor::Red.is_filled());
        assert!(FillColor::Green.is_filled());
        assert!(FillColor::Blue.is_filled());
        assert_eq!(FillColor::White.rgb(), [255, 255, 255]);
    }

    // Tests color names in text and JSON
    // Verified by using capitalized names
    #[test]
    fn test_fill_color_names() {
        for color in [FillColor::White, FillColor::Red, FillColor::Green, FillColor::Blue] {
            let name = color.to_string();
            assert_eq!(name.parse::<FillColor>().ok(), Some(color));
            assert_eq!(
                serde_json::to_string(&color).unwrap_or_default(),
                format!("\"{name}\"")
            );
        }
        assert!("purple".parse::<FillColor>().is_err());
    }

    // Tests that set is idempotent and per side
    // Verified by writing both sides in set
    #[test]
    fn test_set_is_idempotent_and_side_scoped() {
        let mut fills = ManualFills::new();
        fills.set(2, 3, Side::Front, FillColor::White);
        fills.set(2, 3, Side::Front, FillColor::White);

        assert_eq!(fills.get(2, 3, Side::Front), Some(FillColor::White));
        assert_eq!(fills.get(2, 3, Side::Back), None);
        assert_eq!(fills.len(Side::Front), 1);
        assert_eq!(fills.len(Side::Back), 0);
    }

    // Tests brush toggling
    // Verified by always setting in paint
    #[test]
    fn test_paint_toggles_same_color() {
        let mut fills = ManualFills::new();
        assert_eq!(fills.paint(1, 1, Side::Back, FillColor::Red), Some(FillColor::Red));
        assert_eq!(fills.paint(1, 1, Side::Back, FillColor::Blue), Some(FillColor::Blue));
        assert_eq!(fills.paint(1, 1, Side::Back, FillColor::Blue), None);
        assert_eq!(fills.get(1, 1, Side::Back), None);
    }

    // Tests override states for filled, erased and untouched cells
    // Verified by returning None for white overrides
    #[test]
    fn test_override_for() {
        let mut fills = ManualFills::new();
        fills.set(0, 0, Side::Front, FillColor::Green);
        fills.erase(0, 1, Side::Front);

        assert_eq!(fills.override_for(0, 0, Side::Front), Some(true));
        assert_eq!(fills.override_for(0, 1, Side::Front), Some(false));
        assert_eq!(fills.override_for(0, 2, Side::Front), None);
    }

    // Tests clearing single cells, one side and everything
    // Verified by clearing both sides in clear_side
    #[test]
    fn test_clearing() {
        let mut fills = ManualFills::default();
        fills.set(0, 0, Side::Front, FillColor::Red);
        fills.set(4, 4, Side::Back, FillColor::Blue);

        assert_eq!(fills.clear(0, 0, Side::Front), Some(FillColor::Red));
        assert_eq!(fills.clear(0, 0, Side::Front), None);

        fills.set(5, 5, Side::Front, FillColor::Red);
        fills.clear_side(Side::Front);
        assert_eq!(fills.len(Side::Front), 0);
        assert_eq!(fills.len(Side::Back), 1);
        assert!(!fills.is_empty());

        fills.clear_all();
        assert!(fills.is_empty());
    }

    // Tests that entries are keyed canonically
    // Verified by keying on (col, row)
    #[test]
    fn test_side_map_uses_cell_keys() {
        let mut fills = ManualFills::new();
        fills.set(7, 2, Side::Front, FillColor::Red);
        let keys: Vec<String> = fills.side(Side::Front).keys().map(CellKey::to_string).collect();
        assert_eq!(keys, vec!["7,2".to_string()]);
    }
}
