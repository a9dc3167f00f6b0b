//! Tests for side identifiers and canonical cell keys

#[cfg(test)]
mod tests {
    use filetgrid::grid::{CellKey, Side};

    // Tests that opposite swaps sides and is an involution
    // Verified by returning the same side from opposite
    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Front.opposite(), Side::Back);
        assert_eq!(Side::Back.opposite(), Side::Front);
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    // Tests side text form in both directions
    // Verified by swapping the display strings
    #[test]
    fn test_side_display_and_parse() {
        assert_eq!(Side::Front.to_string(), "front");
        assert_eq!(Side::Back.to_string(), "back");
        assert_eq!("front".parse::<Side>().ok(), Some(Side::Front));
        assert_eq!("back".parse::<Side>().ok(), Some(Side::Back));
        assert!("sideways".parse::<Side>().is_err());
    }

    // Tests that cell keys always print as "row,col"
    // Verified by printing the hyphenated form
    #[test]
    fn test_cell_key_display_is_comma_separated() {
        assert_eq!(CellKey::new(3, 17).to_string(), "3,17");
        assert_eq!(CellKey::new(0, 0).to_string(), "0,0");
    }

    // Tests that both key spellings resolve to the same cell
    // Verified by removing the hyphen fallback
    #[test]
    fn test_cell_key_accepts_both_separators() {
        let comma: CellKey = "12,4".parse().unwrap_or(CellKey::new(0, 0));
        let hyphen: CellKey = "12-4".parse().unwrap_or(CellKey::new(0, 0));

        assert_eq!(comma, CellKey::new(12, 4));
        assert_eq!(hyphen, comma);
    }

    // Tests that whitespace around the numbers is tolerated
    // Verified by removing the trim calls
    #[test]
    fn test_cell_key_trims_whitespace() {
        let key: Result<CellKey, _> = " 5 , 9 ".parse();
        assert_eq!(key.ok(), Some(CellKey::new(5, 9)));
    }

    // Tests rejection of malformed keys
    // Verified by defaulting unparsable parts to zero
    #[test]
    fn test_cell_key_rejects_malformed_input() {
        for text in ["", "12", "a,b", "1,", ",1", "-1,2", "1;2"] {
            assert!(text.parse::<CellKey>().is_err(), "{text:?} should not parse");
        }
    }

    // Tests that keys order row-major
    // Verified by swapping field order in the struct
    #[test]
    fn test_cell_key_ordering_is_row_major() {
        let mut keys = vec![CellKey::new(1, 0), CellKey::new(0, 5), CellKey::new(0, 2)];
        keys.sort();
        assert_eq!(
            keys,
            vec![CellKey::new(0, 2), CellKey::new(0, 5), CellKey::new(1, 0)]
        );
    }
}
