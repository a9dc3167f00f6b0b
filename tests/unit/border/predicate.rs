//! Tests for per-cell border predicates

#[cfg(test)]
mod tests {
    use filetgrid::border::{BorderPattern, border_mask, is_edge_cell};
    use filetgrid::grid::{GridDimensions, Side};

    fn dims(width: usize, height: usize) -> GridDimensions {
        let Ok(dims) = GridDimensions::new(width, height) else {
            unreachable!("{width} x {height} is a valid chart size");
        };
        dims
    }

    fn count(width: usize, height: usize, pattern: BorderPattern, side: Side) -> usize {
        border_mask(dims(width, height), pattern, side).count_filled()
    }

    // Tests that no border fills nothing
    // Verified by returning true for None
    #[test]
    fn test_none_is_empty() {
        assert_eq!(count(20, 20, BorderPattern::None, Side::Front), 0);
    }

    // Tests the single outer ring
    // Verified by using depth <= 1
    #[test]
    fn test_border_1_ring() {
        assert_eq!(count(10, 8, BorderPattern::Border1, Side::Front), 32);
        assert!(is_edge_cell(0, 4, 10, 8, BorderPattern::Border1, Side::Front));
        assert!(is_edge_cell(9, 7, 10, 8, BorderPattern::Border1, Side::Front));
        assert!(!is_edge_cell(1, 1, 10, 8, BorderPattern::Border1, Side::Front));
    }

    // Tests the double outer ring
    // Verified by using depth < 3
    #[test]
    fn test_border_2_ring() {
        assert_eq!(count(10, 8, BorderPattern::Border2, Side::Front), 80 - 6 * 4);
        assert!(is_edge_cell(1, 1, 10, 8, BorderPattern::Border2, Side::Front));
        assert!(!is_edge_cell(2, 2, 10, 8, BorderPattern::Border2, Side::Front));
    }

    // Tests the outer ring plus the ring two cells in
    // Verified by filling depth 1 instead of depth 2
    #[test]
    fn test_stepped_border() {
        assert_eq!(count(10, 8, BorderPattern::SteppedBorder, Side::Front), 32 + 16);
        assert!(!is_edge_cell(1, 1, 10, 8, BorderPattern::SteppedBorder, Side::Front));
        assert!(is_edge_cell(2, 2, 10, 8, BorderPattern::SteppedBorder, Side::Front));
        assert!(!is_edge_cell(3, 3, 10, 8, BorderPattern::SteppedBorder, Side::Front));
    }

    // Tests corner wedges of Manhattan reach five
    // Verified by measuring Chebyshev distance
    #[test]
    fn test_corner_triangles() {
        assert_eq!(count(20, 20, BorderPattern::CornerTriangles, Side::Front), 4 * 15);
        assert!(is_edge_cell(4, 0, 20, 20, BorderPattern::CornerTriangles, Side::Front));
        assert!(!is_edge_cell(5, 0, 20, 20, BorderPattern::CornerTriangles, Side::Front));
        assert!(is_edge_cell(17, 18, 20, 20, BorderPattern::CornerTriangles, Side::Front));
        assert!(!is_edge_cell(10, 0, 20, 20, BorderPattern::CornerTriangles, Side::Front));
    }

    // Tests the two-row checkerboard parity
    // Verified by filling odd cells
    #[test]
    fn test_checkerboard_2row() {
        assert!(is_edge_cell(0, 0, 12, 12, BorderPattern::Checkerboard2Row, Side::Front));
        assert!(!is_edge_cell(1, 0, 12, 12, BorderPattern::Checkerboard2Row, Side::Front));
        assert!(is_edge_cell(1, 1, 12, 12, BorderPattern::Checkerboard2Row, Side::Front));
        assert!(!is_edge_cell(2, 2, 12, 12, BorderPattern::Checkerboard2Row, Side::Front));
    }

    // Tests that odd widths invert the checkerboard on the back inside the band
    // Verified by ignoring the side argument
    #[test]
    fn test_checkerboard_edges_odd_width_inverts_on_back() {
        let (width, height) = (11, 9);
        for row in 0..height {
            for col in 0..width {
                let front = is_edge_cell(col, row, width, height, BorderPattern::CheckerboardEdges, Side::Front);
                let back = is_edge_cell(col, row, width, height, BorderPattern::CheckerboardEdges, Side::Back);
                let depth = col.min(width - 1 - col).min(row.min(height - 1 - row));
                if depth < 3 {
                    assert_eq!(front, !back, "cell ({row}, {col})");
                } else {
                    assert!(!front && !back, "cell ({row}, {col}) outside the band");
                }
            }
        }
    }

    // Tests that even widths keep the same parity on both sides
    // Verified by inverting for every width
    #[test]
    fn test_checkerboard_edges_even_width_matches() {
        let dims = dims(10, 10);
        assert_eq!(
            border_mask(dims, BorderPattern::CheckerboardEdges, Side::Front),
            border_mask(dims, BorderPattern::CheckerboardEdges, Side::Back)
        );
    }

    // Tests that out-of-grid cells are never border
    // Verified by removing the bounds guard
    #[test]
    fn test_out_of_grid_is_not_border() {
        for pattern in BorderPattern::ALL {
            assert!(!is_edge_cell(10, 0, 10, 8, pattern, Side::Front));
            assert!(!is_edge_cell(0, 8, 10, 8, pattern, Side::Back));
        }
    }

    // Tests that only checkerboard-edges depends on the side
    // Verified by inverting parity for checkerboard-2row on the back
    #[test]
    fn test_side_only_matters_for_checkerboard_edges() {
        let dims = dims(13, 11);
        for pattern in BorderPattern::ALL {
            if pattern == BorderPattern::CheckerboardEdges {
                continue;
            }
            assert_eq!(
                border_mask(dims, pattern, Side::Front),
                border_mask(dims, pattern, Side::Back),
                "{pattern}"
            );
        }
    }
}
