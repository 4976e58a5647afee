//! Tests for run-length clue generation in binary and color mode

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use nonotiles::analysis::clues::{
        Clue, attach_clues, generate_clues, line_clues, line_runs,
    };
    use nonotiles::io::configuration::{Rgb, WHITE};
    use nonotiles::spatial::grid::LogicalGrid;
    use nonotiles::spatial::tiles::Tile;
    use pretty_assertions::assert_eq;

    fn binary(lengths: &[usize]) -> Vec<Clue> {
        lengths.iter().map(|&length| Clue::Binary(length)).collect()
    }

    fn color_grid(rows: &[[Rgb; 5]; 5]) -> LogicalGrid {
        let flat: Vec<Rgb> = rows.iter().flat_map(|row| row.iter().copied()).collect();
        LogicalGrid::Color(Array2::from_shape_vec((5, 5), flat).unwrap())
    }

    // Tests a single binary row groups consecutive filled cells
    // Verified by counting every filled cell as its own run
    #[test]
    fn test_binary_line_clues() {
        assert_eq!(line_clues([1u8, 1, 0, 0, 1]), binary(&[2, 1]));
        assert_eq!(line_clues([0u8, 1, 1, 1, 0]), binary(&[3]));
        assert_eq!(line_clues([1u8, 1, 1, 1, 1]), binary(&[5]));
    }

    // Tests that empty lines yield the sentinel instead of an empty sequence
    // Verified by returning the raw (empty) clue list
    #[test]
    fn test_empty_line_sentinels() {
        assert_eq!(line_clues([0u8; 5]), vec![Clue::Binary(0)]);
        assert_eq!(line_clues([WHITE; 3]), vec![Clue::Color(WHITE, 0)]);
        assert!(line_clues([0u8; 2]).iter().all(Clue::is_empty_sentinel));
    }

    // Tests color runs split whenever the color changes
    // Verified by merging adjacent non-white runs
    #[test]
    fn test_color_runs_split_on_change() {
        let a = [10, 20, 30];
        let b = [40, 50, 60];

        let clues = line_clues([a, a, b, WHITE, a]);

        assert_eq!(
            clues,
            vec![Clue::Color(a, 2), Clue::Color(b, 1), Clue::Color(a, 1)]
        );
    }

    // Tests background runs are dropped from raw runs
    // Verified by keeping background runs
    #[test]
    fn test_line_runs_skip_background() {
        assert_eq!(line_runs([0u8, 0, 1, 0, 1, 1]), vec![(1, 1), (1, 2)]);
        assert_eq!(line_runs(Vec::<u8>::new()), vec![]);
    }

    // Tests row and column clues of a known 5x5 binary grid
    // Verified by computing column clues from rows
    #[test]
    fn test_generate_binary_clues() {
        let grid = LogicalGrid::Binary(array![
            [1, 1, 0, 0, 1],
            [0, 1, 1, 1, 0],
            [1, 0, 0, 1, 0],
            [1, 1, 0, 0, 1],
            [1, 1, 1, 0, 0]
        ]);

        let (rows, cols) = generate_clues(&grid);

        let expected_rows = vec![
            binary(&[2, 1]),
            binary(&[3]),
            binary(&[1, 1]),
            binary(&[2, 1]),
            binary(&[3]),
        ];
        let expected_cols = vec![
            binary(&[1, 3]),
            binary(&[2, 2]),
            binary(&[1, 1]),
            binary(&[2]),
            binary(&[1, 1]),
        ];
        assert_eq!(rows, expected_rows);
        assert_eq!(cols, expected_cols);
    }

    // Tests row and column clues of a known 5x5 color grid
    // Verified by scanning columns bottom to top
    #[test]
    fn test_generate_color_clues() {
        let c1 = [44, 246, 210];
        let c2 = [92, 68, 3];
        let c3 = [144, 183, 213];
        let c4 = [89, 244, 106];
        let c5 = [13, 83, 254];
        let c6 = [33, 191, 247];
        let c7 = [100, 162, 76];
        let c8 = [72, 156, 201];
        let c9 = [181, 134, 207];
        let c10 = [68, 61, 156];
        let w = WHITE;
        let grid = color_grid(&[
            [c1, w, w, c2, w],
            [w, c3, c4, w, w],
            [w, w, w, c5, c6],
            [w, c7, w, c8, w],
            [c9, w, c10, w, w],
        ]);

        let (rows, cols) = generate_clues(&grid);

        let one = |color| Clue::Color(color, 1);
        assert_eq!(
            rows,
            vec![
                vec![one(c1), one(c2)],
                vec![one(c3), one(c4)],
                vec![one(c5), one(c6)],
                vec![one(c7), one(c8)],
                vec![one(c9), one(c10)],
            ]
        );
        assert_eq!(
            cols,
            vec![
                vec![one(c1), one(c9)],
                vec![one(c3), one(c7)],
                vec![one(c4), one(c10)],
                vec![one(c2), one(c5), one(c8)],
                vec![one(c6)],
            ]
        );
    }

    // Tests clue lengths never exceed the line length
    // Verified by counting background cells into runs
    #[test]
    fn test_clue_lengths_bounded_by_line() {
        let grid = LogicalGrid::Binary(Array2::from_shape_fn((7, 4), |(r, c)| {
            u8::from((r * 3 + c * 5) % 4 != 0)
        }));

        let (rows, cols) = generate_clues(&grid);

        assert_eq!(rows.len(), 7);
        assert_eq!(cols.len(), 4);
        for line in &rows {
            assert!(!line.is_empty());
            assert!(line.iter().map(Clue::length).sum::<usize>() <= 4);
        }
        for line in &cols {
            assert!(!line.is_empty());
            assert!(line.iter().map(Clue::length).sum::<usize>() <= 7);
        }
    }

    // Tests attaching clues to a tile fills both clue fields
    // Verified by only filling row clues
    #[test]
    fn test_attach_clues() {
        let mut tile = Tile::new((0, 0), LogicalGrid::Binary(array![[1, 0], [1, 1]]));

        attach_clues(&mut tile);

        assert_eq!(tile.row_clues, vec![binary(&[1]), binary(&[2])]);
        assert_eq!(tile.col_clues, vec![binary(&[2]), binary(&[1])]);
    }

    // Tests display and serialized forms of clues
    // Verified by tagging the serialized enum
    #[test]
    fn test_clue_display_and_json() {
        assert_eq!(Clue::Binary(3).to_string(), "3");
        assert_eq!(Clue::Color([1, 2, 3], 4).to_string(), "((1, 2, 3), 4)");
        assert_eq!(serde_json::to_string(&Clue::Binary(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&Clue::Color([1, 2, 3], 4)).unwrap(),
            "[[1,2,3],4]"
        );
        assert_eq!(Clue::Color(WHITE, 0).length(), 0);
    }
}
