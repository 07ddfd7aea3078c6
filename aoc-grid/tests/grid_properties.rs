//! Property-based tests for the dense matrix and its transpose

use aoc_grid::{Dense, Matrix, MatrixError, MatrixMut};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (1usize..8, 1usize..8)
}

fn matrix() -> impl Strategy<Value = Dense<i32>> {
    dims().prop_flat_map(|(r, c)| {
        prop::collection::vec(any::<i32>(), r * c)
            .prop_map(move |data| Dense::from_vec(r, c, data).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Property 1: Transposing twice gives back the original matrix**
    #[test]
    fn prop_double_transpose_identity(m in matrix()) {
        let back = m.t().t();
        prop_assert!(std::ptr::eq(back, &m));

        let generic = aoc_grid::Transpose::new(m.t());
        let (rows, cols) = m.dims();
        prop_assert_eq!(generic.dims(), (rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                prop_assert_eq!(generic.at(i, j), m.at(i, j));
            }
        }
    }

    /// **Property 2: A zeroed matrix holds the default value everywhere**
    #[test]
    fn prop_zeroed_is_default((rows, cols) in dims()) {
        let m: Dense<u64> = Dense::zeroed(rows, cols).unwrap();
        prop_assert_eq!(m.dims(), (rows, cols));
        prop_assert_eq!(m.data().len(), rows * m.stride());
        prop_assert!(m.data().iter().all(|&v| v == 0));
    }

    /// **Property 3: Backing data of the wrong length is rejected**
    #[test]
    fn prop_wrong_length_rejected((rows, cols) in dims(), extra in 1usize..4) {
        let data = vec![0u8; rows * cols + extra];
        prop_assert_eq!(
            Dense::from_vec(rows, cols, data),
            Err(MatrixError::Shape { expected: rows * cols, actual: rows * cols + extra })
        );
    }

    /// **Property 4: Writes through the transpose land in the matrix**
    #[test]
    fn prop_write_through_transpose(mut m in matrix(), value in any::<i32>()) {
        let (rows, cols) = m.dims();
        let (i, j) = (rows - 1, cols - 1);
        m.t_mut().set(j, i, value);
        prop_assert_eq!(m[(i, j)], value);
    }

    /// **Property 5: Column views agree with element access**
    #[test]
    fn prop_col_view_matches_at(m in matrix()) {
        let (rows, cols) = m.dims();
        for j in 0..cols {
            let col = m.col_view(j);
            prop_assert_eq!(col.len(), rows);
            for i in 0..rows {
                prop_assert_eq!(col.at(i), m.at(i, j));
            }
        }
    }

    /// **Property 6: Building row by row preserves every row**
    #[test]
    fn prop_append_rows_round_trip(m in matrix()) {
        let mut built = Dense::new();
        for row in m.row_iter() {
            built.append_row(row).unwrap();
        }
        prop_assert_eq!(built, m);
    }
}
