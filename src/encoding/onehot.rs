use ndarray::Array2;

/// Expand label codes into a `(codes.len(), width)` one-hot matrix.
///
/// Codes at or past `width` leave their row all zero.
pub fn one_hot(codes: &[u32], width: usize) -> Array2<f32> {
    let mut matrix = Array2::<f32>::zeros((codes.len(), width));
    for (position, &code) in codes.iter().enumerate() {
        if let Some(cell) = matrix.get_mut((position, code as usize)) {
            *cell = 1.0;
        }
    }
    matrix
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    pub fn check_one_hot() {
        let expected: Array2<f32> = array![[1.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 1.0]];
        assert_eq!(expected, one_hot(&[0, 0, 1, 1], 2));
    }

    #[test]
    pub fn check_rows_sum_to_one() {
        let matrix = one_hot(&[3, 1, 0, 2, 2], 4);
        assert_eq!((5, 4), matrix.dim());
        assert!(matrix.rows().into_iter().all(|row| row.sum() == 1.0));
    }

    #[test]
    pub fn check_out_of_range_code() {
        let matrix = one_hot(&[0, 5], 2);
        assert_eq!(0.0, matrix.row(1).sum());
    }
}
