use std::fs;
use std::path::{Path, PathBuf};

use ndarray::{Array2, Array3, ArrayView2, Axis};

use super::EncodedRow;
use crate::error::Result;

/// Write encoded rows under `dir` as `.npy` files and return their paths.
///
/// Label rows are stacked into one `labels.npy` of shape `(rows, positions)`.
/// One-hot rows sharing a width are stacked into one `onehot.npy` of shape
/// `(rows, positions, symbols)`; otherwise each row goes to its own
/// `onehot_{i}.npy`.
pub fn write_npy(rows: &[EncodedRow], dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    if let Some(labels) = stack_labels(rows) {
        let path = dir.join("labels.npy");
        ndarray_npy::write_npy(&path, &labels)?;
        return Ok(vec![path]);
    }

    if let Some(matrices) = stack_one_hot(rows) {
        let path = dir.join("onehot.npy");
        ndarray_npy::write_npy(&path, &matrices)?;
        return Ok(vec![path]);
    }

    let mut paths = Vec::with_capacity(rows.len());
    for (i, row) in rows.iter().enumerate() {
        let path = match row {
            EncodedRow::Label(codes) => {
                let path = dir.join(format!("labels_{i}.npy"));
                ndarray_npy::write_npy(&path, codes)?;
                path
            }
            EncodedRow::OneHot(matrix) => {
                let path = dir.join(format!("onehot_{i}.npy"));
                ndarray_npy::write_npy(&path, matrix)?;
                path
            }
        };
        paths.push(path);
    }
    log::debug!("wrote {} per-row files to {}", paths.len(), dir.display());
    Ok(paths)
}

fn stack_labels(rows: &[EncodedRow]) -> Option<Array2<u32>> {
    let positions = rows.first()?.len();
    let mut stacked = Array2::<u32>::zeros((rows.len(), positions));
    for (mut target, row) in stacked.axis_iter_mut(Axis(0)).zip(rows) {
        target.assign(row.as_label().filter(|codes| codes.len() == positions)?);
    }
    Some(stacked)
}

fn stack_one_hot(rows: &[EncodedRow]) -> Option<Array3<f32>> {
    let dim = rows.first()?.as_one_hot()?.dim();
    let views = rows
        .iter()
        .map(|row| row.as_one_hot().filter(|m| m.dim() == dim).map(|m| m.view()))
        .collect::<Option<Vec<ArrayView2<f32>>>>()?;
    ndarray::stack(Axis(0), &views).ok()
}
