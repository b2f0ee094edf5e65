//! Replication × variant result matrices
//!
//! The loop fills two matrices row by row: point estimates and standard
//! errors, one column per estimator variant in the fixed order. A replication
//! is either fully valid or fully excluded, so invalidation poisons an entire
//! row with NaN and finalization drops poisoned rows from both matrices in
//! lockstep.

use ranksim_core::{Error, Result};

/// Dense row-major matrix of replication results.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultMatrix {
    n_variants: usize,
    data: Vec<f64>,
}

impl ResultMatrix {
    /// Create an empty matrix with `n_variants` columns
    pub fn new(n_variants: usize) -> Self {
        assert!(n_variants > 0, "Matrix must have at least one column");
        Self {
            n_variants,
            data: Vec::new(),
        }
    }

    /// Create an empty matrix with row capacity reserved up front
    pub fn with_capacity(n_variants: usize, n_rows: usize) -> Self {
        assert!(n_variants > 0, "Matrix must have at least one column");
        Self {
            n_variants,
            data: Vec::with_capacity(n_variants * n_rows),
        }
    }

    /// Number of columns (estimator variants)
    pub fn n_variants(&self) -> usize {
        self.n_variants
    }

    /// Number of rows (replications) currently stored
    pub fn n_rows(&self) -> usize {
        self.data.len() / self.n_variants
    }

    /// True when no rows are stored
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Append one replication row
    pub fn push_row(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.n_variants {
            return Err(Error::size_mismatch(
                self.n_variants,
                row.len(),
                "result matrix row",
            ));
        }
        self.data.extend_from_slice(row);
        Ok(())
    }

    /// Overwrite row `b` entirely with NaN sentinels.
    ///
    /// Partial invalidation is deliberately impossible: a degenerate
    /// replication must not contribute any of its entries to the aggregate.
    pub fn poison_row(&mut self, b: usize) {
        let start = b * self.n_variants;
        self.data[start..start + self.n_variants].fill(f64::NAN);
    }

    /// Borrow row `b`
    pub fn row(&self, b: usize) -> &[f64] {
        let start = b * self.n_variants;
        &self.data[start..start + self.n_variants]
    }

    /// Borrow column `k` as an owned vector
    pub fn column(&self, k: usize) -> Vec<f64> {
        assert!(k < self.n_variants, "Column index out of range");
        self.data
            .iter()
            .skip(k)
            .step_by(self.n_variants)
            .copied()
            .collect()
    }

    fn row_has_nan(&self, b: usize) -> bool {
        self.row(b).iter().any(|v| v.is_nan())
    }
}

/// Drop every row that contains a NaN in either matrix.
///
/// Rows are removed from both matrices in lockstep so that estimate row `b`
/// and standard-error row `b` always describe the same replication. Returns
/// the filtered matrices and the number of rows discarded.
pub fn drop_poisoned_rows(
    estimates: &ResultMatrix,
    std_errors: &ResultMatrix,
) -> Result<(ResultMatrix, ResultMatrix, usize)> {
    if estimates.n_variants != std_errors.n_variants || estimates.n_rows() != std_errors.n_rows() {
        return Err(Error::InvalidInput(
            "estimate and standard-error matrices must have identical shapes".to_string(),
        ));
    }

    let mut kept_est = ResultMatrix::new(estimates.n_variants);
    let mut kept_se = ResultMatrix::new(std_errors.n_variants);
    let mut discarded = 0;

    for b in 0..estimates.n_rows() {
        if estimates.row_has_nan(b) || std_errors.row_has_nan(b) {
            discarded += 1;
        } else {
            kept_est.push_row(estimates.row(b))?;
            kept_se.push_row(std_errors.row(b))?;
        }
    }

    Ok((kept_est, kept_se, discarded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_access() {
        let mut m = ResultMatrix::new(3);
        m.push_row(&[1.0, 2.0, 3.0]).unwrap();
        m.push_row(&[4.0, 5.0, 6.0]).unwrap();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2), vec![3.0, 6.0]);
    }

    #[test]
    fn test_push_wrong_width_fails() {
        let mut m = ResultMatrix::new(3);
        assert!(m.push_row(&[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_poison_row_is_total() {
        let mut m = ResultMatrix::new(4);
        m.push_row(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        m.poison_row(0);
        assert!(m.row(0).iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_drop_poisoned_rows_pairs() {
        let mut est = ResultMatrix::new(2);
        let mut se = ResultMatrix::new(2);
        est.push_row(&[1.0, 1.1]).unwrap();
        se.push_row(&[0.1, 0.2]).unwrap();
        est.push_row(&[2.0, 2.1]).unwrap();
        se.push_row(&[0.3, 0.4]).unwrap();
        est.push_row(&[3.0, 3.1]).unwrap();
        se.push_row(&[0.5, 0.6]).unwrap();

        // Poison the middle replication in the SE matrix only: the paired
        // estimate row must be dropped too.
        se.poison_row(1);

        let (kept_est, kept_se, discarded) = drop_poisoned_rows(&est, &se).unwrap();
        assert_eq!(discarded, 1);
        assert_eq!(kept_est.n_rows(), 2);
        assert_eq!(kept_se.n_rows(), 2);
        assert_eq!(kept_est.row(0), &[1.0, 1.1]);
        assert_eq!(kept_est.row(1), &[3.0, 3.1]);
        assert_eq!(kept_se.row(1), &[0.5, 0.6]);
    }

    #[test]
    fn test_drop_poisoned_rows_single_nan_drops_whole_row() {
        let mut est = ResultMatrix::new(3);
        let mut se = ResultMatrix::new(3);
        est.push_row(&[1.0, f64::NAN, 3.0]).unwrap();
        se.push_row(&[0.1, 0.2, 0.3]).unwrap();

        let (kept_est, kept_se, discarded) = drop_poisoned_rows(&est, &se).unwrap();
        assert_eq!(discarded, 1);
        assert!(kept_est.is_empty());
        assert!(kept_se.is_empty());
    }

    #[test]
    fn test_drop_poisoned_rows_shape_mismatch() {
        let est = ResultMatrix::new(2);
        let se = ResultMatrix::new(3);
        assert!(drop_poisoned_rows(&est, &se).is_err());
    }
}
