//! Linear rating prediction
//!
//! Ordinary least squares over (user-position, movie-position) -> rating
//! pairs harvested from the strictly positive cells of the ratings matrix.

use crate::matrix::RatingsMatrix;
use cinerec_core::{RecError, Result};
use ndarray::{Array1, Array2};
use tracing::debug;

/// Minimum observed cells required to fit the model.
pub const MIN_TRAINING_CELLS: usize = 2;
/// Tikhonov jitter added to the normal-equations diagonal so rank-deficient
/// training sets still factorize.
const RIDGE_EPS: f64 = 1e-6;

/// Least-squares rating predictor with two positional features.
///
/// The training set is every matrix cell holding a strictly positive
/// rating; a zero cell counts as unrated even when it was an explicit zero
/// rating, a conflation inherited from the dense matrix encoding.
/// Predictions are unclamped: positions outside the observed range
/// extrapolate linearly and may fall below 0 or above 5.
#[derive(Debug, Clone)]
pub struct RatingPredictor {
    /// [intercept, user coefficient, movie coefficient]
    coefficients: [f64; 3],
}

impl RatingPredictor {
    /// Fit on every strictly positive cell of `matrix`.
    pub fn fit(matrix: &RatingsMatrix) -> Result<Self> {
        let mut observations = Vec::new();
        for ((row, col), &value) in matrix.values().indexed_iter() {
            if value > 0.0 {
                observations.push(([1.0, row as f64, col as f64], value));
            }
        }
        if observations.len() < MIN_TRAINING_CELLS {
            return Err(RecError::InsufficientData {
                needed: MIN_TRAINING_CELLS,
                found: observations.len(),
            });
        }

        // Normal equations: (X^T X) beta = X^T y.
        let mut xtx = Array2::<f64>::zeros((3, 3));
        let mut xty = Array1::<f64>::zeros(3);
        for (x, y) in &observations {
            for i in 0..3 {
                for j in 0..3 {
                    xtx[[i, j]] += x[i] * x[j];
                }
                xty[i] += x[i] * y;
            }
        }
        for i in 0..3 {
            xtx[[i, i]] += RIDGE_EPS;
        }

        let beta = solve_cholesky(&xtx, &xty)?;
        debug!("fitted rating predictor on {} cells", observations.len());
        Ok(Self {
            coefficients: [beta[0], beta[1], beta[2]],
        })
    }

    /// Predict a rating for the given matrix positions.
    ///
    /// Positions need not lie inside the fitted matrix; the linear model
    /// extrapolates freely.
    pub fn predict(&self, user_pos: usize, movie_pos: usize) -> f64 {
        let [intercept, user_coef, movie_coef] = self.coefficients;
        intercept + user_coef * user_pos as f64 + movie_coef * movie_pos as f64
    }

    /// Fitted [intercept, user, movie] coefficients.
    pub fn coefficients(&self) -> [f64; 3] {
        self.coefficients
    }
}

/// Solve A x = b for symmetric positive definite A via Cholesky
/// factorization with forward/backward substitution.
fn solve_cholesky(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = a.nrows();

    // A = L * L^T
    let mut l = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[[i, k]] * l[[j, k]];
            }
            if i == j {
                let diag = a[[i, i]] - sum;
                if diag <= 0.0 {
                    return Err(RecError::degenerate(
                        "normal equations are not positive definite",
                    ));
                }
                l[[i, j]] = diag.sqrt();
            } else {
                l[[i, j]] = (a[[i, j]] - sum) / l[[j, j]];
            }
        }
    }

    // Forward substitution: L * y = b
    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let mut sum = 0.0;
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    // Backward substitution: L^T * x = y
    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let mut sum = 0.0;
        for j in (i + 1)..n {
            sum += l[[j, i]] * x[j];
        }
        x[i] = (y[i] - sum) / l[[i, i]];
    }

    Ok(x)
}
