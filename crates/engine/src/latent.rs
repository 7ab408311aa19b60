//! Latent factor recommendation
//!
//! Truncated singular-style decomposition of the ratings matrix via power
//! iteration with deflation on the Gram matrix, reconstructing per-user
//! score rows from the rank-k factors. Cost is O(sweeps * k * movies^2)
//! for the fit plus O(users * movies * k) for reconstruction.

use crate::matrix::RatingsMatrix;
use cinerec_core::{RecError, Result};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Default decomposition rank.
pub const DEFAULT_RANK: usize = 2;
/// Maximum power-iteration sweeps per component.
const MAX_SWEEPS: usize = 200;
/// Convergence threshold on the eigenvector update.
const CONVERGENCE_EPS: f64 = 1e-12;

/// Rank-k truncated decomposition of a ratings matrix.
///
/// `transformed` holds the per-user latent vectors (users x k) and
/// `components` the per-movie loadings (k x movies); the product of a user
/// row with `components` reconstructs that user's score row. The movie
/// lookup is copied from the fitted matrix so recommendations translate
/// back to real identifiers without recomputing any ordering.
#[derive(Debug)]
pub struct TruncatedSvd {
    transformed: Array2<f64>,
    components: Array2<f64>,
    movie_ids: Vec<i64>,
}

impl TruncatedSvd {
    /// Decompose `matrix` keeping the top `rank` components.
    ///
    /// `rank` must satisfy `1 <= rank <= min(rows, cols) - 1`; anything
    /// else fails with `InvalidRank` rather than being clamped.
    pub fn fit(matrix: &RatingsMatrix, rank: usize, seed: u64) -> Result<Self> {
        let rows = matrix.n_users();
        let cols = matrix.n_movies();
        if matrix.is_empty() {
            return Err(RecError::degenerate(
                "cannot decompose an empty ratings matrix",
            ));
        }
        let max_rank = rows.min(cols).saturating_sub(1);
        if rank == 0 || rank > max_rank {
            return Err(RecError::InvalidRank { rank, rows, cols });
        }

        let values = matrix.values();
        // The top eigenvectors of the Gram matrix M^T M are the right
        // singular vectors of M.
        let mut gram = values.t().dot(values);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut components = Array2::<f64>::zeros((rank, cols));

        for component in 0..rank {
            let (vector, eigenvalue) = dominant_eigenvector(&gram, &mut rng);
            debug!(
                "component {}: captured eigenvalue {:.6}",
                component, eigenvalue
            );

            // Deflate so the next sweep converges on the following component.
            if eigenvalue > 0.0 {
                for i in 0..cols {
                    for j in 0..cols {
                        gram[[i, j]] -= eigenvalue * vector[i] * vector[j];
                    }
                }
            }
            components.row_mut(component).assign(&vector);
        }

        let transformed = values.dot(&components.t());
        Ok(Self {
            transformed,
            components,
            movie_ids: matrix.movie_ids().to_vec(),
        })
    }

    /// Number of retained components.
    pub fn rank(&self) -> usize {
        self.components.nrows()
    }

    /// Latent vector of the user at `user_row`.
    pub fn user_factors(&self, user_row: usize) -> Result<Vec<f64>> {
        if user_row >= self.transformed.nrows() {
            return Err(RecError::not_found("user row", user_row as i64));
        }
        Ok(self.transformed.row(user_row).to_vec())
    }

    /// Reconstructed score row for the user at `user_row`.
    pub fn scores(&self, user_row: usize) -> Result<Vec<f64>> {
        if user_row >= self.transformed.nrows() {
            return Err(RecError::not_found("user row", user_row as i64));
        }
        Ok(self.transformed.row(user_row).dot(&self.components).to_vec())
    }

    /// Top-`n` movie identifiers for the user at `user_row`.
    ///
    /// Columns are ranked by descending reconstructed score with ties
    /// broken by ascending column position. Already-rated movies are not
    /// excluded from the ranking; callers see the raw reconstructed
    /// ordering.
    pub fn recommend(&self, user_row: usize, n: usize) -> Result<Vec<i64>> {
        let scores = self.scores(user_row)?;

        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(n);

        Ok(ranked
            .into_iter()
            .map(|(col, _)| self.movie_ids[col])
            .collect())
    }
}

/// Dominant eigenvector and eigenvalue of a symmetric matrix by power
/// iteration from a seeded random start.
fn dominant_eigenvector(gram: &Array2<f64>, rng: &mut StdRng) -> (Array1<f64>, f64) {
    let n = gram.nrows();
    let mut vector: Array1<f64> = Array1::from_shape_fn(n, |_| rng.gen_range(-1.0..1.0));
    let norm = vector.dot(&vector).sqrt();
    if norm > 0.0 {
        vector = vector / norm;
    }

    let mut eigenvalue = 0.0;
    for _ in 0..MAX_SWEEPS {
        let next = gram.dot(&vector);
        let norm = next.dot(&next).sqrt();
        if norm <= f64::EPSILON {
            // The remaining spectrum is numerically zero.
            return (Array1::zeros(n), 0.0);
        }
        let next = next / norm;
        let delta = (&next - &vector).mapv(f64::abs).sum();
        vector = next;
        eigenvalue = vector.dot(&gram.dot(&vector));
        if delta < CONVERGENCE_EPS {
            break;
        }
    }
    (vector, eigenvalue)
}
