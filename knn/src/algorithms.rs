// BSD 3-Clause License
//
// Copyright (c) 2025, BlackPortal ○
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use log::debug;
use ndarray::{Array1, Array2, ArrayView1, AsArray, Axis};
use num_traits::Float;

use crate::dataset::TrainingSet;
use crate::distance::euclidean_distances;
use crate::errors::{ArgumentError, ModelError};
use crate::selection::k_smallest;
use crate::vote::majority_vote;

/// One of the `k` training points selected for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<F> {
    /// Position of the point in the training set.
    pub index: usize,
    /// Euclidean distance from the query.
    pub distance: F,
    pub label: i64,
}

/// A k-nearest-neighbors classifier.
///
/// The classifier owns an immutable [`TrainingSet`] and answers queries by majority vote
/// over the labels of the `k` training points closest to the query in Euclidean distance.
///
/// Both ties are resolved deterministically:
/// - points equidistant at the `k`-th boundary are selected by lowest training index;
/// - labels tied for the highest count resolve to the smallest label.
///
/// No state changes after construction, so a `KNN` can be shared across threads and
/// queried concurrently.
///
/// # Generics
/// - `F`: The feature scalar, must implement `num_traits::Float`.
#[derive(Debug, Clone)]
pub struct KNN<F = f64> {
    training_set: TrainingSet<F>,
    k: usize,
}

impl<F: Float> KNN<F> {
    /// Creates a classifier from labeled data points.
    ///
    /// # Arguments
    /// - `k`: The number of neighbors consulted per query, `1 <= k <= N`.
    /// - `data_points`: `(features, label)` pairs sharing one feature dimension.
    ///
    /// # Returns
    /// The classifier, or `ModelError::InvalidArgument` when the data is empty, the
    /// dimensions disagree, or `k` is out of range.
    ///
    /// # Example
    /// ```
    /// use knnml::algorithms::KNN;
    ///
    /// let knn: KNN = KNN::new(1, [([0.0, 0.0], 0), ([10.0, 10.0], 1), ([10.0, 11.0], 1)]).unwrap();
    /// assert_eq!(knn.predict(&[0.0, 1.0]).unwrap(), 0);
    /// assert_eq!(knn.predict(&[10.0, 10.5]).unwrap(), 1);
    /// ```
    pub fn new<I, P>(k: usize, data_points: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (P, i64)>,
        P: AsRef<[F]>,
    {
        let training_set = TrainingSet::from_points(data_points)?;
        Self::with_training_set(k, training_set)
    }

    /// Creates a classifier from a feature matrix with one sample per row and the
    /// matching label vector.
    pub fn from_arrays(k: usize, x: Array2<F>, y: Array1<i64>) -> Result<Self, ModelError> {
        let training_set = TrainingSet::from_arrays(x, y)?;
        Self::with_training_set(k, training_set)
    }

    fn with_training_set(k: usize, training_set: TrainingSet<F>) -> Result<Self, ModelError> {
        let n_samples = training_set.n_samples();
        if k == 0 || k > n_samples {
            return Err(ArgumentError::InvalidK { k, n_samples }.into());
        }

        debug!(
            "Built KNN with k={}, n_samples={}, n_features={}",
            k,
            n_samples,
            training_set.n_features()
        );
        Ok(KNN { training_set, k })
    }

    /// Predicts the label of a single point.
    ///
    /// # Arguments
    /// - `point`: The query, as a slice, `Vec`, `Array1` or `ArrayView1` of length `D`.
    ///
    /// # Returns
    /// The majority label among the `k` nearest training points, or
    /// `ArgumentError::DimensionMismatch` when the query length differs from `D`.
    pub fn predict<'a, V>(&self, point: V) -> Result<i64, ModelError>
    where
        V: AsArray<'a, F>,
        F: 'a,
    {
        let neighbors = self.kneighbors(point)?;
        majority_vote(neighbors.iter().map(|neighbor| neighbor.label))
            .ok_or(ModelError::InvalidArgument(ArgumentError::EmptySelection))
    }

    /// Returns the `k` training points nearest to `point`, closest first.
    ///
    /// Points at equal distance are ordered by their training index.
    pub fn kneighbors<'a, V>(&self, point: V) -> Result<Vec<Neighbor<F>>, ModelError>
    where
        V: AsArray<'a, F>,
        F: 'a,
    {
        let point: ArrayView1<'a, F> = point.into();
        self.training_set.check_dimension(point.len())?;

        let distances = euclidean_distances(self.training_set.features(), point);
        let labels = self.training_set.labels();

        let neighbors = k_smallest(distances.view(), self.k)
            .into_iter()
            .map(|index| Neighbor { index, distance: distances[index], label: labels[index] })
            .collect();
        Ok(neighbors)
    }

    /// Predicts a label for every row of `x`.
    ///
    /// # Arguments
    /// - `x`: A 2D array of queries, one per row, with `D` columns.
    ///
    /// # Returns
    /// A 1D array of predicted labels in row order.
    pub fn predict_batch(&self, x: &Array2<F>) -> Result<Array1<i64>, ModelError> {
        self.training_set.check_dimension(x.ncols())?;
        debug!("Predicting {} samples with k={}", x.nrows(), self.k);

        let predictions = x
            .axis_iter(Axis(0))
            .map(|row| self.predict(row))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Array1::from_vec(predictions))
    }

    /// Fraction of `predictions` equal to the corresponding `actuals`.
    pub fn calculate_accuracy(
        &self,
        predictions: &Array1<i64>,
        actuals: &Array1<i64>,
    ) -> Result<f64, ModelError> {
        if predictions.is_empty() || actuals.is_empty() {
            return Err(ArgumentError::EmptyInput.into());
        }
        if predictions.len() != actuals.len() {
            return Err(ArgumentError::LengthMismatch {
                features: predictions.len(),
                labels: actuals.len(),
            }
            .into());
        }

        let correct = predictions
            .iter()
            .zip(actuals.iter())
            .filter(|(&pred, &true_label)| pred == true_label)
            .count();
        Ok(correct as f64 / predictions.len() as f64)
    }
}

impl<F> KNN<F> {
    pub fn k(&self) -> usize {
        self.k
    }

    pub fn n_samples(&self) -> usize {
        self.training_set.n_samples()
    }

    pub fn n_features(&self) -> usize {
        self.training_set.n_features()
    }

    pub fn training_set(&self) -> &TrainingSet<F> {
        &self.training_set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn two_clusters() -> KNN {
        KNN::new(1, vec![(vec![0.0, 0.0], 0), (vec![10.0, 10.0], 1), (vec![10.0, 11.0], 1)])
            .unwrap()
    }

    #[test]
    fn knn_predict_nearest_cluster() {
        let knn = two_clusters();
        assert_eq!(knn.predict(&[0.0, 1.0]).unwrap(), 0);
        assert_eq!(knn.predict(&[10.0, 10.5]).unwrap(), 1);
    }

    #[test]
    fn knn_predict_accepts_array_views() {
        let knn = two_clusters();
        let owned = array![9.0, 9.0];
        assert_eq!(knn.predict(&owned).unwrap(), 1);
        assert_eq!(knn.predict(owned.view()).unwrap(), 1);
        assert_eq!(knn.predict(&vec![1.0, -1.0]).unwrap(), 0);
    }

    #[test]
    fn knn_invalid_k() {
        let points = vec![(vec![1.0, 2.0], 1), (vec![2.0, 3.0], 2)];
        let result = KNN::<f64>::new(5, points.clone());
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::InvalidK { k: 5, n_samples: 2 }))
        ));

        let result = KNN::<f64>::new(0, points);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::InvalidK { k: 0, n_samples: 2 }))
        ));
    }

    #[test]
    fn knn_empty_input() {
        let points: Vec<(Vec<f64>, i64)> = Vec::new();
        let result = KNN::new(1, points);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::EmptyTrainingSet))
        ));
    }

    #[test]
    fn knn_inconsistent_dimensions() {
        let result = KNN::<f64>::new(1, vec![(vec![1.0, 2.0], 0), (vec![1.0], 1)]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::InconsistentDimensions {
                index: 1,
                expected: 2,
                actual: 1
            }))
        ));
    }

    #[test]
    fn knn_predict_dimension_mismatch() {
        let knn = two_clusters();
        let result = knn.predict(&[1.0, 2.0, 3.0]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::DimensionMismatch {
                expected: 2,
                actual: 3
            }))
        ));
        assert_eq!(knn.predict(&[0.0, 1.0]).unwrap(), 0);
    }

    #[test]
    fn knn_kneighbors_ordered_by_distance_then_index() {
        let knn = KNN::<f64>::new(3, vec![
            (vec![2.0], 7),
            (vec![-1.0], 8),
            (vec![1.0], 9),
            (vec![0.5], 10),
        ])
        .unwrap();

        let neighbors = knn.kneighbors(&[0.0]).unwrap();
        let indices: Vec<usize> = neighbors.iter().map(|n| n.index).collect();
        assert_eq!(indices, vec![3, 1, 2]);
        assert_eq!(neighbors[0], Neighbor { index: 3, distance: 0.5, label: 10 });
        assert_eq!(neighbors[1].distance, 1.0);
        assert_eq!(neighbors[2].label, 9);
    }

    #[test]
    fn knn_boundary_tie_prefers_lowest_index() {
        // Indices 1 and 2 are both at distance 1, only one fits into k = 2.
        let knn = KNN::<f64>::new(2, vec![(vec![0.0], 3), (vec![1.0], 4), (vec![-1.0], 3)]).unwrap();
        let neighbors = knn.kneighbors(&[0.0]).unwrap();
        assert_eq!(neighbors.iter().map(|n| n.index).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(knn.predict(&[0.0]).unwrap(), 3);
    }

    #[test]
    fn knn_from_arrays() {
        let x = array![[1.0, 2.0], [2.0, 3.0], [3.0, 4.0], [8.0, 9.0]];
        let y = array![0, 0, 1, 1];
        let knn = KNN::from_arrays(3, x, y).unwrap();
        assert_eq!(knn.k(), 3);
        assert_eq!(knn.n_samples(), 4);
        assert_eq!(knn.n_features(), 2);
        assert_eq!(knn.predict(&[2.5, 3.5]).unwrap(), 0);
    }

    #[test]
    fn knn_from_arrays_length_mismatch() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let y = array![1, 2, 3];
        let result = KNN::from_arrays(1, x, y);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::LengthMismatch {
                features: 2,
                labels: 3
            }))
        ));
    }

    #[test]
    fn knn_predict_batch() {
        let knn = two_clusters();
        let x = array![[0.0, 1.0], [10.0, 10.5], [11.0, 12.0]];
        let predictions = knn.predict_batch(&x).unwrap();
        assert_eq!(predictions, array![0i64, 1, 1]);

        let empty: Array2<f64> = Array2::zeros((0, 2));
        assert!(knn.predict_batch(&empty).unwrap().is_empty());
    }

    #[test]
    fn knn_predict_batch_dimension_mismatch() {
        let knn = two_clusters();
        let x = array![[1.0, 2.0, 3.0]];
        let result = knn.predict_batch(&x);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::DimensionMismatch {
                expected: 2,
                actual: 3
            }))
        ));
    }

    #[test]
    fn knn_calculate_accuracy() {
        let knn = two_clusters();
        let accuracy = knn.calculate_accuracy(&array![0, 1, 1, 0], &array![0, 1, 0, 0]).unwrap();
        assert!((accuracy - 0.75).abs() < 1e-12);

        let result = knn.calculate_accuracy(&array![0, 1], &array![0]);
        assert!(matches!(
            result,
            Err(ModelError::InvalidArgument(ArgumentError::LengthMismatch {
                features: 2,
                labels: 1
            }))
        ));

        let result = knn.calculate_accuracy(&Array1::zeros(0), &Array1::zeros(0));
        assert!(matches!(result, Err(ModelError::InvalidArgument(ArgumentError::EmptyInput))));
    }

    #[test]
    fn knn_nan_query_does_not_panic() {
        let knn = KNN::<f64>::new(2, vec![(vec![0.0], 1), (vec![1.0], 2), (vec![2.0], 2)]).unwrap();
        // Every distance is NaN, so selection falls back to index order.
        assert_eq!(knn.predict(&[f64::NAN]).unwrap(), 1);
    }

    #[test]
    fn knn_f32_features() {
        let knn: KNN<f32> = KNN::new(1, [([0.0f32, 0.0], -3), ([5.0, 5.0], 3)]).unwrap();
        assert_eq!(knn.predict(&[4.0f32, 4.5]).unwrap(), 3);
    }

    #[test]
    fn knn_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KNN<f64>>();
        assert_send_sync::<KNN<f32>>();
    }
}
