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

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use num_traits::Float;

use crate::errors::{ArgumentError, ModelError};

/// An immutable, ordered collection of labeled feature vectors.
///
/// Features are stored row-wise as an `N x D` matrix and labels as a vector of length `N`,
/// both in the order the points were supplied. The order is kept so that distance ties
/// resolve the same way on every run.
///
/// # Invariants
/// - `N >= 1`.
/// - Every row has exactly `D` features.
/// - No mutation is possible once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSet<F> {
    features: Array2<F>,
    labels: Array1<i64>,
}

impl<F: Float> TrainingSet<F> {
    /// Builds a training set from `(features, label)` pairs.
    ///
    /// # Arguments
    /// - `data_points`: The labeled points. The first point fixes the dimension `D`.
    ///
    /// # Returns
    /// The training set, or `ArgumentError::EmptyTrainingSet` when no point is given and
    /// `ArgumentError::InconsistentDimensions` when a point disagrees with the first one.
    pub fn from_points<I, P>(data_points: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = (P, i64)>,
        P: AsRef<[F]>,
    {
        let mut values = Vec::new();
        let mut labels = Vec::new();
        let mut n_features = None;

        for (index, (point, label)) in data_points.into_iter().enumerate() {
            let point = point.as_ref();
            let expected = *n_features.get_or_insert(point.len());
            if point.len() != expected {
                return Err(ArgumentError::InconsistentDimensions {
                    index,
                    expected,
                    actual: point.len(),
                }
                .into());
            }
            values.extend_from_slice(point);
            labels.push(label);
        }

        let n_features = n_features.ok_or(ArgumentError::EmptyTrainingSet)?;
        let features = Array2::from_shape_vec((labels.len(), n_features), values)?;

        Ok(TrainingSet { features, labels: Array1::from_vec(labels) })
    }

    /// Builds a training set from a feature matrix and a label vector.
    ///
    /// `x` holds one sample per row and `y` one label per sample.
    pub fn from_arrays(x: Array2<F>, y: Array1<i64>) -> Result<Self, ModelError> {
        if x.nrows() == 0 {
            return Err(ArgumentError::EmptyTrainingSet.into());
        }
        if x.nrows() != y.len() {
            return Err(ArgumentError::LengthMismatch { features: x.nrows(), labels: y.len() }.into());
        }

        Ok(TrainingSet { features: x, labels: y })
    }

    /// Checks that a query of dimension `actual` can be compared against the stored rows.
    pub(crate) fn check_dimension(&self, actual: usize) -> Result<(), ModelError> {
        if actual != self.n_features() {
            return Err(ArgumentError::DimensionMismatch { expected: self.n_features(), actual }.into());
        }
        Ok(())
    }
}

impl<F> TrainingSet<F> {
    pub fn features(&self) -> ArrayView2<'_, F> {
        self.features.view()
    }

    pub fn labels(&self) -> ArrayView1<'_, i64> {
        self.labels.view()
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }
}
