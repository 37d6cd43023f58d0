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

use thiserror::Error;

/// Errors returned by the classifier.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ArgumentError),

    #[error("Failed to shape data into array: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),
}

impl ModelError {
    /// Returns `true` when the error was caused by a violated precondition on the inputs.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ModelError::InvalidArgument(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("Training set must contain at least one data point")]
    EmptyTrainingSet,

    #[error("Input is empty")]
    EmptyInput,

    #[error("No neighbors were selected")]
    EmptySelection,

    #[error("k must satisfy 1 <= k <= {n_samples}, got {k}")]
    InvalidK { k: usize, n_samples: usize },

    #[error(
        "Inconsistent feature dimension: data point {index} has {actual} features, expected {expected}"
    )]
    InconsistentDimensions { index: usize, expected: usize, actual: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Length mismatch: {features} feature rows but {labels} labels")]
    LengthMismatch { features: usize, labels: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_convert_into_model_errors() {
        let err: ModelError = ArgumentError::InvalidK { k: 4, n_samples: 3 }.into();
        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            ModelError::InvalidArgument(ArgumentError::InvalidK { k: 4, n_samples: 3 })
        ));
    }

    #[test]
    fn error_messages_name_the_offending_values() {
        let err = ModelError::from(ArgumentError::DimensionMismatch { expected: 2, actual: 3 });
        assert_eq!(err.to_string(), "Invalid argument: Dimension mismatch: expected 2, got 3");

        let err = ArgumentError::InconsistentDimensions { index: 1, expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Inconsistent feature dimension: data point 1 has 1 features, expected 2"
        );
    }
}
