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

use ndarray::{Array1, ArrayView1, ArrayView2, Axis, Zip};
use num_traits::Float;

/// Euclidean distance between two vectors of equal length.
///
/// # Panics
/// If `a` and `b` differ in length. Callers validate dimensions first.
pub fn euclidean<F: Float>(a: ArrayView1<F>, b: ArrayView1<F>) -> F {
    let squared_sum = Zip::from(a).and(b).fold(F::zero(), |acc, &a_i, &b_i| {
        let diff = a_i - b_i;
        acc + diff * diff
    });
    squared_sum.sqrt()
}

/// Calculates the Euclidean distance between `point` and every row of `data`.
///
/// # Arguments
/// - `data`: A 2D array where each row is a stored sample.
/// - `point`: The query vector, with as many elements as `data` has columns.
///
/// # Returns
/// A 1D array whose `i`-th element is the distance from `point` to row `i`.
pub fn euclidean_distances<F: Float>(data: ArrayView2<F>, point: ArrayView1<F>) -> Array1<F> {
    Array1::from_iter(data.axis_iter(Axis(0)).map(|row| euclidean(row, point)))
}
