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

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ndarray::ArrayView1;
use num_traits::Float;

/// Orders two distances, placing NaN after every other value so the order is total.
pub(crate) fn cmp_distance<F: Float>(a: F, b: F) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// A candidate neighbor keyed by `(distance, index)`.
struct HeapElem<F> {
    dist: F,
    index: usize,
}

impl<F: Float> PartialEq for HeapElem<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: Float> Eq for HeapElem<F> {}

impl<F: Float> PartialOrd for HeapElem<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: Float> Ord for HeapElem<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_distance(self.dist, other.dist).then_with(|| self.index.cmp(&other.index))
    }
}

/// Selects the indices of the `k` smallest distances.
///
/// Equal distances are broken by the lower index, so the result does not depend on
/// iteration order or platform. A max-heap of at most `k` candidates is kept and the
/// current worst candidate is evicted whenever a better one is seen.
///
/// # Arguments
/// - `distances`: The distance from the query to each stored sample.
/// - `k`: The number of indices to keep. Clamped to `distances.len()`.
///
/// # Returns
/// The selected indices in ascending `(distance, index)` order.
pub fn k_smallest<F: Float>(distances: ArrayView1<F>, k: usize) -> Vec<usize> {
    let k = k.min(distances.len());
    if k == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<HeapElem<F>> = BinaryHeap::with_capacity(k);
    for (index, &dist) in distances.iter().enumerate() {
        let candidate = HeapElem { dist, index };
        if heap.len() < k {
            heap.push(candidate);
        } else if heap.peek().is_some_and(|worst| candidate < *worst) {
            heap.pop();
            heap.push(candidate);
        }
    }

    heap.into_sorted_vec().into_iter().map(|elem| elem.index).collect()
}
