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

use knnml::{KNN, ndarray::array};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Two well separated clusters, queried with a single neighbor
    let model: KNN = KNN::new(1, [([0.0, 0.0], 0), ([10.0, 10.0], 1), ([10.0, 11.0], 1)])?;

    let x_test = array![[0.0, 1.0], [10.0, 10.5]];
    let predictions = model.predict_batch(&x_test)?;
    println!("Predictions for new data: {:?}", predictions);

    for neighbor in model.kneighbors(&[10.0, 10.5])? {
        info!(
            "Nearest neighbor: index={}, distance={:.4}, label={}",
            neighbor.index, neighbor.distance, neighbor.label
        );
    }

    // Every point votes; the 2-2 tie resolves to the smallest label
    let model: KNN = KNN::new(4, [([0.0], 0), ([1.0], 0), ([2.0], 1), ([3.0], 1)])?;
    println!("Majority of the whole training set: {}", model.predict(&[100.0])?);

    let accuracy = model.calculate_accuracy(
        &model.predict_batch(&array![[0.0], [1.0], [2.0], [3.0]])?,
        &array![0, 0, 1, 1],
    )?;
    println!("Training accuracy with k=4: {:.6}", accuracy);

    Ok(())
}
