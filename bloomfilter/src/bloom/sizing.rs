// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::f64::consts::LN_2;

use crate::error::Error;

/// Base of the error-rate approximation used when `1 / capacity` is not representable.
const FALLBACK_ERROR_RATE_BASE: f64 = 0.6185;
/// Fixed scale of the fallback curve. This is a tuning constant, not a platform integer limit.
const FALLBACK_ERROR_RATE_SCALE: u32 = i32::MAX as u32;

/// The parameters a filter is built with, derived from its expected capacity.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::Sizing;
/// let sizing = Sizing::for_capacity(1000).unwrap();
/// assert_eq!(sizing.num_bits(), 14395);
/// assert_eq!(sizing.num_hashes(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sizing {
    capacity: u32,
    error_rate: f64,
    num_bits: u64,
    num_hashes: u32,
}

impl Sizing {
    /// Computes the filter parameters for an expected number of items.
    ///
    /// The capacity is padded by one before sizing. The largest capacity, `i32::MAX`, yields
    /// 96,043,084,291 bits and 31 hash functions.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity) if
    /// `capacity` is less than one.
    pub fn for_capacity(capacity: i32) -> Result<Self, Error> {
        if capacity < 1 {
            return Err(Error::invalid_capacity(capacity));
        }

        let padded = capacity as u32 + 1;
        let error_rate = suggest_error_rate(padded);
        let num_bits = suggest_num_bits(padded, error_rate);
        let num_hashes = suggest_num_hashes(padded, num_bits);

        Ok(Sizing {
            capacity: padded,
            error_rate,
            num_bits,
            num_hashes,
        })
    }

    /// Returns the padded capacity the parameters were computed for.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Returns the target false positive rate.
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    /// Returns the number of bits in the filter (m).
    pub fn num_bits(&self) -> u64 {
        self.num_bits
    }

    /// Returns the number of hash functions (k).
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }
}

/// Suggests a target false positive rate for the given capacity.
///
/// The rate is `1 / capacity`. Should that underflow to zero, the rate falls back to
/// `0.6185 ^ (2147483647 / capacity)` with integer division in the exponent.
pub fn suggest_error_rate(capacity: u32) -> f64 {
    let rate = 1.0 / f64::from(capacity);
    if rate == 0.0 {
        let exponent = f64::from(FALLBACK_ERROR_RATE_SCALE / capacity);
        return FALLBACK_ERROR_RATE_BASE.powf(exponent);
    }
    rate
}

/// Suggests the number of bits given a capacity and a target false positive rate.
///
/// Formula: `m = ceil(n * log_b(p))` where `b = 1 / 2^ln(2)`, n = capacity, p = error rate.
/// Never less than one.
///
/// # Panics
///
/// Panics if `error_rate` is not in (0.0, 1.0].
pub fn suggest_num_bits(capacity: u32, error_rate: f64) -> u64 {
    assert!(
        error_rate > 0.0 && error_rate <= 1.0,
        "error_rate must be between 0.0 and 1.0 (inclusive of 1.0)"
    );

    let base = 1.0 / 2.0_f64.powf(LN_2);
    let bits = (f64::from(capacity) * (error_rate.ln() / base.ln())).ceil();
    (bits as u64).max(1)
}

/// Suggests the number of hash functions given a capacity and a bit count.
///
/// Formula: `k = round(ln(2) * m / n)`, ties to even, never less than one.
pub fn suggest_num_hashes(capacity: u32, num_bits: u64) -> u32 {
    let k = (LN_2 * num_bits as f64 / f64::from(capacity)).round_ties_even();
    (k as u32).max(1)
}
