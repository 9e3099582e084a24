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

//! Bloom filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was added, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never added
//! - **Fixed size**: the filter is sized once from its capacity and never resizes
//! - **Add only**: items cannot be removed, and the values themselves are not stored
//!
//! # Usage
//!
//! ```rust
//! use bloomfilter::bloom::IntegerFilter;
//! use bloomfilter::bloom::StringFilter;
//!
//! // A filter sized for 100 strings
//! let mut filter = StringFilter::new(100).unwrap();
//! filter.add("apple");
//! filter.add("banana");
//!
//! assert!(filter.contains("apple")); // true - definitely added
//! assert!(!filter.contains("grape")); // false - never added (probably)
//!
//! // Or pre-populate from a batch, sized to the batch
//! let numbers = IntegerFilter::from_items(&[97, 98, 99]).unwrap();
//! assert!(numbers.contains(&98));
//!
//! println!("Bits: {}", filter.num_bits());
//! println!("Hashes: {}", filter.num_hashes());
//! println!("Target FPP: {:.4}%", filter.error_rate() * 100.0);
//! ```
//!
//! # Sizing
//!
//! For a capacity `n`, the filter is sized for `c = n + 1` items with a target false positive
//! rate `p = 1 / c`:
//!
//! - `m = ceil(c * log_b(p))` bits, where `b = 1 / 2^ln(2)`
//! - `k = round(ln(2) * m / c)` hash functions
//!
//! [`Sizing::for_capacity`] exposes these parameters without allocating a filter.
//!
//! # Element Types
//!
//! [`IntegerFilter`] (`i32`) and [`StringFilter`] (`str`) are provided. Any other type can be
//! stored by implementing [`ElementHash`] for it.
//!
//! # Implementation Details
//!
//! - The primary hash is the element's [`Hash`](std::hash::Hash) fed into a MurmurHash3 hasher
//!   with a fixed seed, so results are identical across processes
//! - The secondary hash is type specific: an integer avalanche mix for `i32`, Jenkins'
//!   one-at-a-time hash for strings
//! - Implements double hashing (Kirsch-Mitzenmacher method) for k hash functions
//! - Bits packed in `u64` words
//!
//! # Concurrency
//!
//! A filter has no internal synchronization. Adding requires `&mut`, so shared readers
//! through `&BloomFilter` or a [`ReadonlyView`] never race with writers.
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"
//! - Kirsch and Mitzenmacher (2008). "Less Hashing, Same Performance: Building a Better Bloom
//!   Filter"

mod bits;
mod sizing;
mod sketch;
mod strategy;
mod view;

pub use self::sizing::suggest_error_rate;
pub use self::sizing::suggest_num_bits;
pub use self::sizing::suggest_num_hashes;
pub use self::sizing::Sizing;
pub use self::sketch::BloomFilter;
pub use self::strategy::hash_i32;
pub use self::strategy::hash_str;
pub use self::strategy::ElementHash;
pub use self::view::ReadonlyFilter;
pub use self::view::ReadonlyView;

/// A Bloom filter over 32-bit signed integers.
pub type IntegerFilter = BloomFilter<i32>;

/// A Bloom filter over text strings.
pub type StringFilter = BloomFilter<str>;
