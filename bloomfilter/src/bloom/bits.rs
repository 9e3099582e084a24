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

use crate::error::Error;

/// A fixed-length bit vector whose bits can only be set, never cleared.
///
/// Bits are packed into `u64` words; the number of set bits is tracked as bits flip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitArray {
    num_bits: u64,
    num_bits_set: u64,
    words: Box<[u64]>,
}

impl BitArray {
    /// Creates a bit vector of exactly `num_bits` bits, all unset.
    ///
    /// Fails instead of aborting when the words cannot be allocated.
    pub(crate) fn new(num_bits: u64) -> Result<Self, Error> {
        let num_words = usize::try_from(num_bits.div_ceil(64))
            .map_err(|_| Error::unallocatable_bits(num_bits))?;

        let mut words = Vec::new();
        words
            .try_reserve_exact(num_words)
            .map_err(|_| Error::unallocatable_bits(num_bits))?;
        words.resize(num_words, 0u64);

        Ok(BitArray {
            num_bits,
            num_bits_set: 0,
            words: words.into_boxed_slice(),
        })
    }

    pub(crate) fn len(&self) -> u64 {
        self.num_bits
    }

    pub(crate) fn count_ones(&self) -> u64 {
        self.num_bits_set
    }

    /// # Panics
    ///
    /// Panics if `index` is not below [`len()`](Self::len).
    pub(crate) fn get(&self, index: u64) -> bool {
        let (word_index, mask) = self.locate(index);
        (self.words[word_index] & mask) != 0
    }

    /// Sets a bit, returning whether it was previously unset.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len()`](Self::len).
    pub(crate) fn set(&mut self, index: u64) -> bool {
        let (word_index, mask) = self.locate(index);
        let word = &mut self.words[word_index];
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.num_bits_set += 1;
        true
    }

    fn locate(&self, index: u64) -> (usize, u64) {
        assert!(
            index < self.num_bits,
            "bit index {index} out of range for {} bits",
            self.num_bits
        );
        ((index >> 6) as usize, 1u64 << (index & 63))
    }
}
