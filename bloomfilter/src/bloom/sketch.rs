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

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use super::bits::BitArray;
use super::ElementHash;
use super::ReadonlyView;
use super::Sizing;
use crate::error::Error;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (added items always return `true`)
/// - A false positive rate bounded by the capacity the filter was sized for
/// - Fixed size: the filter never grows, and adding more items than its capacity degrades
///   accuracy instead of failing
///
/// The element type only contributes its hashes through [`ElementHash`]; sizing and bit
/// mapping are shared by every element type.
pub struct BloomFilter<T: ?Sized> {
    /// Parameters computed from the requested capacity
    sizing: Sizing,
    /// Bit vector of length `sizing.num_bits()` (m)
    bits: BitArray,
    _element: PhantomData<fn(&T)>,
}

impl<T: ElementHash + ?Sized> BloomFilter<T> {
    /// Creates an empty filter sized for `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity) if
    /// `capacity` is less than one, or if the bit vector it calls for cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::IntegerFilter;
    /// let filter = IntegerFilter::new(100).unwrap();
    /// assert!(filter.is_empty());
    /// assert_eq!(filter.num_hashes(), 7);
    /// ```
    pub fn new(capacity: i32) -> Result<Self, Error> {
        let sizing = Sizing::for_capacity(capacity)?;
        tracing::debug!(
            capacity,
            error_rate = sizing.error_rate(),
            num_bits = sizing.num_bits(),
            num_hashes = sizing.num_hashes(),
            "sized bloom filter"
        );

        Ok(BloomFilter {
            bits: BitArray::new(sizing.num_bits())?,
            sizing,
            _element: PhantomData,
        })
    }

    /// Creates a filter sized for exactly `items.len()` items and adds all of them.
    ///
    /// Further additions raise the false positive rate above the target.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `items` is empty ([`InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity))
    /// - `items` holds more than `i32::MAX` elements
    ///   ([`InvalidArgument`](crate::error::ErrorKind::InvalidArgument))
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::StringFilter;
    /// let filter = StringFilter::from_items(&["apple", "banana"]).unwrap();
    /// assert!(filter.contains("apple"));
    /// assert!(filter.contains("banana"));
    /// ```
    pub fn from_items<Q: Borrow<T>>(items: &[Q]) -> Result<Self, Error> {
        let capacity =
            i32::try_from(items.len()).map_err(|_| Error::too_many_items(items.len()))?;
        let mut filter = Self::new(capacity)?;
        filter.add_all(items);
        Ok(filter)
    }

    /// Creates a filter sized for `capacity` items and adds all of `items`.
    ///
    /// The remaining `capacity - items.len()` slots may be filled later without exceeding the
    /// target false positive rate.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `capacity` is less than one ([`InvalidCapacity`](crate::error::ErrorKind::InvalidCapacity))
    /// - `capacity` is less than `items.len()`
    ///   ([`InvalidArgument`](crate::error::ErrorKind::InvalidArgument))
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::IntegerFilter;
    /// # use bloomfilter::error::ErrorKind;
    /// let mut filter = IntegerFilter::with_items(&[1, 2, 3], 10).unwrap();
    /// filter.add(&4);
    /// assert!(filter.contains(&4));
    ///
    /// let err = IntegerFilter::with_items(&[1, 2, 3, 4, 5], 3).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn with_items<Q: Borrow<T>>(items: &[Q], capacity: i32) -> Result<Self, Error> {
        if capacity >= 1 && (capacity as usize) < items.len() {
            return Err(Error::capacity_below_items(capacity, items.len()));
        }

        let mut filter = Self::new(capacity)?;
        filter.add_all(items);
        Ok(filter)
    }

    /// Adds an item to the filter. It cannot be removed.
    ///
    /// After adding, `contains(item)` will always return `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::StringFilter;
    /// let mut filter = StringFilter::new(100).unwrap();
    /// filter.add("apple");
    /// assert!(filter.contains("apple"));
    /// ```
    pub fn add(&mut self, item: &T) {
        let (h0, h1) = compute_hash(item);
        self.set_bits(h0, h1);
    }

    /// Tests whether an item is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Item was **possibly** added (or false positive)
    /// - `false`: Item was **definitely not** added
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::StringFilter;
    /// let mut filter = StringFilter::new(100).unwrap();
    /// filter.add("apple");
    ///
    /// assert!(filter.contains("apple")); // true - was added
    /// assert!(!filter.contains("grape")); // false - never added
    /// ```
    pub fn contains(&self, item: &T) -> bool {
        let (h0, h1) = compute_hash(item);
        self.check_bits(h0, h1)
    }

    /// Tests and adds an item in a single operation.
    ///
    /// Returns whether the item was possibly already in the set before it was added.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::IntegerFilter;
    /// let mut filter = IntegerFilter::new(100).unwrap();
    ///
    /// assert!(!filter.contains_and_insert(&42)); // First insertion
    /// assert!(filter.contains_and_insert(&42)); // Now it's in the set
    /// ```
    pub fn contains_and_insert(&mut self, item: &T) -> bool {
        let (h0, h1) = compute_hash(item);
        let was_present = self.check_bits(h0, h1);
        self.set_bits(h0, h1);
        was_present
    }

    /// Returns a view of this filter that can only be queried.
    ///
    /// The view borrows this filter rather than copying it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::IntegerFilter;
    /// let filter = IntegerFilter::from_items(&[1, 2, 3]).unwrap();
    /// let view = filter.readonly();
    /// assert!(view.contains(&2));
    /// ```
    pub fn readonly(&self) -> ReadonlyView<'_, T> {
        ReadonlyView::new(self)
    }

    fn add_all<Q: Borrow<T>>(&mut self, items: &[Q]) {
        for item in items {
            self.add(item.borrow());
        }
        tracing::trace!(
            num_items = items.len(),
            bits_used = self.bits_used(),
            "populated bloom filter"
        );
    }

    /// Checks if all k bits are set for the given hash values.
    fn check_bits(&self, h0: i32, h1: i32) -> bool {
        (0..self.sizing.num_hashes()).all(|i| self.bits.get(self.compute_bit_index(h0, h1, i)))
    }

    /// Sets all k bits for the given hash values.
    fn set_bits(&mut self, h0: i32, h1: i32) {
        for i in 0..self.sizing.num_hashes() {
            let bit_index = self.compute_bit_index(h0, h1, i);
            self.bits.set(bit_index);
        }
    }

    /// Computes a bit index using double hashing (Kirsch-Mitzenmacher).
    ///
    /// Formula:
    /// ```text
    /// bit_index = |(h0 + i * h1) rem num_bits|
    /// ```
    ///
    /// `h0 + i * h1` wraps in 32 bits; the remainder keeps the sign of the dividend. The index
    /// `i` is 0-based.
    fn compute_bit_index(&self, h0: i32, h1: i32, i: u32) -> u64 {
        let hash = h0.wrapping_add((i as i32).wrapping_mul(h1));
        (i64::from(hash) % self.bits.len() as i64).unsigned_abs()
    }
}

impl<T: ?Sized> BloomFilter<T> {
    /// Returns whether no item has been added.
    pub fn is_empty(&self) -> bool {
        self.bits.count_ones() == 0
    }

    /// Returns the number of bits set to 1.
    pub fn bits_used(&self) -> u64 {
        self.bits.count_ones()
    }

    /// Returns the total number of bits in the filter (m).
    pub fn num_bits(&self) -> u64 {
        self.bits.len()
    }

    /// Returns the number of hash functions used (k).
    pub fn num_hashes(&self) -> u32 {
        self.sizing.num_hashes()
    }

    /// Returns the target false positive rate the filter was sized for.
    pub fn error_rate(&self) -> f64 {
        self.sizing.error_rate()
    }

    /// Returns the fraction of bits set.
    pub fn load_factor(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Estimates the current false positive probability as `load_factor ^ k`.
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powf(f64::from(self.num_hashes()))
    }
}

/// Computes the primary and secondary hash of an item.
fn compute_hash<T: ElementHash + ?Sized>(item: &T) -> (i32, i32) {
    (item.primary_hash(), item.secondary_hash())
}

impl<T: ?Sized> Clone for BloomFilter<T> {
    fn clone(&self) -> Self {
        BloomFilter {
            sizing: self.sizing,
            bits: self.bits.clone(),
            _element: PhantomData,
        }
    }
}

impl<T: ?Sized> PartialEq for BloomFilter<T> {
    fn eq(&self, other: &Self) -> bool {
        self.sizing == other.sizing && self.bits == other.bits
    }
}

impl<T: ?Sized> fmt::Debug for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("num_bits", &self.num_bits())
            .field("num_hashes", &self.num_hashes())
            .field("bits_used", &self.bits_used())
            .finish()
    }
}

impl<'a, T: ElementHash + ?Sized + 'a> Extend<&'a T> for BloomFilter<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BloomFilter;
    use crate::bloom::IntegerFilter;
    use crate::bloom::StringFilter;
    use crate::error::ErrorKind;

    #[test]
    fn test_new() {
        let filter = IntegerFilter::new(26).unwrap();
        assert_eq!(filter.num_bits(), 186);
        assert_eq!(filter.num_hashes(), 5);
        assert!(filter.is_empty());
        assert_eq!(filter.load_factor(), 0.0);
    }

    #[test]
    fn test_add_and_contains() {
        let mut filter = StringFilter::new(100).unwrap();

        assert!(!filter.contains("apple"));
        filter.add("apple");
        assert!(filter.contains("apple"));
        assert!(!filter.is_empty());
        assert_eq!(filter.bits_used(), 7);
    }

    #[test]
    fn test_contains_and_insert() {
        let mut filter = IntegerFilter::new(100).unwrap();

        assert!(!filter.contains_and_insert(&42));
        assert!(filter.contains_and_insert(&42));
        assert!(!filter.contains(&43));
    }

    #[test]
    fn test_bit_index_stays_in_range() {
        let filter = IntegerFilter::new(1).unwrap();
        for (h0, h1) in [(i32::MIN, i32::MIN), (i32::MAX, i32::MAX), (-1, 1), (0, 0)] {
            for i in 0..8 {
                assert!(filter.compute_bit_index(h0, h1, i) < filter.num_bits());
            }
        }
        assert_eq!(filter.compute_bit_index(-7, 0, 0), 1);
        assert_eq!(filter.compute_bit_index(-1, -1, 2), 0);
    }

    #[test]
    fn test_with_items_validates_capacity_first() {
        let err = IntegerFilter::with_items(&[1, 2, 3], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCapacity);

        let err = IntegerFilter::with_items(&[1, 2, 3], 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_extend() {
        let mut filter = BloomFilter::<str>::new(10).unwrap();
        filter.extend(["x", "y"]);
        assert!(filter.contains("x"));
        assert!(filter.contains("y"));
    }

    #[test]
    fn test_statistics() {
        let mut filter = IntegerFilter::new(1000).unwrap();
        assert_eq!(filter.bits_used(), 0);
        assert_eq!(filter.estimated_fpp(), 0.0);

        filter.add(&7);
        assert!(filter.bits_used() > 0);
        assert!(filter.load_factor() > 0.0);
        assert!(filter.estimated_fpp() > 0.0);
        assert!(filter.estimated_fpp() < filter.error_rate());
    }
}
