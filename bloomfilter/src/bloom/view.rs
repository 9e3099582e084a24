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

use std::fmt;

use super::BloomFilter;
use super::ElementHash;

/// A filter that can only be queried.
///
/// Implemented by [`BloomFilter`] itself and by its [`ReadonlyView`], so code that must not
/// add items can accept either.
pub trait ReadonlyFilter<T: ?Sized> {
    /// Tests whether an item is possibly in the set.
    ///
    /// `false` means the item was definitely never added.
    fn contains(&self, item: &T) -> bool;
}

impl<T: ElementHash + ?Sized> ReadonlyFilter<T> for BloomFilter<T> {
    fn contains(&self, item: &T) -> bool {
        BloomFilter::contains(self, item)
    }
}

/// A query-only handle on a [`BloomFilter`], obtained from
/// [`BloomFilter::readonly()`].
///
/// The view shares the bits of the filter it was created from. Freezing is advisory: once the
/// view is dropped, whoever owns the filter can add items again.
pub struct ReadonlyView<'a, T: ?Sized> {
    filter: &'a BloomFilter<T>,
}

impl<'a, T: ?Sized> ReadonlyView<'a, T> {
    pub(super) fn new(filter: &'a BloomFilter<T>) -> Self {
        ReadonlyView { filter }
    }
}

impl<T: ElementHash + ?Sized> ReadonlyView<'_, T> {
    /// Tests whether an item is possibly in the set.
    pub fn contains(&self, item: &T) -> bool {
        self.filter.contains(item)
    }
}

impl<T: ?Sized> fmt::Debug for ReadonlyView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadonlyView")
            .field("filter", self.filter)
            .finish()
    }
}

impl<T: ?Sized> Clone for ReadonlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ReadonlyView<'_, T> {}

impl<T: ElementHash + ?Sized> ReadonlyFilter<T> for ReadonlyView<'_, T> {
    fn contains(&self, item: &T) -> bool {
        self.filter.contains(item)
    }
}
