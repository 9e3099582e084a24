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

use std::hash::Hash;

use crate::hash;

/// An element type a [`BloomFilter`](super::BloomFilter) can store.
///
/// The filter combines two hashes per item: the primary hash from
/// [`primary_hash`](Self::primary_hash), which defaults to a seeded hash of the type's [`Hash`]
/// implementation, and the secondary hash from [`secondary_hash`](Self::secondary_hash).
/// Supporting a new element type only requires implementing this trait; the filter itself is
/// untouched.
///
/// # Examples
///
/// ```
/// # use bloomfilter::bloom::BloomFilter;
/// # use bloomfilter::bloom::ElementHash;
/// #[derive(Hash)]
/// struct Port(u16);
///
/// impl ElementHash for Port {
///     fn secondary_hash(&self) -> i32 {
///         i32::from(self.0).secondary_hash()
///     }
/// }
///
/// let mut filter = BloomFilter::<Port>::new(16).unwrap();
/// filter.add(&Port(443));
/// assert!(filter.contains(&Port(443)));
/// ```
pub trait ElementHash: Hash {
    /// Returns a deterministic 32-bit hash, independent of the primary hash.
    fn secondary_hash(&self) -> i32;

    /// Returns the primary hash, stable across processes and targets.
    fn primary_hash(&self) -> i32 {
        hash::primary_hash(self)
    }
}

impl ElementHash for i32 {
    fn secondary_hash(&self) -> i32 {
        hash_i32(*self)
    }

    // `Hash for i32` writes native-endian bytes; pin them to little-endian.
    fn primary_hash(&self) -> i32 {
        hash::primary_hash_bytes(&self.to_le_bytes())
    }
}

impl ElementHash for str {
    fn secondary_hash(&self) -> i32 {
        hash_str(self)
    }
}

impl ElementHash for String {
    fn secondary_hash(&self) -> i32 {
        hash_str(self)
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    fn secondary_hash(&self) -> i32 {
        (**self).secondary_hash()
    }

    fn primary_hash(&self) -> i32 {
        (**self).primary_hash()
    }
}

/// Avalanche mix of a 32-bit integer, operating on its unsigned bit pattern.
pub fn hash_i32(item: i32) -> i32 {
    let mut x = item as u32;
    x = (!x).wrapping_add(x << 15);
    x ^= x >> 12;
    x = x.wrapping_add(x << 2);
    x ^= x >> 4;
    x = x.wrapping_mul(2057);
    x ^= x >> 16;
    x as i32
}

/// Jenkins one-at-a-time hash over the UTF-16 code units of a string.
///
/// Shifts to the right are arithmetic, the accumulator being a signed 32-bit integer.
pub fn hash_str(item: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in item.encode_utf16() {
        hash = hash.wrapping_add(i32::from(unit));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }

    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_i32() {
        assert_eq!(hash_i32(0), -895235421);
        assert_eq!(hash_i32(1), 316017654);
        assert_eq!(hash_i32(-1), -1118438376);
        assert_eq!(hash_i32(97), -215422070);
        assert_eq!(42_i32.secondary_hash(), hash_i32(42));
    }

    #[test]
    fn test_primary_hash_i32_is_little_endian() {
        assert_eq!(97_i32.primary_hash(), 957878190);
        assert_eq!((-1_i32).primary_hash(), 1230762147);
        assert_eq!(
            97_i32.primary_hash(),
            hash::primary_hash_bytes(&[0x61, 0x00, 0x00, 0x00])
        );
        assert_eq!((&97_i32).primary_hash(), 97_i32.primary_hash());
    }

    #[test]
    fn test_primary_hash_str() {
        assert_eq!("a".primary_hash(), 1359091013);
        assert_eq!(String::from("a").primary_hash(), "a".primary_hash());
    }

    #[test]
    fn test_hash_str() {
        assert_eq!(hash_str(""), 0);
        assert_eq!(hash_str("a"), -902917054);
        assert_eq!(hash_str("hello world"), -950532319);
    }

    #[test]
    fn test_string_and_str_agree() {
        let owned = String::from("hello world");
        assert_eq!(owned.secondary_hash(), "hello world".secondary_hash());
        assert_eq!((&owned).secondary_hash(), owned.as_str().secondary_hash());
    }
}
