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

use bloomfilter::bloom::IntegerFilter;
use bloomfilter::bloom::ReadonlyFilter;
use bloomfilter::bloom::Sizing;
use bloomfilter::error::ErrorKind;
use googletest::assert_that;
use googletest::prelude::le;

fn lowercase_codes() -> Vec<i32> {
    (97..123).collect()
}

#[test]
fn test_contains_added_items() {
    let filter = IntegerFilter::from_items(&lowercase_codes()).unwrap();

    assert!(filter.contains(&97));
    assert!(filter.contains(&122));
    for code in lowercase_codes() {
        assert!(filter.contains(&code), "missing {code}");
    }
}

#[test]
fn test_does_not_contain_neighbors() {
    let filter = IntegerFilter::from_items(&lowercase_codes()).unwrap();

    assert!(!filter.contains(&96));
    assert!(!filter.contains(&123));
}

#[test]
fn test_minimum_capacity() {
    let filter = IntegerFilter::new(1).unwrap();
    assert_eq!(filter.num_bits(), 3);
    assert_eq!(filter.num_hashes(), 1);
    assert!(!filter.contains(&0));
    assert!(!filter.contains(&42));

    let filter = IntegerFilter::with_items::<i32>(&[], 1).unwrap();
    assert!(filter.is_empty());
    assert!(!filter.contains(&42));
}

#[test]
fn test_invalid_capacity() {
    for capacity in [0, -1, -100, i32::MIN] {
        let err = IntegerFilter::new(capacity).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
    }

    let err = IntegerFilter::with_items(&[1, 2], -3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCapacity);

    // capacity is taken from the number of items
    let err = IntegerFilter::from_items::<i32>(&[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
}

#[test]
fn test_largest_capacity_sizing() {
    let sizing = Sizing::for_capacity(i32::MAX).unwrap();
    assert_eq!(sizing.num_bits(), 96_043_084_291);
    assert_eq!(sizing.num_hashes(), 31);

    let sizing = Sizing::for_capacity(i32::MAX - 1).unwrap();
    assert_that!(sizing.num_bits(), le(96_043_084_291_u64));
}

#[test]
fn test_capacity_below_items() {
    let err = IntegerFilter::with_items(&[1, 2, 3, 4, 5], 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let filter = IntegerFilter::with_items(&[1, 2, 3, 4, 5], 5).unwrap();
    assert!((1..=5).all(|i| filter.contains(&i)));
}

#[test]
fn test_no_false_negatives() {
    for capacity in [1, 2, 3, 10, 64, 500] {
        let mut filter = IntegerFilter::new(capacity).unwrap();
        // overfill past capacity as well
        for i in 0..(capacity * 2) {
            let item = i.wrapping_mul(2_654_435_761_u32 as i32);
            filter.add(&item);
            assert!(filter.contains(&item), "capacity {capacity}, item {item}");
        }
    }

    let mut filter = IntegerFilter::new(8).unwrap();
    for item in [i32::MIN, -1, 0, 1, i32::MAX] {
        filter.add(&item);
    }
    for item in [i32::MIN, -1, 0, 1, i32::MAX] {
        assert!(filter.contains(&item));
    }
}

#[test]
fn test_deterministic() {
    let items: Vec<i32> = (0..200).map(|i| i * 31 - 1000).collect();
    let left = IntegerFilter::with_items(&items, 300).unwrap();
    let mut right = IntegerFilter::new(300).unwrap();
    right.extend(items.iter());

    assert_eq!(left, right);
    for probe in -2000..2000 {
        assert_eq!(left.contains(&probe), right.contains(&probe));
    }
}

#[test]
fn test_false_positive_rate() {
    const CAPACITY: i32 = 1000;
    const PROBES: i32 = 100_000;

    let items: Vec<i32> = (0..CAPACITY).collect();
    let filter = IntegerFilter::from_items(&items).unwrap();

    let false_positives = (CAPACITY..CAPACITY + PROBES)
        .filter(|probe| filter.contains(probe))
        .count();
    let rate = false_positives as f64 / f64::from(PROBES);
    assert_that!(rate, le(2.0 * filter.error_rate()));
}

#[test]
fn test_readonly_view() {
    let mut filter = IntegerFilter::new(10).unwrap();
    filter.add(&7);

    let view = filter.readonly();
    assert!(view.contains(&7));
    assert!(!view.contains(&8));

    let readers: Vec<&dyn ReadonlyFilter<i32>> = vec![&view, &filter];
    assert!(readers.iter().all(|reader| reader.contains(&7)));
}
