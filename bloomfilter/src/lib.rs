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

//! # Bloom Filter
//!
//! A fixed-capacity probabilistic set membership structure. Items are added to a filter and
//! later tested for possible membership: a negative answer is always exact, a positive answer
//! is wrong with a bounded probability derived from the capacity the filter was built for.
//!
//! The crate is organized as:
//!
//! - [`bloom`]: the filter itself, its sizing math, and the per-type element hashes
//! - [`error`]: the error type returned by filter construction

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]

pub mod bloom;
pub mod error;

mod hash;
