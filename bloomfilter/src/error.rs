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

//! Error types for Bloom filter construction

use std::fmt;

/// ErrorKind is all kinds of Error of this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The requested capacity is less than one.
    InvalidCapacity,
    /// The argument provided is invalid, e.g. a capacity smaller than the initial items.
    InvalidArgument,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::InvalidCapacity => "InvalidCapacity",
            ErrorKind::InvalidArgument => "InvalidArgument",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned when a filter cannot be constructed.
///
/// # Examples
///
/// ```
/// # use bloomfilter::error::Error;
/// # use bloomfilter::error::ErrorKind;
/// let err = Error::new(ErrorKind::InvalidCapacity, "capacity must be greater than zero");
/// assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
/// assert_eq!(err.message(), "capacity must be greater than zero");
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: vec![],
        }
    }

    /// Add more context in error.
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Error {
    pub(crate) fn invalid_capacity(capacity: i32) -> Self {
        Self::new(
            ErrorKind::InvalidCapacity,
            "capacity must be greater than zero",
        )
        .with_context("capacity", capacity)
    }

    pub(crate) fn unallocatable_bits(num_bits: u64) -> Self {
        Self::new(
            ErrorKind::InvalidCapacity,
            "bit vector cannot be allocated",
        )
        .with_context("num_bits", num_bits)
    }

    pub(crate) fn too_many_items(num_items: usize) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            "number of items exceeds the largest capacity",
        )
        .with_context("items", num_items)
    }

    pub(crate) fn capacity_below_items(capacity: i32, num_items: usize) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            "capacity must be greater than or equal to the number of items",
        )
        .with_context("capacity", capacity)
        .with_context("items", num_items)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // If alternate has been specified, we will print like Debug.
        if f.alternate() {
            let mut de = f.debug_struct("Error");
            de.field("kind", &self.kind);
            de.field("message", &self.message);
            de.field("context", &self.context);
            return de.finish();
        }

        write!(f, "{}", self.kind)?;
        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }
        writeln!(f)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            writeln!(f, "Context:")?;
            for (k, v) in self.context.iter() {
                writeln!(f, "   {k}: {v}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if !self.context.is_empty() {
            write!(f, ", context: {{ ")?;
            for (i, (k, v)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", k, v)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn test_invalid_capacity_format() {
        let err = Error::invalid_capacity(0);
        assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
        assert_snapshot!(err, @"InvalidCapacity, context: { capacity: 0 } => capacity must be greater than zero");
    }

    #[test]
    fn test_capacity_below_items_format() {
        let err = Error::capacity_below_items(3, 5);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_snapshot!(err, @"InvalidArgument, context: { capacity: 3, items: 5 } => capacity must be greater than or equal to the number of items");
    }

    #[test]
    fn test_unallocatable_bits_format() {
        let err = Error::unallocatable_bits(u64::MAX);
        assert_eq!(err.kind(), ErrorKind::InvalidCapacity);
        assert_snapshot!(err, @"InvalidCapacity, context: { num_bits: 18446744073709551615 } => bit vector cannot be allocated");
    }

    #[test]
    fn test_debug_report() {
        let err = Error::invalid_capacity(-4);
        assert_eq!(
            format!("{err:?}"),
            "InvalidCapacity => capacity must be greater than zero\n\nContext:\n   capacity: -4\n"
        );
    }
}
