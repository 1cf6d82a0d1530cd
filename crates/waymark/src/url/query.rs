// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Query string.

use std::borrow::Cow;
use std::fmt;

mod vars;

pub use vars::Vars;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Query string.
///
/// A query string is either kept verbatim, as it was given when parsing a URL,
/// or as structured [`Vars`]. Raw query strings are emitted as they are, which
/// is why we only convert them into variables when they need to be modified.
/// Once normalized with [`Query::normalize`], a query string never reverts to
/// its raw representation.
///
/// # Examples
///
/// ```
/// use waymark::Query;
///
/// // Create query string and normalize it
/// let mut query = Query::from("b=2&a=1");
/// query.normalize().remove("b");
/// assert_eq!(query.to_string(), "a=1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Raw query string.
    Raw(String),
    /// Structured variables.
    Structured(Vars),
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Query {
    /// Normalizes the query string into variables, and returns them.
    pub fn normalize(&mut self) -> &mut Vars {
        if let Query::Raw(raw) = self {
            *self = Query::Structured(Vars::from(raw.as_str()));
        }
        match self {
            Query::Structured(vars) => vars,
            Query::Raw(_) => unreachable!("invariant"),
        }
    }

    /// Returns the variables, parsing a raw query string if necessary.
    ///
    /// Other than [`Query::normalize`], this doesn't change the representation.
    #[must_use]
    pub fn vars(&self) -> Cow<'_, Vars> {
        match self {
            Query::Raw(raw) => Cow::Owned(Vars::from(raw.as_str())),
            Query::Structured(vars) => Cow::Borrowed(vars),
        }
    }

    /// Returns whether the query string is structured.
    #[inline]
    #[must_use]
    pub fn is_structured(&self) -> bool {
        matches!(self, Query::Structured(_))
    }

    /// Returns whether the query string is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Query::Raw(raw) => raw.is_empty(),
            Query::Structured(vars) => vars.is_empty(),
        }
    }

    /// Formats the query string with the given separator.
    ///
    /// The separator only applies to structured variables, as raw query
    /// strings are always returned verbatim.
    #[must_use]
    pub fn to_string_with(&self, separator: &str) -> String {
        match self {
            Query::Raw(raw) => raw.clone(),
            Query::Structured(vars) => vars.to_string_with(separator),
        }
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl From<&str> for Query {
    /// Creates a raw query string from a string.
    #[inline]
    fn from(value: &str) -> Self {
        Query::Raw(value.to_string())
    }
}

impl From<String> for Query {
    /// Creates a raw query string from a string.
    #[inline]
    fn from(value: String) -> Self {
        Query::Raw(value)
    }
}

impl From<Vars> for Query {
    /// Creates a structured query string from variables.
    #[inline]
    fn from(value: Vars) -> Self {
        Query::Structured(value)
    }
}

// ----------------------------------------------------------------------------

impl Default for Query {
    /// Creates an empty structured query string.
    #[inline]
    fn default() -> Self {
        Query::Structured(Vars::default())
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Query {
    /// Formats the query string for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_is_verbatim() {
        let query = Query::from("b=%7e&a");
        assert_eq!(query.to_string_with("&amp;"), "b=%7e&a");
        assert!(!query.is_structured());
    }

    #[test]
    fn test_normalize_is_sticky() {
        let mut query = Query::from("a=2&a=1");
        query.normalize().remove("a");
        assert!(query.is_structured());
        assert!(query.is_empty());
        assert_eq!(query.to_string(), "");

        // Normalizing again doesn't change anything
        query.normalize();
        assert_eq!(query, Query::Structured(Vars::new()));
    }

    #[test]
    fn test_vars_does_not_normalize() {
        let query = Query::from("x=1");
        assert_eq!(query.vars().get("x"), Some("1"));
        assert!(!query.is_structured());
    }
}
