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

//! Query string variables.

use std::fmt;

use super::super::encoding::{decode_query, encode_query};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Query string variables.
///
/// Variables are an ordered mapping with unique keys. Inserting a key that is
/// already present replaces its value, but keeps its position, so the order
/// of the formatted query string stays stable when values are overwritten.
///
/// When parsing a query string with [`Vars::from`], keys and values will be
/// percent-decoded, and later occurrences of a key overwrite earlier ones.
///
/// # Examples
///
/// ```
/// use waymark::Vars;
///
/// // Create variables from query string
/// let vars = Vars::from("a=2&b=3&a=1");
/// assert_eq!(vars.get("a"), Some("1"));
/// assert_eq!(vars.to_string(), "a=1&b=3");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vars {
    /// List of variables.
    inner: Vec<Var>,
}

/// Query string variable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Var {
    /// Variable key.
    key: String,
    /// Variable value.
    value: String,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Vars {
    /// Creates query string variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Vars;
    ///
    /// // Create variables
    /// let vars = Vars::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Vars;
    ///
    /// // Create variables and insert variable
    /// let mut vars = Vars::new();
    /// vars.insert("key", "value");
    ///
    /// // Obtain reference to value
    /// assert_eq!(vars.get("key"), Some("value"));
    /// ```
    pub fn get<K>(&self, key: K) -> Option<&str>
    where
        K: AsRef<str>,
    {
        self.inner.iter().find_map(|var| {
            (var.key == key.as_ref()).then_some(var.value.as_str())
        })
    }

    /// Returns whether the variable is contained.
    pub fn contains<K>(&self, key: K) -> bool
    where
        K: AsRef<str>,
    {
        self.inner.iter().any(|var| var.key == key.as_ref())
    }

    /// Inserts the given key-value pair, replacing the value of an existing
    /// variable in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Vars;
    ///
    /// // Create variables and insert variables
    /// let mut vars = Vars::new();
    /// vars.insert("a", "1");
    /// vars.insert("b", "2");
    /// vars.insert("a", "3");
    /// assert_eq!(vars.to_string(), "a=3&b=2");
    /// ```
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        match self.inner.iter_mut().find(|var| var.key == key) {
            Some(var) => var.value = value,
            None => self.inner.push(Var { key, value }),
        }
    }

    /// Removes the given variable, returning its value.
    pub fn remove<K>(&mut self, key: K) -> Option<String>
    where
        K: AsRef<str>,
    {
        let index =
            self.inner.iter().position(|var| var.key == key.as_ref())?;
        Some(self.inner.remove(index).value)
    }

    /// Sorts variables by key in ascending lexical order.
    pub fn sort(&mut self) {
        self.inner.sort_by(|a, b| a.key.cmp(&b.key));
    }

    /// Returns an iterator over all variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner
            .iter()
            .map(|var| (var.key.as_str(), var.value.as_str()))
    }

    /// Formats the variables as a query string with the given separator.
    ///
    /// Keys and values are percent-encoded, with spaces encoded as `+`. The
    /// separator can be set to `&amp;` for output that is embedded in HTML.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Vars;
    ///
    /// // Create variables and format them
    /// let vars = Vars::from_iter([("q", "a b"), ("page", "2")]);
    /// assert_eq!(vars.to_string_with("&amp;"), "q=a+b&amp;page=2");
    /// ```
    #[must_use]
    pub fn to_string_with(&self, separator: &str) -> String {
        let iter = self.inner.iter().map(|var| {
            format!("{}={}", encode_query(&var.key), encode_query(&var.value))
        });
        iter.collect::<Vec<_>>().join(separator)
    }
}

#[allow(clippy::must_use_candidate)]
impl Vars {
    /// Returns the number of variables.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether there are any variables.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl From<&str> for Vars {
    /// Creates query string variables from a query string.
    ///
    /// The given string is expected to be a sequence of key-value pairs joined
    /// with `&`, without the leading `?`. Pairs without `=` are treated as keys
    /// with empty values, and pairs with an empty key are skipped.
    fn from(value: &str) -> Self {
        let iter = value.split('&').filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (!key.is_empty()).then(|| (decode_query(key), decode_query(value)))
        });
        Vars::from_iter(iter)
    }
}

// ----------------------------------------------------------------------------

impl<K, V> FromIterator<(K, V)> for Vars
where
    K: Into<String>,
    V: Into<String>,
{
    /// Creates query string variables from an iterator.
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut vars = Vars::new();
        for (key, value) in iter {
            vars.insert(key, value);
        }
        vars
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Vars {
    /// Formats the query string variables for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let test_cases = vec![
            ("", vec![]),
            ("a=1", vec![("a", "1")]),
            ("a=1&b", vec![("a", "1"), ("b", "")]),
            ("a=1&&b=2", vec![("a", "1"), ("b", "2")]),
            ("=x&a=1", vec![("a", "1")]),
            ("q=a+b%26c", vec![("q", "a b&c")]),
            ("a=2&a=1", vec![("a", "1")]),
            ("x=a=b", vec![("x", "a=b")]),
        ];
        for (value, expected) in test_cases {
            let vars = Vars::from(value);
            let pairs: Vec<_> = vars.iter().collect();
            assert_eq!(pairs, expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_insert_keeps_position() {
        let mut vars = Vars::from("b=1&a=2");
        vars.insert("b", "3");
        vars.insert("c", "4");
        assert_eq!(vars.to_string(), "b=3&a=2&c=4");
    }

    #[test]
    fn test_remove() {
        let mut vars = Vars::from("a=1&b=2");
        assert_eq!(vars.remove("a").as_deref(), Some("1"));
        assert_eq!(vars.remove("a"), None);
        assert_eq!(vars.to_string(), "b=2");
    }

    #[test]
    fn test_sort() {
        let mut vars = Vars::from("b=2&hash=x&a=1");
        vars.sort();
        assert_eq!(vars.to_string(), "a=1&b=2&hash=x");
    }

    #[test]
    fn test_to_string_encodes() {
        let vars = Vars::from_iter([("a b", "c&d"), ("e", "")]);
        assert_eq!(vars.to_string(), "a+b=c%26d&e=");
    }
}
