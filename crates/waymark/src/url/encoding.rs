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

//! Encoding.

use percent_encoding::{
    AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode,
};
use std::borrow::Cow;

// ----------------------------------------------------------------------------
// Constants
// ----------------------------------------------------------------------------

/// Character set to be percent-encoded in components.
///
/// Everything except unreserved characters is encoded, which is what we use
/// for credentials and fragments.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Character set to be percent-encoded in paths.
///
/// Reserved characters carry meaning inside of paths, so we leave them as they
/// are. Note that `#` is not part of this list, as it would start a fragment.
#[rustfmt::skip]
const PATH: &AsciiSet = &COMPONENT
    .remove(b';').remove(b',').remove(b'/').remove(b'?').remove(b':')
    .remove(b'@').remove(b'&').remove(b'=').remove(b'+').remove(b'$')
    .remove(b'!').remove(b'*').remove(b'\'').remove(b'(').remove(b')');

/// Character set to be percent-encoded in query strings.
///
/// Spaces are excluded, since they're replaced with `+` after encoding.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b' ');

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Encodes a component, i.e., credentials or fragments.
#[inline]
#[must_use]
pub fn encode(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, COMPONENT).into()
}

/// Encodes a path, preserving reserved characters.
#[inline]
#[must_use]
pub fn encode_path(value: &str) -> Cow<'_, str> {
    utf8_percent_encode(value, PATH).into()
}

/// Encodes a key or value used in a query string.
#[must_use]
pub fn encode_query(value: &str) -> Cow<'_, str> {
    let encoded: Cow<'_, str> = utf8_percent_encode(value, QUERY).into();
    if encoded.contains(' ') {
        Cow::Owned(encoded.replace(' ', "+"))
    } else {
        encoded
    }
}

/// Decodes a component.
///
/// Other than [`decode_query`], this leaves `+` untouched.
#[inline]
#[must_use]
pub fn decode(value: &str) -> Cow<'_, str> {
    percent_decode_str(value).decode_utf8_lossy()
}

/// Decodes a key or value used in a query string.
#[inline]
#[must_use]
pub fn decode_query(value: &str) -> Cow<'_, str> {
    if value.contains('+') {
        percent_decode_str(&value.replace('+', " "))
            .decode_utf8_lossy()
            .into_owned()
            .into()
    } else {
        percent_decode_str(value).decode_utf8_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path() {
        let test_cases = vec![
            ("/a/b", "/a/b"),
            ("/a b/c", "/a%20b/c"),
            ("/a;b,c?d:e@f&g=h+i$j", "/a;b,c?d:e@f&g=h+i$j"),
            ("/!*'()", "/!*'()"),
            ("/a#b", "/a%23b"),
            ("/100%", "/100%25"),
            ("/ä", "/%C3%A4"),
        ];
        for (value, expected) in test_cases {
            assert_eq!(encode_path(value), expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("a b/c~d"), "a%20b%2Fc~d");
        assert_eq!(encode("x@y:z"), "x%40y%3Az");
    }

    #[test]
    fn test_encode_query() {
        let test_cases = vec![
            ("plain", "plain"),
            ("a b", "a+b"),
            ("a+b", "a%2Bb"),
            ("a&b=c", "a%26b%3Dc"),
            ("~", "%7E"),
        ];
        for (value, expected) in test_cases {
            assert_eq!(encode_query(value), expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("a%20b+c"), "a b+c");
        assert_eq!(decode_query("a%20b+c"), "a b c");
        assert_eq!(decode_query("%2B"), "+");
    }
}
