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

//! Redirect.

use std::fmt;

mod status;

pub use status::Status;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Redirect.
///
/// A redirect is the outcome of [`Url::redirect`][], and describes what the
/// HTTP framework should respond with. Sending the redirect is expected to
/// end the handling of the current request, so the caller must return right
/// after it, and never continue with its regular logic.
///
/// [`Url::redirect`]: crate::Url::redirect
///
/// # Examples
///
/// ```
/// use waymark::{Redirect, Status};
///
/// // Create redirect
/// let redirect = Redirect::new(Status::Found, "http://example.com/");
/// assert_eq!(redirect.status_code(), 302);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    /// Redirect status.
    pub status: Status,
    /// Redirect target.
    pub location: String,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Redirect {
    /// Creates a redirect.
    #[inline]
    #[must_use]
    pub fn new<L>(status: Status, location: L) -> Self
    where
        L: Into<String>,
    {
        Self { status, location: location.into() }
    }

    /// Returns the status code.
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.code()
    }

    /// Converts the redirect into an HTTP/1.1 response.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::{Redirect, Status};
    ///
    /// // Create redirect and convert it into bytes
    /// let redirect = Redirect::new(Status::SeeOther, "http://example.com/");
    /// assert_eq!(
    ///     redirect.into_bytes(),
    ///     b"HTTP/1.1 303 See Other\r\n\
    ///       Location: http://example.com/\r\n\
    ///       Content-Length: 0\r\n\r\n",
    /// );
    /// ```
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(64 + self.location.len());
        buffer.extend_from_slice(b"HTTP/1.1 ");
        buffer.extend_from_slice(self.status.to_string().as_bytes());
        buffer.extend_from_slice(b"\r\n");

        // Append headers and empty line, as redirects have no body
        buffer.extend_from_slice(b"Location: ");
        buffer.extend_from_slice(self.location.as_bytes());
        buffer.extend_from_slice(b"\r\nContent-Length: 0\r\n\r\n");
        buffer
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Display for Redirect {
    /// Formats the redirect for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} -> {}", self.status, self.location)
    }
}
