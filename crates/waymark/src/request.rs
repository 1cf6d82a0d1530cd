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

//! Current request.

use std::fmt;

use crate::url::Vars;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Environment of the current request.
///
/// URLs need to know about the request they're created in, in order to resolve
/// paths relative to the current script, to fall back to the requested host
/// when no base URL is configured, and to copy variables from the current
/// query string. This trait is the seam for integrating with HTTP frameworks.
/// When there's no request, e.g., in command line tools or tests, a context is
/// simply created without one.
///
/// All methods return [`None`] when the information is unavailable, which is
/// different from an empty value.
pub trait Environment: Send + Sync + 'static {
    /// Returns the request URI, including the query string.
    fn request_uri(&self) -> Option<&str>;

    /// Returns the value of the `Host` header.
    fn http_host(&self) -> Option<&str>;

    /// Returns the query string variables of the request.
    fn query(&self) -> Option<&Vars>;

    /// Returns the value of the query string variable with the given name.
    fn var(&self, name: &str) -> Option<&str> {
        self.query().and_then(|vars| vars.get(name))
    }
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Current request.
///
/// This is a plain implementation of [`Environment`], which can be populated
/// from any HTTP framework's request type.
///
/// # Examples
///
/// ```
/// use waymark::{Environment, Request};
///
/// // Create request
/// let req = Request::new()
///     .uri("/shop/index.php?page=2")
///     .host("example.com");
/// assert_eq!(req.var("page"), Some("2"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Request {
    /// Request URI.
    uri: Option<String>,
    /// Request URI, as given by URL rewriting proxies.
    rewrite_url: Option<String>,
    /// Host header.
    host: Option<String>,
    /// Query string variables.
    vars: Vars,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Request {
    /// Creates a request.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the URI of the request.
    ///
    /// The query string variables of the request are taken from the query
    /// string of the URI, replacing any variables set before.
    #[must_use]
    pub fn uri<U>(mut self, uri: U) -> Self
    where
        U: Into<String>,
    {
        let uri = uri.into();
        self.vars = query_vars(&uri);
        self.uri = Some(uri);
        self
    }

    /// Sets the URI given by URL rewriting proxies (`X-Rewrite-URL`).
    ///
    /// This URI is only used when no request URI is set, in which case the
    /// query string variables are taken from it.
    #[must_use]
    pub fn rewrite_url<U>(mut self, uri: U) -> Self
    where
        U: Into<String>,
    {
        let uri = uri.into();
        if self.uri.is_none() {
            self.vars = query_vars(&uri);
        }
        self.rewrite_url = Some(uri);
        self
    }

    /// Sets the host of the request.
    #[inline]
    #[must_use]
    pub fn host<H>(mut self, host: H) -> Self
    where
        H: Into<String>,
    {
        self.host = Some(host.into());
        self
    }

    /// Sets a query string variable of the request.
    #[inline]
    #[must_use]
    pub fn param<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key, value);
        self
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl Environment for Request {
    /// Returns the request URI, falling back to the rewritten URL.
    #[inline]
    fn request_uri(&self) -> Option<&str> {
        self.uri.as_deref().or(self.rewrite_url.as_deref())
    }

    #[inline]
    fn http_host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    #[inline]
    fn query(&self) -> Option<&Vars> {
        Some(&self.vars)
    }
}

// ----------------------------------------------------------------------------

impl fmt::Debug for dyn Environment {
    /// Formats the environment for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("request_uri", &self.request_uri())
            .field("http_host", &self.http_host())
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses the query string variables of the given URI.
fn query_vars(uri: &str) -> Vars {
    uri.split_once('?')
        .map(|(_, query)| {
            let query = query.split_once('#').map_or(query, |(q, _)| q);
            Vars::from(query)
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uri_populates_vars() {
        let req = Request::new().uri("/a/b.php?x=1&y=a+b#top");
        assert_eq!(req.var("x"), Some("1"));
        assert_eq!(req.var("y"), Some("a b"));
        assert_eq!(req.var("z"), None);
    }

    #[test]
    fn test_request_uri_falls_back_to_rewrite_url() {
        let req = Request::new().rewrite_url("/rewritten");
        assert_eq!(req.request_uri(), Some("/rewritten"));

        // Request URI takes precedence
        let req = req.uri("/original");
        assert_eq!(req.request_uri(), Some("/original"));
    }

    #[test]
    fn test_rewrite_url_populates_vars() {
        let req = Request::new().rewrite_url("/list.php?sort=name");
        assert_eq!(req.var("sort"), Some("name"));

        // Variables of the request URI take precedence
        let req = Request::new()
            .uri("/index.php?page=2")
            .rewrite_url("/list.php?sort=name");
        assert_eq!(req.var("page"), Some("2"));
        assert_eq!(req.var("sort"), None);

        // Setting the request URI later replaces them
        let req = Request::new()
            .rewrite_url("/list.php?sort=name")
            .uri("/index.php");
        assert_eq!(req.var("sort"), None);
    }

    #[test]
    fn test_unavailable_is_none() {
        let req = Request::new();
        assert_eq!(req.request_uri(), None);
        assert_eq!(req.http_host(), None);
    }
}
