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

//! URL.

use std::borrow::Cow;
use std::fmt;

use crate::context::Context;
use crate::error::{Error, Result};
use crate::redirect::{Redirect, Status};

pub(crate) mod encoding;
mod parser;
mod query;
mod signature;

use encoding::{encode, encode_path};
pub use parser::{Components, parse};
pub use query::{Query, Vars};
pub use signature::Secret;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// URL.
///
/// This is a mutable builder for URLs, which accepts URLs in any format, i.e.,
/// full external URLs like `http://example.com/test/`, paths relative to the
/// base URL like `test/hello/`, absolute project paths like `/test/hello/`,
/// and bare query strings and fragments like `?foo=1&bar=2#top`.
///
/// The path is interpreted when the URL is formatted, depending on its shape:
///
/// - `""`: path of the current script.
/// - `/…`: absolute path, used as is.
/// - `~…`: path relative to the directory of the current script.
/// - `…`: path relative to the path of the base URL.
///
/// Components are percent-decoded when parsing, and percent-encoded when
/// formatting, so they're always stored in their decoded form.
///
/// # Examples
///
/// ```
/// use waymark::Context;
///
/// // Create context and URL
/// let context = Context::builder()
///     .base_url("http://example.com/app/")
///     .build();
/// let mut url = context.url("page?x=1");
///
/// // Add and remove query string variables
/// url.add_vars([("y", "2"), ("z", "3")], true);
/// url.remove_var("x");
/// assert_eq!(url.relative(), "/app/page?y=2&z=3");
/// assert_eq!(url.absolute(), "http://example.com/app/page?y=2&z=3");
/// ```
#[derive(Clone, Debug)]
pub struct Url<'a> {
    /// Context.
    context: &'a Context,
    /// Scheme.
    scheme: Option<String>,
    /// Host.
    host: Option<String>,
    /// Port.
    port: Option<u16>,
    /// User.
    user: Option<String>,
    /// Password.
    password: Option<String>,
    /// Path.
    path: Option<String>,
    /// Query string.
    query: Query,
    /// Fragment.
    fragment: Option<String>,
    /// Whether reverse routing is enabled.
    reverse_route: bool,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<'a> Url<'a> {
    /// Creates a URL from the given string.
    ///
    /// Note that the canonical way to create a [`Url`] is to invoke the
    /// [`Context::url`] method.
    pub fn new<S>(context: &'a Context, value: S) -> Self
    where
        S: AsRef<str>,
    {
        let mut url = Self {
            context,
            scheme: None,
            host: None,
            port: None,
            user: None,
            password: None,
            path: Some(String::new()),
            query: Query::default(),
            fragment: None,
            reverse_route: true,
        };
        url.set_url(value);
        url
    }

    /// Replaces all components with the components of the given string.
    ///
    /// Components that are not part of the string are unset, except for the
    /// path, which is set to the empty string denoting the current script, and
    /// the query string, which is set to empty variables. Strings that can't be
    /// parsed result in an empty URL.
    pub fn set_url<S>(&mut self, value: S) -> &mut Self
    where
        S: AsRef<str>,
    {
        let components = parse(value.as_ref()).unwrap_or_default();
        self.scheme = components.scheme;
        self.host = components.host;
        self.port = components.port;
        self.user = components.user;
        self.password = components.password;
        self.path = Some(components.path);
        self.query = components.query.map(Query::Raw).unwrap_or_default();
        self.fragment = components.fragment;
        self
    }

    /// Adds the given query string variables.
    ///
    /// Existing variables are only replaced if `overwrite` is set. Keys which
    /// consist of digits only are special, as their value is interpreted as
    /// the name of a variable, which is copied from the query string of the
    /// current request, if it exists there. This is the same as calling
    /// [`Url::copy_vars`], which should be preferred.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::{Context, Request};
    ///
    /// // Create context for request
    /// let context = Context::new()
    ///     .with_request(Request::new().uri("/list?sort=name&page=3"));
    ///
    /// // Add query string variables
    /// let mut url = context.url("/list?page=1");
    /// url.add_vars([("page", "2"), ("0", "sort")], false);
    /// assert_eq!(url.query_string(), "page=1&sort=name");
    /// ```
    pub fn add_vars<I, K, V>(&mut self, vars: I, overwrite: bool) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let context = self.context;
        let target = self.query.normalize();
        for (key, value) in vars {
            let key: String = key.into();
            if is_index(&key) {
                let name: String = value.into();
                copy_var(context, target, &name);
            } else if overwrite || !target.contains(&key) {
                target.insert(key, value);
            }
        }
        self
    }

    /// Copies the given variables from the query string of the current request.
    ///
    /// Variables that don't exist in the current request are skipped, and
    /// existing variables are always replaced.
    pub fn copy_vars<I, N>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let context = self.context;
        let target = self.query.normalize();
        for name in names {
            copy_var(context, target, name.as_ref());
        }
        self
    }

    /// Inserts the given query string variable, replacing an existing one.
    pub fn insert_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.query.normalize().insert(key, value);
        self
    }

    /// Removes the given query string variable.
    pub fn remove_var<K>(&mut self, key: K) -> &mut Self
    where
        K: AsRef<str>,
    {
        self.query.normalize().remove(key);
        self
    }

    /// Removes the given query string variables.
    pub fn remove_vars<I, K>(&mut self, keys: I) -> &mut Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let target = self.query.normalize();
        for key in keys {
            target.remove(key);
        }
        self
    }

    /// Returns the value of the given query string variable.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.query.vars() {
            Cow::Borrowed(vars) => vars.get(name).map(Cow::Borrowed),
            Cow::Owned(mut vars) => vars.remove(name).map(Cow::Owned),
        }
    }

    /// Returns the query string variables.
    ///
    /// Raw query strings are parsed, but kept in their raw representation.
    #[inline]
    #[must_use]
    pub fn vars(&self) -> Cow<'_, Vars> {
        self.query.vars()
    }

    /// Returns the query string.
    ///
    /// Variables are joined with `&`, while raw query strings are returned
    /// verbatim.
    #[inline]
    #[must_use]
    pub fn query_string(&self) -> String {
        self.query.to_string()
    }

    /// Returns whether the URL is absolute.
    ///
    /// A URL is absolute if any of scheme, user, password, host or port are
    /// set and not empty.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        is_set(self.scheme.as_deref()) || self.has_authority()
    }

    /// Returns whether the URL has an authority.
    ///
    /// A URL has an authority if any of user, password, host or port are set
    /// and not empty. Port `0` counts as unset.
    #[must_use]
    pub fn has_authority(&self) -> bool {
        is_set(self.user.as_deref())
            || is_set(self.password.as_deref())
            || is_set(self.host.as_deref())
            || self.port.is_some_and(|port| port != 0)
    }

    /// Returns the base of the URL, i.e., everything up to the path.
    ///
    /// Scheme and host fall back to the base URL of the context, if not set.
    /// If the URL is not absolute, the base is empty.
    #[must_use]
    pub fn base(&self) -> String {
        if !self.is_absolute() {
            return String::new();
        }

        // Append scheme, which might be omitted for protocol-relative URLs
        let base = self.context.base_url();
        let mut value = String::new();
        let scheme = self.scheme.as_deref().filter(|s| !s.is_empty());
        let scheme = scheme.unwrap_or(&base.scheme);
        if !scheme.is_empty() {
            value.push_str(scheme);
            value.push(':');
        }

        // Append authority, if any
        if self.has_authority() {
            value.push_str("//");
            if is_set(self.user.as_deref()) || is_set(self.password.as_deref())
            {
                let user = self.user.as_deref().unwrap_or_default();
                let password = self.password.as_deref().unwrap_or_default();
                value.push_str(&encode(user));
                value.push(':');
                value.push_str(&encode(password));
                value.push('@');
            }

            // Append host, falling back to the host of the base URL
            let host = self.host.as_deref().filter(|h| !h.is_empty());
            value.push_str(host.unwrap_or(&base.host));
            if let Some(port) = self.port.filter(|&port| port != 0) {
                value.push(':');
                value.push_str(&port.to_string());
            }
        }
        value
    }

    /// Returns the relative URL, i.e., path, query string and fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Context;
    ///
    /// // Create context and URL
    /// let context = Context::builder()
    ///     .base_url("http://example.com/app/")
    ///     .build();
    /// let url = context.url("http://other.com/a b?q=1#top");
    /// assert_eq!(url.relative(), "/a%20b?q=1#top");
    /// ```
    #[must_use]
    pub fn relative(&self) -> String {
        self.format_relative("&", None)
    }

    /// Returns the relative URL with the given separator, optionally signed.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::MissingSecret`] if the URL should be signed,
    /// but no secret is available.
    pub fn relative_with(
        &self,
        separator: &str,
        secret: Option<Secret<'_>>,
    ) -> Result<String> {
        let hash = secret.map(|secret| self.signature(secret)).transpose()?;
        Ok(self.format_relative(separator, hash))
    }

    /// Returns the URL, which is only absolute if the URL is absolute.
    #[must_use]
    pub fn url(&self) -> String {
        format!("{}{}", self.base(), self.relative())
    }

    /// Returns the URL with the given separator, optionally signed.
    pub fn url_with(
        &self,
        separator: &str,
        secret: Option<Secret<'_>>,
    ) -> Result<String> {
        let relative = self.relative_with(separator, secret)?;
        Ok(format!("{}{relative}", self.base()))
    }

    /// Returns the absolute URL.
    ///
    /// If the URL is not absolute, scheme, credentials, host and port are
    /// taken from the base URL, falling back to the host of the request.
    #[must_use]
    pub fn absolute(&self) -> String {
        self.format_absolute(self.relative())
    }

    /// Returns the absolute URL with the given separator, optionally signed.
    pub fn absolute_with(
        &self,
        separator: &str,
        secret: Option<Secret<'_>>,
    ) -> Result<String> {
        self.relative_with(separator, secret)
            .map(|relative| self.format_absolute(relative))
    }

    /// Creates a redirect to the absolute URL, optionally signed.
    ///
    /// The returned [`Redirect`] must be sent by the caller, and is expected to
    /// terminate the handling of the current request.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::RedirectPrevented`] carrying the absolute
    /// URL, if redirects are prevented by the context.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use waymark::{Context, Status};
    ///
    /// // Create context and URL
    /// let context = Context::builder()
    ///     .base_url("http://example.com/")
    ///     .build();
    /// let url = context.url("/login");
    ///
    /// // Create redirect
    /// let redirect = url.redirect(Status::SeeOther, None)?;
    /// assert_eq!(redirect.location, "http://example.com/login");
    /// # Ok(())
    /// # }
    /// ```
    pub fn redirect(
        &self,
        status: Status,
        secret: Option<Secret<'_>>,
    ) -> Result<Redirect> {
        let location = self.absolute_with("&", secret)?;
        if self.context.prevent_redirect() {
            #[cfg(feature = "tracing")]
            tracing::debug!(url = %location, "redirect prevented");
            return Err(Error::RedirectPrevented { url: location });
        }
        Ok(Redirect::new(status, location))
    }

    /// Formats the relative URL, adding the given signature, if any.
    fn format_relative(&self, separator: &str, hash: Option<String>) -> String {
        let mut query = self.query.clone();
        if let Some(hash) = hash {
            match &mut query {
                Query::Structured(vars) => vars.insert("hash", hash),
                Query::Raw(raw) => {
                    if !raw.is_empty() {
                        raw.push('&');
                    }
                    raw.push_str("hash=");
                    raw.push_str(&hash);
                }
            }
        }

        // Resolve path and apply reverse routing, if enabled
        let mut path = self.resolve_path();
        if self.reverse_route {
            if let Some(route) = self.context.reverse_route() {
                route.rewrite(&mut path, query.normalize());
            }
        }

        // Append query string and fragment, if any
        let mut value = encode_path(&path).into_owned();
        let query = query.to_string_with(separator);
        if !query.is_empty() {
            value.push('?');
            value.push_str(&query);
        }
        let fragment = self.fragment.as_deref().filter(|f| !f.is_empty());
        if let Some(fragment) = fragment {
            value.push('#');
            value.push_str(&encode(fragment));
        }
        value
    }

    /// Formats the absolute URL from the given relative URL.
    fn format_absolute(&self, relative: String) -> String {
        if self.is_absolute() {
            format!("{}{relative}", self.base())
        } else {
            format!("{}{relative}", self.context.origin())
        }
    }

    /// Resolves the path, depending on its shape.
    fn resolve_path(&self) -> String {
        match self.path.as_deref() {
            None => String::new(),
            Some("") => self.context.script_path(),
            Some(path) if path.starts_with('/') => path.to_string(),
            Some(path) => {
                if let Some(rest) = path.strip_prefix('~') {
                    let script = self.context.script_path();
                    let dir = match script.rfind('/') {
                        Some(n) => &script[..n],
                        None => script.as_str(),
                    };
                    format!("{dir}{rest}")
                } else {
                    format!("{}{path}", self.context.base_url().path)
                }
            }
        }
    }
}

#[allow(clippy::must_use_candidate)]
impl Url<'_> {
    /// Returns the scheme.
    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Sets the scheme.
    #[inline]
    pub fn set_scheme(&mut self, scheme: Option<&str>) -> &mut Self {
        self.scheme = scheme.map(String::from);
        self
    }

    /// Returns the host.
    #[inline]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Sets the host.
    #[inline]
    pub fn set_host(&mut self, host: Option<&str>) -> &mut Self {
        self.host = host.map(String::from);
        self
    }

    /// Returns the port.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Sets the port.
    #[inline]
    pub fn set_port(&mut self, port: Option<u16>) -> &mut Self {
        self.port = port;
        self
    }

    /// Returns the user.
    #[inline]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Sets the user.
    #[inline]
    pub fn set_user(&mut self, user: Option<&str>) -> &mut Self {
        self.user = user.map(String::from);
        self
    }

    /// Returns the password.
    #[inline]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Sets the password.
    #[inline]
    pub fn set_password(&mut self, password: Option<&str>) -> &mut Self {
        self.password = password.map(String::from);
        self
    }

    /// Returns the path.
    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Sets the path.
    ///
    /// The empty string denotes the current script, and a leading `~` denotes
    /// a path relative to the directory of the current script. If no path is
    /// set, the formatted URL has no path.
    #[inline]
    pub fn set_path(&mut self, path: Option<&str>) -> &mut Self {
        self.path = path.map(String::from);
        self
    }

    /// Returns the query string.
    #[inline]
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Sets the query string, either raw or as variables.
    #[inline]
    pub fn set_query<Q>(&mut self, query: Q) -> &mut Self
    where
        Q: Into<Query>,
    {
        self.query = query.into();
        self
    }

    /// Returns the fragment.
    #[inline]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Sets the fragment.
    #[inline]
    pub fn set_fragment(&mut self, fragment: Option<&str>) -> &mut Self {
        self.fragment = fragment.map(String::from);
        self
    }

    /// Returns whether reverse routing is enabled.
    #[inline]
    pub fn reverse_route(&self) -> bool {
        self.reverse_route
    }

    /// Enables or disables reverse routing.
    #[inline]
    pub fn set_reverse_route(&mut self, value: bool) -> &mut Self {
        self.reverse_route = value;
        self
    }

    /// Returns the context.
    #[inline]
    pub fn context(&self) -> &Context {
        self.context
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Display for Url<'_> {
    /// Formats the URL for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Returns whether the given component is set and not empty.
#[inline]
fn is_set(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

/// Returns whether the given key is an index, i.e., consists of digits only.
#[inline]
fn is_index(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|byte| byte.is_ascii_digit())
}

/// Copies a variable from the query string of the current request.
fn copy_var(context: &Context, target: &mut Vars, name: &str) {
    let request = context.request();
    if let Some(value) = request.and_then(|req| req.var(name)) {
        target.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Request;

    fn context() -> Context {
        Context::builder()
            .base_url("http://example.com/app/")
            .secret("s3cr3t")
            .build()
    }

    #[test]
    fn test_is_absolute() {
        let context = Context::new();
        let test_cases = vec![
            ("http://example.com/", true),
            ("//example.com/", true),
            ("http:/path", true),
            ("/path", false),
            ("path?x=1", false),
            ("?x=1#top", false),
        ];
        for (value, expected) in test_cases {
            let url = context.url(value);
            assert_eq!(url.is_absolute(), expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_resolve_path() {
        let context = context()
            .with_request(Request::new().uri("/a/b.php?page=1"));
        let test_cases = vec![
            ("", "/a/b.php"),
            ("/x", "/x"),
            ("~/x", "/a/x"),
            ("x/y", "/app/x/y"),
            ("?q=1", "/a/b.php?q=1"),
        ];
        for (value, expected) in test_cases {
            let url = context.url(value);
            assert_eq!(url.relative(), expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_without_path() {
        let context = Context::new();
        let mut url = context.url("?a=1");
        assert_eq!(url.relative(), "/?a=1");
        url.set_path(None);
        assert_eq!(url.relative(), "?a=1");
    }

    #[test]
    fn test_absolute() {
        let context = context();
        let test_cases = vec![
            ("page?x=1", "http://example.com/app/page?x=1"),
            ("/page", "http://example.com/page"),
            ("https://other.org/x", "https://other.org/x"),
            ("//cdn.example.org/x.js", "http://cdn.example.org/x.js"),
        ];
        for (value, expected) in test_cases {
            let url = context.url(value);
            assert_eq!(url.absolute(), expected, "Failed for: {value}");
        }
    }

    #[test]
    fn test_port_zero_is_unset() {
        let context = Context::new();
        let mut url = context.url("/a");
        url.set_port(Some(0));
        assert!(!url.has_authority());
        assert!(!url.is_absolute());
        assert_eq!(url.url(), "/a");

        // Port is omitted, while the host is kept
        let url = context.url("http://example.com:0/a");
        assert_eq!(url.url(), "http://example.com/a");
    }

    #[test]
    fn test_round_trip() {
        let context = Context::new();
        let test_cases = vec![
            "/a%20b",
            "/a%2520b",
            "/a%23b",
            "/a/b?x=1&y=a+b#top",
            "http://u:p%40ss@[::1]:8080/x?q=a+b#f%20g",
            "https://example.com/a;b,c@d",
        ];
        for value in test_cases {
            let url = context.url(value);
            assert_eq!(url.url(), value, "Failed for: {value}");
        }
    }

    #[test]
    fn test_copy_vars_from_rewrite_url() {
        let context = Context::new()
            .with_request(Request::new().rewrite_url("/list?sort=name"));
        let mut url = context.url("/x");
        url.add_vars([("0", "sort")], true);
        assert_eq!(url.query_string(), "sort=name");
    }

    #[test]
    fn test_protocol_relative() {
        let context = Context::new();
        let url = context.url("//cdn.example.org/x.js");
        assert_eq!(url.url(), "//cdn.example.org/x.js");
    }

    #[test]
    fn test_display() {
        let context = context();
        let value = "http://jane@example.com:8080/a?b=1#c";
        let url = context.url(value);
        assert_eq!(url.to_string(), "http://jane:@example.com:8080/a?b=1#c");
        assert_eq!(context.url("/a b").to_string(), "/a%20b");
    }

    #[test]
    fn test_fragment() {
        let context = Context::new();
        assert_eq!(context.url("/x#a b").relative(), "/x#a%20b");
        assert_eq!(context.url("/x#").relative(), "/x");
    }

    #[test]
    fn test_remove_var_with_duplicates() {
        let context = Context::new();
        let mut url = context.url("/foo/?a=2&a=1");
        assert_eq!(url.var("a").as_deref(), Some("1"));
        url.remove_var("a");
        assert_eq!(url.query_string(), "");
        assert_eq!(url.relative(), "/foo/");
    }

    #[test]
    fn test_add_vars() {
        let context = Context::new();
        let mut url = context.url("/x?a=1");
        url.add_vars([("a", "2"), ("b", "3")], false);
        assert_eq!(url.query_string(), "a=1&b=3");
        url.add_vars([("a", "2")], true);
        assert_eq!(url.query_string(), "a=2&b=3");
        url.remove_vars(["a", "b"]);
        assert!(url.vars().is_empty());
    }

    #[test]
    fn test_copy_vars() {
        let context = Context::new()
            .with_request(Request::new().uri("/list?sort=name&page=3"));
        let mut url = context.url("/x?sort=date");
        url.copy_vars(["sort", "missing"]);
        assert_eq!(url.query_string(), "sort=name");
        url.add_vars([("1", "page")], false);
        assert_eq!(url.query_string(), "sort=name&page=3");
    }

    #[test]
    fn test_separator() {
        let context = Context::new();
        let mut url = context.url("/x");
        url.add_vars([("a", "1"), ("b", "2")], true);
        let value = url.relative_with("&amp;", None).unwrap();
        assert_eq!(value, "/x?a=1&amp;b=2");
    }

    #[test]
    fn test_reverse_route() {
        let context = Context::builder()
            .reverse_route(|path: &mut String, vars: &mut Vars| {
                if let Some(id) = vars.remove("id") {
                    path.push_str(&id);
                    path.push('/');
                }
            })
            .build();
        let mut url = context.url("/article/?id=42&x=1");
        assert_eq!(url.relative(), "/article/42/?x=1");
        url.set_reverse_route(false);
        assert_eq!(url.relative(), "/article/?id=42&x=1");
    }

    #[test]
    fn test_signature_is_order_independent() {
        let context = context();
        let secret = Secret::Default;
        let a = context.url("/download?file=a.pdf&user=1");
        let b = context.url("/download?user=1&file=a.pdf");
        let c = context.url("/download?hash=abc&user=1&file=a.pdf");
        let signature = a.signature(secret).unwrap();
        assert_eq!(signature.len(), 40);
        assert_eq!(signature, b.signature(secret).unwrap());
        assert_eq!(signature, c.signature(secret).unwrap());
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let context = context();
        let url = context.url("/download?file=a.pdf");
        assert_ne!(
            url.signature(Secret::Key("a")).unwrap(),
            url.signature(Secret::Key("b")).unwrap(),
        );
    }

    #[test]
    fn test_signature_with_long_secret() {
        let context = context();
        let url = context.url("/download?file=a.pdf");
        let secret = "k".repeat(512);
        let signature = url.signature(Secret::Key(&secret)).unwrap();
        assert_eq!(signature.len(), 40);
    }

    #[test]
    fn test_signature_without_secret() {
        let context = Context::new();
        let url = context.url("/download?file=a.pdf");
        let res = url.signature(Secret::Default);
        assert!(matches!(res, Err(Error::MissingSecret)));
        let res = url.relative_with("&", Some(Secret::Key("")));
        assert!(matches!(res, Err(Error::MissingSecret)));
    }

    #[test]
    fn test_signed_url_detects_tampering() {
        let context = context();
        let url = context.url("/download?user=1&file=a.pdf");
        let signed = url.absolute_with("&", Some(Secret::Default)).unwrap();
        assert!(signed.starts_with(
            "http://example.com/download?user=1&file=a.pdf&hash="
        ));
        assert!(context.url(&signed).is_valid(Secret::Default).unwrap());

        // Changing a variable or the secret invalidates the signature
        let tampered = signed.replace("user=1", "user=2");
        let url = context.url(&tampered);
        assert!(!url.is_valid(Secret::Default).unwrap());
        let url = context.url(&signed);
        assert!(!url.is_valid(Secret::Key("other")).unwrap());
    }

    #[test]
    fn test_signed_url_without_hash() {
        let context = context();
        let url = context.url("/download?file=a.pdf");
        assert!(!url.is_valid(Secret::Default).unwrap());
    }

    #[test]
    fn test_signed_structured_query() {
        let context = context();
        let mut url = context.url("/x");
        url.add_vars([("b", "2"), ("a", "1")], true);
        let signature = url.signature(Secret::Default).unwrap();
        let value = url.relative_with("&", Some(Secret::Default)).unwrap();
        assert_eq!(value, format!("/x?b=2&a=1&hash={signature}"));
    }

    #[test]
    fn test_validate_request() {
        let context = context();
        let url = context.url("/download?file=a.pdf");
        let signed = url.relative_with("&", Some(Secret::Default)).unwrap();

        // Validate untouched request
        let req = Request::new().uri(signed.as_str());
        let res = context.with_request(req).validate_request(Secret::Default);
        assert!(res.unwrap());

        // Validate request with tampered variable
        let req = Request::new().uri(signed.as_str()).param("file", "b.pdf");
        let res = context.with_request(req).validate_request(Secret::Default);
        assert!(!res.unwrap());
    }

    #[test]
    fn test_redirect() {
        let context = context();
        let url = context.url("login");
        let redirect = url.redirect(Status::MovedPermanently, None).unwrap();
        assert_eq!(redirect.status_code(), 301);
        assert_eq!(redirect.location, "http://example.com/app/login");
    }

    #[test]
    fn test_redirect_prevented() {
        let context = Context::builder()
            .base_url("http://example.com/")
            .prevent_redirect(true)
            .build();
        let url = context.url("/login");
        match url.redirect(Status::Found, None) {
            Err(Error::RedirectPrevented { url }) => {
                assert_eq!(url, "http://example.com/login");
            }
            res => panic!("unexpected result: {res:?}"),
        }
    }
}
