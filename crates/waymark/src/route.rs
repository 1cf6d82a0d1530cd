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

//! Reverse routing.

use std::fmt;

use crate::url::Vars;

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Reverse routing strategy.
///
/// Reverse routing rewrites URLs right before they're emitted, e.g., to turn
/// internal paths and query strings into pretty or short URLs. The strategy
/// is configured on the [`Context`][] and invoked with the fully resolved path
/// and the query string variables of each [`Url`][] that has reverse routing
/// enabled, which is the default. Both can be modified in place.
///
/// Besides closures which exactly match the signature of [`rewrite`][], this
/// trait can be implemented for routers that own their routing tables.
///
/// [`Context`]: crate::Context
/// [`Url`]: crate::Url
/// [`rewrite`]: ReverseRoute::rewrite
///
/// # Examples
///
/// ```
/// use waymark::{Context, Vars};
///
/// // Create context with reverse routing strategy
/// let context = Context::builder()
///     .reverse_route(|path: &mut String, vars: &mut Vars| {
///         if let Some(id) = vars.remove("id") {
///             path.push_str(&id);
///             path.push('/');
///         }
///     })
///     .build();
///
/// // Create URL, which is rewritten when formatted
/// let url = context.url("/article/?id=42");
/// assert_eq!(url.relative(), "/article/42/");
/// ```
pub trait ReverseRoute: Send + Sync + 'static {
    /// Rewrites the given path and query string variables.
    fn rewrite(&self, path: &mut String, vars: &mut Vars);
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl fmt::Debug for dyn ReverseRoute {
    /// Formats the reverse routing strategy for debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("dyn ReverseRoute")
    }
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl<F> ReverseRoute for F
where
    F: Fn(&mut String, &mut Vars) + Send + Sync + 'static,
{
    #[inline]
    fn rewrite(&self, path: &mut String, vars: &mut Vars) {
        self(path, vars);
    }
}
