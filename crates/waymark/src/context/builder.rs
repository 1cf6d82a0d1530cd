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

//! Context builder.

use std::sync::Arc;

use crate::request::Environment;
use crate::route::ReverseRoute;

use super::{BaseUrl, Context};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Context builder.
#[derive(Debug, Default)]
pub struct Builder {
    /// Context under construction.
    context: Context,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Builder {
    /// Creates a context builder.
    ///
    /// Note that the canonical way to create a [`Context`] is to invoke the
    /// [`Context::builder`] method, which creates an instance of [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::context::Builder;
    ///
    /// // Create context builder
    /// let builder = Builder::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    ///
    /// The base URL can be given as a string, which is parsed, or as a
    /// [`BaseUrl`] with individual components.
    ///
    /// # Examples
    ///
    /// ```
    /// use waymark::Context;
    ///
    /// // Create context with base URL
    /// let context = Context::builder()
    ///     .base_url("https://example.com/app/")
    ///     .build();
    /// ```
    #[inline]
    #[must_use]
    pub fn base_url<B>(mut self, base: B) -> Self
    where
        B: Into<BaseUrl>,
    {
        self.context.base = base.into();
        self
    }

    /// Sets the default secret used for signing and validation.
    #[inline]
    #[must_use]
    pub fn secret<S>(mut self, secret: S) -> Self
    where
        S: Into<String>,
    {
        self.context.secret = secret.into();
        self
    }

    /// Sets the reverse routing strategy.
    #[inline]
    #[must_use]
    pub fn reverse_route<R>(mut self, route: R) -> Self
    where
        R: ReverseRoute,
    {
        self.context.route = Some(Arc::new(route));
        self
    }

    /// Sets whether redirects are prevented.
    ///
    /// When enabled, [`Url::redirect`][] returns an error carrying the target
    /// instead of a redirect, which is useful for testing.
    ///
    /// [`Url::redirect`]: crate::Url::redirect
    #[inline]
    #[must_use]
    pub fn prevent_redirect(mut self, value: bool) -> Self {
        self.context.prevent_redirect = value;
        self
    }

    /// Sets the current request.
    #[inline]
    #[must_use]
    pub fn request<E>(mut self, request: E) -> Self
    where
        E: Environment,
    {
        self.context.request = Some(Arc::new(request));
        self
    }

    /// Creates the context.
    #[inline]
    #[must_use]
    pub fn build(self) -> Context {
        self.context
    }
}
