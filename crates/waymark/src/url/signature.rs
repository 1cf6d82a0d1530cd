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

//! URL signature.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

use super::Url;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Secret used for signing and validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Secret<'a> {
    /// Default secret of the context.
    Default,
    /// Explicit secret.
    Key(&'a str),
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl Url<'_> {
    /// Computes the signature of the URL.
    ///
    /// The signature is an HMAC-SHA1 over the canonical form of the URL, which
    /// is its absolute form without reverse routing, with the `hash` variable
    /// removed and all other variables sorted by key. Signing the absolute form
    /// binds the signature to scheme and host, and sorting makes it independent
    /// of the order in which variables were added.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::MissingSecret`] if the given secret is
    /// empty, or the default secret is requested, but not configured.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use waymark::{Context, Secret};
    ///
    /// // Create context and URLs
    /// let context = Context::builder()
    ///     .base_url("http://example.com/")
    ///     .build();
    /// let a = context.url("/download?file=a.pdf&user=1");
    /// let b = context.url("/download?user=1&file=a.pdf");
    ///
    /// // Compute signatures
    /// let secret = Secret::Key("s3cr3t");
    /// assert_eq!(a.signature(secret)?, b.signature(secret)?);
    /// # Ok(())
    /// # }
    /// ```
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn signature(&self, secret: Secret<'_>) -> Result<String> {
        let secret = match secret {
            Secret::Default => self.context.default_secret(),
            Secret::Key(key) => Some(key),
        };
        let secret = secret
            .filter(|secret| !secret.is_empty())
            .ok_or(Error::MissingSecret)?;

        // Create canonical form without the signature itself
        let mut url = self.clone();
        let mut vars = url.vars().into_owned();
        vars.remove("hash");
        vars.sort();
        url.set_reverse_route(false).set_query(vars);

        // Compute HMAC over the absolute form of the URL
        // HMAC accepts keys of any length
        let mut mac = Hmac::<Sha1>::new_from_slice(secret.as_bytes())
            .expect("invariant");
        mac.update(url.absolute().as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Returns whether the `hash` variable matches the signature of the URL.
    ///
    /// Signatures are compared in constant time.
    ///
    /// # Errors
    ///
    /// This method returns [`Error::MissingSecret`] if no secret is available.
    pub fn is_valid(&self, secret: Secret<'_>) -> Result<bool> {
        let signature = self.signature(secret)?;
        Ok(self.var("hash").is_some_and(|hash| {
            hash.as_bytes().ct_eq(signature.as_bytes()).into()
        }))
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<'a> From<&'a str> for Secret<'a> {
    /// Creates an explicit secret from a string.
    #[inline]
    fn from(value: &'a str) -> Self {
        Secret::Key(value)
    }
}
