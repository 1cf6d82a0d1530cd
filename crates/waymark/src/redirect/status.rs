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

//! Redirect status.

use std::fmt;

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl AsRef<str> for Status {
    /// Returns the string representation.
    #[inline]
    fn as_ref(&self) -> &str {
        self.name()
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Status {
    /// Formats the status for display.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let code = *self as u16;
        f.write_str(code.to_string().as_str())?;
        f.write_str(" ")?;
        f.write_str(self.name())
    }
}

// ----------------------------------------------------------------------------
// Macros
// ----------------------------------------------------------------------------

/// Defines and implements redirect status codes.
macro_rules! define_and_impl_status {
    (
        $(
            // Status definition
            $(#[$comment:meta])*
            $name:ident = $code:literal, $reason:literal
        ),+
        $(,)?
    ) => {
        /// Redirect status.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        pub enum Status {
            $(
                $(#[$comment])*
                $name = $code,
            )+
        }

        impl Status {
            /// Returns the status code.
            ///
            /// # Examples
            ///
            /// ```
            /// use waymark::Status;
            ///
            /// // Obtain status code
            /// assert_eq!(Status::SeeOther.code(), 303);
            /// ```
            #[must_use]
            pub const fn code(&self) -> u16 {
                *self as u16
            }

            /// Returns the status name.
            ///
            /// # Examples
            ///
            /// ```
            /// use waymark::Status;
            ///
            /// // Obtain status name
            /// assert_eq!(Status::MovedPermanently.name(), "Moved Permanently");
            /// ```
            #[must_use]
            pub const fn name(&self) -> &'static str {
                match self {
                    $(
                        Status::$name => $reason,
                    )+
                }
            }
        }

        impl TryFrom<u16> for Status {
            type Error = u16;

            /// Creates a redirect status from a status code.
            ///
            /// Status codes that don't denote a redirect are handed back.
            fn try_from(value: u16) -> Result<Self, Self::Error> {
                match value {
                    $(
                        $code => Ok(Status::$name),
                    )+
                    _ => Err(value),
                }
            }
        }
    };
}

// ----------------------------------------------------------------------------

define_and_impl_status! {
    /// 301 Moved Permanently
    MovedPermanently = 301, "Moved Permanently",
    /// 302 Found
    #[default]
    Found = 302, "Found",
    /// 303 See Other
    SeeOther = 303, "See Other",
    /// 307 Temporary Redirect
    TemporaryRedirect = 307, "Temporary Redirect",
    /// 308 Permanent Redirect
    PermanentRedirect = 308, "Permanent Redirect",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from() {
        assert_eq!(Status::try_from(302_u16), Ok(Status::Found));
        assert_eq!(Status::try_from(308_u16), Ok(Status::PermanentRedirect));
        assert_eq!(Status::try_from(200_u16), Err(200));
    }

    #[test]
    fn test_display() {
        let status = Status::TemporaryRedirect;
        assert_eq!(status.to_string(), "307 Temporary Redirect");
        assert_eq!(Status::default(), Status::Found);
    }
}
