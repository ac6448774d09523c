// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types shared by the engine and its output layer.

use failure::Fail;

/// Everything that can go wrong while configuring, running, or
/// writing out a fractal.  Engine errors are precondition violations
/// raised before any state changes.
#[derive(Debug, Clone, PartialEq, Fail)]
pub enum FractalError {
    /// A geometry or configuration parameter is out of range.
    #[fail(display = "invalid argument: {}", _0)]
    InvalidArgument(String),

    /// The operation is not allowed in the scheduler's current state.
    #[fail(display = "invalid state: {}", _0)]
    InvalidState(String),

    /// An image could not be encoded or written.
    #[fail(display = "output failure: {}", _0)]
    Output(String),
}

impl FractalError {
    pub(crate) fn argument<S: Into<String>>(msg: S) -> Self {
        FractalError::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FractalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_category() {
        let e = FractalError::argument("spike count must be at least 3");
        assert_eq!(
            e.to_string(),
            "invalid argument: spike count must be at least 3"
        );
        let e = FractalError::InvalidState("already running".to_string());
        assert_eq!(e.to_string(), "invalid state: already running");
    }
}
