// Assertion primitives for load verification and model mirroring
//
// A failed assertion is an ordinary `Error::AssertionFailed` value that
// propagates through the calling test. There is no retry and no batching:
// the first mismatch fails the enclosing test case.

use crate::error::{Error, Result};
use std::fmt::Debug;

/// Asserts that `actual` equals `expected`.
///
/// The failure message embeds both values after the caller-supplied message.
pub fn assert_equals<T>(expected: &T, actual: &T, message: &str) -> Result<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if expected == actual {
        Ok(())
    } else {
        Err(Error::AssertionFailed(format!(
            "{message} (expected {expected:?}, got {actual:?})"
        )))
    }
}

/// Asserts that `value` is present and unwraps it.
pub fn assert_not_null<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| Error::AssertionFailed(message.to_string()))
}
