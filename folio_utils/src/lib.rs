pub use folio_utils_derive::trace_instrument;

mod macros;

/// Returns the version of the folio workspace.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use folio_utils::Apply;
    /// fn add_option(a: i32, b: Option<i32>) -> i32 {
    ///     a.apply_map(b, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(add_option(1, None), 1);
    /// assert_eq!(add_option(1, Some(2)), 3);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_map() {
        let builder = String::from("folio").apply_map(Some(7), |s, n| format!("{s}/{n}"));
        assert_eq!(builder, "folio/7");
        assert_eq!(1.apply_map(None::<i32>, |a, b| a + b), 1);
    }

    #[test]
    fn assert_matches_guard() {
        let value: Result<u8, ()> = Ok(7);
        crate::assert_matches!(value, Ok(x) if *x > 5);
        crate::assert_matches!(value, Ok(_));
    }

    #[test]
    #[should_panic(expected = "did not match pattern")]
    fn assert_matches_mismatch() {
        let value: Result<u8, ()> = Err(());
        crate::assert_matches!(value, Ok(_));
    }
}
