/// Asserts that an expression matches a pattern, optionally with a guard.
///
/// The guard sees the bindings of the pattern by reference.
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(if $guard:expr)? $(,)?) => {{
        let value = $expr;
        #[allow(unused_variables, reason = "bindings are only used by the guard")]
        let matched = match &value {
            $pat $(if $guard)? => true,
            _ => false,
        };
        ::core::assert!(
            matched,
            "value {:?} did not match pattern {}",
            value,
            ::core::stringify!($pat $(if $guard)?)
        );
    }};
}
