/// Returns early with a validation error when the condition does not hold.
///
/// ```
/// # fn check(inputs: &[&str]) -> sluice_core::Result<()> {
/// sluice_core::ensure_valid!(!inputs.is_empty(), "relation must have at least one input node");
/// # Ok(())
/// # }
/// # assert!(check(&[]).unwrap_err().is_validation());
/// ```
#[macro_export]
macro_rules! ensure_valid {
    ($cond:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::Error::validation(format!($($arg)*)));
        }
    };
}
