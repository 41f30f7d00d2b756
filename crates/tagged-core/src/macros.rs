/// Builds a [`Payload`](crate::Payload) from a list of expressions.
///
/// ```
/// let payload = tagged_core::payload![301i64, "/new"];
/// assert_eq!(payload.to_string(), "301, /new");
/// ```
#[macro_export]
macro_rules! payload {
    () => {
        $crate::Payload::new()
    };
    ( $( $value:expr ),+ $(,)? ) => {
        $crate::Payload::from_vec(vec![ $( $crate::Value::from($value), )+ ])
    };
}
