// view
/// Build a [`View`](crate::view::View) from a literal field/relation tree:
///
/// ```ignore
/// let v = view!({
///     fields: ["id", "title"],
///     relations: {
///         language: { fields: ["code"] },
///     },
/// });
/// ```
#[macro_export]
macro_rules! view {
    ({
        fields: [$($field:expr),* $(,)?]
        $(, relations: { $($name:ident: $nested:tt),* $(,)? })?
        $(,)?
    }) => {{
        let mut v = $crate::view::View::new();
        $(
            v = v.field($field);
        )*
        $($(
            v = v.relation(stringify!($name), $crate::view!($nested));
        )*)?
        v
    }};
}
