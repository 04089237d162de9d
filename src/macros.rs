#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a run of mnemonic table rows whose keys mirror the constant
/// names in a text module, optionally decorated with a locale suffix:
///
/// ```ignore
/// mnemonics!(builder, english, "", [GOTARMOR, GOTMEGA]);
/// mnemonics!(builder, russian, "_RUS", [GOTARMOR, GOTMEGA]);
/// ```
///
/// expands to `builder.entry("GOTARMOR", english::GOTARMOR)` and so on.
/// Expansion order is declaration order, which the table relies on for
/// its first-declared-wins duplicate policy.
#[macro_export]
macro_rules! mnemonics {
    ($builder:expr, $locale:ident, $suffix:literal, [ $($key:ident),* $(,)? ]) => {{
        let b = &mut $builder;
        $( b.entry(concat!(stringify!($key), $suffix), $locale::$key); )*
    }};
}
