//! Macros for ergonomic key declaration.

/// Declare a fieldless enum usable as a state or event key.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug`, prints its
/// variant name through `Display`, and exposes every variant in `ALL`.
///
/// # Example
///
/// ```
/// use statecraft::key_enum;
///
/// key_enum! {
///     pub enum Light {
///         Red,
///         Yellow,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::ALL.len(), 3);
/// assert_eq!(Light::Yellow.to_string(), "Yellow");
/// ```
#[macro_export]
macro_rules! key_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let name = match self {
                    $(Self::$variant => stringify!($variant)),*
                };
                f.write_str(name)
            }
        }
    };
}
