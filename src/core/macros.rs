//! Macros for declaring closed vocabularies.

/// Declare a closed enum whose variants carry fixed wire names.
///
/// Generates the enum with `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`
/// and serde derives (each variant serializes as its name), an implementation
/// of [`Vocabulary`](crate::core::Vocabulary) and `Display`.
///
/// # Example
///
/// ```
/// use gitfit::core::Vocabulary;
/// use gitfit::vocabulary;
///
/// vocabulary! {
///     pub enum Signal {
///         Go => "go",
///         Stop => "stop",
///     }
/// }
///
/// assert_eq!(Signal::Go.name(), "go");
/// assert_eq!(Signal::parse("stop"), Some(Signal::Stop));
/// assert_eq!(Signal::ALL.len(), 2);
/// assert_eq!(Signal::Stop.to_string(), "stop");
/// ```
#[macro_export]
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $crate::core::Vocabulary for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Vocabulary::name(self))
            }
        }
    };
}
