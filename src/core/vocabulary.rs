//! The `Vocabulary` trait for closed, string-named enumerations.
//!
//! Zones, node kinds, file states, action kinds and the other fixed sets the
//! simulation talks about are all small enums with a stable wire name. This
//! trait gives them a uniform, pure interface for display and lookup.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for closed enumerations with stable names.
///
/// All methods are pure. Implementations are normally generated by the
/// [`vocabulary!`](crate::vocabulary) macro rather than written by hand.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: members are small values used as map keys
/// - `Debug`: members must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: members travel through JSON as their name
///
/// # Example
///
/// ```rust
/// use gitfit::core::{Vocabulary, Zone};
///
/// assert_eq!(Zone::Staging.name(), "staging");
/// assert_eq!(Zone::parse("remote"), Some(Zone::Remote));
/// assert_eq!(Zone::ALL.len(), 4);
/// ```
pub trait Vocabulary:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Stable wire name of the member.
    fn name(&self) -> &'static str;

    /// Look a member up by its wire name.
    ///
    /// Matching is exact; there is no case folding.
    fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|member| member.name() == name)
    }

    /// Position of the member in [`Vocabulary::ALL`].
    fn ordinal(&self) -> usize {
        Self::ALL
            .iter()
            .position(|member| member == self)
            .unwrap_or(Self::ALL.len())
    }
}
