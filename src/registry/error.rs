//! Build errors for actions and registries.

use super::action::ActionKind;
use thiserror::Error;

/// Errors that can occur when building actions and registries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Action kind not specified. Call .kind(kind) before .build()")]
    MissingKind,

    #[error("Command text not specified. Call .command(text)")]
    MissingCommand,

    #[error("Transform not specified. Call .transform(fn)")]
    MissingTransform,

    #[error("Action `{0}` involves no zones. Call .zone(zone) at least once")]
    NoZones(ActionKind),

    #[error("No actions defined. Add at least one action")]
    NoActions,

    #[error("Action `{0}` registered twice")]
    DuplicateAction(ActionKind),
}
