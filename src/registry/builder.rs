//! Builders for constructing actions and registries.

use super::action::{Action, ActionKind, Icon, TransformFn};
use super::error::BuildError;
use super::Registry;
use crate::core::Zone;
use std::collections::HashSet;

/// Builder for constructing actions with a fluent API.
#[derive(Default)]
pub struct ActionBuilder {
    kind: Option<ActionKind>,
    command: Option<String>,
    description: String,
    zones: Vec<Zone>,
    icon: Option<Icon>,
    transform: Option<TransformFn>,
}

impl ActionBuilder {
    /// Create a new action builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the action kind (required).
    pub fn kind(mut self, kind: ActionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the displayed command text (required).
    pub fn command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a zone the action touches. Repeats are ignored.
    pub fn zone(mut self, zone: Zone) -> Self {
        if !self.zones.contains(&zone) {
            self.zones.push(zone);
        }
        self
    }

    /// Set the icon. Defaults to [`Icon::GitCommit`].
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the graph transform (required).
    pub fn transform(mut self, transform: TransformFn) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Build the action.
    pub fn build(self) -> Result<Action, BuildError> {
        let kind = self.kind.ok_or(BuildError::MissingKind)?;
        let command = self.command.ok_or(BuildError::MissingCommand)?;
        let transform = self.transform.ok_or(BuildError::MissingTransform)?;
        if self.zones.is_empty() {
            return Err(BuildError::NoZones(kind));
        }

        Ok(Action {
            kind,
            command,
            description: self.description,
            zones: self.zones,
            icon: self.icon.unwrap_or(Icon::GitCommit),
            transform,
        })
    }
}

/// Builder for constructing registries.
#[derive(Default)]
pub struct RegistryBuilder {
    actions: Vec<Action>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action using a builder.
    /// Returns an error if the builder fails validation.
    pub fn action(mut self, builder: ActionBuilder) -> Result<Self, BuildError> {
        self.actions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built action.
    pub fn add_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Build the registry, keeping insertion order.
    pub fn build(self) -> Result<Registry, BuildError> {
        if self.actions.is_empty() {
            return Err(BuildError::NoActions);
        }

        let mut seen = HashSet::new();
        if let Some(repeat) = self.actions.iter().find(|a| !seen.insert(a.kind)) {
            return Err(BuildError::DuplicateAction(repeat.kind));
        }

        Ok(Registry::from_actions(self.actions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::transforms;

    fn fetch_builder() -> ActionBuilder {
        ActionBuilder::new()
            .kind(ActionKind::Fetch)
            .command("git fetch")
            .zone(Zone::Remote)
            .zone(Zone::Local)
            .transform(transforms::fetch)
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = ActionBuilder::new().command("git add").build();
        assert_eq!(result.unwrap_err(), BuildError::MissingKind);

        let result = ActionBuilder::new().kind(ActionKind::Add).build();
        assert_eq!(result.unwrap_err(), BuildError::MissingCommand);

        let result = ActionBuilder::new()
            .kind(ActionKind::Add)
            .command("git add")
            .build();
        assert_eq!(result.unwrap_err(), BuildError::MissingTransform);
    }

    #[test]
    fn builder_requires_a_zone() {
        let result = ActionBuilder::new()
            .kind(ActionKind::Add)
            .command("git add")
            .transform(transforms::add)
            .build();
        assert_eq!(result.unwrap_err(), BuildError::NoZones(ActionKind::Add));
    }

    #[test]
    fn builder_deduplicates_zones_and_defaults_icon() {
        let action = fetch_builder().zone(Zone::Remote).build().unwrap();
        assert_eq!(action.zones, vec![Zone::Remote, Zone::Local]);
        assert_eq!(action.icon, Icon::GitCommit);
    }

    #[test]
    fn registry_builder_requires_actions() {
        let result = RegistryBuilder::new().build();
        assert!(matches!(result, Err(BuildError::NoActions)));
    }

    #[test]
    fn registry_builder_rejects_duplicates() {
        let result = RegistryBuilder::new()
            .action(fetch_builder())
            .and_then(|b| b.action(fetch_builder()))
            .and_then(RegistryBuilder::build);
        assert!(matches!(
            result,
            Err(BuildError::DuplicateAction(ActionKind::Fetch))
        ));
    }

    #[test]
    fn fluent_api_builds_registry() {
        let registry = RegistryBuilder::new()
            .action(fetch_builder())
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get(ActionKind::Fetch).is_some());
        assert!(registry.get(ActionKind::Add).is_none());
    }
}
