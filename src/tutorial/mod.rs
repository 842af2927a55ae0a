//! Read-only tutorial content.
//!
//! The catalog is a list of sections, each with a handful of command
//! descriptors. A descriptor's `visual` key names which visualization to show
//! beside it; [`Visualization::for_key`] is that lookup.

use crate::core::Vocabulary;
use crate::registry::ActionKind;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

const BUILTIN: &str = include_str!("../../data/tutorials.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog has no sections")]
    Empty,

    #[error("section id {0} appears more than once")]
    DuplicateSection(u32),

    #[error("command {0:?} appears more than once")]
    DuplicateCommand(String),
}

/// One command's tutorial card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    pub name: String,
    pub description: String,
    pub syntax: String,
    /// Icon name, kebab-case.
    pub icon: String,
    pub example: String,
    /// Key picking the visualization; see [`Visualization::for_key`].
    #[serde(default)]
    pub visual: String,
}

impl CommandEntry {
    pub fn visualization(&self) -> Visualization {
        Visualization::for_key(&self.visual)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub commands: Vec<CommandEntry>,
}

crate::vocabulary! {
    /// Static illustrations with no simulation behind them.
    pub enum Illustration {
        Init => "init",
        Status => "status",
    }
}

/// What to render beside a command card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "key", rename_all = "kebab-case")]
pub enum Visualization {
    /// The live simulation, preselected on this action.
    Interactive(ActionKind),
    CommitHistory,
    Illustration(Illustration),
    /// Generic stand-in for commands without a dedicated visual.
    Placeholder,
}

impl Visualization {
    pub fn for_key(key: &str) -> Self {
        if let Some(kind) = ActionKind::parse(key) {
            return Self::Interactive(kind);
        }
        if key == "log" {
            return Self::CommitHistory;
        }
        Illustration::parse(key).map_or(Self::Placeholder, Self::Illustration)
    }
}

/// Completed commands out of the catalog total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub completed: usize,
    pub total: usize,
}

impl Completion {
    /// Whole percentage, rounded to nearest.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.completed * 100 + self.total / 2) / self.total) as u32
    }
}

/// Validated, non-empty list of tutorial sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// The catalog bundled with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let sections: Vec<Section> = serde_json::from_str(json)?;
        Self::new(sections)
    }

    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for section in &sections {
            if !ids.insert(section.id) {
                return Err(CatalogError::DuplicateSection(section.id));
            }
            for command in &section.commands {
                if !names.insert(command.name.as_str()) {
                    return Err(CatalogError::DuplicateCommand(command.name.clone()));
                }
            }
        }
        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn find_section(&self, id: u32) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Section `id`, or the first section when there is none with that id.
    pub fn section(&self, id: u32) -> &Section {
        // `new` rejects empty catalogs, so the first section always exists.
        self.find_section(id).unwrap_or(&self.sections[0])
    }

    pub fn next_id(&self, id: u32) -> Option<u32> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        self.sections.get(index + 1).map(|s| s.id)
    }

    pub fn prev_id(&self, id: u32) -> Option<u32> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        index.checked_sub(1).map(|i| self.sections[i].id)
    }

    pub fn commands(&self) -> impl Iterator<Item = &CommandEntry> {
        self.sections.iter().flat_map(|s| s.commands.iter())
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.commands().find(|c| c.name == name)
    }

    pub fn total_commands(&self) -> usize {
        self.sections.iter().map(|s| s.commands.len()).sum()
    }

    /// Progress counting only names that exist in this catalog.
    pub fn completion(&self, completed: &BTreeSet<String>) -> Completion {
        Completion {
            completed: self
                .commands()
                .filter(|c| completed.contains(&c.name))
                .count(),
            total: self.total_commands(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn builtin_catalog_loads() {
        let catalog = builtin();
        assert_eq!(catalog.sections().len(), 7);
        assert_eq!(catalog.total_commands(), 18);
        assert_eq!(catalog.section(1).title, "Getting Started with Git");
    }

    #[test]
    fn unknown_section_falls_back_to_first() {
        let catalog = builtin();
        assert_eq!(catalog.section(99).id, 1);
        assert!(catalog.find_section(99).is_none());
    }

    #[test]
    fn navigation_stops_at_the_ends() {
        let catalog = builtin();
        assert_eq!(catalog.prev_id(1), None);
        assert_eq!(catalog.next_id(1), Some(2));
        assert_eq!(catalog.next_id(7), None);
        assert_eq!(catalog.prev_id(7), Some(6));
    }

    #[test]
    fn visual_keys_map_to_visualizations() {
        assert_eq!(
            Visualization::for_key("add"),
            Visualization::Interactive(ActionKind::Add)
        );
        assert_eq!(Visualization::for_key("log"), Visualization::CommitHistory);
        assert_eq!(
            Visualization::for_key("status"),
            Visualization::Illustration(Illustration::Status)
        );
        assert_eq!(Visualization::for_key("stash"), Visualization::Placeholder);
        assert_eq!(Visualization::for_key(""), Visualization::Placeholder);

        let catalog = builtin();
        let revert = catalog.command("Git Revert").unwrap();
        assert_eq!(
            revert.visualization(),
            Visualization::Interactive(ActionKind::Revert)
        );
    }

    #[test]
    fn completion_ignores_unknown_names() {
        let catalog = builtin();
        let done: BTreeSet<String> = ["Git Add", "Git Commit", "not a command"]
            .into_iter()
            .map(String::from)
            .collect();
        let completion = catalog.completion(&done);
        assert_eq!(completion.completed, 2);
        assert_eq!(completion.total, 18);
        assert_eq!(completion.percent(), 11);
    }

    #[test]
    fn rejects_bad_catalogs() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::Empty)));
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Parse(_))
        ));

        let section = r#"{"id": 1, "title": "t", "description": "d", "commands": []}"#;
        let twice = format!("[{section}, {section}]");
        assert!(matches!(
            Catalog::from_json(&twice),
            Err(CatalogError::DuplicateSection(1))
        ));
    }

    #[test]
    fn visualization_serializes_with_tag() {
        let json = serde_json::to_value(Visualization::Interactive(ActionKind::Push)).unwrap();
        assert_eq!(json, serde_json::json!({"type": "interactive", "key": "push"}));
    }
}
