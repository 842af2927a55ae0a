//! A scripted practice terminal.
//!
//! Nothing is parsed or executed. Input is matched against the
//! [`TerminalCommand`] table in declaration order and answered with a canned
//! reply; anything else is reported as not recognized.

use crate::core::Vocabulary;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// First entry of every fresh session.
pub const WELCOME: &str = "Welcome to the Git Terminal. Type \"help\" to see available commands.";

const HELP: &str = concat!(
    "Available commands:\n",
    "  help              Show this help message\n",
    "  git init          Initialize a new git repository\n",
    "  git status        Show the working tree status\n",
    "  git add <file>    Add file to the staging area\n",
    "  git commit        Record changes to the repository\n",
    "  clear             Clear the terminal",
);

const STATUS: &str = concat!(
    "On branch main\n",
    "No commits yet\n",
    "nothing to commit (create/copy files and use \"git add\" to track)",
);

crate::vocabulary! {
    /// Inputs the terminal answers, named by the text that triggers them.
    pub enum TerminalCommand {
        Help => "help",
        Init => "git init",
        Status => "git status",
        /// Any input starting with `git add`.
        Add => "git add",
        /// `git commit` without a message.
        Commit => "git commit",
        /// Any input starting with `git commit -m`.
        CommitWithMessage => "git commit -m",
        Clear => "clear",
    }
}

impl TerminalCommand {
    /// Whether the name only has to prefix the input.
    pub fn is_prefix(self) -> bool {
        matches!(self, Self::Add | Self::CommitWithMessage)
    }

    /// First table row matching `input`. Input is not trimmed.
    pub fn recognize(input: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|command| {
            if command.is_prefix() {
                input.starts_with(command.name())
            } else {
                input == command.name()
            }
        })
    }

    /// Canned output. `clear` prints nothing.
    pub fn reply(self) -> Option<&'static str> {
        match self {
            Self::Help => Some(HELP),
            Self::Init => Some("Initialized empty Git repository in .git/"),
            Self::Status => Some(STATUS),
            Self::Add => Some("Added file to staging area"),
            Self::Commit => Some("Please provide a commit message with -m flag"),
            Self::CommitWithMessage => Some("[main (root-commit)] committed changes"),
            Self::Clear => None,
        }
    }
}

/// One line of input and what the terminal printed for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalEntry {
    /// Empty for the welcome banner.
    pub command: String,
    pub output: String,
}

/// What a call to [`Terminal::run`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response<'a> {
    /// Blank input; nothing recorded.
    Ignored,
    /// The history was emptied.
    Cleared,
    /// A new entry was recorded.
    Printed(&'a TerminalEntry),
}

/// Session state of the practice terminal.
///
/// # Example
///
/// ```rust
/// use gitfit::terminal::{Response, Terminal};
///
/// let mut terminal = Terminal::new();
/// match terminal.run("git init") {
///     Response::Printed(entry) => {
///         assert_eq!(entry.output, "Initialized empty Git repository in .git/")
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// assert_eq!(terminal.history().len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminal {
    history: Vec<TerminalEntry>,
}

impl Default for Terminal {
    fn default() -> Self {
        Self {
            history: vec![TerminalEntry {
                command: String::new(),
                output: WELCOME.to_string(),
            }],
        }
    }
}

impl Terminal {
    /// A session showing only the welcome banner.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, input: &str) -> Response<'_> {
        if input.trim().is_empty() {
            return Response::Ignored;
        }

        let output = match TerminalCommand::recognize(input) {
            Some(TerminalCommand::Clear) => {
                self.clear();
                return Response::Cleared;
            }
            Some(command) => command.reply().unwrap_or_default().to_string(),
            None => {
                debug!(%input, "terminal input not recognized");
                format!("Command not recognized: '{input}'")
            }
        };

        self.history.push(TerminalEntry {
            command: input.to_string(),
            output,
        });
        self.history.last().map_or(Response::Ignored, Response::Printed)
    }

    /// Entries, oldest first.
    pub fn history(&self) -> &[TerminalEntry] {
        &self.history
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
