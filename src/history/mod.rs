//! Static commit history graph.
//!
//! Unlike the simulation, this history never changes: it is a fixed list of
//! commits laid out in branch lanes, with per-commit expand/collapse state.
//!
//! ```rust
//! use gitfit::history::HistoryView;
//!
//! let mut view = HistoryView::default();
//! assert_eq!(view.layout().lanes.len(), 2);
//! assert!(view.toggle("6"));
//! assert!(view.detail("6").is_some());
//! ```

mod commit;
mod layout;
mod view;

pub use commit::{default_commits, Commit, CommitType};
pub use layout::{Connector, ConnectorShape, Lane, Layout, LayoutParams};
pub use view::{CommitDetail, Footprint, HistoryView, LegendEntry};
