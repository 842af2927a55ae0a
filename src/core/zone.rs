//! Repository zones and their fixed layout.

use super::position::Position;

crate::vocabulary! {
    /// Logical area of a simulated repository.
    ///
    /// Every node lives in exactly one zone at a time.
    pub enum Zone {
        /// Files you are currently editing.
        Working => "working",
        /// Snapshots queued for the next commit.
        Staging => "staging",
        /// Your local commits and branches.
        Local => "local",
        /// The shared repository on a server.
        Remote => "remote",
    }
}

/// Vertical distance between a commit and the branch label beneath it.
pub const ROW_SPACING: f64 = 50.0;

/// Vertical distance between consecutive commit rows.
pub const COMMIT_ROW_SPACING: f64 = 2.0 * ROW_SPACING;

/// Row of the first commit in an otherwise empty history.
pub const FIRST_COMMIT_ROW: f64 = 150.0;

/// Horizontal distance between branch lanes and between remote refs.
pub const LANE_SPACING: f64 = 40.0;

/// Column holding commits in the remote zone (refs sit at the zone column).
pub const REMOTE_COMMIT_COLUMN: f64 = 550.0;

/// Column holding fetched commits in the local zone.
pub const TRACKING_COLUMN: f64 = 450.0;

/// Dashed separators drawn between adjacent zones.
pub const ZONE_SEPARATORS: [f64; 3] = [175.0, 300.0, 475.0];

impl Zone {
    /// Layout column for nodes placed in this zone.
    pub const fn column(self) -> f64 {
        match self {
            Self::Working => 100.0,
            Self::Staging => 250.0,
            Self::Local => 350.0,
            Self::Remote => 600.0,
        }
    }

    /// Prefix used when deriving the id of a node copied into this zone.
    pub const fn id_prefix(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Staging => "staged",
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Working => "Working Directory",
            Self::Staging => "Staging Area",
            Self::Local => "Local Repository",
            Self::Remote => "Remote Repository",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Working => "Files you are currently editing",
            Self::Staging => "Files ready to be committed",
            Self::Local => "Your local commits and branches",
            Self::Remote => "The shared repository on a server",
        }
    }

    /// Where the zone's banner is drawn.
    pub const fn banner_position(self) -> Position {
        match self {
            Self::Working => Position::new(100.0, 50.0),
            Self::Staging => Position::new(250.0, 50.0),
            Self::Local => Position::new(350.0, 20.0),
            Self::Remote => Position::new(600.0, 50.0),
        }
    }
}
