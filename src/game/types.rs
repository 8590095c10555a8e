use serde::{Serialize, Deserialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Right, Direction::Left, Direction::Down, Direction::Up];

    /// Unit step as (dx, dy). Up is towards row 0.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Edu,
    Health,
    Welfare,
    Dialog,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 4] = [PolicyKind::Edu, PolicyKind::Health, PolicyKind::Welfare, PolicyKind::Dialog];
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Edu => "Edu",
            PolicyKind::Health => "Health",
            PolicyKind::Welfare => "Welfare",
            PolicyKind::Dialog => "Dialog",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommunityId {
    A,
    B,
    X,
}

impl CommunityId {
    pub const ALL: [CommunityId; 3] = [CommunityId::A, CommunityId::B, CommunityId::X];

    /// Display name shown by the HUD.
    pub fn label(self) -> &'static str {
        match self {
            CommunityId::A => "Kinh ethnic community",
            CommunityId::B => "Ede ethnic community",
            CommunityId::X => "Religious community",
        }
    }

    /// Asset key the renderer uses for the marker.
    pub fn icon(self) -> &'static str {
        match self {
            CommunityId::A => "villageA",
            CommunityId::B => "villageB",
            CommunityId::X => "religionX",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Position,
}

impl Player {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyItem {
    pub pos: Position,
    pub kind: PolicyKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityMarker {
    pub pos: Position,
    pub community: CommunityId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityNeed {
    pub community: CommunityId,
    pub required: PolicyKind,
    pub satisfied: bool,
}

/// Misinformation cloud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub pos: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    TimedOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome")]
pub enum SessionStatus {
    Setup,
    Running,
    Ended(Outcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageCategory {
    Info,
    Success,
    Warning,
}

/// Most recent thing that happened, as shown in the HUD message line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMessage {
    pub category: MessageCategory,
    pub text: String,
}

impl EventMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { category: MessageCategory::Info, text: text.into() }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self { category: MessageCategory::Success, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { category: MessageCategory::Warning, text: text.into() }
    }
}
