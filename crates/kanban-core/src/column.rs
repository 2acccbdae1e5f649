use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum ColumnId {
    Todo,
    Ongoing,
    Done,
}

impl ColumnId {
    /// Board order, left to right.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::Ongoing, ColumnId::Done];

    pub fn key(self) -> &'static str {
        match self {
            ColumnId::Todo => "todo",
            ColumnId::Ongoing => "ongoing",
            ColumnId::Done => "done",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ColumnId::Todo => "To do",
            ColumnId::Ongoing => "Ongoing",
            ColumnId::Done => "Done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ColumnId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "todo" | "to-do" | "to_do" => Ok(ColumnId::Todo),
            "ongoing" | "doing" => Ok(ColumnId::Ongoing),
            "done" => Ok(ColumnId::Done),
            other => Err(anyhow!(
                "unknown column: {other} (expected todo, ongoing or done)"
            )),
        }
    }
}
