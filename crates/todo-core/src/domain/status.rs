//! Closed enumerations for task status and priority.
//!
//! Both serialize as SCREAMING_SNAKE_CASE (`NEW`, `IN_PROGRESS`, `LOW`, ...),
//! which is also the only accepted textual form when parsing caller input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned when a string is not a member of the enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown value: {0}")]
pub struct UnknownValue(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    New,
    InProgress,
    Closed,
    Canceled,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::New,
        TaskStatus::InProgress,
        TaskStatus::Closed,
        TaskStatus::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "NEW",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Closed => "CLOSED",
            TaskStatus::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    #[default]
    Low,
    Moderate,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Moderate,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "LOW",
            TaskPriority::Moderate => "MODERATE",
            TaskPriority::High => "HIGH",
            TaskPriority::Urgent => "URGENT",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str() == s)
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}
