//! Categorical task attributes and the task record.
//!
//! Each attribute group is a single enum with exactly one active value, so
//! a task can never carry "no deadline" or "two importances".

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// The four attributes a task is described by, in classifier split order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Type,
    Deadline,
    Importance,
    Difficulty,
}

impl Attribute {
    /// All attributes in the order the classifier considers them.
    pub const ALL: [Attribute; 4] = [
        Attribute::Type,
        Attribute::Deadline,
        Attribute::Importance,
        Attribute::Difficulty,
    ];

    /// Lowercase attribute name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            Attribute::Type => "type",
            Attribute::Deadline => "deadline",
            Attribute::Importance => "importance",
            Attribute::Difficulty => "difficulty",
        }
    }

    /// Number of legal values for this attribute.
    pub fn cardinality(self) -> usize {
        match self {
            Attribute::Type => TaskType::ALL.len(),
            Attribute::Deadline => Deadline::ALL.len(),
            Attribute::Importance => Importance::ALL.len(),
            Attribute::Difficulty => Difficulty::ALL.len(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A closed set of labeled values for one attribute.
///
/// Implementors list every value in `ALL`; `index` is the position in that
/// list and is what the decision tree branches on.
pub trait Categorical: Copy + Eq + 'static {
    /// The attribute this value belongs to.
    const ATTRIBUTE: Attribute;

    /// Every legal value, in canonical order.
    const ALL: &'static [Self];

    /// Canonical display label.
    fn label(self) -> &'static str;

    /// Position of this value in [`ALL`](Categorical::ALL).
    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Parses a label, ignoring surrounding whitespace and ASCII case.
    fn parse_label(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::InvalidAttributeValue {
                attribute: Self::ATTRIBUTE.name(),
                value: s.to_string(),
            })
    }
}

/// Whether a task belongs to study/work or personal life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TaskType {
    StudyWork,
    Personal,
}

impl Categorical for TaskType {
    const ATTRIBUTE: Attribute = Attribute::Type;
    const ALL: &'static [Self] = &[TaskType::StudyWork, TaskType::Personal];

    fn label(self) -> &'static str {
        match self {
            TaskType::StudyWork => "Study/Work",
            TaskType::Personal => "Personal",
        }
    }
}

/// Days remaining until the task is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Deadline {
    OneDay,
    TwoDays,
    ThreeDays,
}

impl Categorical for Deadline {
    const ATTRIBUTE: Attribute = Attribute::Deadline;
    const ALL: &'static [Self] = &[Deadline::OneDay, Deadline::TwoDays, Deadline::ThreeDays];

    fn label(self) -> &'static str {
        match self {
            Deadline::OneDay => "1 day left",
            Deadline::TwoDays => "2 days left",
            Deadline::ThreeDays => "3 days left",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Importance {
    Very,
    Quite,
    Not,
}

impl Categorical for Importance {
    const ATTRIBUTE: Attribute = Attribute::Importance;
    const ALL: &'static [Self] = &[Importance::Very, Importance::Quite, Importance::Not];

    fn label(self) -> &'static str {
        match self {
            Importance::Very => "Very important",
            Importance::Quite => "Quite important",
            Importance::Not => "Not important",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    Hard,
    Normal,
}

impl Categorical for Difficulty {
    const ATTRIBUTE: Attribute = Attribute::Difficulty;
    const ALL: &'static [Self] = &[Difficulty::Hard, Difficulty::Normal];

    fn label(self) -> &'static str {
        match self {
            Difficulty::Hard => "Hard",
            Difficulty::Normal => "Normal",
        }
    }
}

macro_rules! label_traits {
    ($($ty:ty),*) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = EngineError;

            fn from_str(s: &str) -> Result<Self> {
                <$ty as Categorical>::parse_label(s)
            }
        }
    )*};
}

label_traits!(TaskType, Deadline, Importance, Difficulty);

/// The attribute tuple the classifier and augmenter operate on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attributes {
    pub task_type: TaskType,
    pub deadline: Deadline,
    pub importance: Importance,
    pub difficulty: Difficulty,
}

impl Attributes {
    /// Creates a tuple from typed values.
    pub const fn new(
        task_type: TaskType,
        deadline: Deadline,
        importance: Importance,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            task_type,
            deadline,
            importance,
            difficulty,
        }
    }

    /// Parses the four attribute labels.
    ///
    /// Fails with [`EngineError::InvalidAttributeValue`] naming the first
    /// field (in type, deadline, importance, difficulty order) that does not
    /// match a legal label.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_taskrank::task::{Attributes, Deadline, TaskType};
    ///
    /// let attrs = Attributes::parse("Study/work", "1 day left", "Very important", "Hard").unwrap();
    /// assert_eq!(attrs.task_type, TaskType::StudyWork);
    /// assert_eq!(attrs.deadline, Deadline::OneDay);
    ///
    /// assert!(Attributes::parse("Hobby", "1 day left", "Very important", "Hard").is_err());
    /// ```
    pub fn parse(task_type: &str, deadline: &str, importance: &str, difficulty: &str) -> Result<Self> {
        Ok(Self {
            task_type: task_type.parse()?,
            deadline: deadline.parse()?,
            importance: importance.parse()?,
            difficulty: difficulty.parse()?,
        })
    }

    /// Index of this tuple's value for `attribute`.
    pub fn value_index(&self, attribute: Attribute) -> usize {
        match attribute {
            Attribute::Type => self.task_type.index(),
            Attribute::Deadline => self.deadline.index(),
            Attribute::Importance => self.importance.index(),
            Attribute::Difficulty => self.difficulty.index(),
        }
    }

    /// Every legal attribute tuple (2 × 3 × 3 × 2 = 36).
    pub fn all() -> impl Iterator<Item = Attributes> {
        TaskType::ALL.iter().flat_map(|&t| {
            Deadline::ALL.iter().flat_map(move |&d| {
                Importance::ALL.iter().flat_map(move |&i| {
                    Difficulty::ALL
                        .iter()
                        .map(move |&x| Attributes::new(t, d, i, x))
                })
            })
        })
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.task_type, self.deadline, self.importance, self.difficulty
        )
    }
}

/// A user-entered task.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Task {
    pub description: String,
    pub attributes: Attributes,
}

impl Task {
    /// Creates a task from a description and typed attributes.
    pub fn new(description: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            description: description.into(),
            attributes,
        }
    }

    /// Builds a task from textual attribute labels.
    pub fn parse(
        description: impl Into<String>,
        task_type: &str,
        deadline: &str,
        importance: &str,
        difficulty: &str,
    ) -> Result<Self> {
        Ok(Self::new(
            description,
            Attributes::parse(task_type, deadline, importance, difficulty)?,
        ))
    }
}
