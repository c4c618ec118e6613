//! Creature customization vocabulary
//!
//! A creature has eight anatomy slots ([`BodyPartType`]). Answering a quiz
//! question unlocks one of three visual families ([`BodyPartStyle`]) for the
//! slot the question is tied to; each family offers three concrete variations.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the creature's anatomy slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPartType {
    Eyes,
    Ears,
    Nose,
    Mouth,
    Arms,
    Legs,
    Tail,
    Wings,
}

impl BodyPartType {
    /// All body parts in their canonical order
    pub fn all() -> &'static [BodyPartType] {
        &[
            BodyPartType::Eyes,
            BodyPartType::Ears,
            BodyPartType::Nose,
            BodyPartType::Mouth,
            BodyPartType::Arms,
            BodyPartType::Legs,
            BodyPartType::Tail,
            BodyPartType::Wings,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPartType::Eyes => "eyes",
            BodyPartType::Ears => "ears",
            BodyPartType::Nose => "nose",
            BodyPartType::Mouth => "mouth",
            BodyPartType::Arms => "arms",
            BodyPartType::Legs => "legs",
            BodyPartType::Tail => "tail",
            BodyPartType::Wings => "wings",
        }
    }
}

impl fmt::Display for BodyPartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BodyPartType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "eyes" => Ok(BodyPartType::Eyes),
            "ears" => Ok(BodyPartType::Ears),
            "nose" => Ok(BodyPartType::Nose),
            "mouth" => Ok(BodyPartType::Mouth),
            "arms" => Ok(BodyPartType::Arms),
            "legs" => Ok(BodyPartType::Legs),
            "tail" => Ok(BodyPartType::Tail),
            "wings" => Ok(BodyPartType::Wings),
            _ => Err(DomainError::parse(format!(
                "Unknown body part: '{}'. Valid values: eyes, ears, nose, mouth, arms, legs, tail, wings",
                s
            ))),
        }
    }
}

/// Visual family a body part can be drawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPartStyle {
    Round,
    Square,
    Triangle,
}

impl BodyPartStyle {
    /// Styles in the order they are handed out to shuffled answer options
    pub fn all() -> &'static [BodyPartStyle] {
        &[
            BodyPartStyle::Round,
            BodyPartStyle::Square,
            BodyPartStyle::Triangle,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPartStyle::Round => "round",
            BodyPartStyle::Square => "square",
            BodyPartStyle::Triangle => "triangle",
        }
    }

    /// The three concrete variations of this style (`round-1` .. `round-3`)
    pub fn variations(&self) -> Vec<String> {
        (1..=3).map(|n| format!("{}-{}", self.as_str(), n)).collect()
    }
}

impl fmt::Display for BodyPartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BodyPartStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "round" => Ok(BodyPartStyle::Round),
            "square" => Ok(BodyPartStyle::Square),
            "triangle" => Ok(BodyPartStyle::Triangle),
            _ => Err(DomainError::parse(format!(
                "Unknown body part style: '{}'. Valid values: round, square, triangle",
                s
            ))),
        }
    }
}
