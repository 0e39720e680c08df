//! The cast standing in the arena

use serde::{Deserialize, Serialize};

/// What a character does when hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Throws the disk; hovering it does nothing
    Hero,
    /// Derezzes when struck
    Villain,
    /// Shakes when struck, carries no disk
    Boss,
}

/// A character card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Character {
    pub name: &'static str,
    pub label: &'static str,
    /// CSS hex colour
    pub color: &'static str,
    pub role: Role,
}

impl Character {
    const fn villain(name: &'static str, label: &'static str, color: &'static str) -> Self {
        Self {
            name,
            label,
            color,
            role: Role::Villain,
        }
    }

    /// Whether hovering this character throws the disk at it
    pub fn is_target(&self) -> bool {
        self.role != Role::Hero
    }

    pub fn is_boss(&self) -> bool {
        self.role == Role::Boss
    }

    /// Colour of the disk on this character's back, if it carries one
    pub fn disk_color(&self) -> Option<&'static str> {
        match self.role {
            Role::Hero => Some("#00f0ff"),
            Role::Villain => Some("#ff0000"),
            Role::Boss => None,
        }
    }
}

pub const HERO: Character = Character {
    name: "Aldrich 109",
    label: "ALDRICH 109",
    color: "#00f0ff",
    role: Role::Hero,
};

pub const BOSS: Character = Character {
    name: "MCP — The Administration",
    label: "ADMINISTRATION",
    color: "#ff0000",
    role: Role::Boss,
};

pub const VILLAINS: [Character; 9] = [
    Character::villain("Aldrich 007", "ALDRICH 007", "#ff0066"),
    Character::villain("Aldrich 008", "ALDRICH 008", "#ff3300"),
    Character::villain("Aldrich 009", "ALDRICH 009", "#ff6600"),
    Character::villain("Aldrich 010", "ALDRICH 010", "#cc00ff"),
    Character::villain("Aldrich 011", "ALDRICH 011", "#ff0099"),
    Character::villain("Aldrich 107", "ALDRICH 107", "#ff4400"),
    Character::villain("Aldrich 108", "ALDRICH 108", "#cc0055"),
    Character::villain("Aldrich 110", "ALDRICH 110", "#880099"),
    Character::villain("Aldrich 111", "ALDRICH 111", "#ff2200"),
];

/// Everyone, hero first
pub fn roster() -> impl Iterator<Item = &'static Character> {
    std::iter::once(&HERO)
        .chain(std::iter::once(&BOSS))
        .chain(VILLAINS.iter())
}

/// Look a character up by name
pub fn find(name: &str) -> Option<&'static Character> {
    roster().find(|c| c.name == name)
}
