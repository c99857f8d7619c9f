//! Category entity model.
//!
//! Categories are shared labels referenced by many tasks through a weak
//! `category_id`. Deleting a category never deletes tasks; the store
//! clears the reference instead.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Icon identifier for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Folder,
    Briefcase,
    Book,
    Graduationcap,
    House,
    Car,
    Gamecontroller,
    Heart,
    Star,
    Leaf,
    Flame,
    Drop,
    Bolt,
    Cloud,
}

impl CategoryIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryIcon::Folder => "folder",
            CategoryIcon::Briefcase => "briefcase",
            CategoryIcon::Book => "book",
            CategoryIcon::Graduationcap => "graduationcap",
            CategoryIcon::House => "house",
            CategoryIcon::Car => "car",
            CategoryIcon::Gamecontroller => "gamecontroller",
            CategoryIcon::Heart => "heart",
            CategoryIcon::Star => "star",
            CategoryIcon::Leaf => "leaf",
            CategoryIcon::Flame => "flame",
            CategoryIcon::Drop => "drop",
            CategoryIcon::Bolt => "bolt",
            CategoryIcon::Cloud => "cloud",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "folder" => Some(CategoryIcon::Folder),
            "briefcase" => Some(CategoryIcon::Briefcase),
            "book" => Some(CategoryIcon::Book),
            "graduationcap" => Some(CategoryIcon::Graduationcap),
            "house" => Some(CategoryIcon::House),
            "car" => Some(CategoryIcon::Car),
            "gamecontroller" => Some(CategoryIcon::Gamecontroller),
            "heart" => Some(CategoryIcon::Heart),
            "star" => Some(CategoryIcon::Star),
            "leaf" => Some(CategoryIcon::Leaf),
            "flame" => Some(CategoryIcon::Flame),
            "drop" => Some(CategoryIcon::Drop),
            "bolt" => Some(CategoryIcon::Bolt),
            "cloud" => Some(CategoryIcon::Cloud),
            _ => None,
        }
    }
}

/// Display color for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CategoryColor {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Pink,
    Yellow,
    Cyan,
    Teal,
    Indigo,
    Brown,
}

impl CategoryColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryColor::Blue => "blue",
            CategoryColor::Green => "green",
            CategoryColor::Orange => "orange",
            CategoryColor::Red => "red",
            CategoryColor::Purple => "purple",
            CategoryColor::Pink => "pink",
            CategoryColor::Yellow => "yellow",
            CategoryColor::Cyan => "cyan",
            CategoryColor::Teal => "teal",
            CategoryColor::Indigo => "indigo",
            CategoryColor::Brown => "brown",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "blue" => Some(CategoryColor::Blue),
            "green" => Some(CategoryColor::Green),
            "orange" => Some(CategoryColor::Orange),
            "red" => Some(CategoryColor::Red),
            "purple" => Some(CategoryColor::Purple),
            "pink" => Some(CategoryColor::Pink),
            "yellow" => Some(CategoryColor::Yellow),
            "cyan" => Some(CategoryColor::Cyan),
            "teal" => Some(CategoryColor::Teal),
            "indigo" => Some(CategoryColor::Indigo),
            "brown" => Some(CategoryColor::Brown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: CategoryIcon,
    pub color: CategoryColor,
    pub created_at: DateTime<Local>,
    pub updated_at: DateTime<Local>,
}

impl Category {
    pub fn new(name: &str, icon: CategoryIcon, color: CategoryColor) -> Self {
        let now = Local::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon,
            color,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Categories seeded into a brand-new store.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Work", CategoryIcon::Briefcase, CategoryColor::Blue),
        Category::new("Personal", CategoryIcon::Heart, CategoryColor::Pink),
        Category::new("Study", CategoryIcon::Book, CategoryColor::Green),
        Category::new("Household", CategoryIcon::House, CategoryColor::Orange),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_and_color_round_trip() {
        assert_eq!(CategoryIcon::parse("briefcase"), Some(CategoryIcon::Briefcase));
        assert_eq!(CategoryIcon::parse("rocket"), None);
        assert_eq!(CategoryColor::parse("teal"), Some(CategoryColor::Teal));
        assert_eq!(CategoryColor::parse("magenta"), None);
    }

    #[test]
    fn default_categories_have_distinct_names() {
        let categories = default_categories();
        assert_eq!(categories.len(), 4);
        let mut names: Vec<_> = categories.iter().map(|c| c.name.as_str()).collect();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
