extern crate self as follout_domain;

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod extent;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    Armor, DeathClaw, ExplorerTeam, Junk, MoleRat, Pet, Raider, Shelter, Villager, CAPTURE_CHANCE,
};

// Rooms
pub use aggregates::{ClothingWorkshop, Group, ResourceProduction, RoomCore, Storage, Training};

pub use error::DomainError;
pub use extent::{Extent, ExtentMember};

pub use value_objects::{
    Attribute, AttributeSource, Gender, MonsterTraits, Outfit, ResourceKind, Special, Vitals,
};
