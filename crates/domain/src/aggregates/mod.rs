//! Rooms - aggregates that own a staffed villager group
//!
//! Every room type embeds a [`RoomCore`] by value and adds its own fields:
//!
//! | Room | Own fields |
//! |------|------------|
//! | [`Storage`] | `capacity` |
//! | [`Training`] | `skill_point` |
//! | [`ResourceProduction`] | `kind` |
//! | [`ClothingWorkshop`] | `craft_time`, `cost` |
//!
//! The staff is a [`Group`] sized `2 * level`, shared with the villager
//! extent through `Arc`.

mod clothing_workshop;
mod group;
mod resource_production;
mod room;
mod storage;
mod training;

pub use clothing_workshop::ClothingWorkshop;
pub use group::Group;
pub use resource_production::ResourceProduction;
pub use room::{RoomCore, BASE_TIME_TO_CREATE, UPGRADE_COST_PER_LEVEL};
pub use storage::Storage;
pub use training::Training;
