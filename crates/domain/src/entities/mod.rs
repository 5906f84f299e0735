//! Settlement entities: characters, creatures and items.
//!
//! Every entity follows the same construction contract:
//! - `new(..)` validates every field and returns the value unregistered
//! - `create(extent, ..)` validates, then registers into the given extent
//! - `Default` is the parameterless form: zeroed fields, nothing registered

mod armor;
mod death_claw;
mod explorer_team;
mod junk;
mod mole_rat;
mod pet;
mod raider;
mod shelter;
mod villager;

pub use armor::Armor;
pub use death_claw::DeathClaw;
pub use explorer_team::ExplorerTeam;
pub use junk::Junk;
pub use mole_rat::MoleRat;
pub use pet::Pet;
pub use raider::{Raider, CAPTURE_CHANCE};
pub use shelter::Shelter;
pub use villager::Villager;
