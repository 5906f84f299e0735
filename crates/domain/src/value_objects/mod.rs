//! Value objects embedded by the settlement entities.
//!
//! Shared field groups are composed into entities by value rather than
//! inherited: every living creature embeds [`Vitals`], hostile creatures add
//! [`MonsterTraits`], villagers add [`Outfit`] and [`Special`].

mod attribute;
pub mod constraints;
mod gender;
mod monster_traits;
mod outfit;
mod resource_kind;
mod special;
mod vitals;

pub use attribute::{Attribute, AttributeSource};
pub use gender::Gender;
pub use monster_traits::MonsterTraits;
pub use outfit::Outfit;
pub use resource_kind::ResourceKind;
pub use special::Special;
pub use vitals::Vitals;
