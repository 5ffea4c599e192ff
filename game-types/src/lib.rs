//! Closed item enumerations shared by every item consumer.

/// Declares a group's ordinal enumeration. Discriminants are global template
/// ordinals and must be listed in ascending order, since a member's position
/// in `ALL` is its index within the group.
macro_rules! ordinal_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $value:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            num_enum::TryFromPrimitive,
            num_enum::IntoPrimitive,
        )]
        #[repr(u16)]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Global template ordinal of this member.
            pub fn ordinal(self) -> u16 {
                self.into()
            }
        }
    };
}

mod dyes;
mod groups;
mod materials;

pub use dyes::{DyeColor, DyeTarget};
pub use groups::{Armor, ContainerType, ItemGroup, ItemHands, MensClothing, Weapons, WomensClothing};
pub use materials::{ArmorMaterial, MetalType, WeaponMaterial};
