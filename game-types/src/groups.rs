use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// Top-level item category as stored in classic item records.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    TryFromPrimitive,
    IntoPrimitive,
)]
#[repr(u8)]
pub enum ItemGroup {
    Drugs = 0,
    UselessItems1 = 1,
    Armor = 2,
    Weapons = 3,
    MagicItems = 4,
    Artifacts = 5,
    MensClothing = 6,
    Books = 7,
    /// Reserved by classic data for invalid records. Owns no templates.
    Error = 8,
    UselessItems2 = 9,
    ReligiousItems = 10,
    Maps = 11,
    WomensClothing = 12,
    Paintings = 13,
    Gems = 14,
    PlantIngredients1 = 15,
    PlantIngredients2 = 16,
    CreatureIngredients1 = 17,
    CreatureIngredients2 = 18,
    CreatureIngredients3 = 19,
    MiscellaneousIngredients1 = 20,
    MetalIngredients = 21,
    MiscellaneousIngredients2 = 22,
    Transportation = 23,
    Deeds = 24,
    Jewellery = 25,
    QuestItems = 26,
    MiscItems = 27,
    Currency = 28,
}

impl ItemGroup {
    pub const ALL: [ItemGroup; 29] = [
        ItemGroup::Drugs,
        ItemGroup::UselessItems1,
        ItemGroup::Armor,
        ItemGroup::Weapons,
        ItemGroup::MagicItems,
        ItemGroup::Artifacts,
        ItemGroup::MensClothing,
        ItemGroup::Books,
        ItemGroup::Error,
        ItemGroup::UselessItems2,
        ItemGroup::ReligiousItems,
        ItemGroup::Maps,
        ItemGroup::WomensClothing,
        ItemGroup::Paintings,
        ItemGroup::Gems,
        ItemGroup::PlantIngredients1,
        ItemGroup::PlantIngredients2,
        ItemGroup::CreatureIngredients1,
        ItemGroup::CreatureIngredients2,
        ItemGroup::CreatureIngredients3,
        ItemGroup::MiscellaneousIngredients1,
        ItemGroup::MetalIngredients,
        ItemGroup::MiscellaneousIngredients2,
        ItemGroup::Transportation,
        ItemGroup::Deeds,
        ItemGroup::Jewellery,
        ItemGroup::QuestItems,
        ItemGroup::MiscItems,
        ItemGroup::Currency,
    ];

    pub fn is_weapon_or_armor(self) -> bool {
        matches!(self, ItemGroup::Weapons | ItemGroup::Armor)
    }

    pub fn is_clothing(self) -> bool {
        matches!(self, ItemGroup::MensClothing | ItemGroup::WomensClothing)
    }
}

ordinal_enum!(Weapons {
    Dagger = 113,
    Tanto = 114,
    Staff = 115,
    Shortsword = 116,
    Wakazashi = 117,
    Broadsword = 118,
    Saber = 119,
    Longsword = 120,
    Katana = 121,
    Claymore = 122,
    DaiKatana = 123,
    Mace = 124,
    Flail = 125,
    Warhammer = 126,
    BattleAxe = 127,
    WarAxe = 128,
    ShortBow = 129,
    LongBow = 130,
    Arrow = 131,
});

ordinal_enum!(Armor {
    Cuirass = 102,
    Gauntlets = 103,
    Greaves = 104,
    LeftPauldron = 105,
    RightPauldron = 106,
    Helm = 107,
    Boots = 108,
    Buckler = 109,
    RoundShield = 110,
    KiteShield = 111,
    TowerShield = 112,
});

ordinal_enum!(MensClothing {
    Straps = 141,
    Armbands = 142,
    Kimono = 143,
    FancyArmbands = 144,
    Sash = 145,
    Eodoric = 146,
    Shoes = 147,
    TallBoots = 148,
    Boots = 149,
    Sandals = 150,
    CasualPants = 151,
    Breeches = 152,
    ShortSkirt = 153,
    CasualCloak = 154,
    FormalCloak = 155,
    KhajiitSuit = 156,
    DwynnenSurcoat = 157,
    ShortTunic = 158,
    FormalTunic = 159,
    Toga = 160,
    ReversibleTunic = 161,
    Loincloth = 162,
    PlainRobes = 163,
    PriestRobes = 164,
    ShortShirt = 165,
    ShortShirtWithBelt = 166,
    LongShirt = 167,
    LongShirtWithBelt = 168,
    ShortShirtClosedTop = 169,
    ShortShirtClosedTop2 = 170,
    LongShirtClosedTop = 171,
    LongShirtClosedTop2 = 172,
    OpenTunic = 173,
    Wrap = 174,
    LongSkirt = 175,
    AnticlereSurcoat = 176,
    ChallengerStraps = 177,
    ShortShirtUnchangeable = 178,
    LongShirtUnchangeable = 179,
    Vest = 180,
    ChampionStraps = 181,
});

ordinal_enum!(WomensClothing {
    Brassier = 182,
    FormalBrassier = 183,
    PeasantBlouse = 184,
    Eodoric = 185,
    Shoes = 186,
    TallBoots = 187,
    Boots = 188,
    Sandals = 189,
    CasualPants = 190,
    CasualCloak = 191,
    FormalCloak = 192,
    KhajiitSuit = 193,
    FormalEodoric = 194,
    EveningGown = 195,
    DayGown = 196,
    CasualDress = 197,
    StraplessDress = 198,
    Loincloth = 199,
    PlainRobes = 200,
    PriestessRobes = 201,
    ShortShirt = 202,
    ShortShirtBelt = 203,
    LongShirt = 204,
    LongShirtBelt = 205,
    ShortShirtClosed = 206,
    ShortShirtClosedBelt = 207,
    LongShirtClosed = 208,
    LongShirtClosedBelt = 209,
    OpenTunic = 210,
    Wrap = 211,
    LongSkirt = 212,
    AnticlereSurcoat = 213,
    ShortShirtUnchangeable = 214,
    LongShirtUnchangeable = 215,
    Vest = 216,
});

/// Containers with their own inventory icon. The discriminant is the icon's
/// record in the container icon file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ContainerType {
    Wagon = 0,
    Shop = 1,
    Ground = 2,
    Corpse = 3,
}

/// Which hand(s) an item can be used in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ItemHands {
    #[default]
    None,
    Either,
    Both,
    LeftOnly,
}
