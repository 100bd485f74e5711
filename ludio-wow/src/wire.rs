//! Profile API response shapes.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TypeName {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterEnvelope {
    #[serde(default)]
    pub members: Vec<MemberWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MemberWire {
    #[serde(default)]
    pub character: Option<CharacterRef>,
    #[serde(default)]
    pub rank: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CharacterRef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Option<u32>,
}

/// Primary character profile body; only the fields the records carry.
#[derive(Debug, Deserialize)]
pub(crate) struct ProfileWire {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub character_class: TypeName,
    #[serde(default)]
    pub race: TypeName,
    #[serde(default)]
    pub faction: TypeName,
    #[serde(default)]
    pub realm: RealmRef,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RealmRef {
    #[serde(default)]
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AchievementsWire {
    #[serde(default)]
    pub total_points: u64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatisticsWire {
    #[serde(default)]
    pub health: u64,
    #[serde(default)]
    pub power: u64,
    #[serde(default)]
    pub power_type: TypeName,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EquipmentWire {
    #[serde(default)]
    pub equipped_items: Vec<ItemWire>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemWire {
    #[serde(default)]
    pub slot: TypeName,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub level: Option<LevelValue>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LevelValue {
    #[serde(default)]
    pub value: u32,
}
