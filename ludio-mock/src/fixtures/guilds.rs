use ludio_core::records::{
    CharacterProfile, CharacterStatistics, EquippedItem, GuildMember, GuildMemberProfile,
};

pub fn members(guild: &str) -> Option<Vec<GuildMember>> {
    match guild {
        "Os Impiedosos" => Some(vec![
            GuildMember {
                name: "Thrall".into(),
                level: Some(80),
                rank: Some(0),
            },
            GuildMember {
                name: "Jaina".into(),
                level: Some(80),
                rank: Some(1),
            },
            GuildMember {
                name: "Ghostling".into(),
                level: Some(12),
                rank: Some(9),
            },
        ]),
        _ => None,
    }
}

pub fn profile(name: &str) -> Option<GuildMemberProfile> {
    if name.starts_with("Ghost") {
        return None;
    }
    Some(GuildMemberProfile {
        name: name.into(),
        level: 80,
    })
}

pub fn character(name: &str, realm: &str) -> Option<CharacterProfile> {
    if name.starts_with("Ghost") {
        return None;
    }
    Some(CharacterProfile {
        name: name.into(),
        level: 80,
        character_class: "Shaman".into(),
        race: "Orc".into(),
        faction: "Horde".into(),
        realm: realm.to_lowercase(),
        achievement_points: 31_415,
        statistics: Some(CharacterStatistics {
            health: 2_500_000,
            power: 250_000,
            power_type: "mana".into(),
        }),
        equipment: vec![EquippedItem {
            slot: "Head".into(),
            name: "Crown of the Earthwarden".into(),
            item_level: Some(639),
        }],
    })
}
