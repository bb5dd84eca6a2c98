use crate::metadata::assets::AssetEntry;

pub static DEFAULT_GAME_VERSION: &str = "15.10.1";

static VERSION_PLACEHOLDER: &str = "{version}";

static ASSET_URLS: [(&str, &str); 7] = [
    (
        "runes",
        "https://ddragon.leagueoflegends.com/cdn/{version}/data/en_US/runesReforged.json",
    ),
    (
        "items",
        "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/items.json",
    ),
    (
        "augments",
        "https://raw.communitydragon.org/latest/cdragon/arena/en_us.json",
    ),
    (
        "champions",
        "https://ddragon.leagueoflegends.com/cdn/{version}/data/en_US/championFull.json",
    ),
    (
        "summonerSpells",
        "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/summoner-spells.json",
    ),
    (
        "versions",
        "https://ddragon.leagueoflegends.com/api/versions.json",
    ),
    (
        "queues",
        "https://raw.communitydragon.org/latest/plugins/rcp-be-lol-game-data/global/default/v1/queues.json",
    ),
];

/// Builds the fixed asset table for a game version.
pub fn asset_table(version: &str) -> Vec<AssetEntry> {
    ASSET_URLS
        .iter()
        .map(|(name, url)| AssetEntry::new(*name, url.replace(VERSION_PLACEHOLDER, version)))
        .collect()
}
