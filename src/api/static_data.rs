//! Static-Data-V3 endpoints.
//!
//! Game-constant lookups: champions, items, runes, masteries, spells, and
//! realm metadata. These carry their own quota buckets distinct from the
//! live-data endpoints.

use std::collections::HashMap;

use serde::Deserialize;

use crate::client::{ApiResponse, Client};
use crate::error::Result;

/// Static-Data-V3 API methods.
pub struct StaticDataApi<'c> {
    client: &'c Client,
}

impl<'c> StaticDataApi<'c> {
    pub(crate) fn new(client: &'c Client) -> Self {
        Self { client }
    }

    /// Retrieve the full champion list.
    pub async fn champions(
        &self,
        options: &StaticChampionsOptions,
    ) -> Result<ApiResponse<StaticChampionList>> {
        self.client
            .get_query("lol/static-data/v3/champions", &options.query())
            .await
    }

    /// Retrieve static champion data by champion ID.
    pub async fn champion_by_id(
        &self,
        champion_id: i64,
        options: &StaticChampionsOptions,
    ) -> Result<ApiResponse<StaticChampion>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/champions/{}", champion_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve the full item list.
    pub async fn items(&self, options: &StaticItemsOptions) -> Result<ApiResponse<ItemList>> {
        self.client
            .get_query("lol/static-data/v3/items", &options.query())
            .await
    }

    /// Retrieve item data by item ID.
    pub async fn item_by_id(
        &self,
        item_id: i64,
        options: &StaticItemsOptions,
    ) -> Result<ApiResponse<Item>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/items/{}", item_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve localized language strings.
    pub async fn language_strings(
        &self,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<LanguageStrings>> {
        self.client
            .get_query("lol/static-data/v3/language-strings", &options.query())
            .await
    }

    /// Retrieve the list of supported locales.
    pub async fn languages(&self) -> Result<ApiResponse<Vec<String>>> {
        self.client.get("lol/static-data/v3/languages").await
    }

    /// Retrieve map data.
    pub async fn maps(&self, options: &StaticLocaleOptions) -> Result<ApiResponse<MapData>> {
        self.client
            .get_query("lol/static-data/v3/maps", &options.query())
            .await
    }

    /// Retrieve the full mastery list.
    pub async fn masteries(
        &self,
        options: &StaticMasteriesOptions,
    ) -> Result<ApiResponse<MasteryList>> {
        self.client
            .get_query("lol/static-data/v3/masteries", &options.query())
            .await
    }

    /// Retrieve mastery data by mastery ID.
    pub async fn mastery_by_id(
        &self,
        mastery_id: i64,
        options: &StaticMasteriesOptions,
    ) -> Result<ApiResponse<Mastery>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/masteries/{}", mastery_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve profile icon data.
    pub async fn profile_icons(
        &self,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<ProfileIconData>> {
        self.client
            .get_query("lol/static-data/v3/profile-icons", &options.query())
            .await
    }

    /// Retrieve realm data for this client's region.
    pub async fn realms(&self) -> Result<ApiResponse<Realm>> {
        self.client.get("lol/static-data/v3/realms").await
    }

    /// Retrieve all reforged rune paths.
    pub async fn reforged_rune_paths(
        &self,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<Vec<ReforgedRunePath>>> {
        self.client
            .get_query("lol/static-data/v3/reforged-rune-paths", &options.query())
            .await
    }

    /// Retrieve a reforged rune path by ID.
    pub async fn reforged_rune_path_by_id(
        &self,
        path_id: i32,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<ReforgedRunePath>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/reforged-rune-paths/{}", path_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve all reforged runes.
    pub async fn reforged_runes(
        &self,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<Vec<ReforgedRune>>> {
        self.client
            .get_query("lol/static-data/v3/reforged-runes", &options.query())
            .await
    }

    /// Retrieve a reforged rune by ID.
    pub async fn reforged_rune_by_id(
        &self,
        rune_id: i32,
        options: &StaticLocaleOptions,
    ) -> Result<ApiResponse<ReforgedRune>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/reforged-runes/{}", rune_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve the full legacy rune list.
    pub async fn runes(&self, options: &StaticRunesOptions) -> Result<ApiResponse<RuneList>> {
        self.client
            .get_query("lol/static-data/v3/runes", &options.query())
            .await
    }

    /// Retrieve legacy rune data by rune ID.
    pub async fn rune_by_id(
        &self,
        rune_id: i64,
        options: &StaticRunesOptions,
    ) -> Result<ApiResponse<Rune>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/runes/{}", rune_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve the full summoner spell list.
    pub async fn summoner_spells(
        &self,
        options: &StaticSpellsOptions,
    ) -> Result<ApiResponse<SummonerSpellList>> {
        self.client
            .get_query("lol/static-data/v3/summoner-spells", &options.query())
            .await
    }

    /// Retrieve summoner spell data by spell ID.
    pub async fn summoner_spell_by_id(
        &self,
        spell_id: i64,
        options: &StaticSpellsOptions,
    ) -> Result<ApiResponse<SummonerSpell>> {
        self.client
            .get_query(
                &format!("lol/static-data/v3/summoner-spells/{}", spell_id),
                &options.query(),
            )
            .await
    }

    /// Retrieve the full data tarball link.
    pub async fn tarball_links(&self, version: Option<&str>) -> Result<ApiResponse<String>> {
        let mut query = Vec::new();
        if let Some(version) = version {
            query.push(("version", version.to_string()));
        }
        self.client
            .get_query("lol/static-data/v3/tarball-links", &query)
            .await
    }

    /// Retrieve the list of valid data versions.
    pub async fn versions(&self) -> Result<ApiResponse<Vec<String>>> {
        self.client.get("lol/static-data/v3/versions").await
    }
}

// Query option sets. Each renders only the fields the caller set.

/// Optional parameters for the static champion methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticChampionsOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
    /// Additional champion detail blocks to include
    pub champ_list_data: Vec<String>,
    pub tags: Vec<String>,
    /// Key the response map by champion ID instead of champion name
    pub data_by_id: Option<bool>,
}

impl StaticChampionsOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = locale_version_pairs(&self.locale, &self.version);
        for value in &self.champ_list_data {
            pairs.push(("champListData", value.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        if let Some(data_by_id) = self.data_by_id {
            pairs.push(("dataById", data_by_id.to_string()));
        }
        pairs
    }
}

/// Optional parameters for the static item methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticItemsOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
    /// Additional item detail blocks to include
    pub item_list_data: Vec<String>,
    pub tags: Vec<String>,
}

impl StaticItemsOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = locale_version_pairs(&self.locale, &self.version);
        for value in &self.item_list_data {
            pairs.push(("itemListData", value.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

/// Locale and version selection shared by several static data methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticLocaleOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
}

impl StaticLocaleOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        locale_version_pairs(&self.locale, &self.version)
    }
}

/// Optional parameters for the static mastery methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticMasteriesOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
    /// Additional mastery detail blocks to include
    pub mastery_list_data: Vec<String>,
    pub tags: Vec<String>,
}

impl StaticMasteriesOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = locale_version_pairs(&self.locale, &self.version);
        for value in &self.mastery_list_data {
            pairs.push(("masteryListData", value.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

/// Optional parameters for the legacy rune methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticRunesOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
    /// Additional rune detail blocks to include
    pub rune_list_data: Vec<String>,
    pub tags: Vec<String>,
}

impl StaticRunesOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = locale_version_pairs(&self.locale, &self.version);
        for value in &self.rune_list_data {
            pairs.push(("runeListData", value.clone()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

/// Optional parameters for the summoner spell methods.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaticSpellsOptions {
    pub locale: Option<String>,
    pub version: Option<String>,
    /// Additional spell detail blocks to include
    pub spell_list_data: Vec<String>,
    /// Key the response map by spell ID instead of spell name
    pub data_by_id: Option<bool>,
    pub tags: Vec<String>,
}

impl StaticSpellsOptions {
    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = locale_version_pairs(&self.locale, &self.version);
        for value in &self.spell_list_data {
            pairs.push(("spellListData", value.clone()));
        }
        if let Some(data_by_id) = self.data_by_id {
            pairs.push(("dataById", data_by_id.to_string()));
        }
        for tag in &self.tags {
            pairs.push(("tags", tag.clone()));
        }
        pairs
    }
}

fn locale_version_pairs(
    locale: &Option<String>,
    version: &Option<String>,
) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(locale) = locale {
        pairs.push(("locale", locale.clone()));
    }
    if let Some(version) = version {
        pairs.push(("version", version.clone()));
    }
    pairs
}

// Response shapes.

/// The full champion list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticChampionList {
    pub keys: HashMap<String, String>,
    pub data: HashMap<String, StaticChampion>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub format: String,
}

/// Static champion data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaticChampion {
    pub info: ChampionInfo,
    #[serde(rename = "enemytips")]
    pub enemy_tips: Vec<String>,
    pub stats: ChampionStats,
    pub name: String,
    pub title: String,
    pub image: Image,
    pub tags: Vec<String>,
    pub partype: String,
    #[serde(rename = "skin")]
    pub skins: Vec<Skin>,
    pub passive: Passive,
    pub recommended: Recommended,
    #[serde(rename = "allytips")]
    pub ally_tips: Vec<String>,
    pub key: String,
    pub lore: String,
    pub id: i32,
    pub blurb: String,
    pub spells: Vec<ChampionSpell>,
}

/// Champion difficulty ratings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionInfo {
    pub difficulty: i32,
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
}

/// Champion base stats.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChampionStats {
    #[serde(rename = "armorperlevel")]
    pub armor_per_level: f64,
    #[serde(rename = "hpperlevel")]
    pub hp_per_level: f64,
    #[serde(rename = "attackdamage")]
    pub attack_damage: f64,
    #[serde(rename = "mpperlevel")]
    pub mp_per_level: f64,
    #[serde(rename = "attackspeedoffset")]
    pub attack_speed_offset: f64,
    pub armor: f64,
    pub hp: f64,
    #[serde(rename = "hpregenperlevel")]
    pub hp_regen_per_level: f64,
    #[serde(rename = "spellblock")]
    pub spell_block: f64,
    #[serde(rename = "attackrange")]
    pub attack_range: f64,
    #[serde(rename = "movespeed")]
    pub move_speed: f64,
    #[serde(rename = "attackdamageperlevel")]
    pub attack_damage_per_level: f64,
    #[serde(rename = "mpregenperlevel")]
    pub mp_regen_per_level: f64,
    pub mp: f64,
    #[serde(rename = "spellblockperlevel")]
    pub spell_block_per_level: f64,
    pub crit: f64,
    #[serde(rename = "mpregen")]
    pub mp_regen: f64,
    #[serde(rename = "attackspeedperlevel")]
    pub attack_speed_per_level: f64,
    #[serde(rename = "hpregen")]
    pub hp_regen: f64,
    #[serde(rename = "critperlevel")]
    pub crit_per_level: f64,
}

/// A champion skin.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skin {
    pub num: i32,
    pub name: String,
    pub id: i32,
}

/// Champion passive data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Passive {
    pub image: Image,
    pub sanitized_description: String,
    pub name: String,
    pub description: String,
}

/// Recommended item set data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Recommended {
    pub map: String,
    pub blocks: Vec<Block>,
    pub champion: String,
    pub title: String,
    pub priority: bool,
    pub mode: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One block of a recommended item set.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Block {
    pub items: Vec<BlockItem>,
    pub rec_math: bool,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One item of a recommended block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockItem {
    pub count: i32,
    pub id: i32,
}

/// Champion spell data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChampionSpell {
    pub cooldown_burn: String,
    pub resource: String,
    pub level_tip: LevelTip,
    pub vars: Vec<SpellVars>,
    pub cost_type: String,
    pub image: Image,
    pub sanitized_description: String,
    pub sanitized_tooltip: String,
    pub effect: Vec<Vec<f64>>,
    pub tooltip: String,
    #[serde(rename = "maxrank")]
    pub max_rank: i32,
    pub cost_burn: String,
    pub range_burn: String,
    /// Either a list of integers or the string `"self"`
    pub range: serde_json::Value,
    pub cooldown: Vec<f64>,
    pub cost: Vec<i32>,
    pub key: String,
    pub description: String,
    pub effect_burn: Vec<String>,
    #[serde(rename = "altimages")]
    pub alt_images: Vec<Image>,
    pub name: String,
}

/// Sprite image data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub full: String,
    pub group: String,
    pub sprite: String,
    pub h: i32,
    pub w: i32,
    pub y: i32,
    pub x: i32,
}

/// Spell level-up tip data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelTip {
    pub effect: Vec<String>,
    pub label: Vec<String>,
}

/// Spell scaling variable data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpellVars {
    pub ranks_with: String,
    #[serde(rename = "dyn")]
    pub dyn_: String,
    pub link: String,
    pub coeff: Vec<f64>,
    pub key: String,
}

/// The full item list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemList {
    pub data: HashMap<String, Item>,
    pub version: String,
    pub tree: Vec<ItemTree>,
    pub groups: Vec<ItemGroup>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Item tree data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemTree {
    pub header: String,
    pub tags: Vec<String>,
}

/// Item data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Item {
    pub gold: Gold,
    #[serde(rename = "plaintext")]
    pub plain_text: String,
    pub hide_from_all: bool,
    pub in_store: bool,
    pub into: Vec<String>,
    pub id: i32,
    pub stats: InventoryDataStats,
    pub colloq: String,
    pub maps: HashMap<String, bool>,
    pub special_recipe: i32,
    pub image: Image,
    pub description: String,
    pub tags: Vec<String>,
    pub effect: HashMap<String, String>,
    pub required_champion: String,
    pub from: Vec<String>,
    pub group: String,
    pub consume_on_full: bool,
    pub name: String,
    pub consumed: bool,
    pub sanitized_description: String,
    pub depth: i32,
    pub stacks: i32,
}

/// Item gold data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gold {
    pub sell: i32,
    pub total: i32,
    pub base: i32,
    pub purchasable: bool,
}

/// Stats granted by inventory entries (items and legacy runes).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InventoryDataStats {
    pub percent_crit_damage_mod: f64,
    pub percent_spell_block_mod: f64,
    #[serde(rename = "PercentHPRegenMod")]
    pub percent_hp_regen_mod: f64,
    pub percent_movement_speed_mod: f64,
    pub flat_spell_block_mod: f64,
    pub flat_crit_damage_mod: f64,
    pub flat_energy_pool_mod: f64,
    pub percent_life_steal_mod: f64,
    #[serde(rename = "FlatMPPoolMod")]
    pub flat_mp_pool_mod: f64,
    pub flat_movement_speed_mod: f64,
    pub percent_attack_speed_mod: f64,
    pub flat_block_mod: f64,
    pub percent_block_mod: f64,
    pub flat_energy_regen_mod: f64,
    pub percent_spell_vamp_mod: f64,
    #[serde(rename = "FlatMPRegenMod")]
    pub flat_mp_regen_mod: f64,
    pub percent_dodge_mod: f64,
    pub flat_attack_speed_mod: f64,
    pub flat_armor_mod: f64,
    #[serde(rename = "FlatHPRegenMod")]
    pub flat_hp_regen_mod: f64,
    pub percent_magic_damage_mod: f64,
    #[serde(rename = "PercentMPPoolMod")]
    pub percent_mp_pool_mod: f64,
    pub flat_magic_damage_mod: f64,
    #[serde(rename = "PercentMPRegenMod")]
    pub percent_mp_regen_mod: f64,
    pub percent_physical_damage_mod: f64,
    pub flat_physical_damage_mod: f64,
    #[serde(rename = "PercentHPPoolMod")]
    pub percent_hp_pool_mod: f64,
    pub percent_armor_mod: f64,
    pub percent_crit_chance_mod: f64,
    #[serde(rename = "PercentEXPBonus")]
    pub percent_exp_bonus: f64,
    #[serde(rename = "FlatHPPoolMod")]
    pub flat_hp_pool_mod: f64,
    pub flat_crit_chance_mod: f64,
    #[serde(rename = "FlatEXPBonus")]
    pub flat_exp_bonus: f64,
}

/// Item group data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemGroup {
    #[serde(rename = "MaxGroupOwnable")]
    pub max_group_ownable: String,
    pub key: String,
}

/// Localized language strings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageStrings {
    pub data: HashMap<String, String>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Map data keyed by map ID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapData {
    pub data: HashMap<String, MapDetails>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Details for one map.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapDetails {
    pub map_name: String,
    pub image: Image,
    pub map_id: i64,
    pub unpurchasable_item_list: Vec<i64>,
}

/// The full mastery list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryList {
    pub data: HashMap<String, Mastery>,
    pub version: String,
    pub tree: MasteryTree,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The mastery trees.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MasteryTree {
    #[serde(rename = "Resolve")]
    pub resolve: Vec<MasteryTreeList>,
    #[serde(rename = "Defense")]
    pub defense: Vec<MasteryTreeList>,
    #[serde(rename = "Utility")]
    pub utility: Vec<MasteryTreeList>,
    #[serde(rename = "Offense")]
    pub offense: Vec<MasteryTreeList>,
    #[serde(rename = "Ferocity")]
    pub ferocity: Vec<MasteryTreeList>,
    #[serde(rename = "Cunning")]
    pub cunning: Vec<MasteryTreeList>,
}

/// One tier of a mastery tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryTreeList {
    pub mastery_tree_items: Vec<MasteryTreeItem>,
}

/// One mastery within a tree tier.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MasteryTreeItem {
    pub mastery_id: i32,
    pub prereq: String,
}

/// Mastery data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Mastery {
    pub prereq: String,
    pub mastery_tree: String,
    pub name: String,
    pub ranks: i32,
    pub image: Image,
    pub sanitized_description: Vec<String>,
    pub id: i32,
    pub description: Vec<String>,
}

/// Profile icon data keyed by icon ID.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileIconData {
    pub data: HashMap<String, ProfileIconDetails>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Details for one profile icon.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileIconDetails {
    pub image: Image,
    pub id: i64,
}

/// Realm data for a region.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Realm {
    pub lg: String,
    pub dd: String,
    pub l: String,
    pub n: HashMap<String, String>,
    #[serde(rename = "profileiconmax")]
    pub profile_icon_max: i32,
    pub store: String,
    pub v: String,
    pub cdn: String,
    pub css: String,
}

/// A reforged rune path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReforgedRunePath {
    pub slots: Vec<ReforgedRuneSlot>,
    pub icon: String,
    pub id: i32,
    pub key: String,
    pub name: String,
}

/// One slot of a reforged rune path.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReforgedRuneSlot {
    pub runes: Vec<ReforgedRune>,
}

/// A reforged rune.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReforgedRune {
    pub rune_path_name: String,
    pub rune_path_id: i32,
    pub name: String,
    pub id: i32,
    pub key: String,
    pub short_desc: String,
    pub long_desc: String,
    pub icon: String,
}

/// The full legacy rune list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuneList {
    pub data: HashMap<String, Rune>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Legacy rune data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rune {
    pub stats: InventoryDataStats,
    pub name: String,
    pub tags: Vec<String>,
    pub image: Image,
    pub sanitized_description: String,
    pub rune: RuneMetaData,
    pub id: i32,
    pub description: String,
}

/// Rune tier metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuneMetaData {
    pub tier: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_rune: bool,
}

/// The full summoner spell list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerSpellList {
    pub data: HashMap<String, SummonerSpell>,
    pub version: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Summoner spell data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummonerSpell {
    pub vars: Vec<SpellVars>,
    pub image: Image,
    pub cost_burn: String,
    pub cooldown: Vec<f64>,
    pub effect_burn: Vec<String>,
    pub id: i32,
    pub cooldown_burn: String,
    pub tooltip: String,
    #[serde(rename = "maxrank")]
    pub max_rank: i32,
    pub range_burn: String,
    pub description: String,
    pub effect: Vec<Vec<f64>>,
    pub key: String,
    #[serde(rename = "leveltip")]
    pub level_tip: LevelTip,
    pub modes: Vec<String>,
    pub resource: String,
    pub name: String,
    pub cost_type: String,
    pub sanitized_description: String,
    pub sanitized_tooltip: String,
    /// Either a list of integers or the string `"self"`
    pub range: serde_json::Value,
    pub cost: Vec<i32>,
    pub summoner_level: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champions_options_query_pairs() {
        let options = StaticChampionsOptions {
            locale: Some("en_US".to_string()),
            tags: vec!["all".to_string()],
            data_by_id: Some(true),
            ..StaticChampionsOptions::default()
        };

        assert_eq!(
            options.query(),
            vec![
                ("locale", "en_US".to_string()),
                ("tags", "all".to_string()),
                ("dataById", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_options_render_no_pairs() {
        assert!(StaticChampionsOptions::default().query().is_empty());
        assert!(StaticItemsOptions::default().query().is_empty());
        assert!(StaticLocaleOptions::default().query().is_empty());
        assert!(StaticSpellsOptions::default().query().is_empty());
    }
}
