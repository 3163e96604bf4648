//! Fixed seed list of the eight ancestral clan records.
//!
//! Values are reproduced verbatim from the source dataset; downstream
//! distance tests pin against these coordinates, so they must not drift.

use crate::model::clan::ClanRecord;
use once_cell::sync::Lazy;

/// Number of records in the seed list.
pub const SEED_CLAN_COUNT: usize = 8;

static SEED_CLANS: Lazy<Vec<ClanRecord>> = Lazy::new(|| {
    vec![
        clan(
            "pacidal",
            "Pacidal",
            "太陽",
            "高地優勢 / 監控者",
            "花蓮月眉 / 豐富",
            23.931,
            121.535,
            "☀️",
            "#d97706",
        ),
        clan(
            "ciwidian",
            "Ciwidian",
            "水蛭",
            "水源豐沛 / 濕地農業",
            "花蓮水璉村",
            23.778,
            121.564,
            "💧",
            "#2563eb",
        ),
        clan(
            "sadipongan",
            "Sadipongan",
            "鳥巢",
            "物理屏障 / 安全庇護",
            "石梯坪",
            23.488,
            121.503,
            "🛡️",
            "#4b5563",
        ),
        clan(
            "cikatopay",
            "Cikatopay",
            "大葉山欖",
            "濱海防風林 / 沿海資源",
            "大港口",
            23.498,
            121.501,
            "🌳",
            "#16a34a",
        ),
        clan(
            "cilangasan",
            "Cilangasan",
            "聖山",
            "制高點 / 正統根源",
            "八里灣山頂",
            23.545,
            121.489,
            "⛰️",
            "#9333ea",
        ),
        clan(
            "foladan",
            "Foladan",
            "月亮",
            "縱谷平原 / 曆法對應",
            "豐濱鄉的靜埔",
            23.460,
            121.500,
            "🌙",
            "#4f46e5",
        ),
        clan(
            "kakopa",
            "Kakopa",
            "牛車",
            "戰術運輸 / 後勤載重",
            "綠島",
            22.665,
            121.495,
            "🐂",
            "#ea580c",
        ),
        clan(
            "monari",
            "Monari'",
            "茅草",
            "在地資材庫 / 建材控制",
            "大港口",
            23.498,
            121.501,
            "⛺",
            "#b45309",
        ),
    ]
});

/// Returns a fresh owned copy of the seed list.
pub fn seed_clans() -> Vec<ClanRecord> {
    SEED_CLANS.clone()
}

#[allow(clippy::too_many_arguments)]
fn clan(
    id: &str,
    name: &str,
    meaning: &str,
    survival_note: &str,
    origin: &str,
    lat: f64,
    lon: f64,
    icon: &str,
    color: &str,
) -> ClanRecord {
    ClanRecord {
        id: id.to_string(),
        name: name.to_string(),
        meaning: meaning.to_string(),
        survival_note: survival_note.to_string(),
        origin: origin.to_string(),
        lat,
        lon,
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{seed_clans, SEED_CLAN_COUNT};

    #[test]
    fn seed_has_eight_records() {
        assert_eq!(seed_clans().len(), SEED_CLAN_COUNT);
    }

    #[test]
    fn seed_copies_are_independent() {
        let mut first = seed_clans();
        first.clear();
        assert_eq!(seed_clans().len(), SEED_CLAN_COUNT);
    }
}
