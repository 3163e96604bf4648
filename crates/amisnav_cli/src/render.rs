//! Text rendering for the four session views.
//!
//! # Responsibility
//! - Print clan cards, the map summary, and the identity card as text.
//! - Stay logic-free: every number and status shown here was computed by
//!   `amisnav_core` before the call.

use amisnav_core::{ClanRecord, ClanStore, IdentityCard, RouteStatus, WalkTimeEstimate};
use rand::seq::SliceRandom;
use rand::Rng;

/// 尋根小語 shown once per session start.
const WISDOM_QUOTES: &[&str] = &[
    "「不要忘記你的名字，那是祖先回家的路。」",
    "「土地不會說話，但它記得我們每一個人的腳步。」",
    "「像大葉山欖一樣扎根，像太陽一樣照耀部落。」",
    "「海浪帶我們去遠方，但洋流終會帶我們回家。」",
    "「氏族是我們的根，部落是我們的家。」",
    "「聽，風裡有耆老的歌聲。」",
    "「我們都是 Cilangasan 聖山的孩子。」",
];

/// Session banner with one randomly chosen roots quote.
pub fn banner<R: Rng + ?Sized>(rng: &mut R) {
    println!("🌱 Pangcah 氏族尋根終端 v{}", amisnav_core::core_version());
    println!("連結過去與未來的數位路徑 // 學生協作系統");
    if let Some(quote) = WISDOM_QUOTES.choose(rng) {
        println!();
        println!("🏔️ 祖靈的指引: {quote}");
    }
    println!();
    println!("輸入 `help` 查看指令。");
}

pub fn help() {
    println!("指令 (Commands):");
    println!("  clans             氏族傳說 — list all clan records");
    println!("  map <clan name>   尋根地圖 — distance and walk time from 長光部落");
    println!("  id                認同協議 — compose and export an identity card");
    println!("  add               延續傳承 — record a new clan for this session");
    println!("  reset             重新啟動旅程 — restore the seed list");
    println!("  quit              leave the session");
}

/// Database view: every record, in insertion order.
pub fn database_view(store: &ClanStore) {
    println!("📜 氏族記憶與特徵 ({} 筆)", store.len());
    for clan in store.records() {
        println!();
        println!("{} {} — {}", clan.icon, clan.name, clan.meaning);
        println!("   🧬 生存智慧: {}", clan.survival_note);
        println!("   📍 發源地: {} ({}, {})", clan.origin, clan.lat, clan.lon);
    }
}

/// Map view summary for one selected clan.
pub fn map_view(
    clan: &ClanRecord,
    distance_km: f64,
    estimate: WalkTimeEstimate,
    status: RouteStatus,
    directions_url: &str,
) {
    println!("👣 重返發源地: {} {}", clan.icon, clan.name);
    println!("GPS 座標: {}, {}", clan.lat, clan.lon);
    println!("直線距離 (Distance): {distance_km:.2} km");

    match status {
        RouteStatus::Blocked => {
            println!("⚠️ 路途艱辛 (Path Blocked): 古道目前難以通行，但心意可以抵達。");
        }
        RouteStatus::Clear => {
            println!("✅ 路徑暢通 (Path Clear)");
            println!(
                "徒步尋根預估時間: 約 {:.1} 小時 (含休息與緩衝, {:.1}–{:.1} 小時)",
                estimate.base_hours, estimate.min_hours, estimate.max_hours
            );
            println!("🚀 Google Maps 導航: {directions_url}");
        }
    }
}

/// Identity view: the rendered card.
pub fn identity_card_view(card: &IdentityCard) {
    println!("┌──────────────────────────────────────┐");
    println!("│ AMIS IDENTITY LOG          尋根紀錄  │");
    println!("├──────────────────────────────────────┤");
    println!("│ 圖騰 (TOTEM):    {}", card.clan.icon);
    println!("│ 名字 (UNIT ID):  {}", card.unit_name);
    println!("│ 母親 (LINKAGE):  {}", card.linkage_name);
    println!("│ 氏族 (CLAN):     {}", card.clan.id.to_uppercase());
    println!("│ 發源地定位:      {}", card.coords_display());
    println!("└──────────────────────────────────────┘");
}
