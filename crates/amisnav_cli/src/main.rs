//! Interactive roots-navigator session shell.
//!
//! # Responsibility
//! - Own one `ClanStore` for the lifetime of the session.
//! - Map commands to the four views and render core query results.
//! - Keep all business logic inside `amisnav_core`.

mod commands;
mod render;

use amisnav_core::{
    default_log_level, distance_km, estimate_walk_time, init_logging, sample_route_status,
    save_identity_csv, walking_directions_url, ClanDraft, ClanStore, IdentityCard, StoreError,
    CANGKANG_ORIGIN, DEFAULT_WALK_SPEED_KMH,
};
use chrono::Utc;
use clap::Parser;
use commands::{parse_command, Command};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_NEW_ICON: &str = "📍";
const DEFAULT_NEW_COLOR: &str = "#8b4513";
const DEFAULT_NEW_LAT: f64 = 23.400;
const DEFAULT_NEW_LON: f64 = 121.400;

/// Pangcah 氏族尋根終端 — interactive session over the clan record store.
#[derive(Debug, Parser)]
#[command(name = "amisnav", version)]
struct SessionArgs {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, default_value_t = default_log_level().to_string())]
    log_level: String,

    /// Absolute directory for rolling log files; logging stays off when
    /// unset.
    #[arg(long)]
    log_dir: Option<String>,

    /// Directory identity-card CSV exports are written into.
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,

    /// Reject new records whose derived id collides with an existing one.
    #[arg(long)]
    unique_ids: bool,

    /// Seed for the route-status sampler; entropy-based when unset.
    #[arg(long)]
    seed: Option<u64>,
}

struct Session {
    store: ClanStore,
    rng: StdRng,
    export_dir: PathBuf,
}

fn main() -> ExitCode {
    let args = SessionArgs::parse();

    if let Some(log_dir) = &args.log_dir {
        if let Err(err) = init_logging(&args.log_level, log_dir) {
            eprintln!("logging setup failed: {err}");
            return ExitCode::FAILURE;
        }
    }

    let store = if args.unique_ids {
        ClanStore::with_unique_ids()
    } else {
        ClanStore::new()
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session {
        store,
        rng,
        export_dir: args.export_dir,
    };

    info!(
        "event=session_open module=cli status=ok unique_ids={} seeded={}",
        args.unique_ids,
        args.seed.is_some()
    );

    render::banner(&mut session.rng);
    let stdin = io::stdin();
    match run_session(&mut session, &mut stdin.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_session(session: &mut Session, input: &mut impl BufRead) -> io::Result<()> {
    let mut line = String::new();
    loop {
        print!("amisnav> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Ok(Command::Empty) => {}
            Ok(Command::Help) => render::help(),
            Ok(Command::Clans) => render::database_view(&session.store),
            Ok(Command::Map { clan_name }) => map_view(session, &clan_name),
            Ok(Command::Identity) => identity_view(session, input)?,
            Ok(Command::Add) => add_view(session, input)?,
            Ok(Command::Reset) => {
                session.store.reset();
                println!("🔄 已回到起點，地圖資料已重置。");
            }
            Ok(Command::Quit) => break,
            Err(err) => println!("❌ {err}"),
        }
    }
    Ok(())
}

fn map_view(session: &mut Session, clan_name: &str) {
    let clan = match session.store.find_by_name(clan_name) {
        Ok(clan) => clan.clone(),
        Err(err) => {
            println!("❌ {err}");
            return;
        }
    };

    let distance = distance_km(CANGKANG_ORIGIN, clan.location());
    let estimate = estimate_walk_time(distance, DEFAULT_WALK_SPEED_KMH);
    let status = sample_route_status(&mut session.rng);
    let url = walking_directions_url(CANGKANG_ORIGIN, clan.location());

    render::map_view(&clan, distance, estimate, status, &url);
}

fn identity_view(session: &mut Session, input: &mut impl BufRead) -> io::Result<()> {
    println!("🪪 建立自我認同");
    let unit_name = prompt(input, "你的名字 (UNIT ID / 自然名)", "")?;
    let linkage_name = prompt(input, "媽媽的名字 (LINKAGE NODE)", "")?;
    println!("可選氏族: {}", session.store.names().join(", "));
    let clan_name = prompt(input, "你的氏族 (ORIGIN CODE)", "")?;

    let clan = match session.store.find_by_name(&clan_name) {
        Ok(clan) => clan.clone(),
        Err(err) => {
            println!("❌ {err}");
            return Ok(());
        }
    };

    let card = IdentityCard::new(unit_name, linkage_name, clan);
    render::identity_card_view(&card);

    match save_identity_csv(&session.export_dir, &card, Utc::now()) {
        Ok(path) => println!("💾 紀錄卡已寫入: {}", path.display()),
        Err(err) => println!("❌ 無法寫入紀錄卡: {err}"),
    }
    Ok(())
}

fn add_view(session: &mut Session, input: &mut impl BufRead) -> io::Result<()> {
    println!("➕ 延續傳承 — 記錄一個新的氏族");
    let draft = ClanDraft {
        name: prompt(input, "氏族名稱 (Name / 羅馬拼音)", "")?,
        meaning: prompt(input, "象徵意義 (Meaning)", "")?,
        survival_note: prompt(input, "生存智慧 (Survival Wisdom)", "")?,
        origin: prompt(input, "發源地 (Origin)", "")?,
        lat: prompt_f64(input, "緯度 (Latitude)", DEFAULT_NEW_LAT)?,
        lon: prompt_f64(input, "經度 (Longitude)", DEFAULT_NEW_LON)?,
        icon: prompt(input, "代表圖示 (Icon / Emoji)", DEFAULT_NEW_ICON)?,
        color: prompt(input, "標記顏色 (Marker Color)", DEFAULT_NEW_COLOR)?,
    };
    let name = draft.name.clone();

    match session.store.append(draft) {
        Ok(id) => println!("✅ [{name}] 的故事已加入地圖中！(id={id})"),
        Err(err @ StoreError::Validation(_)) => {
            println!("❌ 請填寫氏族名稱與象徵意義。({err})");
        }
        Err(err) => println!("❌ {err}"),
    }
    Ok(())
}

fn prompt(input: &mut impl BufRead, label: &str, default: &str) -> io::Result<String> {
    if default.is_empty() {
        print!("{label}: ");
    } else {
        print!("{label} [{default}]: ");
    }
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(default.to_string());
    }
    let value = line.trim();
    Ok(if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    })
}

fn prompt_f64(input: &mut impl BufRead, label: &str, default: f64) -> io::Result<f64> {
    let raw = prompt(input, label, &default.to_string())?;
    match raw.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => {
            println!("⚠️ 無法解析 `{raw}`，改用預設值 {default}。");
            Ok(default)
        }
    }
}
