//! Folio admin CLI: operator surface over the content store, plus a one-shot
//! chat probe.
//!
//! Usage:
//!   folio-admin list <projects|experience>
//!   folio-admin save <projects|experience> <record.json>   (requires login)
//!   folio-admin delete <projects|experience> <id>           (requires login)
//!   folio-admin login <passcode> | logout | status
//!   folio-admin chat "message"
//!
//! Store location: FOLIO_STORAGE_PATH or config/folio.toml, default
//! ./data/folio_content. Chat requires FOLIO_API_KEY (or OPENROUTER_API_KEY).

use folio_core::{
    ChatBridge, ContentRepository, ContentStore, Experience, FolioConfig, Project, SessionGuard,
    SledStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(command) = args.next() else {
        print_usage();
        return Ok(());
    };

    let cfg = FolioConfig::load()?;
    let store = SledStore::open_path(&cfg.storage_path)?;
    let repo = ContentRepository::new(store.clone());
    let guard = SessionGuard::new(store, cfg.admin_passcode.clone());

    match command.as_str() {
        "list" => match args.next().as_deref() {
            Some("projects") | None => {
                for p in repo.get_all::<Project>()? {
                    println!("{:>3}  {}  [{}]", p.id, p.title, p.category);
                }
            }
            Some("experience") => {
                for e in repo.get_all::<Experience>()? {
                    println!("{:>3}  {} @ {}  ({})", e.id, e.role, e.company, e.period);
                }
            }
            Some(other) => eprintln!("unknown collection: {}", other),
        },
        "save" => {
            if !ensure_authenticated(&guard) {
                return Ok(());
            }
            let collection = args.next().unwrap_or_default();
            let Some(file) = args.next() else {
                eprintln!("save needs a record file: folio-admin save {} <record.json>", collection);
                return Ok(());
            };
            let raw = std::fs::read_to_string(&file)?;
            match collection.as_str() {
                "projects" => {
                    let saved = repo.save(serde_json::from_str::<Project>(&raw)?)?;
                    println!("Saved \"{}\" with id {}.", saved.title, saved.id);
                }
                "experience" => {
                    let saved = repo.save(serde_json::from_str::<Experience>(&raw)?)?;
                    println!("Saved \"{}\" with id {}.", saved.role, saved.id);
                }
                other => eprintln!("unknown collection: {}", other),
            }
        }
        "delete" => {
            if !ensure_authenticated(&guard) {
                return Ok(());
            }
            let collection = args.next().unwrap_or_default();
            let Some(id) = args.next().and_then(|s| s.parse::<u32>().ok()) else {
                eprintln!("delete needs a numeric id");
                return Ok(());
            };
            match collection.as_str() {
                "projects" => repo.delete::<Project>(id)?,
                "experience" => repo.delete::<Experience>(id)?,
                other => {
                    eprintln!("unknown collection: {}", other);
                    return Ok(());
                }
            }
            println!("Deleted id {} (no-op if absent).", id);
        }
        "login" => {
            let passcode = args.next().unwrap_or_default();
            if guard.login(&passcode)? {
                println!("Session authenticated.");
            } else {
                println!("Invalid passcode.");
            }
        }
        "logout" => {
            guard.logout()?;
            println!("Session cleared.");
        }
        "status" => {
            println!(
                "{}",
                if guard.is_authenticated() {
                    "authenticated"
                } else {
                    "unauthenticated"
                }
            );
        }
        "chat" => {
            let message = args.next().unwrap_or_default();
            if message.trim().is_empty() {
                eprintln!("chat needs a message");
                return Ok(());
            }
            let bridge = ChatBridge::from_config(&cfg);
            println!("{}", bridge.send(&message, &[]).await);
        }
        _ => print_usage(),
    }

    Ok(())
}

fn ensure_authenticated<S: ContentStore>(guard: &SessionGuard<S>) -> bool {
    if guard.is_authenticated() {
        true
    } else {
        eprintln!("Not authenticated. Run `folio-admin login <passcode>` first.");
        false
    }
}

fn print_usage() {
    eprintln!("Folio — portfolio content admin");
    eprintln!("  list <projects|experience>            Show a collection (seeds defaults on first run)");
    eprintln!("  save <projects|experience> <file>     Insert or replace a record from JSON (login required)");
    eprintln!("  delete <projects|experience> <id>     Remove a record by id (login required)");
    eprintln!("  login <passcode> | logout | status    Manage the admin session");
    eprintln!("  chat \"message\"                        One-shot question to the AI assistant");
}
