//! Diagnostic: load the player layer from a level file and echo it back.
//!
//! Usage: diag_level <level_file> [capacity]

use anyhow::{bail, Context, Result};
use level_io::io::DEFAULT_CAPACITY;
use level_io::{LineStream, NotificationCollection, NotificationType, PlayerLayer};
use std::io::Write;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: diag_level <level_file> [capacity]");
        std::process::exit(1);
    }

    let path = &args[1];
    let capacity = match args.get(2) {
        Some(raw) => raw
            .parse::<usize>()
            .with_context(|| format!("Invalid capacity '{raw}'"))?,
        None => DEFAULT_CAPACITY,
    };
    if capacity < 2 {
        bail!("Capacity must be at least 2, got {capacity}");
    }

    let mut stream = LineStream::open(path, capacity)?;
    let mut notifications = NotificationCollection::new();
    let player = PlayerLayer::from_line_stream(&mut stream, &mut notifications)
        .with_context(|| format!("Reading player layer from '{path}'"))?;

    println!("Player at {} color {}", player.position, player.color);
    for note in &notifications {
        println!("  {note}");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "Serialized: ")?;
    player.dump_stream(&mut out)?;

    let rest = stream.collect_until_end_with(&mut notifications);
    writeln!(
        out,
        "--- {} more line(s) after the player layer ---",
        rest.lines().count()
    )?;
    for note in notifications.of_type(NotificationType::Error) {
        writeln!(out, "  {note}")?;
    }

    Ok(())
}
