use anyhow::Context;
use colored::Colorize;
use mcpack_pack::{DataPack, PackConfig};
use mcpack_types::ItemKind;
use tracing::{debug, info};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => PackConfig::from_file(path)
            .with_context(|| format!("failed to read config {}", path.display()))?,
        None => PackConfig::default(),
    };
    debug!(
        config = ?cli.config,
        json_indent = config.json_indent,
        compress_structures = config.compress_structures,
        "resolved config"
    );
    match cli.command {
        Command::Info(args) => cmd_info(args),
        Command::List(args) => cmd_list(args),
        Command::Copy(args) => cmd_copy(args, &config),
        Command::New(args) => cmd_new(args, &config),
    }
}

fn load(path: &std::path::Path) -> anyhow::Result<DataPack> {
    let pack =
        DataPack::load(path).with_context(|| format!("failed to load pack {}", path.display()))?;
    debug!(path = %path.display(), items = pack.item_count(), "pack loaded");
    Ok(pack)
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let pack = load(&args.pack)?;
    println!("{} {}", "Pack".bold(), pack.name.yellow().bold());
    println!("  Description: {}", pack.description);
    println!("  Format: {}", pack.pack_format.to_string().cyan());
    println!("  Items: {}", pack.item_count().to_string().bold());
    for (name, ns) in &pack.namespaces {
        println!("\n{} {}", "Namespace".bold(), name.green());
        if ns.is_empty() {
            println!("  {}", "(empty)".dimmed());
            continue;
        }
        for kind in ItemKind::ALL {
            let count = ns.count(kind);
            if count > 0 {
                println!("  {:<14} {}", kind.plural(), count);
            }
        }
    }
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let pack = load(&args.pack)?;
    let mut shown = 0usize;
    for (ns, kind, path, _) in pack.iter() {
        if args.namespace.as_deref().is_some_and(|n| n != ns) {
            continue;
        }
        if args.kind.is_some_and(|k| k != kind) {
            continue;
        }
        println!("{:<14} {}:{}", kind.name().dimmed(), ns.green(), path);
        shown += 1;
    }
    if shown == 0 {
        println!("No items.");
    }
    Ok(())
}

fn cmd_copy(args: CopyArgs, config: &PackConfig) -> anyhow::Result<()> {
    let pack = load(&args.pack)?;
    let root = pack
        .dump_with(&args.dest, args.overwrite, config)
        .with_context(|| format!("failed to write pack into {}", args.dest.display()))?;
    info!(from = %args.pack.display(), to = %root.display(), "pack copied");
    println!(
        "{} Copied {} items to {}",
        "✓".green().bold(),
        pack.item_count(),
        root.display().to_string().bold()
    );
    Ok(())
}

fn cmd_new(args: NewArgs, config: &PackConfig) -> anyhow::Result<()> {
    let pack = DataPack::new(args.name, args.description).with_pack_format(args.format);
    let root = pack
        .dump_with(&args.dir, false, config)
        .with_context(|| format!("failed to create pack in {}", args.dir.display()))?;
    info!(name = %pack.name, format = pack.pack_format, "pack created");
    println!(
        "{} Created pack {} in {}",
        "✓".green().bold(),
        pack.name.yellow(),
        root.display().to_string().bold()
    );
    Ok(())
}
