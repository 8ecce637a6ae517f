use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mcpack_types::ItemKind;

#[derive(Debug, Parser)]
#[command(
    name = "mcpack",
    about = "Inspect, normalize and create data packs",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with dump settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show pack metadata and item counts
    Info(InfoArgs),
    /// List item keys
    List(ListArgs),
    /// Load a pack and dump it elsewhere
    Copy(CopyArgs),
    /// Create an empty pack
    New(NewArgs),
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    pub pack: PathBuf,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    pub pack: PathBuf,
    /// Only this kind (e.g. `function`, `block_tags`, `tags/items`)
    #[arg(short, long)]
    pub kind: Option<ItemKind>,
    #[arg(short, long)]
    pub namespace: Option<String>,
}

#[derive(Debug, Args)]
pub struct CopyArgs {
    pub pack: PathBuf,
    /// Directory that receives `<pack name>/`
    pub dest: PathBuf,
    #[arg(long)]
    pub overwrite: bool,
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory that receives `<name>/`
    pub dir: PathBuf,
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    #[arg(long, default_value_t = mcpack_pack::DEFAULT_PACK_FORMAT)]
    pub format: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "mcpack", "list", "packs/demo", "--kind", "tags/blocks", "-n", "minecraft",
        ])
        .unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.pack, PathBuf::from("packs/demo"));
        assert_eq!(args.kind, Some(ItemKind::BlockTag));
        assert_eq!(args.namespace.as_deref(), Some("minecraft"));
    }

    #[test]
    fn reject_unknown_kind() {
        assert!(Cli::try_parse_from(["mcpack", "list", "p", "--kind", "entity_type_tag"]).is_err());
    }

    #[test]
    fn parse_new_defaults() {
        let cli = Cli::try_parse_from(["mcpack", "new", "out", "demo"]).unwrap();
        let Command::New(args) = cli.command else {
            panic!("expected new");
        };
        assert_eq!(args.name, "demo");
        assert_eq!(args.description, "");
        assert_eq!(args.format, 1);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mcpack", "copy", "a", "b", "--overwrite", "-v", "--config", "mcpack.toml",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("mcpack.toml")));
        let Command::Copy(args) = cli.command else {
            panic!("expected copy");
        };
        assert!(args.overwrite);
    }

    #[test]
    fn missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["mcpack"]).is_err());
    }
}
