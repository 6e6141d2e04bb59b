//! # loot CLI
//!
//! Command-line interface for the lootlist item tracker.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use lootlist::{
    commands::{self, parse_coordinate, AddArgs, EditArgs, ListArgs, MarkArgs, SortBy},
    logging,
    ui::InteractiveArgs,
    Config, ItemKind, Region, StatusFilter,
};

const GLOBAL_HELP: &str = "\
Configuration:
  ~/.config/lootlist/config      Data file, ID pattern, interactive mode, log level
  LOOTLIST_LOG                   Log filter (e.g. debug), overrides log_level

Regions:
  Mondstadt, Liyue, Inazuma, Sumeru, Fontaine, Natlan, Snezhnaya

Kinds:
  chest, resource, quest, artifact, weapon, other

Getting Started:
  loot add \"Chest A\" --region mondstadt --x 10 --y 20 --kind chest
  loot list --missing            Items still to collect
  loot mark --id 0A2B            Mark an item as collected
  loot stats                     Progress overall and per region

Learn more:
  loot <COMMAND> --help          Show detailed help for a command";

#[derive(Parser)]
#[command(name = "loot")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Checklist tracker for collectible game items")]
#[command(
    long_about = "lootlist keeps a checklist of collectible game items: chests, resources, \
quests and more, each with a map region, coordinates and a collected flag.\n\n\
Items are stored in a single JSON file. Two items with the same name in the same region \
closer than 0.1 map units on both axes are treated as the same item."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Data file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new item
    #[command(
        long_about = "Add a new item and save the data file.\n\n\
The item starts as not collected. Coordinates must lie between -1000 and 1000. \
Adding an item with the same name (ignoring case) in the same region within 0.1 \
map units of an existing one fails.",
        after_help = "Examples:\n  \
loot add \"Chest A\" --region mondstadt --x 10 --y 20\n  \
loot add \"Cor Lapis\" -r liyue --x -312.5 --y 88 --kind resource\n  \
loot add \"Oculus\" -r inazuma --x 5 --y 5 --notes \"on the cliff\""
    )]
    Add {
        /// Name of the item
        name: String,

        /// Map region
        #[arg(short, long)]
        region: Region,

        /// X coordinate
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: f64,

        /// Y coordinate
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: f64,

        /// Kind of item
        #[arg(short, long, default_value = "other")]
        kind: ItemKind,

        /// Notes for the item
        #[arg(long)]
        notes: Option<String>,
    },

    /// List items
    #[command(
        long_about = "List items with optional filters.\n\n\
Shows one row per item: status, ID, name, region, kind, coordinates, date added and notes.",
        after_help = "Examples:\n  \
loot list                          All items, oldest first\n  \
loot list --region liyue           Items in one region\n  \
loot list --missing                Items still to collect\n  \
loot list --kind chest --sort name Chests alphabetically\n  \
loot list --search bridge          Name or notes containing 'bridge'"
    )]
    List {
        /// Filter by region
        #[arg(short, long)]
        region: Option<Region>,

        /// Only collected items
        #[arg(long, conflicts_with = "missing")]
        collected: bool,

        /// Only items not yet collected
        #[arg(long)]
        missing: bool,

        /// Filter by kind
        #[arg(short, long)]
        kind: Option<ItemKind>,

        /// Case-insensitive text search over name and notes
        #[arg(short, long)]
        search: Option<String>,

        /// Sort order
        #[arg(long, value_enum, default_value = "added")]
        sort: SortBy,
    },

    /// Mark an item as collected
    #[command(
        long_about = "Mark an item as collected (or not collected with --undo) and save.\n\n\
Without --id, a selection list of the items whose status would change is shown \
when running in a terminal.",
        after_help = "Examples:\n  \
loot mark --id 0A2B                Mark as collected\n  \
loot mark --id 0A2B --undo         Mark as not collected\n  \
loot mark --id 0A --notes \"done\"   Also replace the notes\n  \
loot mark                          Pick from a list"
    )]
    Mark {
        /// Item ID (partial match supported)
        #[arg(long)]
        id: Option<String>,

        /// Mark as not collected
        #[arg(long)]
        undo: bool,

        /// Replace the item's notes
        #[arg(long)]
        notes: Option<String>,

        /// Force the selection list
        #[arg(short, long)]
        interactive: bool,

        /// Never show the selection list
        #[arg(long, conflicts_with = "interactive")]
        no_interactive: bool,
    },

    /// Flip an item's collected status
    Toggle {
        /// Item ID (partial match supported)
        #[arg(long, required = true)]
        id: String,
    },

    /// Edit an existing item
    #[command(
        long_about = "Change any of an item's fields and save.\n\n\
The edit is rejected if it would make the item a duplicate of another one.",
        after_help = "Examples:\n  \
loot edit --id 0A2B --name \"Precious Chest\"\n  \
loot edit --id 0A2B --x 11 --y 21\n  \
loot edit --id 0A2B --clear-notes"
    )]
    Edit {
        /// Item ID (partial match supported)
        #[arg(long, required = true)]
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New region
        #[arg(short, long)]
        region: Option<Region>,

        /// New X coordinate
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        x: Option<f64>,

        /// New Y coordinate
        #[arg(long, allow_negative_numbers = true, value_parser = parse_coordinate)]
        y: Option<f64>,

        /// New kind
        #[arg(short, long)]
        kind: Option<ItemKind>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,

        /// Remove the notes
        #[arg(long, conflicts_with = "notes")]
        clear_notes: bool,
    },

    /// Show collection statistics
    Stats,

    /// List regions with collected/total counts
    Regions,

    /// Numbered text menu
    Menu,

    /// Full-screen item browser
    #[command(
        after_help = "Keys:\n  \
↑/↓ j/k      Move\n  \
←/→ h/l Tab  Cycle region filter\n  \
Space Enter  Toggle collected\n  \
a            Add item\n  \
e            Edit selected item (including collected and notes)\n  \
s            Save\n  \
q Esc        Quit (asks to save unsaved changes)"
    )]
    Browse,

    /// One-time setup (creates the global config)
    Setup,

    /// Generate shell completions
    #[command(after_help = "Examples:\n  \
loot completions zsh > ~/.zfunc/_loot\n  \
loot completions bash > ~/.local/share/bash-completion/completions/loot\n  \
loot completions fish > ~/.config/fish/completions/loot.fish")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let Cli { file, command } = Cli::parse();

    if let Commands::Completions { shell } = command {
        return commands::completions(shell, &mut Cli::command());
    }

    let config = Config::load()?.with_data_file(file);
    logging::init(config.log_level());

    match command {
        Commands::Add {
            name,
            region,
            x,
            y,
            kind,
            notes,
        } => commands::add(
            AddArgs {
                name,
                region,
                x,
                y,
                kind,
                notes,
            },
            &config,
        ),

        Commands::List {
            region,
            collected,
            missing,
            kind,
            search,
            sort,
        } => {
            let status = if collected {
                StatusFilter::Collected
            } else if missing {
                StatusFilter::Missing
            } else {
                StatusFilter::All
            };
            commands::list(
                &ListArgs {
                    region,
                    status,
                    kind,
                    search,
                    sort,
                },
                &config,
            )
        }

        Commands::Mark {
            id,
            undo,
            notes,
            interactive,
            no_interactive,
        } => commands::mark(
            &MarkArgs {
                id,
                undo,
                notes,
                interactive: InteractiveArgs {
                    interactive,
                    no_interactive,
                },
            },
            &config,
        ),

        Commands::Toggle { id } => commands::toggle(&id, &config),

        Commands::Edit {
            id,
            name,
            region,
            x,
            y,
            kind,
            notes,
            clear_notes,
        } => commands::edit(
            &EditArgs {
                id,
                name,
                region,
                x,
                y,
                kind,
                notes,
                clear_notes,
            },
            &config,
        ),

        Commands::Stats => commands::stats(&config),
        Commands::Regions => commands::regions(&config),
        Commands::Menu => commands::menu(&config),
        Commands::Browse => commands::browse(&config),
        Commands::Setup => commands::setup(&config),
        Commands::Completions { .. } => unreachable!("handled before loading config"),
    }
}
