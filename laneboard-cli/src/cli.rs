use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "laneboard")]
#[command(version)]
#[command(about = "A kanban board of draggable text cards")]
#[command(long_about = "
laneboard keeps a kanban board of text cards in columns. Cards are stored as
one JSON array in .laneboard/ and can be added, deleted, moved by index, or
moved by replaying a pointer drag against the rendered board grid.

Example usage:
  laneboard add todo Buy milk           # Add a card to the todo column
  laneboard list                        # Show every column
  laneboard move <ID> done 0            # Put a card on top of done
  laneboard drag <ID> --x 600 --y 60    # Drop a card where the pointer is
  laneboard --format=json list          # Machine-readable output
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Storage directory (overrides configuration)
    #[arg(long, global = true, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Additional configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a card at the bottom of a column
    Add {
        /// Column key
        column: String,
        /// Card text; blank text adds nothing
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Delete a card
    Delete {
        /// Card id
        id: String,
    },
    /// Move a card to an index within a column (out-of-range indices clamp)
    #[command(name = "move")]
    Move {
        /// Card id
        id: String,
        /// Target column key
        column: String,
        /// Target position, 0 is the top
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
    /// List cards, grouped by column
    List {
        /// Only this column
        column: Option<String>,
    },
    /// Show the configured columns and their card counts
    Columns,
    /// Drag a card with the pointer and release it at a screen position
    #[command(long_about = "
Replays a pointer gesture against the board rendered as a grid: press on the
center of the card, move through any --via points, then release at --x/--y.
Use `laneboard columns` to see where each column is drawn.
")]
    Drag {
        /// Card id
        id: String,
        /// Release x coordinate in pixels
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        /// Release y coordinate in pixels
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Intermediate pointer positions as X,Y
        #[arg(long, value_name = "X,Y", value_parser = parse_point)]
        via: Vec<(f64, f64)>,
    },
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{}': {}", x, e))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{}': {}", y, e))?;
    Ok((x, y))
}
