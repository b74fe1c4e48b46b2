use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{ItineraryCommands, ListCommands, PlaceCommands};

/// Plan city trips day by day from your Google Maps lists
///
/// Nomad keeps itineraries for cities you want to visit. Each itinerary
/// picks places from a Google Maps list and assigns them to days. The same
/// operations are available to AI assistants through the MCP server started
/// with `nomad serve`.
#[derive(Parser)]
#[command(version, about, name = "nomad")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/nomad/nomad.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands. Without one, itineraries are listed.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage itineraries
    #[command(alias = "i")]
    Itinerary {
        #[command(subcommand)]
        command: ItineraryCommands,
    },
    /// Plan places within an itinerary
    #[command(alias = "p")]
    Place {
        #[command(subcommand)]
        command: PlaceCommands,
    },
    /// Manage Google Maps lists
    #[command(alias = "l")]
    List {
        #[command(subcommand)]
        command: ListCommands,
    },
    /// Start the MCP server on stdio
    Serve,
}
