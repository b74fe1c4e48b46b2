//! Command-line subcommands and their handlers.
//!
//! Each subcommand has a clap argument struct converted into the matching
//! core parameter type with `From`, so clap attributes never leak into
//! `nomad_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```
//!
//! [`Cli`] runs a parsed command against the planner and prints the result
//! through the [`TerminalRenderer`].

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use nomad_core::{
    display::{
        CreateResult, DeleteResult, MapsLists, OperationStatus, Places, UpdateResult,
    },
    params::*,
    SortMode, TripPlanner,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Itinerary arguments
// ============================================================================

/// Create an itinerary for a city
#[derive(Args)]
pub struct CreateItineraryArgs {
    /// City to plan (one itinerary per city)
    pub city: String,
    /// Number of days in the trip (1 to 365)
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: i64,
    /// Google Maps list to pick places from
    #[arg(short, long = "list")]
    pub list_name: String,
}

impl From<CreateItineraryArgs> for CreateItinerary {
    fn from(val: CreateItineraryArgs) -> Self {
        CreateItinerary {
            city: val.city,
            days: val.days,
            list_name: val.list_name,
        }
    }
}

/// Show an itinerary day by day
#[derive(Args)]
pub struct ShowItineraryArgs {
    #[arg(help = "Unique identifier of the itinerary to show")]
    pub id: u64,
}

impl From<ShowItineraryArgs> for Id {
    fn from(val: ShowItineraryArgs) -> Self {
        Id { id: val.id }
    }
}

/// Change the city, length or list of an itinerary
#[derive(Args)]
pub struct UpdateItineraryArgs {
    #[arg(help = "Unique identifier of the itinerary to update")]
    pub id: u64,
    /// New city name
    #[arg(short, long)]
    pub city: Option<String>,
    /// New number of days
    #[arg(short, long, allow_negative_numbers = true)]
    pub days: Option<i64>,
    /// New Google Maps list
    #[arg(short, long = "list")]
    pub list_name: Option<String>,
}

impl From<UpdateItineraryArgs> for UpdateItinerary {
    fn from(val: UpdateItineraryArgs) -> Self {
        UpdateItinerary {
            id: val.id,
            city: val.city,
            days: val.days,
            list_name: val.list_name,
        }
    }
}

/// Delete an itinerary permanently
#[derive(Args)]
pub struct DeleteItineraryArgs {
    #[arg(help = "Unique identifier of the itinerary to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteItineraryArgs> for DeleteItinerary {
    fn from(val: DeleteItineraryArgs) -> Self {
        DeleteItinerary {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ItineraryCommands {
    #[command(alias = "c")]
    Create(CreateItineraryArgs),
    /// List all itineraries
    #[command(aliases = ["l", "ls"])]
    List,
    #[command(alias = "s")]
    Show(ShowItineraryArgs),
    #[command(alias = "u")]
    Update(UpdateItineraryArgs),
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteItineraryArgs),
    /// Create the demo Paris itinerary (needs the demo lists)
    Demo,
}

// ============================================================================
// Place arguments
// ============================================================================

/// Add a place from the itinerary's list to a day
#[derive(Args)]
pub struct AddPlaceArgs {
    #[arg(help = "Itinerary to plan")]
    pub itinerary_id: u64,
    #[arg(help = "1-based day number")]
    pub day: u32,
    #[arg(help = "Name of a place in the itinerary's Google Maps list")]
    pub name: String,
}

impl From<AddPlaceArgs> for AddPlace {
    fn from(val: AddPlaceArgs) -> Self {
        AddPlace {
            itinerary_id: val.itinerary_id,
            day: val.day,
            place: val.name,
        }
    }
}

/// Remove a planned place from a day
#[derive(Args)]
pub struct RemovePlaceArgs {
    #[arg(help = "Itinerary to modify")]
    pub itinerary_id: u64,
    #[arg(help = "1-based day number")]
    pub day: u32,
    #[arg(help = "Name of the planned place")]
    pub name: String,
}

impl From<RemovePlaceArgs> for RemovePlace {
    fn from(val: RemovePlaceArgs) -> Self {
        RemovePlace {
            itinerary_id: val.itinerary_id,
            day: val.day,
            place: val.name,
        }
    }
}

/// Candidate ordering accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Earliest opening hour first
    Opening,
    /// Nearest to --start first
    Distance,
}

impl From<SortArg> for SortMode {
    fn from(val: SortArg) -> Self {
        match val {
            SortArg::Opening => SortMode::Opening,
            SortArg::Distance => SortMode::Distance,
        }
    }
}

/// Show places that are not planned yet
#[derive(Args)]
pub struct CandidatesArgs {
    #[arg(help = "Itinerary whose list is browsed")]
    pub itinerary_id: u64,
    /// Ordering of the candidates
    #[arg(short, long, value_enum, default_value = "opening")]
    pub sort: SortArg,
    /// Place in the list to measure distances from
    #[arg(long)]
    pub start: Option<String>,
}

impl From<CandidatesArgs> for CandidatePlaces {
    fn from(val: CandidatesArgs) -> Self {
        CandidatePlaces {
            itinerary_id: val.itinerary_id,
            sort: val.sort.into(),
            start: val.start,
        }
    }
}

#[derive(Subcommand)]
pub enum PlaceCommands {
    #[command(alias = "a")]
    Add(AddPlaceArgs),
    #[command(aliases = ["r", "rm"])]
    Remove(RemovePlaceArgs),
    #[command(alias = "c")]
    Candidates(CandidatesArgs),
}

// ============================================================================
// Google Maps list arguments
// ============================================================================

/// Show the places of a Google Maps list
#[derive(Args)]
pub struct ShowListArgs {
    #[arg(help = "Unique identifier of the list to show")]
    pub id: u64,
}

impl From<ShowListArgs> for Id {
    fn from(val: ShowListArgs) -> Self {
        Id { id: val.id }
    }
}

/// Delete a Google Maps list permanently
#[derive(Args)]
pub struct DeleteListArgs {
    #[arg(help = "Unique identifier of the list to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteListArgs> for DeleteMapsList {
    fn from(val: DeleteListArgs) -> Self {
        DeleteMapsList {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// List all Google Maps lists
    #[command(alias = "ls")]
    List,
    #[command(alias = "s")]
    Show(ShowListArgs),
    /// Import the bundled demo lists, skipping names that already exist
    #[command(alias = "i")]
    Import,
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteListArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against the planner.
pub struct Cli {
    planner: TripPlanner,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(planner: TripPlanner, renderer: TerminalRenderer) -> Self {
        Self { planner, renderer }
    }

    pub async fn handle_itinerary_command(&self, command: ItineraryCommands) -> Result<()> {
        match command {
            ItineraryCommands::Create(args) => self.create_itinerary(args.into()).await,
            ItineraryCommands::List => self.list_itineraries().await,
            ItineraryCommands::Show(args) => self.show_itinerary(args.into()).await,
            ItineraryCommands::Update(args) => self.update_itinerary(args.into()).await,
            ItineraryCommands::Delete(args) => self.delete_itinerary(args.into()).await,
            ItineraryCommands::Demo => self.seed_demo_itinerary().await,
        }
    }

    pub async fn handle_place_command(&self, command: PlaceCommands) -> Result<()> {
        match command {
            PlaceCommands::Add(args) => {
                let itinerary = self
                    .planner
                    .add_place(&args.into())
                    .await
                    .context("Failed to add place")?;
                self.renderer.show(&itinerary)
            }
            PlaceCommands::Remove(args) => {
                let itinerary = self
                    .planner
                    .remove_place(&args.into())
                    .await
                    .context("Failed to remove place")?;
                self.renderer.show(&itinerary)
            }
            PlaceCommands::Candidates(args) => {
                let places = self
                    .planner
                    .candidate_places(&args.into())
                    .await
                    .context("Failed to list candidate places")?;
                self.renderer.show(&Places(places))
            }
        }
    }

    pub async fn handle_list_command(&self, command: ListCommands) -> Result<()> {
        match command {
            ListCommands::List => {
                let lists = self
                    .planner
                    .list_maps_lists()
                    .await
                    .context("Failed to list Google Maps lists")?;
                self.renderer.show(&MapsLists(lists))
            }
            ListCommands::Show(args) => {
                let params: Id = args.into();
                let list = self
                    .planner
                    .get_maps_list(&params)
                    .await
                    .context("Failed to load Google Maps list")?
                    .ok_or_else(|| anyhow!("Google Maps list with ID {} not found", params.id))?;
                self.renderer.show(&list)
            }
            ListCommands::Import => {
                let report = self
                    .planner
                    .import_demo_lists()
                    .await
                    .context("Failed to import Google Maps lists")?;
                self.renderer.show(&report)?;
                if !report.is_complete() {
                    self.renderer
                        .show(&OperationStatus::failure("Some lists were not imported"))?;
                }
                Ok(())
            }
            ListCommands::Delete(args) => {
                let list = self
                    .planner
                    .delete_maps_list(&args.into())
                    .await
                    .context("Failed to delete Google Maps list")?;
                self.renderer.show(&DeleteResult::new(list))
            }
        }
    }

    async fn create_itinerary(&self, params: CreateItinerary) -> Result<()> {
        let itinerary = self
            .planner
            .create_itinerary(&params)
            .await
            .context("Failed to create itinerary")?;
        self.renderer.show(&CreateResult::new(itinerary))
    }

    /// Lists itineraries; also the default when no command is given.
    pub async fn list_itineraries(&self) -> Result<()> {
        let summaries = self
            .planner
            .list_itinerary_summaries()
            .await
            .context("Failed to list itineraries")?;
        self.renderer.show(&summaries)
    }

    async fn show_itinerary(&self, params: Id) -> Result<()> {
        let itinerary = self
            .planner
            .get_itinerary(&params)
            .await
            .context("Failed to load itinerary")?
            .ok_or_else(|| anyhow!("Itinerary with ID {} not found", params.id))?;
        self.renderer.show(&itinerary)
    }

    async fn update_itinerary(&self, params: UpdateItinerary) -> Result<()> {
        let itinerary = self
            .planner
            .update_itinerary(&params)
            .await
            .context("Failed to update itinerary")?;

        let mut changes = Vec::new();
        if params.city.is_some() {
            changes.push(format!("City: {}", itinerary.city));
        }
        if params.days.is_some() {
            changes.push(format!("Days: {}", itinerary.days));
        }
        if let Some(list) = params.list_name.as_ref().and(itinerary.google_maps_list.as_ref()) {
            changes.push(format!("List: {list}"));
        }
        self.renderer
            .show(&UpdateResult::with_changes(itinerary, changes))
    }

    async fn delete_itinerary(&self, params: DeleteItinerary) -> Result<()> {
        let itinerary = self
            .planner
            .delete_itinerary(&params)
            .await
            .context("Failed to delete itinerary")?;
        self.renderer.show(&DeleteResult::new(itinerary))
    }

    async fn seed_demo_itinerary(&self) -> Result<()> {
        match self
            .planner
            .seed_demo_itinerary()
            .await
            .context("Failed to create demo itinerary")?
        {
            Some(itinerary) => self.renderer.show(&CreateResult::new(itinerary)),
            None => self
                .renderer
                .show(&OperationStatus::success("Paris already has an itinerary")),
        }
    }
}
