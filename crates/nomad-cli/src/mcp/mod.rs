//! MCP server exposing the trip planner to AI assistants over stdio.

use std::future::Future;

use anyhow::Result;
use log::{debug, error, info};
use nomad_core::TripPlanner;
use rmcp::{
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{
    AddPlace, CandidatePlaces, CreateItinerary, DeleteItinerary, DeleteMapsList, Id, McpResult,
    RemovePlace, UpdateItinerary,
};

use handlers::McpHandlers;

const INSTRUCTIONS: &str = r#"Nomad plans city trips day by day from Google Maps lists.

## Core Concepts
- **Google Maps list**: a named set of saved places for a city (food, museum, store, landmark, park) with opening hours and coordinates
- **Itinerary**: a trip to one city lasting a number of days, tied to one list; each day holds places picked from that list

## Workflow
1. `list_maps_lists` to see available lists; `import_demo_lists` seeds demo lists for Paris, Milano, New York, Frankfurt and Copenhagen
2. `create_itinerary` with a city, number of days and list name (one itinerary per city)
3. `candidate_places` to see unplanned places, sorted by opening hour or by distance from a `start` place
4. `add_place` / `remove_place` to plan days, then `show_itinerary` for the day-by-day plan with directions links

## Tool Categories
- **Itineraries**: create_itinerary, list_itineraries, show_itinerary, update_itinerary, delete_itinerary
- **Planning**: add_place, remove_place, candidate_places
- **Lists**: list_maps_lists, show_maps_list, import_demo_lists, delete_maps_list"#;

/// MCP server for Nomad
#[derive(Clone)]
pub struct NomadMcpServer {
    planner: TripPlanner,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NomadMcpServer {
    pub fn new(planner: TripPlanner) -> Self {
        Self {
            planner,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.planner.clone())
    }

    #[tool(
        name = "create_itinerary",
        description = "Create an itinerary for a city. Requires city, days (1 to 365) and list_name of an existing Google Maps list. Fails if the city already has an itinerary (case-insensitive). Returns the new itinerary ID."
    )]
    async fn create_itinerary(&self, params: Parameters<CreateItinerary>) -> McpResult {
        self.handlers().create_itinerary(params).await
    }

    #[tool(
        name = "list_itineraries",
        description = "List all itineraries with their city, number of days, number of planned places and Google Maps list."
    )]
    async fn list_itineraries(&self) -> McpResult {
        self.handlers().list_itineraries().await
    }

    #[tool(
        name = "show_itinerary",
        description = "Show an itinerary day by day. Every day from 1 to the trip length is listed, empty days included. Each place has its category, opening hours and a Google Maps directions link."
    )]
    async fn show_itinerary(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_itinerary(params).await
    }

    #[tool(
        name = "update_itinerary",
        description = "Change the city, days or list_name of an itinerary. Omitted fields stay unchanged. Reducing days hides places planned for later days until the trip is extended again."
    )]
    async fn update_itinerary(&self, params: Parameters<UpdateItinerary>) -> McpResult {
        self.handlers().update_itinerary(params).await
    }

    #[tool(
        name = "delete_itinerary",
        description = "Permanently delete an itinerary. Requires confirmed=true. This cannot be undone."
    )]
    async fn delete_itinerary(&self, params: Parameters<DeleteItinerary>) -> McpResult {
        self.handlers().delete_itinerary(params).await
    }

    #[tool(
        name = "add_place",
        description = "Add a place to a day of an itinerary. The place name must exist in the itinerary's Google Maps list and day must be between 1 and the trip length. A place can be planned only once per day."
    )]
    async fn add_place(&self, params: Parameters<AddPlace>) -> McpResult {
        self.handlers().add_place(params).await
    }

    #[tool(
        name = "remove_place",
        description = "Remove a planned place from a day of an itinerary by name."
    )]
    async fn remove_place(&self, params: Parameters<RemovePlace>) -> McpResult {
        self.handlers().remove_place(params).await
    }

    #[tool(
        name = "candidate_places",
        description = "List places from the itinerary's Google Maps list that are not planned on any day. sort='opening' (default) orders by opening hour; sort='distance' orders by distance from the place named in start."
    )]
    async fn candidate_places(&self, params: Parameters<CandidatePlaces>) -> McpResult {
        self.handlers().candidate_places(params).await
    }

    #[tool(
        name = "list_maps_lists",
        description = "List the available Google Maps lists with their city and number of places."
    )]
    async fn list_maps_lists(&self) -> McpResult {
        self.handlers().list_maps_lists().await
    }

    #[tool(
        name = "show_maps_list",
        description = "Show every place of a Google Maps list by list ID."
    )]
    async fn show_maps_list(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().show_maps_list(params).await
    }

    #[tool(
        name = "delete_maps_list",
        description = "Permanently delete a Google Maps list by ID. Requires confirmed=true. Itineraries that use the list keep their planned places but can no longer add new ones."
    )]
    async fn delete_maps_list(&self, params: Parameters<DeleteMapsList>) -> McpResult {
        self.handlers().delete_maps_list(params).await
    }

    #[tool(
        name = "import_demo_lists",
        description = "Import the bundled demo Google Maps lists. Lists whose name already exists are skipped and duplicate lists are removed, so running it again is safe."
    )]
    async fn import_demo_lists(&self) -> McpResult {
        self.handlers().import_demo_lists().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for NomadMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nomad".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: NomadMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Nomad MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
