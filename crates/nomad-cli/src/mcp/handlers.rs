//! MCP tool handler implementations

use nomad_core::{
    display::{CreateResult, DeleteResult, MapsLists, OperationStatus, Places, UpdateResult},
    params as core, TripPlanner,
};
use log::debug;
use rmcp::{
    handler::server::tool::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;

/// Transparent wrapper giving core parameter types MCP deserialization and
/// a JSON schema without adding framework derives to the core crate.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type CreateItinerary = McpParams<core::CreateItinerary>;
pub type UpdateItinerary = McpParams<core::UpdateItinerary>;
pub type DeleteItinerary = McpParams<core::DeleteItinerary>;
pub type DeleteMapsList = McpParams<core::DeleteMapsList>;
pub type AddPlace = McpParams<core::AddPlace>;
pub type RemovePlace = McpParams<core::RemovePlace>;
pub type CandidatePlaces = McpParams<core::CandidatePlaces>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        markdown.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    planner: TripPlanner,
}

impl McpHandlers {
    pub fn new(planner: TripPlanner) -> Self {
        Self { planner }
    }

    pub async fn create_itinerary(
        &self,
        Parameters(params): Parameters<CreateItinerary>,
    ) -> McpResult {
        debug!("create_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .create_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create itinerary", &e))?;
        text(CreateResult::new(itinerary))
    }

    pub async fn list_itineraries(&self) -> McpResult {
        debug!("list_itineraries");

        let summaries = self
            .planner
            .list_itinerary_summaries()
            .await
            .map_err(|e| to_mcp_error("Failed to list itineraries", &e))?;
        text(format!("# Itineraries\n\n{summaries}"))
    }

    pub async fn show_itinerary(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .get_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get itinerary", &e))?
            .ok_or_else(|| {
                ErrorData::internal_error(
                    format!("Itinerary with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;
        text(itinerary)
    }

    pub async fn update_itinerary(
        &self,
        Parameters(params): Parameters<UpdateItinerary>,
    ) -> McpResult {
        debug!("update_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .update_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update itinerary", &e))?;
        text(UpdateResult::new(itinerary))
    }

    pub async fn delete_itinerary(
        &self,
        Parameters(params): Parameters<DeleteItinerary>,
    ) -> McpResult {
        debug!("delete_itinerary: {:?}", params);

        let itinerary = self
            .planner
            .delete_itinerary(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete itinerary", &e))?;
        text(DeleteResult::new(itinerary))
    }

    pub async fn add_place(&self, Parameters(params): Parameters<AddPlace>) -> McpResult {
        debug!("add_place: {:?}", params);

        let itinerary = self
            .planner
            .add_place(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add place", &e))?;
        text(itinerary)
    }

    pub async fn remove_place(&self, Parameters(params): Parameters<RemovePlace>) -> McpResult {
        debug!("remove_place: {:?}", params);

        let itinerary = self
            .planner
            .remove_place(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to remove place", &e))?;
        text(itinerary)
    }

    pub async fn candidate_places(
        &self,
        Parameters(params): Parameters<CandidatePlaces>,
    ) -> McpResult {
        debug!("candidate_places: {:?}", params);

        let places = self
            .planner
            .candidate_places(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list candidate places", &e))?;
        text(format!(
            "# Candidates ({})\n\n{}",
            params.as_ref().sort,
            Places(places)
        ))
    }

    pub async fn list_maps_lists(&self) -> McpResult {
        debug!("list_maps_lists");

        let lists = self
            .planner
            .list_maps_lists()
            .await
            .map_err(|e| to_mcp_error("Failed to list Google Maps lists", &e))?;
        text(format!("# Google Maps Lists\n\n{}", MapsLists(lists)))
    }

    pub async fn show_maps_list(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_maps_list: {:?}", params);

        let list = self
            .planner
            .get_maps_list(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get Google Maps list", &e))?
            .ok_or_else(|| {
                ErrorData::internal_error(
                    format!("Google Maps list with ID {} not found", params.as_ref().id),
                    None,
                )
            })?;
        text(list)
    }

    pub async fn delete_maps_list(
        &self,
        Parameters(params): Parameters<DeleteMapsList>,
    ) -> McpResult {
        debug!("delete_maps_list: {:?}", params);

        let list = self
            .planner
            .delete_maps_list(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete Google Maps list", &e))?;
        text(DeleteResult::new(list))
    }

    pub async fn import_demo_lists(&self) -> McpResult {
        debug!("import_demo_lists");

        let report = self
            .planner
            .import_demo_lists()
            .await
            .map_err(|e| to_mcp_error("Failed to import Google Maps lists", &e))?;

        let status = if report.is_complete() {
            OperationStatus::success("Import complete.")
        } else {
            OperationStatus::failure("Some lists could not be imported.")
        };
        text(format!("{status}\n{report}"))
    }
}
