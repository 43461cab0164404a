/// Tools for onboarding and whole-dashboard data management
///
/// Implements profile_register, data_export, data_import and data_clear.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::UserProfile;
use crate::tools::ToolError;
use crate::{DashboardServer, ExportDocument, ImportSummary, ServerError};

/// Parameters for registering the dashboard owner
#[derive(Debug, Deserialize, JsonSchema)]
pub struct RegisterProfileParams {
    pub name: String,
    pub email: Option<String>,
    /// Personal goal shown on the dashboard
    pub goal: Option<String>,
}

/// Parameters for restoring a backup
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ImportDataParams {
    /// A document previously produced by data_export
    pub document: serde_json::Value,
}

/// Parameters for wiping stored data
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ClearDataParams {
    /// Must be true; guards against accidental wipes
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ExportDataResponse {
    pub document: ExportDocument,
    pub message: String,
}

impl From<ServerError> for ToolError {
    fn from(e: ServerError) -> Self {
        match e {
            ServerError::Storage(e) => ToolError::Storage(e),
            ServerError::Domain(e) => ToolError::Domain(e),
            other => ToolError::InvalidArgument(other.to_string()),
        }
    }
}

pub fn register_profile(
    server: &mut DashboardServer,
    params: RegisterProfileParams,
) -> Result<DataResponse, ToolError> {
    let profile = UserProfile::new(
        params.name,
        params.email.unwrap_or_default(),
        params.goal.unwrap_or_default(),
    )?;
    server.register_profile(&profile);

    Ok(DataResponse {
        success: true,
        message: format!("👋 Welcome, {}! Your dashboard is ready.", profile.name),
    })
}

/// Produce a JSON backup of everything the dashboard stores
pub fn export_data(server: &DashboardServer) -> Result<ExportDataResponse, ToolError> {
    let document = server.export();
    let pretty = serde_json::to_string_pretty(&document)
        .map_err(|e| ToolError::Storage(e.into()))?;

    Ok(ExportDataResponse {
        message: format!(
            "📦 Exported {} habits. Save the JSON below as imakeit-backup.json:\n\n{}",
            document.habits.len(),
            pretty
        ),
        document,
    })
}

pub fn import_data(
    server: &mut DashboardServer,
    params: ImportDataParams,
) -> Result<DataResponse, ToolError> {
    let document: ExportDocument = serde_json::from_value(params.document)
        .map_err(|e| ToolError::InvalidArgument(format!("Not a dashboard backup: {}", e)))?;

    let ImportSummary { imported, skipped, profile_imported } = server.import(document)?;

    let mut message = format!(
        "📥 Imported {} habits ({} skipped as invalid or already present)",
        imported, skipped
    );
    if profile_imported {
        message.push_str("\nProfile restored.");
    }

    Ok(DataResponse {
        success: true,
        message,
    })
}

pub fn clear_data(
    server: &mut DashboardServer,
    params: ClearDataParams,
) -> Result<DataResponse, ToolError> {
    if !params.confirm {
        return Err(ToolError::InvalidArgument(
            "Refusing to clear data without confirm: true".to_string(),
        ));
    }

    let removed = server.clear_all()?;

    Ok(DataResponse {
        success: true,
        message: format!("🧹 Cleared all dashboard data ({} stored entries removed)", removed),
    })
}
