use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::{
    adapters::inbound::http::{
        dto::{ListFilesResponseDto, ObjectInfoDto, ProjectUploadResponseDto},
        error::ApiError,
        router::AppState,
    },
    domain::{
        models::UploadRequest,
        value_objects::{KeyPrefix, ObjectKey},
    },
};

/// Upload a batch of files as a new project.
///
/// Each multipart part with a filename is stored under
/// `projects/{project_id}/{filename}`, where the project id is a freshly
/// generated UUID. The response reports the generated id and a status per
/// stored key.
pub async fn upload_project(
    State(app_state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ProjectUploadResponseDto>), ApiError> {
    let project_id = Uuid::new_v4().to_string();
    let mut upload_results = BTreeMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_input(format!("Malformed multipart request: {}", e)))?
    {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            // Non-file form fields are ignored.
            continue;
        };

        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_input(format!("Failed to read upload: {}", e)))?;

        // Browsers may submit backslash-separated relative paths.
        let relative = file_name.replace('\\', "/");
        let relative = relative.trim_start_matches('/');
        let key = ObjectKey::new(format!("projects/{}/{}", project_id, relative))?;

        let object = app_state
            .file_service
            .upload(UploadRequest {
                key,
                data,
                content_type,
            })
            .await?;

        upload_results.insert(object.key.as_str().to_string(), "uploaded".to_string());
    }

    if upload_results.is_empty() {
        return Err(ApiError::invalid_input("No files found in the upload."));
    }

    tracing::info!(project_id = %project_id, files = upload_results.len(), "project uploaded");

    Ok((
        StatusCode::CREATED,
        Json(ProjectUploadResponseDto {
            project_id,
            upload_results,
        }),
    ))
}

/// List the files stored for one project.
///
/// An unknown project id yields 404 rather than an empty list: a project
/// exists exactly as long as it has files.
pub async fn list_project_files(
    State(app_state): State<AppState>,
    Path(project_id): Path<String>,
) -> Result<Json<ListFilesResponseDto>, ApiError> {
    if project_id.trim().is_empty() {
        return Err(ApiError::invalid_input("Project ID cannot be empty."));
    }

    let prefix = KeyPrefix::new(format!("projects/{}/", project_id))?;

    let objects = app_state.file_service.list(Some(&prefix), None).await?;

    if objects.is_empty() {
        return Err(ApiError::not_found(format!(
            "No files found for project ID: {}",
            project_id
        )));
    }

    let files = objects.into_iter().map(ObjectInfoDto::from).collect();
    Ok(Json(ListFilesResponseDto::new(files)))
}
