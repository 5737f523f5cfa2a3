use axum::{
    Json,
    body::Body,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::Response,
};
use bytes::Bytes;

use crate::{
    adapters::inbound::http::{
        dto::{ListFilesQueryDto, ListFilesResponseDto, ObjectInfoDto},
        error::ApiError,
        router::AppState,
    },
    domain::{
        models::UploadRequest,
        value_objects::{KeyPrefix, ObjectKey},
    },
};

const OCTET_STREAM: &str = "application/octet-stream";

/// Handle file upload. Overwrites any existing object at the same key.
pub async fn upload_file(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<ObjectInfoDto>), ApiError> {
    let object_key = ObjectKey::new(key)?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .map(str::to_string);

    let object = app_state
        .file_service
        .upload(UploadRequest {
            key: object_key,
            data: body,
            content_type,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(ObjectInfoDto::from(object))))
}

/// Handle file download.
pub async fn download_file(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Response, ApiError> {
    let object_key = ObjectKey::new(key)?;

    let content = app_state.file_service.download(&object_key).await?;

    let content_type = content
        .content_type
        .as_deref()
        .and_then(|ct| HeaderValue::from_str(ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static(OCTET_STREAM));

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, content.data.len())
        .body(Body::from(content.data))
        .map_err(|e| {
            ApiError(crate::domain::errors::StorageError::Internal {
                message: format!("Failed to build response: {}", e),
            })
        })?;

    Ok(response)
}

/// Handle file listing. An empty match is an empty array, not an error.
pub async fn list_files(
    State(app_state): State<AppState>,
    Query(params): Query<ListFilesQueryDto>,
) -> Result<Json<ListFilesResponseDto>, ApiError> {
    let prefix = params.prefix.map(KeyPrefix::new).transpose()?;

    let objects = app_state
        .file_service
        .list(prefix.as_ref(), params.max_results)
        .await?;

    let files = objects.into_iter().map(ObjectInfoDto::from).collect();
    Ok(Json(ListFilesResponseDto::new(files)))
}

/// Handle file deletion. Idempotent: deleting a missing key is 204 too.
pub async fn delete_file(
    State(app_state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    let object_key = ObjectKey::new(key)?;

    app_state.file_service.delete(&object_key).await?;

    Ok(StatusCode::NO_CONTENT)
}
