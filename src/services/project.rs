use crate::constants::API_PROJECTS;
use crate::error::ApiError;
use crate::models::{PageParams, Paginated, Project, ProjectDraft};
use crate::network::ApiClient;
use serde_json::Value;

pub async fn list(api: &ApiClient, page: PageParams) -> Result<Paginated<Project>, ApiError> {
    api.get(API_PROJECTS, &page.query()).await
}

pub async fn create(api: &ApiClient, draft: &ProjectDraft) -> Result<Project, ApiError> {
    api.post(API_PROJECTS, draft).await
}

pub async fn update(api: &ApiClient, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
    api.put(&format!("{}/{}", API_PROJECTS, id), draft).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete::<Value>(&format!("{}/{}", API_PROJECTS, id)).await?;
    Ok(())
}
