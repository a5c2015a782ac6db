use crate::constants::API_WORKFLOWS;
use crate::error::ApiError;
use crate::models::{PageParams, Paginated, Workflow, WorkflowDraft};
use crate::network::ApiClient;
use serde_json::Value;

pub async fn list(api: &ApiClient, page: PageParams) -> Result<Paginated<Workflow>, ApiError> {
    api.get(API_WORKFLOWS, &page.query()).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Workflow, ApiError> {
    api.get(&format!("{}/{}", API_WORKFLOWS, id), &[]).await
}

pub async fn create(api: &ApiClient, draft: &WorkflowDraft) -> Result<Workflow, ApiError> {
    api.post(API_WORKFLOWS, draft).await
}

pub async fn update(api: &ApiClient, id: &str, draft: &WorkflowDraft) -> Result<Workflow, ApiError> {
    api.put(&format!("{}/{}", API_WORKFLOWS, id), draft).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete::<Value>(&format!("{}/{}", API_WORKFLOWS, id)).await?;
    Ok(())
}

pub async fn duplicate(api: &ApiClient, id: &str) -> Result<Workflow, ApiError> {
    api.post_empty(&format!("{}/{}/duplicate", API_WORKFLOWS, id))
        .await
}
