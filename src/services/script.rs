use crate::constants::API_SCRIPTS;
use crate::error::ApiError;
use crate::models::{PageParams, Paginated, Script, ScriptDraft, ScriptFilter, ScriptImport};
use crate::network::ApiClient;
use serde_json::Value;

pub async fn list(
    api: &ApiClient,
    filter: &ScriptFilter,
    page: PageParams,
) -> Result<Paginated<Script>, ApiError> {
    let mut query = filter.query();
    query.extend(page.query());
    api.get(API_SCRIPTS, &query).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Script, ApiError> {
    api.get(&format!("{}/{}", API_SCRIPTS, id), &[]).await
}

pub async fn create(api: &ApiClient, draft: &ScriptDraft) -> Result<Script, ApiError> {
    api.post(API_SCRIPTS, draft).await
}

pub async fn update(api: &ApiClient, id: &str, draft: &ScriptDraft) -> Result<Script, ApiError> {
    api.put(&format!("{}/{}", API_SCRIPTS, id), draft).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete::<Value>(&format!("{}/{}", API_SCRIPTS, id)).await?;
    Ok(())
}

pub async fn import(api: &ApiClient, import: &ScriptImport) -> Result<Script, ApiError> {
    api.post(&format!("{}/import", API_SCRIPTS), import).await
}
