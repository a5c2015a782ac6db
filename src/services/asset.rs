use crate::constants::API_ASSETS;
use crate::error::ApiError;
use crate::models::{Asset, AssetDraft, AssetFilter, PageParams, Paginated};
use crate::network::ApiClient;
use serde_json::Value;

pub async fn list(
    api: &ApiClient,
    filter: &AssetFilter,
    page: PageParams,
) -> Result<Paginated<Asset>, ApiError> {
    let mut query = filter.query();
    query.extend(page.query());
    api.get(API_ASSETS, &query).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Asset, ApiError> {
    api.get(&format!("{}/{}", API_ASSETS, id), &[]).await
}

pub async fn create(api: &ApiClient, draft: &AssetDraft) -> Result<Asset, ApiError> {
    api.post(API_ASSETS, draft).await
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.delete::<Value>(&format!("{}/{}", API_ASSETS, id)).await?;
    Ok(())
}

pub async fn toggle_favorite(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("{}/{}/favorite", API_ASSETS, id))
        .await?;
    Ok(())
}
