use crate::constants::API_PLUGINS;
use crate::error::ApiError;
use crate::models::{PageParams, Paginated, Plugin, PluginConfig, PluginFilter};
use crate::network::ApiClient;
use serde_json::{json, Value};

pub async fn list(
    api: &ApiClient,
    filter: &PluginFilter,
    page: PageParams,
) -> Result<Paginated<Plugin>, ApiError> {
    let mut query = filter.query();
    query.extend(page.query());
    api.get(API_PLUGINS, &query).await
}

pub async fn get(api: &ApiClient, id: &str) -> Result<Plugin, ApiError> {
    api.get(&format!("{}/{}", API_PLUGINS, id), &[]).await
}

pub async fn install(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("{}/{}/install", API_PLUGINS, id))
        .await?;
    Ok(())
}

pub async fn uninstall(api: &ApiClient, id: &str) -> Result<(), ApiError> {
    api.post_empty::<Value>(&format!("{}/{}/uninstall", API_PLUGINS, id))
        .await?;
    Ok(())
}

pub async fn toggle_active(api: &ApiClient, id: &str, active: bool) -> Result<(), ApiError> {
    api.post::<_, Value>(
        &format!("{}/{}/toggle", API_PLUGINS, id),
        &json!({ "active": active }),
    )
    .await?;
    Ok(())
}

pub async fn update_config(api: &ApiClient, id: &str, config: &PluginConfig) -> Result<(), ApiError> {
    api.put::<_, Value>(&format!("{}/{}/config", API_PLUGINS, id), config)
        .await?;
    Ok(())
}
