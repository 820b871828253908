use futures::TryStreamExt;
use rossum_client::prelude::*;
use serde_json::json;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    // Credentials come from ROSSUM_USERNAME / ROSSUM_PASSWORD (or a .env file)
    let client = ApiClient::from_env()?;

    let mut workspaces = client.fetch_all("workspaces", &[]);
    let mut first_id = None;
    while let Some(workspace) = workspaces.try_next().await? {
        info!(
            "Workspace {}: {}",
            workspace["id"],
            workspace["name"].as_str().unwrap_or_default()
        );
        if first_id.is_none() {
            first_id = workspace["id"].as_u64();
        }
    }
    drop(workspaces);

    let Some(id) = first_id else {
        info!("No workspaces visible to this account");
        return Ok(());
    };

    let workspace_filter = id.to_string();
    let queues: Vec<Resource> = client
        .fetch_all("queues", &[("workspace", workspace_filter.as_str())])
        .try_collect()
        .await?;
    info!("Workspace {} has {} queues", id, queues.len());

    let updated = client
        .update("workspaces", id, &json!({"metadata": {"touched_by": "rossum-client"}}))
        .await?;
    info!("Updated workspace: {}", serde_json::Value::Object(updated));

    client.logout().await?;
    Ok(())
}
