use crate::dtos::{CreateItemRequest, ItemCreatedResponse, ItemListResponse, ItemResponse};
use crate::models::Item;
use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::FindOptions;
use service_core::error::AppError;

pub async fn create_item(
    State(state): State<AppState>,
    body: Option<Json<CreateItemRequest>>,
) -> Result<impl IntoResponse, AppError> {
    // A missing body, a non-JSON body, or a blank content field all fail
    // validation the same way
    let content = body
        .and_then(|Json(request)| request.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("Content is required")))?;

    let db = state.db.ensure_connected().await?;

    let item = Item::new(content);

    db.items().insert_one(&item, None).await.map_err(|e| {
        tracing::error!("Failed to insert item {} into database: {}", item.id, e);
        AppError::from(e)
    })?;

    tracing::info!(item_id = %item.id, "Item saved");

    Ok((
        StatusCode::CREATED,
        Json(ItemCreatedResponse {
            success: true,
            message: "Data saved successfully".to_string(),
            data: ItemResponse::from(item),
        }),
    ))
}

pub async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let db = state.db.ensure_connected().await?;

    let find_options = FindOptions::builder()
        .sort(doc! { "created_at": -1 }) // Newest first
        .build();

    let mut cursor = db
        .items()
        .find(doc! {}, find_options)
        .await
        .map_err(AppError::from)?;

    let mut items = Vec::new();
    while let Some(item) = cursor.try_next().await.map_err(AppError::from)? {
        items.push(ItemResponse::from(item));
    }

    Ok(Json(ItemListResponse {
        success: true,
        count: items.len(),
        data: items,
    }))
}
