use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    adapters::inbound::http::{
        dto::{DeleteResponseDto, ErrorResponseDto, ProductListResponseDto, ProductResponseDto},
        router::AppState,
    },
    domain::{
        errors::{ProductError, ProductResult},
        models::{FileUpload, ProductDraft},
        value_objects::ProductId,
    },
};

type ErrorReply = (StatusCode, Json<ErrorResponseDto>);

fn error_reply(error: ProductError) -> ErrorReply {
    let status = StatusCode::from(&error);
    (status, Json(ErrorResponseDto::new(error.to_string())))
}

fn parse_id(raw: String) -> Result<ProductId, ErrorReply> {
    ProductId::new(raw).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseDto::new(format!("Invalid product id: {}", e))),
        )
    })
}

/// Drain a multipart body into the scalar draft and the ordered file list.
///
/// Parts carrying a file name become uploads, in arrival order; the four
/// known scalar parts fill the draft and unknown scalars are ignored, the way
/// the original form parser behaved.
async fn read_multipart(
    mut multipart: Multipart,
) -> ProductResult<(ProductDraft, Vec<FileUpload>)> {
    let mut draft = ProductDraft::default();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ProductError::MultipartInvalid {
            message: e.to_string(),
        })?
    {
        let name = field.name().unwrap_or_default().to_string();

        if field.file_name().is_some() {
            let content_type = field.content_type().map(|ct| ct.to_string());
            let data = field
                .bytes()
                .await
                .map_err(|e| ProductError::MultipartInvalid {
                    message: e.to_string(),
                })?;
            files.push(FileUpload {
                slot: name,
                data,
                content_type,
            });
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| ProductError::MultipartInvalid {
                    message: e.to_string(),
                })?;
            match name.as_str() {
                "name" => draft.name = Some(text),
                "price" => draft.price = Some(text),
                "description" => draft.description = Some(text),
                "collectionId" => draft.collection_id = Some(text),
                _ => {}
            }
        }
    }

    Ok((draft, files))
}

/// Handle product creation
pub async fn create_product(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ProductResponseDto>), ErrorReply> {
    let (draft, files) = read_multipart(multipart).await.map_err(error_reply)?;

    let product = app_state
        .product_service
        .create_product(draft, files)
        .await
        .map_err(error_reply)?;

    Ok((StatusCode::CREATED, Json(ProductResponseDto::new(product))))
}

/// Handle product listing
pub async fn list_products(
    State(app_state): State<AppState>,
) -> Result<Json<ProductListResponseDto>, ErrorReply> {
    let products = app_state
        .product_service
        .list_products()
        .await
        .map_err(error_reply)?;

    Ok(Json(ProductListResponseDto::new(products)))
}

/// Handle single product retrieval
pub async fn get_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponseDto>, ErrorReply> {
    let id = parse_id(id)?;

    let product = app_state
        .product_service
        .get_product(&id)
        .await
        .map_err(error_reply)?;

    Ok(Json(ProductResponseDto::new(product)))
}

/// Handle retrieval of all products in a collection
pub async fn get_products_by_collection(
    State(app_state): State<AppState>,
    Path(collection_id): Path<String>,
) -> Result<Json<ProductListResponseDto>, ErrorReply> {
    let products = app_state
        .product_service
        .get_products_by_collection(&collection_id)
        .await
        .map_err(error_reply)?;

    Ok(Json(ProductListResponseDto::new(products)))
}

/// Handle product update
pub async fn update_product(
    State(app_state): State<AppState>,
    Path(product_id): Path<String>,
    multipart: Multipart,
) -> Result<Json<ProductResponseDto>, ErrorReply> {
    let id = parse_id(product_id)?;

    let (draft, files) = read_multipart(multipart).await.map_err(error_reply)?;

    let product = app_state
        .product_service
        .update_product(&id, draft, files)
        .await
        .map_err(error_reply)?;

    Ok(Json(ProductResponseDto::new(product)))
}

/// Handle product deletion
pub async fn delete_product(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponseDto>, ErrorReply> {
    let id = parse_id(id)?;

    app_state
        .product_service
        .delete_product(&id)
        .await
        .map_err(error_reply)?;

    Ok(Json(DeleteResponseDto {
        success: true,
        message: "Product deleted successfully".to_string(),
    }))
}
