use axum_test::TestServer;
use product_catalog_server::{
    adapters::inbound::http::{
        dto::{
            DeleteResponseDto, ErrorResponseDto, ProductListResponseDto, ProductResponseDto,
        },
        router::{create_router, AppState},
    },
    create_in_memory_app,
};
use std::sync::Arc;

const BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

async fn spawn_server() -> TestServer {
    let services = create_in_memory_app().await.unwrap();
    let state = AppState {
        product_service: Arc::new(services.product_service),
    };
    TestServer::new(create_router(state)).unwrap()
}

/// Build a multipart/form-data body with the given scalar fields and file
/// parts, in the given order
fn multipart_body(fields: &[(&str, &str)], file_slots: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }

    for (slot, data) in file_slots {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{slot}\"; \
                 filename=\"{slot}.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

fn shirt_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "Shirt"),
        ("price", "20"),
        ("description", "x"),
        ("collectionId", "c1"),
    ]
}

#[tokio::test]
async fn create_product_end_to_end() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[("f1", b"fake png bytes")]);

    let response = server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let reply: ProductResponseDto = response.json();
    assert!(reply.success);
    assert_eq!(reply.product.name, "Shirt");
    assert_eq!(reply.product.price, 20.0);
    assert_eq!(reply.product.description, "x");
    assert_eq!(reply.product.collection_id, "c1");
    assert_eq!(reply.product.photos.len(), 1);
    assert!(reply.product.photos[0]
        .secure_url
        .ends_with(&format!("products/{}/photo_1.png", reply.product.id)));
}

#[tokio::test]
async fn create_product_with_missing_field_is_bad_request() {
    let server = spawn_server().await;

    let body = multipart_body(&[("name", "Shirt"), ("price", "20")], &[]);

    let response = server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await;

    response.assert_status(axum::http::StatusCode::BAD_REQUEST);

    let reply: ErrorResponseDto = response.json();
    assert!(!reply.success);
    assert!(reply.message.contains("description"));
}

#[tokio::test]
async fn list_and_fetch_products() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[]);
    let created: ProductResponseDto = server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await
        .json();

    let listed: ProductListResponseDto = server.get("/products").await.json();
    assert!(listed.success);
    assert_eq!(listed.products.len(), 1);

    let fetched: ProductResponseDto = server
        .get(&format!("/products/{}", created.product.id))
        .await
        .json();
    assert_eq!(fetched.product.id, created.product.id);
}

#[tokio::test]
async fn get_unknown_product_is_not_found() {
    let server = spawn_server().await;

    let response = server.get("/products/doesnotexist").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);

    let reply: ErrorResponseDto = response.json();
    assert!(!reply.success);
}

#[tokio::test]
async fn collection_listing_is_empty_for_unknown_collection() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[]);
    server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let hits: ProductListResponseDto = server.get("/collections/c1/products").await.json();
    assert_eq!(hits.products.len(), 1);

    let response = server.get("/collections/unknown/products").await;
    response.assert_status(axum::http::StatusCode::OK);
    let misses: ProductListResponseDto = response.json();
    assert!(misses.products.is_empty());
}

#[tokio::test]
async fn update_product_replaces_fields_and_photos() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[("f1", b"one"), ("f2", b"two")]);
    let created: ProductResponseDto = server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await
        .json();
    assert_eq!(created.product.photos.len(), 2);

    let update_fields = vec![
        ("name", "Hoodie"),
        ("price", "35.5"),
        ("description", "warm"),
        ("collectionId", "c2"),
    ];
    let body = multipart_body(&update_fields, &[("f1", b"new")]);

    let response = server
        .put(&format!("/products/{}", created.product.id))
        .content_type(&content_type())
        .bytes(body.into())
        .await;
    response.assert_status_ok();

    let updated: ProductResponseDto = response.json();
    assert_eq!(updated.product.name, "Hoodie");
    assert_eq!(updated.product.price, 35.5);
    assert_eq!(updated.product.collection_id, "c2");
    assert_eq!(updated.product.photos.len(), 1);
}

#[tokio::test]
async fn update_unknown_product_is_not_found() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[]);
    let response = server
        .put("/products/doesnotexist")
        .content_type(&content_type())
        .bytes(body.into())
        .await;

    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_product_removes_it() {
    let server = spawn_server().await;

    let body = multipart_body(&shirt_fields(), &[("f1", b"bytes")]);
    let created: ProductResponseDto = server
        .post("/products")
        .content_type(&content_type())
        .bytes(body.into())
        .await
        .json();

    let response = server
        .delete(&format!("/products/{}", created.product.id))
        .await;
    response.assert_status_ok();

    let reply: DeleteResponseDto = response.json();
    assert!(reply.success);

    server
        .get(&format!("/products/{}", created.product.id))
        .await
        .assert_status(axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unknown_product_is_not_found() {
    let server = spawn_server().await;

    let response = server.delete("/products/doesnotexist").await;
    response.assert_status(axum::http::StatusCode::NOT_FOUND);
}
