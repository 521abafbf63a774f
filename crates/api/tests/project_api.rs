//! HTTP-level integration tests for the `/projects` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

async fn create_work(pool: &PgPool) -> i64 {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/originals",
            serde_json::json!({
                "title": "원작", "media_type": "Anime",
                "canon_characters": [{"name": "탄지로"}],
                "world_rules": []
            }),
        )
        .await,
    )
    .await;
    created["id"].as_i64().unwrap()
}

// ---------------------------------------------------------------------------
// Create and read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_project_returns_201(pool: PgPool) {
    let work_id = create_work(&pool).await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "내 팬픽",
            "original_work_id": work_id,
            "timeline_setting": "엔딩 이후",
            "au_settings": ["현대물"]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["title"], "내 팬픽");
    assert_eq!(json["timeline_setting"], "엔딩 이후");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn project_without_original_is_allowed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({"title": "독립 프로젝트"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["original_work_id"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_detail_resolves_original_work(pool: PgPool) {
    let work_id = create_work(&pool).await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "팬픽", "original_work_id": work_id}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["original_work"]["title"], "원작");
    assert_eq!(
        json["original_work"]["canon_characters"][0]["name"],
        "탄지로"
    );
    assert!(json["custom_characters"].as_array().unwrap().is_empty());
    assert!(json["foreshadows"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/projects/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Update with tone and child sync
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_updates_tone_and_children(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "팬픽"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/projects/{id}"),
        serde_json::json!({
            "tone": {
                "writingStyle": "담백체",
                "atmosphere": "잔잔함",
                "pacing": "느림",
                "dialogueRatio": 40,
                "rating": "15+"
            },
            "custom_characters": [{"name": "오리캐", "personality": ["냉철함"]}],
            "foreshadows": [{"title": "복선", "status": "Pending"}]
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["tone"]["writingStyle"], "담백체");
    assert_eq!(json["custom_characters"][0]["name"], "오리캐");
    assert_eq!(json["custom_characters"][0]["is_canon"], false);
    assert_eq!(json["foreshadows"][0]["status"], "Pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_tone_rating_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/projects",
        serde_json::json!({
            "title": "팬픽",
            "tone": {"writingStyle": "담백체", "dialogueRatio": 150}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn invalid_foreshadow_status_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "팬픽"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/projects/{id}/foreshadows"),
        serde_json::json!({"title": "복선", "status": "Done"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Custom character routes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn custom_character_crud_under_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "팬픽"}),
        )
        .await,
    )
    .await;
    let project_id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/projects/{project_id}/characters"),
        serde_json::json!({"name": "오리캐"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let character = body_json(response).await;
    assert_eq!(character["is_canon"], false);
    assert_eq!(character["project_id"].as_i64(), Some(project_id));

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{project_id}/characters")).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_project_returns_204_then_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/projects",
            serde_json::json!({"title": "삭제 대상"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
