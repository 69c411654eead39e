//! Campus API handlers.
//!
//! ```text
//! POST   /api/campuses      {"name":"North","location":"Block A"}
//! GET    /api/campuses
//! PATCH  /api/campuses/{id} {"location":"Block C"}
//! DELETE /api/campuses/{id}
//! ```

use actix_web::{delete, get, patch, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{Campus, CampusId, CampusPatch, NewCampus};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, MessageResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_id};

/// Request body for `POST /api/campuses`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CampusCreateRequest {
    #[schema(example = "North Campus")]
    pub name: String,
    #[schema(example = "Block A")]
    pub location: String,
}

/// Request body for `PATCH /api/campuses/{id}`. Absent or null fields are
/// left unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CampusUpdateRequest {
    pub name: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CampusResponse {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

impl From<Campus> for CampusResponse {
    fn from(value: Campus) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
            location: value.location,
            created_at: value.created_at,
        }
    }
}

/// Register a campus.
#[utoipa::path(
    post,
    path = "/api/campuses",
    request_body = CampusCreateRequest,
    responses(
        (status = 200, description = "Campus created", body = CampusResponse),
        (status = 400, description = "Invalid request or duplicate name", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["campuses"],
    operation_id = "createCampus"
)]
#[post("/campuses")]
pub async fn create_campus(
    state: web::Data<HttpState>,
    payload: web::Json<CampusCreateRequest>,
) -> ApiResult<web::Json<CampusResponse>> {
    let CampusCreateRequest { name, location } = payload.into_inner();
    let campus = NewCampus::try_new(name, location)?;
    let created = state.campuses.create(campus).await?;
    Ok(web::Json(created.into()))
}

#[utoipa::path(
    get,
    path = "/api/campuses",
    responses(
        (status = 200, description = "All campuses", body = [CampusResponse]),
        (status = 503, description = "Database unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["campuses"],
    operation_id = "listCampuses"
)]
#[get("/campuses")]
pub async fn list_campuses(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CampusResponse>>> {
    let campuses = state.campuses.list().await?;
    Ok(web::Json(campuses.into_iter().map(Into::into).collect()))
}

/// Apply a partial update to a campus.
#[utoipa::path(
    patch,
    path = "/api/campuses/{id}",
    params(("id" = String, Path, description = "Campus identifier")),
    request_body = CampusUpdateRequest,
    responses(
        (status = 200, description = "Updated campus", body = CampusResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Campus not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["campuses"],
    operation_id = "updateCampus"
)]
#[patch("/campuses/{id}")]
pub async fn update_campus(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<CampusUpdateRequest>,
) -> ApiResult<web::Json<CampusResponse>> {
    let id: CampusId = parse_id(&path, FieldName::new("id"))?;
    let CampusUpdateRequest { name, location } = payload.into_inner();
    let patch = CampusPatch::try_new(name, location)?;
    let campus = state.campuses.update(id, patch).await?;
    Ok(web::Json(campus.into()))
}

/// Delete a campus together with its shops, users, and jobs.
#[utoipa::path(
    delete,
    path = "/api/campuses/{id}",
    params(("id" = String, Path, description = "Campus identifier")),
    responses(
        (status = 200, description = "Campus deleted", body = MessageResponse),
        (status = 404, description = "Campus not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["campuses"],
    operation_id = "deleteCampus"
)]
#[delete("/campuses/{id}")]
pub async fn delete_campus(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id: CampusId = parse_id(&path, FieldName::new("id"))?;
    state.campuses.delete(id).await?;
    Ok(web::Json(MessageResponse::new("Campus deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::inbound::http::test_utils::{MockPorts, api_app, json_body};
    use actix_web::http::StatusCode;
    use actix_web::test;
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::json;

    fn campus(name: &str) -> Campus {
        NewCampus::try_new(name, "Block A")
            .expect("valid campus")
            .into_campus(Utc::now())
    }

    #[rstest]
    #[actix_web::test]
    async fn create_returns_the_stored_campus() {
        let stored = campus("North");
        let returned = stored.clone();
        let mut ports = MockPorts::default();
        ports
            .campuses
            .expect_create()
            .withf(|input| input.name() == "North" && input.location() == "Block A")
            .times(1)
            .return_once(move |_| Ok(returned));
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(json!({ "name": "North", "location": "Block A" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["id"], json!(stored.id.to_string()));
        assert_eq!(body["name"], "North");
        assert_eq!(body["location"], "Block A");
        assert!(body.get("created_at").is_some());
    }

    #[rstest]
    #[case(json!({ "name": "", "location": "Block A" }), "name", "empty")]
    #[case(json!({ "name": "North", "location": "x".repeat(256) }), "location", "too_long")]
    #[actix_web::test]
    async fn create_rejects_invalid_fields_before_the_service(
        #[case] payload: serde_json::Value,
        #[case] field: &str,
        #[case] code: &str,
    ) {
        let app = test::init_service(api_app(MockPorts::default().into_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(payload)
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["field"], field);
        assert_eq!(body["details"]["code"], code);
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_name_is_reported_as_bad_request() {
        let mut ports = MockPorts::default();
        ports.campuses.expect_create().return_once(|_| {
            Err(Error::conflict("Campus with name 'North' already exists"))
        });
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(json!({ "name": "North", "location": "Block A" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(body["code"], "conflict");
        assert_eq!(body["message"], "Campus with name 'North' already exists");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_body_is_invalid_request() {
        let app = test::init_service(api_app(MockPorts::default().into_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/campuses")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\":")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["details"]["code"], "invalid_body");
    }

    #[rstest]
    #[actix_web::test]
    async fn update_passes_only_supplied_fields() {
        let mut updated = campus("North");
        updated.location = "Block C".into();
        let id = updated.id;
        let returned = updated.clone();
        let mut ports = MockPorts::default();
        ports
            .campuses
            .expect_update()
            .withf(move |got, patch| {
                *got == id && patch.name().is_none() && patch.location() == Some("Block C")
            })
            .return_once(move |_, _| Ok(returned));
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/campuses/{id}"))
            .set_json(json!({ "location": "Block C", "name": null }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        assert_eq!(body["name"], "North");
        assert_eq!(body["location"], "Block C");
    }

    #[rstest]
    #[actix_web::test]
    async fn update_of_unknown_campus_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .campuses
            .expect_update()
            .return_once(|_, _| Err(Error::not_found("Campus not found")));
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/campuses/{}", CampusId::random()))
            .set_json(json!({ "name": "South" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(res).await["message"], "Campus not found");
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_rejects_malformed_identifier() {
        let app = test::init_service(api_app(MockPorts::default().into_state())).await;

        let req = test::TestRequest::delete()
            .uri("/api/campuses/not-a-uuid")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res).await;
        assert_eq!(body["details"]["code"], "invalid_uuid");
        assert_eq!(body["details"]["value"], "not-a-uuid");
    }

    #[rstest]
    #[actix_web::test]
    async fn delete_reports_message() {
        let id = CampusId::random();
        let mut ports = MockPorts::default();
        ports
            .campuses
            .expect_delete()
            .with(eq(id))
            .times(1)
            .return_once(|_| Ok(()));
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/campuses/{id}"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await, json!({ "message": "Campus deleted" }));
    }

    #[rstest]
    #[actix_web::test]
    async fn list_preserves_service_order() {
        let listed = vec![campus("North"), campus("South")];
        let mut ports = MockPorts::default();
        ports.campuses.expect_list().return_once(move || Ok(listed));
        let app = test::init_service(api_app(ports.into_state())).await;

        let req = test::TestRequest::get().uri("/api/campuses").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res).await;
        let names: Vec<_> = body
            .as_array()
            .expect("array")
            .iter()
            .map(|campus| campus["name"].as_str().expect("name"))
            .map(str::to_owned)
            .collect();
        assert_eq!(names, vec!["North", "South"]);
    }
}
