//! End-to-end behaviour of the JSON API over the in-memory store.
//!
//! The store enforces the same uniqueness, foreign-key, and cascade rules
//! as the PostgreSQL schema, so these scenarios exercise the full path from
//! request decoding through the domain services to storage.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, test, web};
use campus_print::Trace;
use campus_print::domain::{
    CampusId, ColorMode, ExecutionMode, JobId, PaperSize, Payment, PaymentId, PaymentMode,
    PrintJob, PrintStatus, ShopId, UserId, timestamp_now,
};
use campus_print::inbound::http::configure;
use campus_print::inbound::http::state::HttpState;
use campus_print::inbound::http::validation::{json_config, query_config};
use campus_print::test_support::InMemoryStore;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::default())
}

async fn init_app(
    store: &Arc<InMemoryStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
{
    let state = HttpState::new(InMemoryStore::http_ports(store));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .app_data(json_config())
            .app_data(query_config())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(Trace)
            .service(web::scope("/api").configure(configure)),
    )
    .await
}

async fn send<S, B>(app: &S, req: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

fn id_of(body: &Value) -> String {
    body["id"].as_str().expect("id field").to_owned()
}

fn names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("array body")
        .iter()
        .map(|item| item["name"].as_str().expect("name").to_owned())
        .collect()
}

async fn create_campus<S, B>(app: &S, name: &str) -> String
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let (status, body) = send(
        app,
        test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(json!({ "name": name, "location": "Block A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "campus create failed: {body}");
    id_of(&body)
}

async fn create_shop<S, B>(app: &S, campus_id: &str, name: &str) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    send(
        app,
        test::TestRequest::post().uri("/api/shops/").set_json(json!({
            "campus_id": campus_id,
            "name": name,
            "execution_mode": "manual",
            "payment_mode": "counter",
        })),
    )
    .await
}

fn job_for(campus_id: CampusId, shop_id: ShopId, user_id: UserId) -> PrintJob {
    let now = timestamp_now();
    PrintJob {
        id: JobId::random(),
        campus_id,
        shop_id,
        user_id,
        file_url: "s3://uploads/notes.pdf".into(),
        original_filename: "notes.pdf".into(),
        pages: 10,
        copies: 1,
        size: PaperSize::A4,
        color_mode: ColorMode::Bw,
        final_price: 20.0,
        pricing_snapshot: json!({ "normal_rate": 2.0 }),
        execution_mode_snapshot: ExecutionMode::Manual,
        payment_mode_snapshot: PaymentMode::Counter,
        status: PrintStatus::Uploaded,
        created_at: now,
        updated_at: now,
    }
}

#[rstest]
#[actix_rt::test]
async fn campus_and_shop_lifecycle(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;

    let (status, north) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/campuses/")
            .set_json(json!({ "name": "North", "location": "Block A" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let north_id = id_of(&north);
    assert!(north_id.parse::<CampusId>().is_ok());

    let (status, conflict) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/campuses/")
            .set_json(json!({ "name": "North", "location": "Block B" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(conflict["code"], "conflict");
    assert_eq!(conflict["message"], "Campus with name 'North' already exists");
    assert_eq!(conflict["detail"], "Campus with name 'North' already exists");

    let (status, shop) = create_shop(&app, &north_id, "QuickPrint").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shop["is_active"], true);

    let (status, deleted) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/api/campuses/{north_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({ "message": "Campus deleted" }));

    let (status, shops) = send(&app, test::TestRequest::get().uri("/api/shops/")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!names(&shops).contains(&"QuickPrint".to_owned()));
}

#[rstest]
#[actix_rt::test]
async fn duplicate_campus_leaves_one_row(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    create_campus(&app, "North").await;

    let (status, _) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(json!({ "name": "North", "location": "Block Z" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, campuses) = send(&app, test::TestRequest::get().uri("/api/campuses")).await;
    let count = names(&campuses).iter().filter(|n| *n == "North").count();
    assert_eq!(count, 1);
}

#[rstest]
#[actix_rt::test]
async fn shop_names_are_unique_per_campus(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let north = create_campus(&app, "North").await;
    let south = create_campus(&app, "South").await;

    let (first, _) = create_shop(&app, &north, "Print Hub").await;
    let (second, body) = create_shop(&app, &north, "Print Hub").await;
    let (other_campus, _) = create_shop(&app, &south, "Print Hub").await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Shop with name 'Print Hub' already exists in this campus"
    );
    assert_eq!(other_campus, StatusCode::OK);

    let (_, north_shops) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/shops?campus_id={north}")),
    )
    .await;
    assert_eq!(names(&north_shops), vec!["Print Hub"]);
}

#[rstest]
#[actix_rt::test]
async fn deactivating_a_shop_keeps_other_fields(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let campus = create_campus(&app, "North").await;
    let (_, shop) = create_shop(&app, &campus, "QuickPrint").await;
    let shop_id = id_of(&shop);

    let (status, patched) = send(
        &app,
        test::TestRequest::patch()
            .uri(&format!("/api/shops/{shop_id}"))
            .set_json(json!({ "is_active": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["is_active"], false);
    assert_eq!(patched["name"], "QuickPrint");
    assert_eq!(patched["execution_mode"], "manual");
    assert_eq!(patched["payment_mode"], "counter");
    assert_eq!(patched["created_at"], shop["created_at"]);
}

#[rstest]
#[actix_rt::test]
async fn deleting_a_campus_cascades_to_children(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let campus = create_campus(&app, "North").await;
    let (_, shop) = create_shop(&app, &campus, "QuickPrint").await;
    let shop_id = id_of(&shop);

    let (status, pricing) = send(
        &app,
        test::TestRequest::post().uri("/api/pricing").set_json(json!({
            "shop_id": shop_id,
            "size": "A4",
            "color_mode": "bw",
            "normal_rate": 2.0,
            "bulk_rate": 1.5,
            "bulk_threshold": 100,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let pricing_id = id_of(&pricing);

    let (status, user) = send(
        &app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "campus_id": campus,
            "email": "ada@campus.edu",
            "name": "Ada",
            "role": "student",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let campus_id: CampusId = campus.parse().expect("campus id");
    let shop_uuid: ShopId = shop_id.parse().expect("shop id");
    let user_id: UserId = id_of(&user).parse().expect("user id");
    let job = job_for(campus_id, shop_uuid, user_id);
    let job_id = job.id;
    store.seed_job(job).expect("job seeds");
    let payment_id = PaymentId::random();
    store
        .seed_payment(Payment {
            id: payment_id,
            job_id,
            amount: 20.0,
            status: "pending".into(),
            gateway_reference: None,
            created_at: timestamp_now(),
        })
        .expect("payment seeds");

    let (status, _) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/api/campuses/{campus}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, users) = send(&app, test::TestRequest::get().uri("/api/users")).await;
    let (_, shops) = send(&app, test::TestRequest::get().uri("/api/shops")).await;
    let (_, rows) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/pricing/{shop_id}")),
    )
    .await;
    let (_, jobs) = send(&app, test::TestRequest::get().uri("/api/jobs")).await;
    assert_eq!(users, json!([]));
    assert_eq!(shops, json!([]));
    assert_eq!(rows, json!([]));
    assert_eq!(jobs, json!([]));
    assert_eq!(store.payment_count(), 0);

    let (status, _) = send(
        &app,
        test::TestRequest::delete().uri(&format!("/api/pricing/{pricing_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, body) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/payments/{payment_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Payment not found");
}

#[rstest]
#[actix_rt::test]
async fn unknown_payment_leaks_nothing(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/payments/{}", PaymentId::random())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let keys: Vec<&str> = body
        .as_object()
        .expect("error object")
        .keys()
        .map(String::as_str)
        .collect();
    assert!(keys.iter().all(|key| ["code", "message", "detail", "traceId"].contains(key)));
    assert!(body.get("amount").is_none());
}

#[rstest]
#[actix_rt::test]
async fn duplicate_email_is_internal_and_redacted(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let campus = create_campus(&app, "North").await;
    let register = || {
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "campus_id": campus,
            "email": "ada@campus.edu",
            "name": "Ada",
            "role": "student",
        }))
    };

    let (first, _) = send(&app, register()).await;
    let (second, body) = send(&app, register()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert!(body["traceId"].as_str().is_some());
}

#[rstest]
#[actix_rt::test]
async fn shop_for_unknown_campus_is_internal_error(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;

    let (status, body) = create_shop(&app, &CampusId::random().to_string(), "Ghost").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
}

#[rstest]
#[actix_rt::test]
async fn pricing_for_unknown_shop_is_internal_error(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let shop_id = ShopId::random();

    let (status, body) = send(
        &app,
        test::TestRequest::post().uri("/api/pricing").set_json(json!({
            "shop_id": shop_id.to_string(),
            "size": "A4",
            "color_mode": "bw",
            "normal_rate": 2.0,
            "bulk_rate": 1.5,
            "bulk_threshold": 100,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "internal_error");
    assert_eq!(body["detail"], "Internal server error");
    let (_, rows) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/pricing/{shop_id}")),
    )
    .await;
    assert_eq!(rows, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn validation_failures_never_reach_storage(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;

    let (status, body) = send(
        &app,
        test::TestRequest::post()
            .uri("/api/campuses")
            .set_json(json!({ "name": "   ", "location": "Block A" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"], json!({ "field": "name", "code": "empty" }));

    let (_, campuses) = send(&app, test::TestRequest::get().uri("/api/campuses")).await;
    assert_eq!(campuses, json!([]));
}

#[rstest]
#[actix_rt::test]
async fn duplicate_pricing_rows_are_accepted(store: Arc<InMemoryStore>) {
    let app = init_app(&store).await;
    let campus = create_campus(&app, "North").await;
    let (_, shop) = create_shop(&app, &campus, "QuickPrint").await;
    let shop_id = id_of(&shop);
    let row = || {
        test::TestRequest::post().uri("/api/pricing").set_json(json!({
            "shop_id": shop_id,
            "size": "A3",
            "color_mode": "color",
            "normal_rate": 5.0,
            "bulk_rate": 4.0,
            "bulk_threshold": 20,
        }))
    };

    let (first, _) = send(&app, row()).await;
    let (second, _) = send(&app, row()).await;
    let (_, rows) = send(
        &app,
        test::TestRequest::get().uri(&format!("/api/pricing/{shop_id}")),
    )
    .await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
}
