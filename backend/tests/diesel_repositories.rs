//! Diesel repositories against a live PostgreSQL database.
//!
//! Set `CAMPUS_PRINT_TEST_DATABASE_URL` to a disposable database to run
//! these; without it every test returns early. Migrations are applied once
//! per process and each test works under uniquely named campuses, so the
//! suite tolerates parallel execution and leftover rows from earlier runs.

use std::sync::Once;

use campus_print::domain::ports::{
    CampusRepository, PaymentRepository, PricingRepository, PrintJobRepository, ShopRepository,
    UserRepository, UserRepositoryError,
};
use campus_print::domain::{
    Campus, CampusPatch, ColorMode, ExecutionMode, NewCampus, NewShop, NewShopPricing, NewUser,
    PaperSize, PaymentId, PaymentMode, Shop, ShopFilter, ShopPatch, UserRole, timestamp_now,
};
use campus_print::outbound::persistence::{
    DbPool, DieselCampusRepository, DieselPaymentRepository, DieselPricingRepository,
    DieselPrintJobRepository, DieselShopRepository, DieselUserRepository, MIGRATIONS, PoolConfig,
};
use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;
use rstest::rstest;
use uuid::Uuid;

const DATABASE_URL_ENV: &str = "CAMPUS_PRINT_TEST_DATABASE_URL";

static MIGRATE: Once = Once::new();

fn database_url() -> Option<String> {
    let url = std::env::var(DATABASE_URL_ENV).ok()?;
    MIGRATE.call_once(|| {
        let mut conn = PgConnection::establish(&url).expect("connect for migrations");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("apply migrations");
    });
    Some(url)
}

struct Repositories {
    campuses: DieselCampusRepository,
    shops: DieselShopRepository,
    pricing: DieselPricingRepository,
    users: DieselUserRepository,
    jobs: DieselPrintJobRepository,
    payments: DieselPaymentRepository,
}

fn repositories(url: &str) -> Repositories {
    let pool = DbPool::new_lazy(&PoolConfig::new(url).with_max_size(4).with_min_idle(None));
    Repositories {
        campuses: DieselCampusRepository::new(pool.clone()),
        shops: DieselShopRepository::new(pool.clone()),
        pricing: DieselPricingRepository::new(pool.clone()),
        users: DieselUserRepository::new(pool.clone()),
        jobs: DieselPrintJobRepository::new(pool.clone()),
        payments: DieselPaymentRepository::new(pool),
    }
}

fn unique(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4().simple())
}

async fn seeded_campus(repos: &Repositories) -> Campus {
    let campus = NewCampus::try_new(unique("campus"), "Block A")
        .expect("valid campus")
        .into_campus(timestamp_now());
    repos.campuses.insert(&campus).await.expect("campus insert");
    campus
}

async fn seeded_shop(repos: &Repositories, campus: &Campus, name: &str) -> Shop {
    let shop = NewShop::try_new(campus.id, name, ExecutionMode::Manual, PaymentMode::Counter)
        .expect("valid shop")
        .into_shop(timestamp_now());
    repos.shops.insert(&shop).await.expect("shop insert");
    shop
}

#[rstest]
#[tokio::test]
async fn campus_round_trips_and_rejects_duplicate_names() {
    let Some(url) = database_url() else { return };
    let repos = repositories(&url);
    let campus = seeded_campus(&repos).await;

    let by_name = repos
        .campuses
        .find_by_name(&campus.name)
        .await
        .expect("lookup");
    assert_eq!(by_name, Some(campus.clone()));

    let twin = NewCampus::try_new(campus.name.clone(), "Elsewhere")
        .expect("valid campus")
        .into_campus(timestamp_now());
    assert!(repos.campuses.insert(&twin).await.is_err());

    let patch = CampusPatch::try_new(None, Some("Block B".into())).expect("valid patch");
    let updated = repos
        .campuses
        .update(campus.id, &patch)
        .await
        .expect("update")
        .expect("row exists");
    assert_eq!(updated.location, "Block B");
    assert_eq!(updated.name, campus.name);
    assert_eq!(updated.created_at, campus.created_at);
}

#[rstest]
#[tokio::test]
async fn shop_patch_and_campus_filter() {
    let Some(url) = database_url() else { return };
    let repos = repositories(&url);
    let north = seeded_campus(&repos).await;
    let south = seeded_campus(&repos).await;
    let shop = seeded_shop(&repos, &north, "QuickPrint").await;
    seeded_shop(&repos, &south, "QuickPrint").await;

    let listed = repos
        .shops
        .list(ShopFilter {
            campus_id: Some(north.id),
        })
        .await
        .expect("list");
    assert_eq!(listed, vec![shop.clone()]);

    let patch = ShopPatch::default().with_is_active(false);
    let updated = repos
        .shops
        .update(shop.id, &patch)
        .await
        .expect("update")
        .expect("row exists");
    assert!(!updated.is_active);
    assert_eq!(updated.name, shop.name);
    assert_eq!(updated.execution_mode, shop.execution_mode);
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_a_query_error() {
    let Some(url) = database_url() else { return };
    let repos = repositories(&url);
    let campus = seeded_campus(&repos).await;
    let email = format!("{}@campus.edu", unique("student"));
    let first = NewUser::try_new(campus.id, email.as_str(), "Ada", UserRole::Student)
        .expect("valid user")
        .into_user(timestamp_now());
    let second = NewUser::try_new(campus.id, email.as_str(), "Grace", UserRole::Student)
        .expect("valid user")
        .into_user(timestamp_now());

    repos.users.insert(&first).await.expect("first insert");
    let error = repos.users.insert(&second).await.expect_err("duplicate");

    assert!(matches!(error, UserRepositoryError::Query { .. }));
}

#[rstest]
#[tokio::test]
async fn deleting_a_campus_cascades() {
    let Some(url) = database_url() else { return };
    let repos = repositories(&url);
    let campus = seeded_campus(&repos).await;
    let shop = seeded_shop(&repos, &campus, "Cascade").await;
    let pricing = NewShopPricing {
        shop_id: shop.id,
        size: PaperSize::A4,
        color_mode: ColorMode::Bw,
        normal_rate: 2.0,
        bulk_rate: 1.5,
        bulk_threshold: 100,
    }
    .into_pricing();
    repos.pricing.insert(&pricing).await.expect("pricing insert");

    assert!(repos.campuses.delete(campus.id).await.expect("delete"));
    assert!(!repos.campuses.delete(campus.id).await.expect("second delete"));

    let shops = repos
        .shops
        .list(ShopFilter {
            campus_id: Some(campus.id),
        })
        .await
        .expect("list shops");
    assert!(shops.is_empty());
    let rows = repos
        .pricing
        .list_for_shop(shop.id)
        .await
        .expect("list pricing");
    assert!(rows.is_empty());
}

#[rstest]
#[tokio::test]
async fn ledger_reads_tolerate_unknown_ids() {
    let Some(url) = database_url() else { return };
    let repos = repositories(&url);

    repos.jobs.list().await.expect("jobs list");
    repos.payments.list().await.expect("payments list");
    let missing = repos
        .payments
        .find_by_id(PaymentId::random())
        .await
        .expect("lookup");

    assert!(missing.is_none());
}
