//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after adding a migration.

diesel::table! {
    /// Campuses; `name` is unique (`uq_campus_name`).
    campuses (id) {
        id -> Uuid,
        name -> Varchar,
        location -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    users (id) {
        id -> Uuid,
        campus_id -> Uuid,
        /// Globally unique.
        email -> Varchar,
        name -> Varchar,
        role -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Shops; `(campus_id, name)` is unique (`uq_campus_id_shop_name`).
    shops (id) {
        id -> Uuid,
        campus_id -> Uuid,
        name -> Varchar,
        execution_mode -> Varchar,
        payment_mode -> Varchar,
        is_active -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    shop_pricing (id) {
        id -> Uuid,
        shop_id -> Uuid,
        size -> Varchar,
        color_mode -> Varchar,
        normal_rate -> Float8,
        bulk_rate -> Float8,
        bulk_threshold -> Int4,
    }
}

diesel::table! {
    print_jobs (id) {
        id -> Uuid,
        campus_id -> Uuid,
        shop_id -> Uuid,
        user_id -> Uuid,
        file_url -> Text,
        original_filename -> Varchar,
        pages -> Int4,
        copies -> Int4,
        size -> Varchar,
        color_mode -> Varchar,
        final_price -> Float8,
        pricing_snapshot -> Jsonb,
        execution_mode_snapshot -> Varchar,
        payment_mode_snapshot -> Varchar,
        status -> Varchar,
        created_at -> Timestamptz,
        /// Touched by the `print_jobs_touch_updated_at` trigger.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    payments (id) {
        id -> Uuid,
        /// Unique: one payment per job.
        job_id -> Uuid,
        amount -> Float8,
        status -> Varchar,
        gateway_reference -> Nullable<Varchar>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(users -> campuses (campus_id));
diesel::joinable!(shops -> campuses (campus_id));
diesel::joinable!(shop_pricing -> shops (shop_id));
diesel::joinable!(print_jobs -> shops (shop_id));
diesel::joinable!(print_jobs -> users (user_id));
diesel::joinable!(payments -> print_jobs (job_id));

diesel::allow_tables_to_appear_in_same_query!(
    campuses,
    users,
    shops,
    shop_pricing,
    print_jobs,
    payments,
);
