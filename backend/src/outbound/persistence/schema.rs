//! Diesel table definitions for the PostgreSQL schema.
//!
//! Tables are provisioned outside this service; keep these definitions in
//! step with the live database (`diesel print-schema` regenerates them).

diesel::table! {
    /// Registered users. Email is not unique at the storage level.
    users (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        age -> Float8,
    }
}

diesel::table! {
    /// Catalogue products.
    products (id) {
        id -> Uuid,
        name -> Varchar,
        price -> Float8,
        category -> Varchar,
        stock -> Float8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, products);
