#![allow(dead_code)]

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub async fn create_test_pool() -> SqlitePool {
    SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create in-memory SQLite pool")
}

pub async fn create_products_table(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE products (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            category TEXT NOT NULL,
            price REAL NOT NULL,
            inventory INTEGER DEFAULT 0
        )",
    )
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_product(pool: &SqlitePool, id: i64, name: &str, category: &str, price: f64) {
    sqlx::query("INSERT INTO products (id, name, category, price) VALUES (?, ?, ?, ?)")
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(price)
        .execute(pool)
        .await
        .unwrap();
}

/// The five products used by the search demo.
pub async fn seed_demo_products(pool: &SqlitePool) {
    create_products_table(pool).await;
    for (id, name, category, price) in [
        (1, "Laptop", "Electronics", 1299.99),
        (2, "Desk Chair", "Furniture", 199.50),
        (3, "Coffee Mug", "Kitchenware", 12.95),
        (4, "Wireless Mouse", "Electronics", 25.99),
        (5, "Desk Lamp", "Furniture", 49.99),
    ] {
        insert_product(pool, id, name, category, price).await;
    }
}

pub async fn seed_users(pool: &SqlitePool) {
    sqlx::query(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            is_admin BOOLEAN DEFAULT 0
        )",
    )
    .execute(pool)
    .await
    .unwrap();

    for (id, name, username, email, is_admin) in [
        (1, "Admin User", "admin", "admin@example.com", true),
        (2, "John Smith", "john_smith", "john@example.com", false),
        (3, "Jane Doe", "jane_doe", "jane@example.com", false),
    ] {
        sqlx::query(
            "INSERT INTO users (id, name, username, email, is_admin) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(username)
        .bind(email)
        .bind(is_admin)
        .execute(pool)
        .await
        .unwrap();
    }
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> usize {
    let query = sqlguard_core::build_compound_filter_query(table, Vec::new()).unwrap();
    sqlguard_sqlite::execute(pool, &query).await.unwrap().len()
}
