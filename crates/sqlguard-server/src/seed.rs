//! Demo schema and rows.

use sqlx::SqlitePool;
use tracing::info;

const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        price REAL NOT NULL,
        inventory INTEGER DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        username TEXT NOT NULL UNIQUE,
        email TEXT NOT NULL,
        is_admin BOOLEAN NOT NULL DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS orders (
        id INTEGER PRIMARY KEY,
        user_id INTEGER NOT NULL REFERENCES users(id),
        total REAL NOT NULL,
        status TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS customers (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT
    )",
];

const PRODUCTS: &[(i64, &str, &str, f64, i64)] = &[
    (1, "Laptop", "Electronics", 1299.99, 45),
    (2, "Desk Chair", "Furniture", 199.50, 20),
    (3, "Coffee Mug", "Kitchenware", 12.95, 100),
    (4, "Wireless Mouse", "Electronics", 25.99, 75),
    (5, "Desk Lamp", "Furniture", 49.99, 30),
];

const USERS: &[(i64, &str, &str, &str, bool)] = &[
    (1, "Admin User", "admin", "admin@example.com", true),
    (2, "John Smith", "john_smith", "john@example.com", false),
    (3, "Jane Doe", "jane_doe", "jane@example.com", false),
];

const ORDERS: &[(i64, i64, f64, &str)] = &[
    (1, 2, 1325.98, "shipped"),
    (2, 3, 49.99, "pending"),
    (3, 2, 12.95, "delivered"),
];

const CUSTOMERS: &[(i64, &str, &str, Option<&str>)] = &[
    (1, "Acme Corp", "orders@acme.example", Some("555-0100")),
    (2, "Globex", "buying@globex.example", None),
];

/// Creates the demo tables and inserts the demo rows.
///
/// Safe to run repeatedly: tables are created only if missing and rows with
/// an existing id are skipped. Everything runs in one transaction.
pub async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    for &statement in SCHEMA {
        sqlx::query(statement).execute(&mut *tx).await?;
    }

    for &(id, name, category, price, inventory) in PRODUCTS {
        sqlx::query(
            "INSERT OR IGNORE INTO products (id, name, category, price, inventory) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(inventory)
        .execute(&mut *tx)
        .await?;
    }

    for &(id, name, username, email, is_admin) in USERS {
        sqlx::query(
            "INSERT OR IGNORE INTO users (id, name, username, email, is_admin) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(name)
        .bind(username)
        .bind(email)
        .bind(is_admin)
        .execute(&mut *tx)
        .await?;
    }

    for &(id, user_id, total, status) in ORDERS {
        sqlx::query("INSERT OR IGNORE INTO orders (id, user_id, total, status) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(user_id)
            .bind(total)
            .bind(status)
            .execute(&mut *tx)
            .await?;
    }

    for &(id, name, email, phone) in CUSTOMERS {
        sqlx::query("INSERT OR IGNORE INTO customers (id, name, email, phone) VALUES (?, ?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(phone)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    info!(
        products = PRODUCTS.len(),
        users = USERS.len(),
        orders = ORDERS.len(),
        customers = CUSTOMERS.len(),
        "Demo data seeded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn create_test_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await
            .expect("Failed to create in-memory SQLite pool")
    }

    async fn count(pool: &SqlitePool, sql: &str) -> i64 {
        sqlx::query_scalar(sql).fetch_one(pool).await.unwrap()
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = create_test_pool().await;
        seed(&pool).await.unwrap();
        seed(&pool).await.unwrap();

        assert_eq!(count(&pool, "SELECT COUNT(*) FROM products").await, 5);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM users").await, 3);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM orders").await, 3);
        assert_eq!(count(&pool, "SELECT COUNT(*) FROM customers").await, 2);
    }

    #[tokio::test]
    async fn test_seed_marks_only_admin() {
        let pool = create_test_pool().await;
        seed(&pool).await.unwrap();

        assert_eq!(
            count(&pool, "SELECT COUNT(*) FROM users WHERE is_admin = 1").await,
            1
        );
    }
}
