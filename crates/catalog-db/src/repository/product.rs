//! # Product Repository
//!
//! Database operations for products.
//!
//! ## Key Operations
//! - CRUD: create, update, delete, all, find
//! - Filtered queries: by name, availability, category, price
//!
//! ## Commit Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     One Statement, One Commit                           │
//! │                                                                         │
//! │  repo.create(&mut product)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT INTO products ...   ← executes on the caller's pool handle    │
//! │       │                                                                 │
//! │       ├── success: SQLite commits the statement                        │
//! │       │            product.id = Some(last_insert_rowid)                │
//! │       │                                                                 │
//! │       └── failure: statement rolls back, error comes back wrapped      │
//! │                    as DataValidationError (never raw sqlx)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::debug;

use catalog_core::{price, Category, DataResult, DataValidationError, PriceQuery, Product};

/// Column list shared by every query that reconstructs a Product.
const PRODUCT_COLUMNS: &str = "id, name, description, price, available, category";

/// Repository for product database operations.
///
/// Holds the pool handle the caller constructed - there is no ambient
/// session. Cheap to create, cheap to clone.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.products();
///
/// // Persist a new product
/// repo.create(&mut product).await?;
///
/// // Filtered lookup
/// let cloths = repo.find_by_category(Some(Category::Cloths)).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    // =========================================================================
    // CRUD
    // =========================================================================

    /// Inserts the product as a new row and assigns the engine-generated
    /// id back onto the instance.
    ///
    /// Plain insert semantics: calling this on an instance that already
    /// has an id inserts a *second* row and re-points the instance at it.
    /// Callers that mean to modify an existing row call [`update`].
    ///
    /// [`update`]: ProductRepository::update
    pub async fn create(&self, product: &mut Product) -> DataResult<()> {
        debug!(name = %product.name, "Creating product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, available, category)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(price::canonical(&product.price))
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(&self.pool)
        .await?;

        product.id = Some(result.last_insert_rowid());
        Ok(())
    }

    /// Persists the current field values to the product's existing row.
    ///
    /// ## Errors
    /// Fails with "Update called with empty ID field" when the instance
    /// has never been persisted. The id itself is never touched. Updating
    /// a row that has since vanished is not an error - the statement
    /// simply affects nothing.
    pub async fn update(&self, product: &Product) -> DataResult<()> {
        let id = product
            .id
            .ok_or(DataValidationError::EmptyId { op: "Update" })?;

        debug!(id, "Updating product");

        sqlx::query(
            r#"
            UPDATE products SET
                name = ?2,
                description = ?3,
                price = ?4,
                available = ?5,
                category = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(price::canonical(&product.price))
        .bind(product.available)
        .bind(product.category.as_str())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Removes the row matching the instance's identity.
    ///
    /// ## Errors
    /// Fails with "Delete called with empty ID field" when the instance
    /// has never been persisted.
    pub async fn delete(&self, product: &Product) -> DataResult<()> {
        let id = product
            .id
            .ok_or(DataValidationError::EmptyId { op: "Delete" })?;

        debug!(id, "Deleting product");

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns every persisted product, in storage engine order.
    pub async fn all(&self) -> DataResult<Vec<Product>> {
        debug!("Listing all products");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds the product with the given id.
    ///
    /// ## Returns
    /// * `Ok(Some(Product))` - Product found
    /// * `Ok(None)` - No such row; not-found is not a failure
    pub async fn find(&self, id: i64) -> DataResult<Option<Product>> {
        debug!(id, "Looking up product by id");

        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts persisted products (for diagnostics and seeding).
    pub async fn count(&self) -> DataResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // =========================================================================
    // Filtered Queries
    // =========================================================================
    // Each filter logs the predicate it applies - an observability side
    // effect, not a correctness requirement - and returns the matching
    // rows for the caller to compose further with iterators.

    /// Finds products whose name matches exactly.
    pub async fn find_by_name(&self, name: &str) -> DataResult<Vec<Product>> {
        debug!(name = %name, "Filtering products by name");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1"
        ))
        .bind(name)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds products by availability; `None` defaults to available.
    pub async fn find_by_availability(
        &self,
        available: Option<bool>,
    ) -> DataResult<Vec<Product>> {
        let available = available.unwrap_or(true);
        debug!(available, "Filtering products by availability");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE available = ?1"
        ))
        .bind(available)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds products by category; `None` defaults to the UNKNOWN sentinel.
    pub async fn find_by_category(
        &self,
        category: Option<Category>,
    ) -> DataResult<Vec<Product>> {
        let category = category.unwrap_or_default();
        debug!(category = %category, "Filtering products by category");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1"
        ))
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Finds products with an exactly matching price.
    ///
    /// Accepts an exact [`Decimal`] or raw text - including the
    /// quote-and-whitespace-wrapped form query-string plumbing produces
    /// (`' "19.99" '`). Textual input goes through the single coercion
    /// adapter in `catalog_core::price` before filtering.
    pub async fn find_by_price(
        &self,
        price: impl Into<PriceQuery>,
    ) -> DataResult<Vec<Product>> {
        let price: Decimal = price.into().resolve()?;
        debug!(price = %price, "Filtering products by price");

        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE price = ?1"
        ))
        .bind(price::canonical(&price))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
