//! `PostgreSQL` repository implementation for products.

use super::{
    models::{NewProductRow, ProductChangeset, ProductRow},
    schema::products,
};
use crate::persistence::{
    PgPool,
    blocking::{escape_like, get_conn_with, run_blocking_with},
};
use crate::product::{
    domain::{NewProduct, PersistedProductData, Product, ProductId, ProductSearch, ProductStatus},
    ports::{ProductRepository, ProductRepositoryError, ProductRepositoryResult},
};
use async_trait::async_trait;
use diesel::prelude::*;

/// `PostgreSQL`-backed product repository.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ProductRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ProductRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        run_blocking_with(
            move || {
                let mut connection = get_conn_with(&pool, ProductRepositoryError::persistence)?;
                f(&mut connection)
            },
            ProductRepositoryError::persistence,
        )
        .await
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn insert(&self, product: NewProduct) -> ProductRepositoryResult<Product> {
        let new_row = to_new_row(&product);
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(products::table)
                .values(&new_row)
                .returning(ProductRow::as_returning())
                .get_result::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            row_to_product(row)
        })
        .await
    }

    async fn update(&self, product: &Product) -> ProductRepositoryResult<()> {
        let product_id = product.id();
        let changeset = to_changeset(product);
        self.run_blocking(move |connection| {
            let updated = diesel::update(products::table.find(product_id.value()))
                .set(&changeset)
                .execute(connection)
                .map_err(ProductRepositoryError::persistence)?;
            if updated == 0 {
                return Err(ProductRepositoryError::NotFound(product_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: ProductId) -> ProductRepositoryResult<Option<Product>> {
        self.run_blocking(move |connection| {
            let row = products::table
                .find(id.value())
                .select(ProductRow::as_select())
                .first::<ProductRow>(connection)
                .optional()
                .map_err(ProductRepositoryError::persistence)?;
            row.map(row_to_product).transpose()
        })
        .await
    }

    async fn list_active(&self) -> ProductRepositoryResult<Vec<Product>> {
        self.run_blocking(|connection| {
            let rows = products::table
                .filter(products::status.ilike(ProductStatus::ACTIVE))
                .order(products::id.asc())
                .select(ProductRow::as_select())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }

    async fn search(&self, criteria: &ProductSearch) -> ProductRepositoryResult<Vec<Product>> {
        let filters = criteria.clone();
        self.run_blocking(move |connection| {
            let mut query = products::table.select(ProductRow::as_select()).into_boxed();
            if let Some(name) = filters.name() {
                query = query.filter(products::name.ilike(format!("%{}%", escape_like(name))));
            }
            if let Some(min_price) = filters.min_price() {
                query = query.filter(products::price.ge(min_price));
            }
            if let Some(max_price) = filters.max_price() {
                query = query.filter(products::price.le(max_price));
            }
            if let Some(status) = filters.status() {
                query = query.filter(products::status.ilike(escape_like(status.trim())));
            }
            if let Some(range) = filters.created() {
                if let Some(start) = range.start() {
                    query = query.filter(products::created_at.ge(start));
                }
                if let Some(end) = range.end() {
                    query = query.filter(products::created_at.le(end));
                }
            }

            let rows = query
                .order(products::id.asc())
                .load::<ProductRow>(connection)
                .map_err(ProductRepositoryError::persistence)?;
            rows.into_iter().map(row_to_product).collect()
        })
        .await
    }
}

pub(super) fn to_new_row(product: &NewProduct) -> NewProductRow {
    NewProductRow {
        name: product.name().to_owned(),
        price: product.price(),
        status: product.status().as_str().to_owned(),
        created_at: product.created_at(),
    }
}

pub(super) fn to_changeset(product: &Product) -> ProductChangeset {
    ProductChangeset {
        name: product.name().to_owned(),
        price: product.price(),
        status: product.status().as_str().to_owned(),
    }
}

pub(super) fn row_to_product(row: ProductRow) -> ProductRepositoryResult<Product> {
    let ProductRow {
        id,
        name,
        price,
        status: persisted_status,
        created_at,
    } = row;

    let status = ProductStatus::new(persisted_status)
        .map_err(ProductRepositoryError::invalid_persisted_data)?;

    Ok(Product::from_persisted(PersistedProductData {
        id: ProductId::new(id),
        name,
        price,
        status,
        created_at,
    }))
}
