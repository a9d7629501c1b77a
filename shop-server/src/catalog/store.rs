//! JSON file product store
//!
//! The catalog is one pretty-printed JSON array. Every mutation reads the
//! whole file, changes it in memory and writes the whole file back through a
//! temporary file + rename, so a failed write leaves the previous catalog in
//! place. Mutations hold `write_lock` for the full read-modify-write cycle;
//! reads do not take it.

use shared::models::{Product, ProductCreate};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use super::NAME_AND_PRICE_REQUIRED;
use super::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone)]
pub struct ProductStore {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl ProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All products in file order
    ///
    /// A missing file is an empty catalog; an unreadable or malformed file is
    /// an error.
    pub async fn list(&self) -> CatalogResult<Vec<Product>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(CatalogError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| CatalogError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a product with id `max(existing) + 1`, or 1 for an empty catalog
    pub async fn add(&self, input: ProductCreate) -> CatalogResult<Product> {
        if input.name.trim().is_empty() {
            return Err(CatalogError::Validation(NAME_AND_PRICE_REQUIRED.into()));
        }
        if !input.price.is_finite() {
            return Err(CatalogError::Validation("商品价格格式错误".into()));
        }

        let _guard = self.write_lock.lock().await;
        let mut products = self.list().await?;

        let id = next_product_id(&products);
        let product = input.into_product(id);
        products.push(product.clone());
        self.save(&products).await?;

        info!(product_id = id, name = %product.name, "Product added");
        Ok(product)
    }

    /// Overwrite the stock of a product
    pub async fn update_stock(&self, id: u64, stock: u32) -> CatalogResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.list().await?;

        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        product.stock = stock;
        let updated = product.clone();
        self.save(&products).await?;

        info!(product_id = id, stock, "Product stock updated");
        Ok(updated)
    }

    /// Remove a product, returning it
    pub async fn delete(&self, id: u64) -> CatalogResult<Product> {
        let _guard = self.write_lock.lock().await;
        let mut products = self.list().await?;

        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound(id))?;
        let removed = products.remove(index);
        self.save(&products).await?;

        info!(product_id = id, name = %removed.name, "Product deleted");
        Ok(removed)
    }

    async fn save(&self, products: &[Product]) -> CatalogResult<()> {
        let json = serde_json::to_vec_pretty(products).map_err(|source| {
            CatalogError::Write {
                path: self.path.clone(),
                source: std::io::Error::other(source),
            }
        })?;

        let tmp_path = self.path.with_extension("json.tmp");
        let write_err = |source| CatalogError::Write {
            path: self.path.clone(),
            source,
        };
        tokio::fs::write(&tmp_path, json).await.map_err(write_err)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(write_err)?;
        Ok(())
    }
}

fn next_product_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}
