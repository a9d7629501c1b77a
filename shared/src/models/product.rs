//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity, one element of the `products.json` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    /// Price in currency unit
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    /// Image URL, empty when the product has none
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// Validated input for adding a product
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub image: String,
    pub description: String,
}

impl ProductCreate {
    /// Product with the optional fields left at their defaults
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            stock: 0,
            image: String::new(),
            description: String::new(),
        }
    }

    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    pub fn into_product(self, id: u64) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            stock: self.stock,
            image: self.image,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_when_missing() {
        let product: Product =
            serde_json::from_str(r#"{"id":1,"name":"T恤","price":59.9}"#).unwrap();
        assert_eq!(product.stock, 0);
        assert_eq!(product.image, "");
        assert_eq!(product.description, "");
    }
}
