//! Product catalog
//!
//! - [`ProductStore`] - JSON file backed product list
//! - [`new_product`] - admin form -> validated [`ProductCreate`]

pub mod error;
pub mod store;

pub use error::{CatalogError, CatalogResult};
pub use store::ProductStore;

use shared::models::{AddProductRequest, ProductCreate};
use shared::types::NumberLike;

pub(crate) const NAME_AND_PRICE_REQUIRED: &str = "请至少填写商品名和价格";

/// Validate the add-product form
///
/// `name` and `price` are required. `stock` defaults to 0 when missing or
/// blank; `image` and `description` default to empty strings.
pub fn new_product(req: AddProductRequest) -> CatalogResult<ProductCreate> {
    let name = req.name.unwrap_or_default().trim().to_string();
    let price = match req.price.filter(|p| !p.is_blank()) {
        Some(price) if !name.is_empty() => price,
        _ => return Err(CatalogError::Validation(NAME_AND_PRICE_REQUIRED.into())),
    };

    let price = price
        .as_f64()
        .ok_or_else(|| CatalogError::Validation("商品价格格式错误".into()))?;

    let stock = match req.stock.filter(|s| !s.is_blank()) {
        None => 0,
        Some(stock) => parse_stock(&stock)?,
    };

    Ok(ProductCreate {
        name,
        price,
        stock,
        image: req.image.unwrap_or_default(),
        description: req.description.unwrap_or_default(),
    })
}

/// Stock must be a whole number that fits in `u32`
pub fn parse_stock(value: &NumberLike) -> CatalogResult<u32> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| CatalogError::Validation("库存必须是非负整数".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> AddProductRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_price_is_required() {
        for body in [
            r#"{"name":"T恤"}"#,
            r#"{"name":"T恤","price":""}"#,
            r#"{"name":"T恤","price":null}"#,
            r#"{"price":10}"#,
            r#"{"name":"","price":10}"#,
        ] {
            assert!(
                matches!(new_product(request(body)), Err(CatalogError::Validation(_))),
                "{body}"
            );
        }
    }

    #[test]
    fn test_defaults() {
        let product = new_product(request(r#"{"name":"T恤","price":"59.9"}"#)).unwrap();
        assert_eq!(product, ProductCreate::new("T恤", 59.9));
    }

    #[test]
    fn test_form_strings() {
        let product = new_product(request(
            r#"{"name":"帽子","price":"20","stock":"8","image":"/img/hat.png","description":"红色"}"#,
        ))
        .unwrap();
        assert_eq!(product.price, 20.0);
        assert_eq!(product.stock, 8);
        assert_eq!(product.image, "/img/hat.png");
        assert_eq!(product.description, "红色");
    }

    #[test]
    fn test_zero_price_is_allowed() {
        let product = new_product(request(r#"{"name":"赠品","price":0}"#)).unwrap();
        assert_eq!(product.price, 0.0);
    }

    #[test]
    fn test_bad_numbers() {
        assert!(new_product(request(r#"{"name":"A","price":"abc"}"#)).is_err());
        assert!(new_product(request(r#"{"name":"A","price":1,"stock":-2}"#)).is_err());
        assert!(new_product(request(r#"{"name":"A","price":1,"stock":"1.5"}"#)).is_err());
    }
}
