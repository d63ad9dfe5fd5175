//! Catalog registration.

use crate::model::{Product, ProductCreate};
use crate::product_actor::ProductError;
use crate::repositories::ProductRegistry;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CreateProductError {
    #[error("Product name already in use: {0}")]
    NameAlreadyInUse(String),

    #[error(transparent)]
    Product(#[from] ProductError),
}

/// Adds products to the catalog, one per name.
#[derive(Clone)]
pub struct CreateProductService {
    products: Arc<dyn ProductRegistry>,
}

impl CreateProductService {
    pub fn new(products: Arc<dyn ProductRegistry>) -> Self {
        Self { products }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self,
        name: &str,
        price: f64,
        quantity: u32,
    ) -> Result<Product, CreateProductError> {
        if self.products.find_by_name(name).await?.is_some() {
            warn!("Product name already in use");
            return Err(CreateProductError::NameAlreadyInUse(name.to_string()));
        }

        let product = self
            .products
            .create(ProductCreate {
                name: name.to_string(),
                price,
                quantity,
            })
            .await?;
        info!(product_id = %product.id, "Product created");
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::fakes::InMemoryCatalog;

    #[tokio::test]
    async fn test_creates_product() {
        let catalog = Arc::new(InMemoryCatalog::default());
        let service = CreateProductService::new(catalog.clone());

        let product = service.execute("Widget", 10.0, 5).await.unwrap();

        assert_eq!(product.price, 10.0);
        assert_eq!(catalog.quantity(&product.id), Some(5));
    }

    #[tokio::test]
    async fn test_rejects_duplicate_name() {
        let widget = Product::new("product_1", "Widget", 10.0, 5);
        let catalog = Arc::new(InMemoryCatalog::new(vec![widget]));
        let service = CreateProductService::new(catalog);

        let err = service.execute("Widget", 12.0, 1).await.unwrap_err();
        assert_eq!(
            err,
            CreateProductError::NameAlreadyInUse("Widget".to_string())
        );
    }

    #[tokio::test]
    async fn test_registry_errors_propagate() {
        let catalog = Arc::new(InMemoryCatalog::default());
        let closed = ProductError::ActorCommunicationError("Actor closed".to_string());
        catalog.fail_with(closed);
        let service = CreateProductService::new(catalog);

        let err = service.execute("Widget", 10.0, 5).await.unwrap_err();
        assert!(matches!(err, CreateProductError::Product(_)));
    }
}
