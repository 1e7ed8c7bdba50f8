//! Product use-case service.
//!
//! Thin 1:1 delegation; all persistence contracts live in the repository.

use crate::model::product::{Product, ProductId};
use crate::repo::product_repo::ProductRepository;
use crate::repo::RepoResult;

/// Façade over a product repository implementation.
pub struct ProductService<R: ProductRepository> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn get_all(&self) -> RepoResult<Vec<Product>> {
        self.repo.get_all()
    }

    pub fn get(&self, id: ProductId) -> RepoResult<Option<Product>> {
        self.repo.get(id)
    }

    pub fn add(&self, product: &mut Product) -> RepoResult<ProductId> {
        self.repo.add(product)
    }

    pub fn update(&self, product: &Product) -> RepoResult<()> {
        self.repo.update(product)
    }

    pub fn delete(&self, product: &Product) -> RepoResult<()> {
        self.repo.delete(product)
    }
}
