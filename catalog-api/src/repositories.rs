use crate::endpoints::products::ListProducts;

pub struct ProductRepository;

impl ProductRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListProducts {
        ListProducts::new()
    }
}

impl Default for ProductRepository {
    fn default() -> Self {
        Self::new()
    }
}
