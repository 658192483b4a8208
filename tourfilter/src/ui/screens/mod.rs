pub mod product_grid;
