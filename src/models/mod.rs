pub mod product;

pub use product::{validate, Product, ProductInput, ValidationError};
