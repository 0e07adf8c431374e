pub mod product;
pub mod cart;

pub use cart::{Cart, CartItem, DEFAULT_QUANTITY};
pub use product::{Product, ProductInput};
