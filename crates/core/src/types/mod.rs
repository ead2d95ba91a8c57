//! Core types for Wavecrest.
//!
//! Field names mirror the backend tables (`products`, `categories`,
//! `inquiries`, `user_roles`) so records serialize directly to and from the
//! backend's JSON representation.

pub mod cart;
pub mod currency;
pub mod inquiry;
pub mod product;

pub use cart::{CartItemSnapshot, CartLine};
pub use currency::{Currency, CurrencyParseError, PriceSet};
pub use inquiry::{CART_ORDER_LABEL, Inquiry, InquiryContact, NewInquiry};
pub use product::{Category, CategoryInput, Product, ProductInput};
