pub mod a001_brand_store;
pub mod a002_store_model;
