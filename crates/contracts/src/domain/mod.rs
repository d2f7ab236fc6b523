pub mod a001_product;
pub mod a002_sale;
pub mod a003_purchase;
pub mod a004_expense;
pub mod a005_creditor;
pub mod common;
