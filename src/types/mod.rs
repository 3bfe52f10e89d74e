pub type TransactionId = String;
pub type ProductId = String;
pub type CustomerId = String;
pub type SaleDate = String;
