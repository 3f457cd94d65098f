pub use super::consignees::Entity as Consignees;
pub use super::debtors::Entity as Debtors;
pub use super::purchase_orders::Entity as PurchaseOrders;
pub use super::suppliers::Entity as Suppliers;
