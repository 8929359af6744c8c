pub mod dashboard_queries;
pub mod inventory_queries;
