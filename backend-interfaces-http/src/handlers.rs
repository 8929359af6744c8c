pub mod dashboard_handlers;
pub mod distribution_handlers;
pub mod live_handlers;
pub mod ops_handlers;
pub mod stock_handlers;

pub use dashboard_handlers::*;
pub use distribution_handlers::*;
pub use live_handlers::*;
pub use ops_handlers::*;
pub use stock_handlers::*;
