//! Concrete move kinds, one transition per kind.
pub mod foundation;
pub mod free_cell;
pub mod placement;
pub mod stock;
pub mod tableau;

pub use foundation::FoundationMove;
pub use free_cell::FreeCellMove;
pub use placement::TableauPlacement;
pub use stock::{DrawMove, RecycleMove};
pub use tableau::TableauMove;
