pub mod error;
pub mod store;
pub mod view;

pub use error::BoardError;
pub use store::Dashboard;
pub use view::{Panel, Screen, ViewState};
