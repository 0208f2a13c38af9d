pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::router;
pub use state::{AppState, SharedState};
