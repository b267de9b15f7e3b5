pub mod local_server;
pub mod observability;
pub mod rng;

pub use local_server::AppState;
pub use rng::RngSource;
