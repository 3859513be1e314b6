pub mod scores;
pub mod server;

pub use server::{api_router, run_api_server};
