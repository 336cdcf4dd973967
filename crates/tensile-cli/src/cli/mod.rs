pub mod app;
pub mod defaults;
pub mod resolve;
pub mod version;

pub use app::App;
