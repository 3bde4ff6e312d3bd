pub mod api;
pub mod context;
pub mod logging;
pub mod output;
pub mod scripts;
