mod context;
pub mod github;
pub mod sticky;

pub use context::*;
pub use github::*;
pub use sticky::*;

pub type GithubHandle = String;
