use serde::{Deserialize, Serialize};

use crate::context::ExecutionContext;

pub const DEFAULT_MESSAGE: &str = "Hello from TypeScript!";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicArgs {
    #[serde(default)]
    pub message: Option<String>,
}

impl BasicArgs {
    /// Empty messages count as missing.
    pub fn message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicResult {
    pub success: bool,
    pub message: String,
    pub repository: String,
    pub event_name: String,
    pub timestamp: String,
}

pub fn run(ctx: &ExecutionContext, args: BasicArgs) -> BasicResult {
    let message = args.message();
    let event = &ctx.event;
    let repository = format!("{}/{}", event.owner, event.repo);

    ctx.info(format!("Running script with message: {message}"));
    ctx.info(format!("Repository: {repository}"));
    ctx.info(format!("Event: {}", event.event_name));
    ctx.info(format!("Actor: {}", event.actor));

    BasicResult {
        success: true,
        message,
        repository,
        event_name: event.event_name.clone(),
        timestamp: super::timestamp(),
    }
}
