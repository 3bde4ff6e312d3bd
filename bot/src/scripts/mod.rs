use anyhow::Context as _;
use tracing::{debug, instrument};

use crate::context::ExecutionContext;

pub mod basic;
pub mod comment;

pub use self::{
    basic::{BasicArgs, BasicResult},
    comment::{CommentArgs, CommentResult},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Script {
    Basic,
    Comment,
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-01-01T10:00:00.000Z`.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

impl Script {
    /// Parses `args` into the script's own argument type, runs it and
    /// returns the serialized result.
    #[instrument(skip(self, ctx, args), fields(script = %self))]
    pub async fn execute(
        self,
        ctx: &ExecutionContext,
        args: serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        debug!("Executing with args: {args}");
        let result = match self {
            Script::Basic => {
                let args: BasicArgs = serde_json::from_value(args)
                    .with_context(|| format!("Invalid arguments for {self} script"))?;
                serde_json::to_value(basic::run(ctx, args))?
            }
            Script::Comment => {
                let args: CommentArgs = serde_json::from_value(args)
                    .with_context(|| format!("Invalid arguments for {self} script"))?;
                serde_json::to_value(comment::run(ctx, args).await?)?
            }
        };

        Ok(result)
    }
}
