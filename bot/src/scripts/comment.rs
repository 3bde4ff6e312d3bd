use serde::{Deserialize, Serialize};
use tracing::instrument;

use shared::{
    create_sticky_comment, get_current_pull_request_number, get_repo_info,
    is_pull_request_context, StickyCommentOptions,
};

use crate::context::ExecutionContext;

pub const DEFAULT_IDENTIFIER: &str = "example-comment";
pub const SKIP_REASON: &str = "Not a pull request context";

fn default_identifier() -> String {
    DEFAULT_IDENTIFIER.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentArgs {
    pub message: String,
    #[serde(default = "default_identifier")]
    pub identifier: String,
}

impl CommentArgs {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            identifier: default_identifier(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentPosted {
    pub success: bool,
    pub comment_id: u64,
    pub comment_url: String,
    pub pull_request_number: u64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSkipped {
    pub success: bool,
    pub skipped: bool,
    pub reason: String,
}

impl Default for CommentSkipped {
    fn default() -> Self {
        Self {
            success: true,
            skipped: true,
            reason: SKIP_REASON.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommentResult {
    Posted(CommentPosted),
    Skipped(CommentSkipped),
}

fn comment_body(message: &str) -> String {
    format!(
        "## 🤖 Bot Update\n\n{message}\n\n_Updated at: {}_",
        super::timestamp()
    )
}

#[instrument(skip(ctx, args), fields(repo = %ctx.event.repo, event = %ctx.event.event_name))]
pub async fn run(ctx: &ExecutionContext, args: CommentArgs) -> anyhow::Result<CommentResult> {
    let CommentArgs {
        message,
        identifier,
    } = args;

    let repo = get_repo_info(&ctx.event);
    let is_pr = is_pull_request_context(&ctx.event);

    ctx.info(format!("Repository: {repo}"));
    ctx.info(format!("Is Pull Request: {is_pr}"));

    // A PR event without a resolvable number is reported the same way as a non-PR event.
    // GitHub numbers start at 1, so 0 counts as unresolved.
    if let Some(pr_number) = is_pr
        .then(|| get_current_pull_request_number(&ctx.event))
        .flatten()
        .filter(|n| *n != 0)
    {
        ctx.info(format!("Pull Request #{pr_number}"));

        let comment = create_sticky_comment(
            ctx.github.as_ref(),
            &repo,
            pr_number,
            StickyCommentOptions {
                identifier,
                body: comment_body(&message),
            },
        )
        .await?;

        ctx.info(format!("Comment created/updated: {}", comment.html_url));

        return Ok(CommentResult::Posted(CommentPosted {
            success: true,
            comment_id: comment.id,
            comment_url: comment.html_url,
            pull_request_number: pr_number,
            message,
        }));
    }

    ctx.info("Not running on a pull request, skipping comment creation");
    Ok(CommentResult::Skipped(CommentSkipped::default()))
}
