use tracing::{debug, instrument};

use crate::RepoInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub id: u64,
    pub html_url: String,
    pub body: String,
}

/// Issue comment operations a sticky comment needs from the remote API.
#[async_trait::async_trait]
pub trait CommentApi: Send + Sync {
    async fn list_issue_comments(
        &self,
        repo: &RepoInfo,
        issue_number: u64,
    ) -> anyhow::Result<Vec<IssueComment>>;

    async fn create_issue_comment(
        &self,
        repo: &RepoInfo,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<IssueComment>;

    async fn update_issue_comment(
        &self,
        repo: &RepoInfo,
        comment_id: u64,
        body: &str,
    ) -> anyhow::Result<IssueComment>;
}

#[derive(Debug, Clone)]
pub struct StickyCommentOptions {
    pub identifier: String,
    pub body: String,
}

pub fn sticky_marker(identifier: &str) -> String {
    format!("<!-- sticky-comment-id: {identifier} -->")
}

pub fn find_sticky_comment<'a>(
    comments: &'a [IssueComment],
    identifier: &str,
) -> Option<&'a IssueComment> {
    let marker = sticky_marker(identifier);
    comments.iter().find(|c| c.body.contains(&marker))
}

/// Creates the comment tagged with `options.identifier`, or edits it in place
/// if the issue already has one.
#[instrument(skip(api, repo, options), fields(repo = %repo, identifier = %options.identifier))]
pub async fn create_sticky_comment(
    api: &dyn CommentApi,
    repo: &RepoInfo,
    issue_number: u64,
    options: StickyCommentOptions,
) -> anyhow::Result<IssueComment> {
    let body = format!("{}\n{}", sticky_marker(&options.identifier), options.body);
    let comments = api.list_issue_comments(repo, issue_number).await?;

    if let Some(existing) = find_sticky_comment(&comments, &options.identifier) {
        debug!("Updating sticky comment {} on #{issue_number}", existing.id);
        return api.update_issue_comment(repo, existing.id, &body).await;
    }

    debug!("Creating sticky comment on #{issue_number}");
    api.create_issue_comment(repo, issue_number, &body).await
}
