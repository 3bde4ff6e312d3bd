use octocrab::models::{issues::Comment, CommentId};
use tracing::instrument;

use shared::{CommentApi, IssueComment, RepoInfo};

#[derive(Clone)]
pub struct GithubClient {
    octocrab: octocrab::Octocrab,
}

impl std::fmt::Debug for GithubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubClient").finish_non_exhaustive()
    }
}

fn comment_repr(comment: Comment) -> IssueComment {
    IssueComment {
        id: comment.id.0,
        html_url: comment.html_url.to_string(),
        body: comment
            .body
            .or(comment.body_text)
            .or(comment.body_html)
            .unwrap_or_default(),
    }
}

impl GithubClient {
    pub fn new(github_token: String, api_url: Option<String>) -> anyhow::Result<Self> {
        let mut builder = octocrab::Octocrab::builder();
        if let Some(api_url) = api_url {
            builder = builder.base_uri(api_url)?;
        }
        let octocrab = builder.personal_token(github_token).build()?;

        Ok(Self { octocrab })
    }
}

#[async_trait::async_trait]
impl CommentApi for GithubClient {
    #[instrument(skip(self, repo), fields(repo = %repo))]
    async fn list_issue_comments(
        &self,
        repo: &RepoInfo,
        issue_number: u64,
    ) -> anyhow::Result<Vec<IssueComment>> {
        let page = self
            .octocrab
            .issues(&repo.owner, &repo.repo)
            .list_comments(issue_number)
            .per_page(100)
            .send()
            .await?;
        let comments = self.octocrab.all_pages(page).await?;

        Ok(comments.into_iter().map(comment_repr).collect())
    }

    #[instrument(skip(self, repo, body), fields(repo = %repo))]
    async fn create_issue_comment(
        &self,
        repo: &RepoInfo,
        issue_number: u64,
        body: &str,
    ) -> anyhow::Result<IssueComment> {
        let comment = self
            .octocrab
            .issues(&repo.owner, &repo.repo)
            .create_comment(issue_number, body)
            .await?;

        Ok(comment_repr(comment))
    }

    #[instrument(skip(self, repo, body), fields(repo = %repo))]
    async fn update_issue_comment(
        &self,
        repo: &RepoInfo,
        comment_id: u64,
        body: &str,
    ) -> anyhow::Result<IssueComment> {
        let comment = self
            .octocrab
            .issues(&repo.owner, &repo.repo)
            .update_comment(CommentId(comment_id), body)
            .await?;

        Ok(comment_repr(comment))
    }
}
