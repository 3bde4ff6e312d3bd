use crate::EventContext;

const PULL_REQUEST_EVENTS: [&str; 4] = [
    "pull_request",
    "pull_request_target",
    "pull_request_review",
    "pull_request_review_comment",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
}

impl RepoInfo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

impl std::fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

pub fn get_repo_info(ctx: &EventContext) -> RepoInfo {
    RepoInfo::new(&ctx.owner, &ctx.repo)
}

pub fn is_pull_request_context(ctx: &EventContext) -> bool {
    PULL_REQUEST_EVENTS.contains(&ctx.event_name.as_str())
        || ctx.payload.get("pull_request").is_some_and(|pr| pr.is_object())
        || ctx.payload.pointer("/issue/pull_request").is_some()
}

pub fn get_current_pull_request_number(ctx: &EventContext) -> Option<u64> {
    ctx.pull_request_number()
}
