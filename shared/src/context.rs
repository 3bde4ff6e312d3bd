use std::path::PathBuf;

use anyhow::Context as _;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::GithubHandle;

/// Environment the GitHub Actions runner exposes to every step.
#[derive(Deserialize)]
struct ActionsEnv {
    github_repository: String,
    #[serde(default)]
    github_event_name: String,
    #[serde(default)]
    github_actor: GithubHandle,
    github_event_path: Option<PathBuf>,
}

/// Read-only description of the event that triggered the current run.
#[derive(Debug, Clone)]
pub struct EventContext {
    pub owner: String,
    pub repo: String,
    pub event_name: String,
    pub actor: GithubHandle,
    /// Webhook payload of the triggering event, `Null` when none was provided.
    pub payload: serde_json::Value,
}

impl EventContext {
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        event_name: impl Into<String>,
        actor: impl Into<GithubHandle>,
    ) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            event_name: event_name.into(),
            actor: actor.into(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_actions_env(envy::from_env::<ActionsEnv>()?)
    }

    fn from_actions_env(env: ActionsEnv) -> anyhow::Result<Self> {
        let (owner, repo) = split_repository(&env.github_repository)?;

        let payload = match env.github_event_path {
            Some(path) if path.exists() => {
                debug!("Loading event payload from {}", path.display());
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read event payload {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("Failed to parse event payload {}", path.display()))?
            }
            Some(path) => {
                warn!("Event payload {} does not exist", path.display());
                serde_json::Value::Null
            }
            None => serde_json::Value::Null,
        };

        Ok(Self::new(owner, repo, env.github_event_name, env.github_actor).with_payload(payload))
    }

    pub fn pull_request_number(&self) -> Option<u64> {
        if let Some(number) = self
            .payload
            .pointer("/pull_request/number")
            .and_then(serde_json::Value::as_u64)
        {
            return Some(number);
        }

        // Comments on a PR arrive as issue events with a `pull_request` link
        if self.payload.pointer("/issue/pull_request").is_some() {
            return self
                .payload
                .pointer("/issue/number")
                .and_then(serde_json::Value::as_u64);
        }

        if self.event_name.starts_with("pull_request") {
            return self.payload.get("number").and_then(serde_json::Value::as_u64);
        }

        None
    }
}

fn split_repository(full_name: &str) -> anyhow::Result<(&str, &str)> {
    match full_name.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner, repo))
        }
        _ => Err(anyhow::anyhow!(
            "GITHUB_REPOSITORY should look like owner/repo, got: {full_name}"
        )),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{split_repository, ActionsEnv, EventContext};

    fn actions_env(vars: &[(&str, &str)]) -> anyhow::Result<EventContext> {
        let env = envy::from_iter::<_, ActionsEnv>(
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())),
        )?;
        EventContext::from_actions_env(env)
    }

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{name}-{}.json", std::process::id()));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn env_requires_repository() {
        assert!(actions_env(&[("GITHUB_EVENT_NAME", "push")]).is_err());
        assert!(actions_env(&[("GITHUB_REPOSITORY", "acme")]).is_err());
    }

    #[test]
    fn env_defaults() {
        let ctx = actions_env(&[("GITHUB_REPOSITORY", "acme/widgets")]).unwrap();

        assert_eq!("acme", ctx.owner);
        assert_eq!("widgets", ctx.repo);
        assert_eq!("", ctx.event_name);
        assert_eq!("", ctx.actor);
        assert!(ctx.payload.is_null());
    }

    #[test]
    fn env_loads_payload() {
        let path = temp_file("event-payload", r#"{ "pull_request": { "number": 42 } }"#);

        let ctx = actions_env(&[
            ("GITHUB_REPOSITORY", "acme/widgets"),
            ("GITHUB_EVENT_NAME", "pull_request"),
            ("GITHUB_ACTOR", "octocat"),
            ("GITHUB_EVENT_PATH", path.to_str().unwrap()),
        ]);
        std::fs::remove_file(&path).unwrap();
        let ctx = ctx.unwrap();

        assert_eq!("pull_request", ctx.event_name);
        assert_eq!("octocat", ctx.actor);
        assert_eq!(Some(42), ctx.pull_request_number());
    }

    #[test]
    fn env_missing_payload_file_is_null() {
        let path = std::env::temp_dir().join(format!("no-such-payload-{}", std::process::id()));

        let ctx = actions_env(&[
            ("GITHUB_REPOSITORY", "acme/widgets"),
            ("GITHUB_EVENT_PATH", path.to_str().unwrap()),
        ])
        .unwrap();

        assert!(ctx.payload.is_null());
    }

    #[test]
    fn env_malformed_payload_is_error() {
        let path = temp_file("broken-payload", "{ not json");

        let result = actions_env(&[
            ("GITHUB_REPOSITORY", "acme/widgets"),
            ("GITHUB_EVENT_PATH", path.to_str().unwrap()),
        ]);
        std::fs::remove_file(&path).unwrap();

        let err = result.unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse event payload"), "{err}");
    }

    fn context(event_name: &str, payload: serde_json::Value) -> EventContext {
        EventContext::new("acme", "widgets", event_name, "octocat").with_payload(payload)
    }

    #[test]
    fn repository_is_split_into_owner_and_name() {
        assert_eq!(("acme", "widgets"), split_repository("acme/widgets").unwrap());
        assert!(split_repository("acme").is_err());
        assert!(split_repository("/widgets").is_err());
        assert!(split_repository("acme/").is_err());
        assert!(split_repository("acme/widgets/extra").is_err());
    }

    #[test]
    fn number_from_pull_request_payload() {
        let ctx = context("pull_request", json!({ "pull_request": { "number": 42 } }));
        assert_eq!(Some(42), ctx.pull_request_number());
    }

    #[test]
    fn number_from_issue_comment_on_pull_request() {
        let ctx = context(
            "issue_comment",
            json!({ "issue": { "number": 7, "pull_request": { "url": "https://x" } } }),
        );
        assert_eq!(Some(7), ctx.pull_request_number());
    }

    #[test]
    fn plain_issue_has_no_pull_request_number() {
        let ctx = context("issue_comment", json!({ "issue": { "number": 7 } }));
        assert_eq!(None, ctx.pull_request_number());
    }

    #[test]
    fn top_level_number_only_for_pull_request_events() {
        assert_eq!(
            Some(3),
            context("pull_request_target", json!({ "number": 3 })).pull_request_number()
        );
        assert_eq!(None, context("push", json!({ "number": 3 })).pull_request_number());
    }

    #[test]
    fn missing_payload() {
        assert_eq!(None, context("pull_request", json!(null)).pull_request_number());
    }
}
