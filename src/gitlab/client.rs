use reqwest::{Client, Response, header::HeaderValue};
use tracing::{debug, warn};

use super::types::{CommitAction, CommitRequest, CommitResponse, ErrorResponse, FileResponse};
use crate::{
    core::{CommitSummary, FileStore, FileUpdate, SessionConfig},
    error::{ArbyError, Result},
};

const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

pub struct GitLabClient {
    client: Client,
    endpoint: String,
    project_id: String,
    private_token: String,
    branch: String,
}

impl GitLabClient {
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("arby/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.gitlab_endpoint.trim_end_matches('/').to_string(),
            project_id: config.project_id.clone(),
            private_token: config.private_token.clone(),
            branch: config.branch.clone(),
        })
    }

    fn project_url(&self) -> String {
        format!(
            "{}/api/v4/projects/{}",
            self.endpoint,
            urlencoding::encode(&self.project_id)
        )
    }

    pub fn file_url(&self, file_path: &str) -> String {
        format!(
            "{}/repository/files/{}?ref={}",
            self.project_url(),
            urlencoding::encode(file_path),
            urlencoding::encode(&self.branch)
        )
    }

    pub fn commits_url(&self) -> String {
        format!("{}/repository/commits", self.project_url())
    }

    fn token(&self) -> Result<HeaderValue> {
        HeaderValue::from_str(&self.private_token)
            .map_err(|_| ArbyError::UnexpectedResponse("private token is not a valid header".into()))
    }

    async fn try_fetch_file(&self, file_path: &str) -> Result<String> {
        let response = self
            .client
            .get(self.file_url(file_path))
            .header(TOKEN_HEADER, self.token()?)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ArbyError::UnexpectedResponse(error_message(response).await));
        }

        let body: FileResponse = response.json().await?;
        body.decode()
    }
}

impl FileStore for GitLabClient {
    async fn fetch_file(&self, file_path: &str) -> Option<String> {
        match self.try_fetch_file(file_path).await {
            Ok(content) => {
                debug!(file_path, bytes = content.len(), "fetched file");
                Some(content)
            }
            Err(e) => {
                warn!(file_path, error = %e, "failed to fetch file");
                None
            }
        }
    }

    async fn commit_files(&self, message: &str, updates: &[FileUpdate]) -> Result<CommitSummary> {
        let request = CommitRequest {
            branch: self.branch.clone(),
            commit_message: message.to_string(),
            actions: updates.iter().map(CommitAction::from).collect(),
        };

        let response = self
            .client
            .post(self.commits_url())
            .header(TOKEN_HEADER, self.token()?)
            .json(&request)
            .send()
            .await
            .map_err(|e| ArbyError::Commit(format!("Error updating files: {e}")))?;

        if !response.status().is_success() {
            return Err(ArbyError::Commit(error_message(response).await));
        }

        let body: CommitResponse = response.json().await?;
        debug!(commit = %body.id, "files updated in one commit");
        Ok(CommitSummary {
            id: body.id,
            web_url: body.web_url,
        })
    }
}

/// Best-effort message from a failed response, falling back to the status line.
async fn error_message(response: Response) -> String {
    let status = response.status();
    response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| status.to_string())
}
