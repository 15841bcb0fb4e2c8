use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    core::FileUpdate,
    error::{ArbyError, Result},
};

/// Body of `GET /projects/:id/repository/files/:file_path`.
#[derive(Debug, Clone, Deserialize)]
pub struct FileResponse {
    pub content: String,
    #[serde(default)]
    pub encoding: Option<String>,
}

impl FileResponse {
    /// Decode the file content to UTF-8 text.
    pub fn decode(&self) -> Result<String> {
        match self.encoding.as_deref() {
            Some("base64") | None => {
                let compact: String = self
                    .content
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                let bytes = STANDARD
                    .decode(compact)
                    .map_err(|e| ArbyError::UnexpectedResponse(format!("invalid base64: {e}")))?;
                String::from_utf8(bytes)
                    .map_err(|e| ArbyError::UnexpectedResponse(format!("invalid UTF-8: {e}")))
            }
            Some("text") => Ok(self.content.clone()),
            Some(other) => Err(ArbyError::UnexpectedResponse(format!(
                "unsupported encoding \"{other}\""
            ))),
        }
    }
}

/// One entry of `actions` in a commit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitAction {
    pub action: &'static str,
    pub file_path: String,
    pub content: String,
}

impl From<&FileUpdate> for CommitAction {
    fn from(update: &FileUpdate) -> Self {
        Self {
            action: "update",
            file_path: update.file_path.clone(),
            content: update.content.clone(),
        }
    }
}

/// Body of `POST /projects/:id/repository/commits`.
#[derive(Debug, Clone, Serialize)]
pub struct CommitRequest {
    pub branch: String,
    pub commit_message: String,
    pub actions: Vec<CommitAction>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommitResponse {
    pub id: String,
    #[serde(default)]
    pub web_url: Option<String>,
}

/// Error body returned by GitLab. `message` is a string or a structured value.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        match self.message {
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
            None => self.error,
        }
    }
}
