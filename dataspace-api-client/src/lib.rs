use std::fmt;
use std::sync::Arc;

use dataspace_api_schema::{
    workspace::list::{WorkspaceListQuery, WorkspaceListResponse},
    CreateTarget, HttpMethod, MutationRequest, MutationTarget,
};
use dataspace_common::credentials::CredentialProvider;
use dataspace_modal::{MutationFailure, MutationTransport};

#[derive(Clone)]
pub struct DataspaceApiClient {
    pub base_url: String,
    credentials: Arc<dyn CredentialProvider + Send + Sync>,
}

#[derive(Debug)]
pub enum DataspaceApiClientError {
    Status(u16),
    Ureq(Box<ureq::Error>),
    IO(Box<std::io::Error>),
}

impl fmt::Display for DataspaceApiClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataspaceApiClientError::Status(status) => write!(f, "unexpected status {}", status),
            DataspaceApiClientError::Ureq(e) => write!(f, "{}", e),
            DataspaceApiClientError::IO(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for DataspaceApiClientError {}

impl From<DataspaceApiClientError> for MutationFailure {
    fn from(e: DataspaceApiClientError) -> Self {
        match e {
            DataspaceApiClientError::Status(status) => MutationFailure::HttpStatus { status },
            other => MutationFailure::Transport {
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Debug for DataspaceApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataspaceApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl DataspaceApiClient {
    pub fn new(
        base_url: String,
        credentials: Arc<dyn CredentialProvider + Send + Sync>,
    ) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            credentials,
        }
    }

    /// Sends one mutation. Only a 200 counts as success.
    pub fn send(&self, request: &MutationRequest) -> Result<(), DataspaceApiClientError> {
        let url = request.url(&self.base_url);
        let authorization = self.credentials.authorization_header();
        let res = match request.method {
            HttpMethod::Delete => {
                let mut req = ureq::delete(&url).set("Authorization", &authorization);
                for (key, value) in &request.identifiers {
                    req = req.query(key, value);
                }
                req.call()
            }
            HttpMethod::Post => ureq::post(&url)
                .set("Authorization", &authorization)
                .send_json(request.json_body()),
        };
        match res {
            Ok(res) if res.status() == 200 => Ok(()),
            Ok(res) => Err(DataspaceApiClientError::Status(res.status())),
            Err(ureq::Error::Status(status, _)) => Err(DataspaceApiClientError::Status(status)),
            Err(e) => Err(DataspaceApiClientError::Ureq(Box::new(e))),
        }
    }

    pub fn create_workspace(
        &self,
        user_email: &str,
        work_space: &str,
    ) -> Result<(), DataspaceApiClientError> {
        let target = CreateTarget::Workspace {
            user_email: user_email.to_string(),
        };
        self.send(&MutationRequest::create(&target, work_space))
    }

    pub fn create_folder(
        &self,
        user_email: &str,
        work_space: &str,
        folder_name: &str,
    ) -> Result<(), DataspaceApiClientError> {
        let target = CreateTarget::Folder {
            user_email: user_email.to_string(),
            work_space: work_space.to_string(),
        };
        self.send(&MutationRequest::create(&target, folder_name))
    }

    pub fn delete(&self, target: &MutationTarget) -> Result<(), DataspaceApiClientError> {
        self.send(&MutationRequest::delete(target))
    }

    pub fn list_workspaces(
        &self,
        query: WorkspaceListQuery,
    ) -> Result<WorkspaceListResponse, DataspaceApiClientError> {
        let url = format!("{}/workspace", self.base_url);
        let list_res: WorkspaceListResponse = ureq::get(&url)
            .set("Authorization", &self.credentials.authorization_header())
            .query("userEmail", &query.user_email)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(status, _) => DataspaceApiClientError::Status(status),
                e => DataspaceApiClientError::Ureq(Box::new(e)),
            })?
            .into_json()
            .map_err(|e| DataspaceApiClientError::IO(Box::new(e)))?;
        Ok(list_res)
    }
}

impl MutationTransport for DataspaceApiClient {
    fn execute(&self, request: &MutationRequest) -> Result<(), MutationFailure> {
        self.send(request).map_err(|e| {
            log::debug!("{} {} -> {:?}", request.method, request.url(&self.base_url), e);
            MutationFailure::from(e)
        })
    }
}
