use actix_web::{http::StatusCode, HttpRequest, HttpResponse};
use dataspace_api_schema::MutationResponse;
use dataspace_remote_system_workspace::{Error, RemoteSystemWorkspaceManager};

#[derive(Debug, Clone)]
pub struct ApiState {
    pub workspace_manager: RemoteSystemWorkspaceManager,
    token: String,
}

impl ApiState {
    pub fn new(workspace_manager: RemoteSystemWorkspaceManager, token: String) -> Self {
        Self {
            workspace_manager,
            token,
        }
    }

    /// Rejects requests whose `Authorization` header is not `Bearer <token>`.
    pub fn authorize(&self, req: &HttpRequest) -> Result<(), HttpResponse> {
        let expected = format!("Bearer {}", self.token);
        let given = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok());
        if given == Some(expected.as_str()) {
            Ok(())
        } else {
            log::warn!("rejected {} {}: bad credentials", req.method(), req.path());
            Err(message_response(StatusCode::UNAUTHORIZED, "unauthorized"))
        }
    }
}

pub fn message_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(MutationResponse {
        message: message.into(),
    })
}

/// 200 with `message`, or the status matching the store error.
pub fn respond(result: Result<(), Error>, message: String) -> HttpResponse {
    match result {
        Ok(()) => message_response(StatusCode::OK, message),
        Err(e) => {
            let status = match e {
                Error::EmptyName => StatusCode::BAD_REQUEST,
                Error::WorkspaceAlreadyExists | Error::FolderAlreadyExists => StatusCode::CONFLICT,
                Error::WorkspaceNotFound
                | Error::FolderNotFound
                | Error::FileNotFound
                | Error::CleanedFolderNotFound
                | Error::CleanedWorkspaceNotFound => StatusCode::NOT_FOUND,
                Error::Poisoned => StatusCode::INTERNAL_SERVER_ERROR,
            };
            log::info!("request failed with {}: {}", status, e);
            message_response(status, e.to_string())
        }
    }
}
