use dataspace_api_schema::{workspace::list::WorkspaceListResponse, HttpMethod, MutationRequest};
use dataspace_common::credentials::CredentialProvider;
use dataspace_modal::MutationFailure;
use gloo_net::http::Request;

use crate::session::Session;

/// Browser counterpart of the blocking client: one fetch, 200 or failure.
pub async fn send(session: &Session, request: &MutationRequest) -> Result<(), MutationFailure> {
    let url = request.url(&session.base_url);
    let authorization = session.credentials.authorization_header();
    let res = match request.method {
        HttpMethod::Delete => {
            Request::delete(&url)
                .header("Authorization", &authorization)
                .query(
                    request
                        .identifiers
                        .iter()
                        .map(|(key, value)| (*key, value.as_str())),
                )
                .send()
                .await
        }
        HttpMethod::Post => {
            let req = Request::post(&url)
                .header("Authorization", &authorization)
                .json(&request.json_body())
                .map_err(|e| MutationFailure::Transport {
                    message: e.to_string(),
                })?;
            req.send().await
        }
    };
    match res {
        Ok(res) if res.status() == 200 => Ok(()),
        Ok(res) => Err(MutationFailure::HttpStatus {
            status: res.status(),
        }),
        Err(e) => Err(MutationFailure::Transport {
            message: e.to_string(),
        }),
    }
}

pub async fn fetch_workspaces(session: &Session) -> Result<WorkspaceListResponse, String> {
    let url = format!("{}/workspace", session.base_url);
    let res = Request::get(&url)
        .header("Authorization", &session.credentials.authorization_header())
        .query([("userEmail", session.user_email.as_str())])
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if res.status() != 200 {
        return Err(format!("unexpected status {}", res.status()));
    }
    res.json::<WorkspaceListResponse>()
        .await
        .map_err(|e| e.to_string())
}
