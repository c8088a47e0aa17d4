use actix_web::{delete, web, HttpRequest, HttpResponse};
use dataspace_api_schema::cleaned_workspace::delete::CleanedWorkspaceDeleteQuery;
use dataspace_remote_system_workspace::WorkspaceKey;

use crate::state::{respond, ApiState};

#[delete("/cleaned_workspace")]
pub async fn cleaned_workspace_delete(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<CleanedWorkspaceDeleteQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = WorkspaceKey {
        user_email: query.user_email.clone(),
        workspace_name: query.work_space.clone(),
    };
    let message = format!("Cleaned workspace {} deleted", key.workspace_name);
    respond(state.workspace_manager.delete_cleaned_workspace(&key), message)
}
