use actix_web::{delete, get, http::StatusCode, post, web, HttpRequest, HttpResponse};
use dataspace_api_schema::workspace::{
    create::WorkspaceCreateRequest,
    delete::WorkspaceDeleteQuery,
    list::{
        WorkspaceListQuery, WorkspaceListResponse, WorkspaceListResponseFolder,
        WorkspaceListResponseItem,
    },
};
use dataspace_remote_system_workspace::WorkspaceKey;

use crate::state::{message_response, respond, ApiState};

#[get("/workspace")]
pub async fn workspace_list(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<WorkspaceListQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let workspaces = match state.workspace_manager.get_workspaces(&query.user_email) {
        Ok(workspaces) => workspaces,
        Err(e) => return message_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    let res = WorkspaceListResponse {
        workspaces: workspaces
            .into_iter()
            .map(|item| WorkspaceListResponseItem {
                name: item.workspace_name,
                folders: item
                    .folders
                    .into_iter()
                    .map(|folder| WorkspaceListResponseFolder {
                        name: folder.folder_name,
                        files: folder.files,
                    })
                    .collect(),
                cleaned_folders: item.cleaned_folders,
                has_cleaned_data: item.has_cleaned_data,
            })
            .collect(),
    };
    HttpResponse::Ok().json(res)
}

#[post("/workspace")]
pub async fn workspace_create(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    req: web::Json<WorkspaceCreateRequest>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = WorkspaceKey {
        user_email: req.user_email.clone(),
        workspace_name: req.work_space.trim().to_string(),
    };
    let message = format!("Workspace {} created", key.workspace_name);
    respond(state.workspace_manager.create_workspace(&key), message)
}

#[delete("/workspace")]
pub async fn workspace_delete(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<WorkspaceDeleteQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = WorkspaceKey {
        user_email: query.user_email.clone(),
        workspace_name: query.work_space.clone(),
    };
    let message = format!("Workspace {} deleted", key.workspace_name);
    respond(state.workspace_manager.delete_workspace(&key), message)
}
