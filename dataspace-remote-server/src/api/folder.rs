use actix_web::{delete, post, web, HttpRequest, HttpResponse};
use dataspace_api_schema::folder::{create::FolderCreateRequest, delete::FolderDeleteQuery};
use dataspace_remote_system_workspace::FolderKey;

use crate::state::{respond, ApiState};

#[post("/folder")]
pub async fn folder_create(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    req: web::Json<FolderCreateRequest>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = FolderKey {
        user_email: req.user_email.clone(),
        workspace_name: req.work_space.clone(),
        folder_name: req.folder_name.trim().to_string(),
    };
    let message = format!("Folder {} created", key.folder_name);
    respond(state.workspace_manager.create_folder(&key), message)
}

#[delete("/folder")]
pub async fn folder_delete(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<FolderDeleteQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = FolderKey {
        user_email: query.user_email.clone(),
        workspace_name: query.work_space.clone(),
        folder_name: query.folder_name.clone(),
    };
    let message = format!("Folder {} deleted", key.folder_name);
    respond(state.workspace_manager.delete_folder(&key), message)
}
