use actix_web::{delete, web, HttpRequest, HttpResponse};
use dataspace_api_schema::file::delete::FileDeleteQuery;
use dataspace_remote_system_workspace::FileKey;

use crate::state::{respond, ApiState};

#[delete("/file")]
pub async fn file_delete(
    state: web::Data<ApiState>,
    http_req: HttpRequest,
    query: web::Query<FileDeleteQuery>,
) -> HttpResponse {
    if let Err(res) = state.authorize(&http_req) {
        return res;
    }
    let key = FileKey {
        user_email: query.user_email.clone(),
        workspace_name: query.work_space.clone(),
        folder_name: query.folder_name.clone(),
        file_name: query.file_name.clone(),
    };
    let message = format!("File {} deleted", key.file_name);
    respond(state.workspace_manager.delete_file(&key), message)
}
