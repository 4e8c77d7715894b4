use actix_web::{web, HttpResponse, Responder};
use uuid::Uuid;

use crate::models::{ErrorResponse, SavedResponse, SavedStatusResponse, SessionResponse};
use crate::routes::AppState;
use crate::services::BookmarkError;

/// Configure bookmark session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/sessions", web::post().to(open_session))
        .route("/sessions/{session_id}", web::delete().to(close_session))
        .route("/sessions/{session_id}/saved", web::get().to(list_saved))
        .route("/sessions/{session_id}/saved/{internship_id}", web::get().to(saved_status))
        .route("/sessions/{session_id}/saved/{internship_id}", web::put().to(save_internship))
        .route("/sessions/{session_id}/saved/{internship_id}", web::delete().to(unsave_internship));
}

fn session_not_found(e: BookmarkError) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "Session not found".to_string(),
        message: e.to_string(),
        status_code: 404,
    })
}

async fn saved_response(state: &AppState, session_id: Uuid) -> HttpResponse {
    match state.bookmarks.saved(session_id).await {
        Ok(saved) => HttpResponse::Ok().json(SavedResponse {
            session_id,
            count: saved.len(),
            saved,
        }),
        Err(e) => session_not_found(e),
    }
}

/// POST /sessions
async fn open_session(state: web::Data<AppState>) -> impl Responder {
    let session_id = state.bookmarks.open_session().await;
    tracing::info!("Opened session {}", session_id);
    HttpResponse::Created().json(SessionResponse { session_id })
}

/// DELETE /sessions/{session_id}
async fn close_session(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let session_id = path.into_inner();

    match state.bookmarks.close_session(session_id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => session_not_found(e),
    }
}

/// GET /sessions/{session_id}/saved
async fn list_saved(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    saved_response(&state, path.into_inner()).await
}

/// GET /sessions/{session_id}/saved/{internship_id}
async fn saved_status(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (session_id, internship_id) = path.into_inner();

    match state.bookmarks.is_saved(session_id, &internship_id).await {
        Ok(saved) => HttpResponse::Ok().json(SavedStatusResponse {
            session_id,
            internship_id,
            saved,
        }),
        Err(e) => session_not_found(e),
    }
}

/// Save an internship to the session
///
/// PUT /sessions/{session_id}/saved/{internship_id}
///
/// Saving twice is a no-op. Unknown internships are rejected.
async fn save_internship(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (session_id, internship_id) = path.into_inner();

    match state.catalog.find(&internship_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Internship not found".to_string(),
                message: format!("No internship with id {}", internship_id),
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("Failed to look up internship {}: {}", internship_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load catalog".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    match state.bookmarks.save(session_id, &internship_id).await {
        Ok(added) => {
            tracing::debug!("Session {} saved {} (new: {})", session_id, internship_id, added);
            saved_response(&state, session_id).await
        }
        Err(e) => session_not_found(e),
    }
}

/// DELETE /sessions/{session_id}/saved/{internship_id}
async fn unsave_internship(
    state: web::Data<AppState>,
    path: web::Path<(Uuid, String)>,
) -> impl Responder {
    let (session_id, internship_id) = path.into_inner();

    match state.bookmarks.unsave(session_id, &internship_id).await {
        Ok(removed) => {
            tracing::debug!("Session {} unsaved {} (removed: {})", session_id, internship_id, removed);
            saved_response(&state, session_id).await
        }
        Err(e) => session_not_found(e),
    }
}
