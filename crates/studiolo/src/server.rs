use anyhow::Result;
use axum::extract::{Form, Path, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::html;
use crate::planner::Planner;
use crate::types::{Assignment, AssignmentId, Class, ClassId};

/// Application state shared across requests
pub struct AppState {
    pub planner: RwLock<Planner>,
}

/// Start the web server with an empty planner
pub async fn serve(port: u16) -> Result<()> {
    let state = Arc::new(AppState {
        planner: RwLock::new(Planner::new()),
    });

    let app = router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!(%addr, "Server running");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/classes/add", post(add_class_handler))
        .route("/classes/{id}/delete", post(delete_class_handler))
        .route("/assignments/add", post(add_assignment_handler))
        .route("/assignments/{id}/toggle", post(toggle_assignment_handler))
        .route("/assignments/{id}/delete", post(delete_assignment_handler))
        .route("/api/classes", get(classes_handler))
        .route("/api/assignments", get(assignments_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the main HTML page, rendered from the current state
async fn index_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let planner = state.planner.read().await;
    let markup = html::render_page(&planner, Local::now().date_naive());
    Html(markup.into_string())
}

#[derive(Deserialize)]
struct ClassForm {
    name: String,
}

async fn add_class_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ClassForm>,
) -> Redirect {
    let mut planner = state.planner.write().await;
    match planner.add_class(&form.name) {
        Some(id) => info!(%id, name = %form.name.trim(), "Class added"),
        None => debug!("Ignored class with blank name"),
    }
    Redirect::to("/")
}

async fn delete_class_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    match id.parse::<ClassId>() {
        Ok(id) => {
            let mut planner = state.planner.write().await;
            if planner.delete_class(id) {
                info!(%id, "Class deleted");
            } else {
                debug!(%id, "Ignored delete of unknown class");
            }
        }
        Err(_) => debug!(id = %id, "Ignored delete with unparseable class id"),
    }
    Redirect::to("/")
}

#[derive(Deserialize)]
struct AssignmentForm {
    name: String,
    due: String,
    class: String,
}

async fn add_assignment_handler(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AssignmentForm>,
) -> Redirect {
    // The date input submits YYYY-MM-DD; anything else (including an empty
    // field) is treated as a missing field and dropped.
    let due = NaiveDate::parse_from_str(&form.due, "%Y-%m-%d");
    let class_id = form.class.parse::<ClassId>();

    match (due, class_id) {
        (Ok(due), Ok(class_id)) => {
            let mut planner = state.planner.write().await;
            match planner.add_assignment(&form.name, due, class_id) {
                Some(id) => {
                    info!(%id, name = %form.name.trim(), %due, "Assignment added")
                }
                None => debug!("Ignored assignment with blank name or unknown class"),
            }
        }
        _ => debug!(
            due = %form.due,
            class = %form.class,
            "Ignored assignment with missing fields"
        ),
    }
    Redirect::to("/")
}

async fn toggle_assignment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    match id.parse::<AssignmentId>() {
        Ok(id) => {
            let mut planner = state.planner.write().await;
            if planner.toggle_assignment(id) {
                info!(%id, "Assignment toggled");
            } else {
                debug!(%id, "Ignored toggle of unknown assignment");
            }
        }
        Err(_) => debug!(id = %id, "Ignored toggle with unparseable assignment id"),
    }
    Redirect::to("/")
}

async fn delete_assignment_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Redirect {
    match id.parse::<AssignmentId>() {
        Ok(id) => {
            let mut planner = state.planner.write().await;
            if planner.delete_assignment(id) {
                info!(%id, "Assignment deleted");
            } else {
                debug!(%id, "Ignored delete of unknown assignment");
            }
        }
        Err(_) => debug!(id = %id, "Ignored delete with unparseable assignment id"),
    }
    Redirect::to("/")
}

/// Return classes as JSON
async fn classes_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Class>> {
    let planner = state.planner.read().await;
    Json(planner.classes().to_vec())
}

/// Return assignments as JSON
async fn assignments_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Assignment>> {
    let planner = state.planner.read().await;
    Json(planner.assignments().to_vec())
}
