// File: src/lib.rs
// Purpose: Router and handlers for the sign-up page

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Form, Router,
};
use signup_form::{
    render_field_fragment, render_form, render_page, validate, Config, ErrorMap, Field, FieldEvent,
    FormController, FormValues, SubmitOutcome,
};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// A fresh controller per request, configured with the trigger modes
    fn controller(&self) -> FormController {
        FormController::new(self.config.form.mode, self.config.form.revalidate_mode)
    }
}

/// Build the application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler).post(submit_handler))
        .route("/field/:name", post(field_event_handler))
        .route("/validate", post(validate_handler))
        .route("/health", get(|| async { "ok" }))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Consumer of validated submissions
pub fn log_submission(values: &FormValues) {
    tracing::info!(
        first_name = %values.first_name,
        last_name = %values.last_name,
        email = %values.email,
        password_len = values.password.chars().count(),
        "sign-up submitted"
    );
}

/// HTMX requests get the `<form>` fragment instead of the full page
fn wants_partial(headers: &HeaderMap) -> bool {
    headers.contains_key("hx-request") || headers.contains_key("x-partial")
}

fn render(form: &FormController, partial: bool) -> Html<String> {
    let markup = if partial {
        render_form(form)
    } else {
        render_page(form)
    };
    Html(markup.into_string())
}

async fn index_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render(&state.controller(), wants_partial(&headers)).into_response()
}

async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(values): Form<FormValues>,
) -> Response {
    let partial = wants_partial(&headers);
    let mut form = state.controller().with_values(values);

    match form.handle_submit(log_submission) {
        SubmitOutcome::Submitted => {
            form.reset();
            (StatusCode::OK, render(&form, partial)).into_response()
        }
        SubmitOutcome::Rejected(_) => {
            (StatusCode::UNPROCESSABLE_ENTITY, render(&form, partial)).into_response()
        }
    }
}

/// Field event posted by an `hx-trigger` on one input.
///
/// The body carries the form's values plus `_event` (DOM event type),
/// `_touched` and `_submit_count` so the controller can be rebuilt in the
/// same state the page was rendered from.
async fn field_event_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Form(body): Form<HashMap<String, String>>,
) -> Response {
    let field: Field = match name.parse() {
        Ok(field) => field,
        Err(err) => {
            tracing::debug!("{}", err);
            return not_found().await;
        }
    };
    let Some(event) = body.get("_event").and_then(|e| FieldEvent::from_dom_event(e)) else {
        return (StatusCode::BAD_REQUEST, "Unknown or missing field event").into_response();
    };

    let mut values = FormValues::default();
    for f in Field::ALL {
        if let Some(value) = body.get(f.name()) {
            values.set(f, value.as_str());
        }
    }
    let value = values.get(field).to_string();
    let touched = body.get("_touched").is_some_and(|t| t == "true");
    let submit_count = body
        .get("_submit_count")
        .and_then(|n| n.parse().ok())
        .unwrap_or(0);

    let mut form = state
        .controller()
        .with_values(values)
        .with_history(touched.then_some(field), submit_count);
    form.handle_event(field, event, value);

    Html(render_field_fragment(&form, field).into_string()).into_response()
}

/// Validate without submitting; answers with the error map
async fn validate_handler(Json(values): Json<FormValues>) -> Json<ErrorMap> {
    Json(validate(&values))
}

async fn not_found() -> Response {
    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title}</title></head>
<body>
  <h1>{status} {title}</h1>
  <a href="/">Go to sign-up</a>
</body>
</html>"#,
        status = 404,
        title = "Page Not Found"
    );
    (StatusCode::NOT_FOUND, Html(html)).into_response()
}
