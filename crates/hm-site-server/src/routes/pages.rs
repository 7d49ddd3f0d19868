//! Static page routes

use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::AppState;

/// The single stylesheet asset registered by the theme
const STYLESHEET: &str = include_str!("../../assets/style.css");

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(front_page))
        .route("/wspolpraca", get(partnership_page))
        .route("/style.css", get(stylesheet))
}

async fn front_page() -> Html<String> {
    Html(hm_site::front_page().into_string())
}

async fn partnership_page() -> Html<String> {
    Html(hm_site::partnership_page().into_string())
}

/// Serve the registered theme stylesheet, versioned for cache busting.
async fn stylesheet(State(state): State<AppState>) -> impl IntoResponse {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/css; charset=utf-8".to_string(),
            ),
            (
                header::ETAG,
                format!("\"{}\"", state.theme.stylesheet.version),
            ),
        ],
        STYLESHEET,
    )
}
