//! Post index route

use axum::{Router, extract::State, response::Html, routing::get};
use tracing::debug;

use crate::{AppState, error::Result};

pub fn router() -> Router<AppState> {
    Router::new().route("/blog", get(post_index))
}

/// Render the post index from the provider-supplied site metadata and posts.
async fn post_index(State(state): State<AppState>) -> Result<Html<String>> {
    let site = state.posts.site_info().await?;
    let posts = state.posts.recent_posts().await?;
    debug!("Rendering post index with {} posts", posts.len());

    Ok(Html(hm_site::post_index(&site, &posts).into_string()))
}
