use axum::{extract::State, response::Html};

use crate::http::server::AppState;

/// `GET /admin/metrics`: fileserver hit count as an HTML page.
pub async fn get_metrics(State(state): State<AppState>) -> Html<String> {
    Html(render_metrics(state.hits.read()))
}

/// `POST /admin/reset`: zero the fileserver hit count.
pub async fn reset_metrics(State(state): State<AppState>) -> &'static str {
    let previous = state.hits.read();
    state.hits.reset();
    tracing::info!(previous_hits = previous, "Fileserver hits reset");
    "OK"
}

fn render_metrics(hits: u64) -> String {
    format!(
        r#"<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>
"#,
        hits
    )
}
