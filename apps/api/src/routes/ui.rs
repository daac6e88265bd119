use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
/// The recruiter form: job description, resume upload, one button per analysis.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
