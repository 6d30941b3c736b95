use axum::{http::StatusCode, response::Html};

use crate::app::pages;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn info() -> Html<String> {
    Html(pages::info_page())
}
