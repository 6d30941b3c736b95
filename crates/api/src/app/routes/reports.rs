use std::sync::Arc;

use axum::{
    Router,
    extract::Extension,
    http::header,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use barstock_infra::{CSV_CONTENT_TYPE, CSV_FILE_NAME};

use crate::app::services::AppServices;
use crate::app::{errors, pages};

pub fn router() -> Router {
    Router::new()
        .route("/visualize_data", get(visualize_data))
        .route("/download_csv", get(download_csv))
}

pub async fn visualize_data(Extension(services): Extension<Arc<AppServices>>) -> Response {
    match services.list_all().await {
        Ok(items) => Html(pages::visualize_page(&items)).into_response(),
        Err(e) => errors::service_error_to_page(e),
    }
}

pub async fn download_csv(Extension(services): Extension<Arc<AppServices>>) -> Response {
    let body = match services.export_csv().await {
        Ok(v) => v,
        Err(e) => return errors::service_error_to_page(e),
    };

    (
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response()
}
