use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Extension, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use crate::app::services::AppServices;
use crate::app::{dto, errors, flash, pages};

pub fn router() -> Router {
    Router::new()
        .route("/order_list", get(order_list))
        .route("/submit_order", post(submit_order))
}

pub async fn order_list(
    Extension(services): Extension<Arc<AppServices>>,
    jar: CookieJar,
) -> Response {
    match services.list_all().await {
        Ok(items) => {
            let (jar, notice) = flash::take(jar);
            (jar, Html(pages::order_page(&items, notice.as_ref()))).into_response()
        }
        Err(e) => errors::service_error_to_page(e),
    }
}

/// The untyped form is converted to an `OrderRequest` here, once.
pub async fn submit_order(
    Extension(services): Extension<Arc<AppServices>>,
    jar: CookieJar,
    form: Result<Form<dto::OrderForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(v) => v,
        Err(rejection) => return errors::form_rejection_to_redirect(jar, rejection),
    };
    let order = match dto::order_request(form) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_redirect(jar, e),
    };

    match services.submit_order(&order).await {
        Ok(notice) => (flash::set(jar, &notice), Redirect::to("/")).into_response(),
        Err(e) => errors::service_error_to_redirect(jar, e),
    }
}
