use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Extension, Path, rejection::FormRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;

use barstock_inventory::ALL_CATEGORIES;

use crate::app::services::AppServices;
use crate::app::{dto, errors, flash, pages};

pub fn router() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/category/:name", get(category_view))
        .route("/add_item", post(add_item))
        .route("/edit_item/:id", get(edit_item))
        .route("/update_item/:id", post(update_item))
        .route("/delete_item/:id", post(delete_item))
}

pub async fn index(Extension(services): Extension<Arc<AppServices>>, jar: CookieJar) -> Response {
    match services.list_all().await {
        Ok(items) => render_list(jar, &items, ALL_CATEGORIES),
        Err(e) => errors::service_error_to_page(e),
    }
}

pub async fn category_view(
    Extension(services): Extension<Arc<AppServices>>,
    Path(name): Path<String>,
    jar: CookieJar,
) -> Response {
    match services.list_by_category(&name).await {
        Ok(items) => render_list(jar, &items, &name),
        Err(e) => errors::service_error_to_page(e),
    }
}

fn render_list(jar: CookieJar, items: &[barstock_inventory::Item], current: &str) -> Response {
    let (jar, notice) = flash::take(jar);
    (jar, Html(pages::index_page(items, current, notice.as_ref()))).into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    jar: CookieJar,
    form: Result<Form<dto::ItemForm>, FormRejection>,
) -> Response {
    let Form(form) = match form {
        Ok(v) => v,
        Err(rejection) => return errors::form_rejection_to_redirect(jar, rejection),
    };

    match services.add_item(form.into()).await {
        Ok((_item, notice)) => (flash::set(jar, &notice), Redirect::to("/")).into_response(),
        Err(e) => errors::service_error_to_redirect(jar, e),
    }
}

pub async fn edit_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(_) => return errors::not_found(),
    };

    match services.get_item(id).await {
        Ok(item) => Html(pages::edit_page(&item)).into_response(),
        Err(e) => errors::service_error_to_page(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    jar: CookieJar,
    form: Result<Form<dto::ItemForm>, FormRejection>,
) -> Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_redirect(jar, e),
    };
    let Form(form) = match form {
        Ok(v) => v,
        Err(rejection) => return errors::form_rejection_to_redirect(jar, rejection),
    };

    match services.update_item(id, form.into()).await {
        Ok((_item, notice)) => (flash::set(jar, &notice), Redirect::to("/")).into_response(),
        Err(e) => errors::service_error_to_redirect(jar, e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    jar: CookieJar,
) -> Response {
    let id = match dto::parse_item_id(&id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_redirect(jar, e),
    };

    match services.delete_item(id).await {
        Ok(Some(notice)) => (flash::set(jar, &notice), Redirect::to("/")).into_response(),
        Ok(None) => Redirect::to("/").into_response(),
        Err(e) => errors::service_error_to_redirect(jar, e),
    }
}
