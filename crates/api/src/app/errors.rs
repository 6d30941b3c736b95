//! Consistent error responses.
//!
//! Domain failures on mutating routes are recovered here: the user gets an
//! error notice and a redirect back to the inventory list. Storage failures
//! become a 500 page.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use barstock_core::DomainError;
use barstock_inventory::Notice;

use crate::app::flash;
use crate::app::pages;
use crate::app::services::ServiceError;

/// Map a failed mutation to flash + redirect (domain) or a 500 page (store).
pub fn service_error_to_redirect(jar: CookieJar, err: ServiceError) -> Response {
    match err {
        ServiceError::Domain(e) => domain_error_to_redirect(jar, e),
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "storage failure");
            internal_error()
        }
    }
}

pub fn domain_error_to_redirect(jar: CookieJar, err: DomainError) -> Response {
    tracing::warn!(error = %err, "request rejected");
    let notice = Notice::error(user_message(&err));
    (flash::set(jar, &notice), Redirect::to("/")).into_response()
}

/// An undecodable form body (e.g. a missing field) is a validation failure.
pub fn form_rejection_to_redirect(jar: CookieJar, rejection: FormRejection) -> Response {
    domain_error_to_redirect(jar, DomainError::validation(rejection.body_text()))
}

/// Map a failed read to a 404 page (domain) or a 500 page (store).
pub fn service_error_to_page(err: ServiceError) -> Response {
    match err {
        ServiceError::Domain(DomainError::NotFound) => not_found(),
        ServiceError::Domain(e) => {
            tracing::warn!(error = %e, "request rejected");
            not_found()
        }
        ServiceError::Store(e) => {
            tracing::error!(error = %e, "storage failure");
            internal_error()
        }
    }
}

pub fn not_found() -> Response {
    html_error(StatusCode::NOT_FOUND, "Item not found", "The requested item does not exist.")
}

pub fn internal_error() -> Response {
    html_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Something went wrong",
        "The inventory database could not be reached. Please try again.",
    )
}

pub fn html_error(status: StatusCode, title: &str, message: &str) -> Response {
    (status, Html(pages::error_page(title, message))).into_response()
}

fn user_message(err: &DomainError) -> String {
    match err {
        DomainError::Validation(msg) => format!("Invalid input: {msg}."),
        DomainError::InvalidId(_) => "Invalid item id.".to_string(),
        DomainError::NotFound => "Item not found.".to_string(),
    }
}
