//! One-shot notices carried across a redirect in a `flash` cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use barstock_inventory::{Notice, NoticeKind};

pub const FLASH_COOKIE: &str = "flash";

/// Queue a notice for the next rendered page.
pub fn set(jar: CookieJar, notice: &Notice) -> CookieJar {
    let value = format!("{}:{}", notice.kind.as_str(), notice.text);
    jar.add(base_cookie(value))
}

/// Pop the pending notice, if any. The returned jar clears the cookie.
pub fn take(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(raw) = jar.get(FLASH_COOKIE).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let jar = jar.remove(base_cookie(String::new()));
    (jar, decode(&raw))
}

fn base_cookie(value: String) -> Cookie<'static> {
    Cookie::build((FLASH_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn decode(raw: &str) -> Option<Notice> {
    let (kind, text) = raw.split_once(':')?;
    let kind = match kind {
        "success" => NoticeKind::Success,
        "error" => NoticeKind::Error,
        _ => return None,
    };
    Some(Notice {
        kind,
        text: text.to_string(),
    })
}
