// src/shared/flash.rs

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use serde::Serialize;

pub const FLASH_COOKIE: &str = "flash";

/// One-shot notices carried across a redirect.
///
/// Only a short code travels in the cookie; the text is resolved server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    ContactSent,
    ContactFailed,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlashView {
    pub level: &'static str,
    pub message: &'static str,
}

impl Flash {
    fn code(self) -> &'static str {
        match self {
            Flash::ContactSent => "contact_sent",
            Flash::ContactFailed => "contact_failed",
        }
    }

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "contact_sent" => Some(Flash::ContactSent),
            "contact_failed" => Some(Flash::ContactFailed),
            _ => None,
        }
    }

    pub fn view(self) -> FlashView {
        match self {
            Flash::ContactSent => FlashView {
                level: "success",
                message: "Thank you for your message! I'll get back to you soon.",
            },
            Flash::ContactFailed => FlashView {
                level: "error",
                message: "Sorry, your message could not be sent. Please try again later.",
            },
        }
    }

    pub fn cookie(self) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, self.code())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(Duration::minutes(5))
            .finish()
    }
}

/// Reads the pending flash, if any. Unknown codes are ignored.
pub fn take_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE)
        .and_then(|c| Flash::from_code(c.value()))
}

/// Cookie that clears the flash once it has been shown.
pub fn clear_flash_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_flash_round_trips_through_cookie() {
        let req = TestRequest::default()
            .cookie(Flash::ContactSent.cookie())
            .to_http_request();

        assert_eq!(take_flash(&req), Some(Flash::ContactSent));
    }

    #[test]
    fn test_unknown_flash_code_is_ignored() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "<script>"))
            .to_http_request();

        assert_eq!(take_flash(&req), None);
    }

    #[test]
    fn test_clear_cookie_expires_immediately() {
        let cookie = clear_flash_cookie();
        assert_eq!(cookie.name(), FLASH_COOKIE);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
