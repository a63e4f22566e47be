use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::web::Bytes;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures::stream;
use rand::{distributions::Alphanumeric, Rng};
use serde::Deserialize;
use std::convert::Infallible;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::chatbot::application::domain::entities::{ChatQuestion, ChatQuestionError};
use crate::chatbot::application::ports::incoming::use_cases::RelayChatCommand;
use crate::shared::api::ApiResponse;
use crate::shared::client_ip::resolve_client_ip;
use crate::AppState;

pub const SESSION_COOKIE: &str = "chat_session";
const SESSION_KEY_LEN: usize = 32;
const FRAGMENT_BUFFER: usize = 32;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ChatMessageForm {
    /// The visitor's question, at most 1000 characters.
    #[serde(default)]
    pub message: String,
}

fn is_session_key(value: &str) -> bool {
    value.len() == SESSION_KEY_LEN && value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn new_session_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_KEY_LEN)
        .map(char::from)
        .collect()
}

fn session_cookie(key: String) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, key)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

/// Existing key from the cookie, or a fresh one plus the cookie to set.
fn session(req: &HttpRequest) -> (String, Option<Cookie<'static>>) {
    match req.cookie(SESSION_COOKIE) {
        Some(cookie) if is_session_key(cookie.value()) => (cookie.value().to_string(), None),
        _ => {
            let key = new_session_key();
            (key.clone(), Some(session_cookie(key)))
        }
    }
}

fn sse_frame(text: &str) -> Bytes {
    Bytes::from(format!("data: {}\n\n", serde_json::json!({ "text": text })))
}

/// Ask the portfolio assistant
///
/// Form-encoded `message`. The answer streams back as server-sent events,
/// each `data: {"text": "..."}`. A generic apology is streamed when no
/// model is available; the stream itself never errors.
#[utoipa::path(
    post,
    path = "/chatbot-response/",
    tag = "chatbot",
    request_body(content = ChatMessageForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Answer fragments", content_type = "text/event-stream", body = String),
        (status = 400, description = "Empty or overlong message", body = ErrorResponse),
        (status = 429, description = "Too many questions from this address", body = ErrorResponse),
    )
)]
#[post("/chatbot-response/")]
pub async fn chatbot_response_handler(
    req: HttpRequest,
    form: web::Form<ChatMessageForm>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let client_ip = resolve_client_ip(&req, data.site.trust_proxy_headers).to_string();

    match data.chatbot.rate_limiter.hit(&client_ip).await {
        Ok(decision) if !decision.allowed => {
            info!(client_ip = %client_ip, limit = decision.limit, "Chat rate limit exceeded");
            let mut resp = ApiResponse::too_many_requests(
                "RATE_LIMITED",
                "Too many questions. Please wait a minute and try again.",
            );
            if let Ok(value) = header::HeaderValue::from_str(&decision.retry_after_secs.to_string()) {
                resp.headers_mut().insert(header::RETRY_AFTER, value);
            }
            return resp;
        }
        Ok(_) => {}
        Err(e) => warn!(error = %e, "Rate limiter unavailable, allowing request"),
    }

    let question = match ChatQuestion::new(&form.message) {
        Ok(question) => question,
        Err(ChatQuestionError::Empty) => {
            return ApiResponse::bad_request("EMPTY_MESSAGE", "Please type a question.")
        }
        Err(e @ ChatQuestionError::TooLong) => {
            return ApiResponse::bad_request("MESSAGE_TOO_LONG", &e.to_string())
        }
    };

    let (session_key, new_cookie) = session(&req);
    let (tx, rx) = mpsc::channel::<String>(FRAGMENT_BUFFER);

    let relay = data.chatbot.relay.clone();
    let command = RelayChatCommand {
        session_key,
        question,
    };
    actix_web::rt::spawn(async move {
        let outcome = relay.execute(command, tx).await;
        debug!(?outcome, "Chat relay finished");
    });

    let body = stream::unfold(rx, |mut rx| async move {
        rx.recv()
            .await
            .map(|fragment| (Ok::<_, Infallible>(sse_frame(&fragment)), rx))
    });

    let mut resp = HttpResponse::Ok();
    resp.content_type("text/event-stream")
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .insert_header(("X-Accel-Buffering", "no"));
    if let Some(cookie) = new_cookie {
        resp.cookie(cookie);
    }
    resp.streaming(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chatbot::application::ports::incoming::use_cases::{RelayChatUseCase, RelayOutcome};
    use crate::chatbot::application::ports::outgoing::{
        RateLimitDecision, RateLimiter, RateLimiterError,
    };
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct EchoRelay {
        sessions: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl RelayChatUseCase for EchoRelay {
        async fn execute(
            &self,
            command: RelayChatCommand,
            fragments: mpsc::Sender<String>,
        ) -> RelayOutcome {
            self.sessions.lock().unwrap().push(command.session_key);
            for part in ["You asked: ", command.question.as_str()] {
                if fragments.send(part.to_string()).await.is_err() {
                    return RelayOutcome::Disconnected;
                }
            }
            RelayOutcome::Answered {
                model: "gemini-2.0-flash".to_string(),
            }
        }
    }

    struct FixedLimiter(Result<bool, RateLimiterError>);

    #[async_trait]
    impl RateLimiter for FixedLimiter {
        async fn hit(&self, _client_key: &str) -> Result<RateLimitDecision, RateLimiterError> {
            self.0.clone().map(|allowed| RateLimitDecision {
                allowed,
                limit: 10,
                retry_after_secs: 42,
            })
        }
    }

    async fn post(
        relay: EchoRelay,
        limiter: FixedLimiter,
        message: &str,
        cookie: Option<&str>,
    ) -> actix_web::dev::ServiceResponse {
        let state = TestAppStateBuilder::default()
            .with_relay_chat(relay)
            .with_rate_limiter(limiter)
            .build();
        let app = test::init_service(App::new().app_data(state).service(chatbot_response_handler)).await;

        let mut req = test::TestRequest::post()
            .uri("/chatbot-response/")
            .set_form([("message", message)]);
        if let Some(value) = cookie {
            req = req.cookie(Cookie::new(SESSION_COOKIE, value.to_string()));
        }
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn test_streams_fragments_as_sse_frames() {
        let resp = post(EchoRelay::default(), FixedLimiter(Ok(true)), "  Rust?  ", None).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/event-stream"
        );
        assert_eq!(resp.headers().get(header::CACHE_CONTROL).unwrap(), "no-cache");

        let body = test::read_body(resp).await;
        assert_eq!(
            std::str::from_utf8(&body).unwrap(),
            "data: {\"text\":\"You asked: \"}\n\ndata: {\"text\":\"Rust?\"}\n\n"
        );
    }

    #[actix_web::test]
    async fn test_new_visitor_gets_session_cookie() {
        let relay = EchoRelay::default();
        let resp = post(relay.clone(), FixedLimiter(Ok(true)), "Hi", None).await;

        let (key, http_only) = resp
            .response()
            .cookies()
            .find(|c| c.name() == SESSION_COOKIE)
            .map(|c| (c.value().to_string(), c.http_only()))
            .expect("session cookie");
        assert!(is_session_key(&key));
        assert_eq!(http_only, Some(true));

        test::read_body(resp).await;
        assert_eq!(relay.sessions.lock().unwrap()[0], key);
    }

    #[actix_web::test]
    async fn test_existing_session_is_reused() {
        let relay = EchoRelay::default();
        let key = "a".repeat(SESSION_KEY_LEN);

        let resp = post(relay.clone(), FixedLimiter(Ok(true)), "Hi", Some(&key)).await;

        assert!(resp.response().cookies().all(|c| c.name() != SESSION_COOKIE));
        test::read_body(resp).await;
        assert_eq!(*relay.sessions.lock().unwrap(), vec![key]);
    }

    #[actix_web::test]
    async fn test_empty_message_rejected() {
        let resp = post(EchoRelay::default(), FixedLimiter(Ok(true)), "   ", None).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMPTY_MESSAGE");
    }

    #[actix_web::test]
    async fn test_overlong_message_rejected() {
        let long = "x".repeat(1001);
        let resp = post(EchoRelay::default(), FixedLimiter(Ok(true)), &long, None).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MESSAGE_TOO_LONG");
    }

    #[actix_web::test]
    async fn test_rate_limited_client_gets_429() {
        let relay = EchoRelay::default();
        let resp = post(relay.clone(), FixedLimiter(Ok(false)), "Hi", None).await;

        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(resp.headers().get(header::RETRY_AFTER).unwrap(), "42");
        assert!(relay.sessions.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_limiter_failure_fails_open() {
        let resp = post(
            EchoRelay::default(),
            FixedLimiter(Err(RateLimiterError::Backend("redis down".to_string()))),
            "Hi",
            None,
        )
        .await;

        assert_eq!(resp.status(), StatusCode::OK);
    }
}
