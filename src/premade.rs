//! Premade constructors, one per catalog status.
//!
//! `Response::not_found()` is [`Response::new`]`(Status::NotFound)` with
//! the reading out loud removed. Every catalog code gets one, grouped by
//! class, so call sites say what they mean and the catalog stays the
//! single place that knows which codes exist.
//!
//! ```rust
//! use canned::Response;
//!
//! let response = Response::service_unavailable().with_cause("database is draining");
//! assert_eq!(response.status_code().code(), 503);
//! ```

use crate::response::Response;
use crate::status::Status;

// ── 1xx informational ─────────────────────────────────────────────────────────

impl Response {
    /// 100 Continue. Trailing underscore because `continue` is a keyword.
    pub fn continue_() -> Self {
        Self::new(Status::Continue)
    }

    /// 101 Switching Protocols.
    pub fn switching_protocols() -> Self {
        Self::new(Status::SwitchingProtocols)
    }

    /// 102 Processing.
    pub fn processing() -> Self {
        Self::new(Status::Processing)
    }

    /// 103 Early Hints.
    pub fn early_hints() -> Self {
        Self::new(Status::EarlyHints)
    }
}

// ── 2xx success ───────────────────────────────────────────────────────────────

impl Response {
    /// 200 OK.
    pub fn ok() -> Self {
        Self::new(Status::Ok)
    }

    /// 201 Created.
    pub fn created() -> Self {
        Self::new(Status::Created)
    }

    /// 202 Accepted.
    pub fn accepted() -> Self {
        Self::new(Status::Accepted)
    }

    /// 203 Non-Authoritative Information.
    pub fn non_authoritative_information() -> Self {
        Self::new(Status::NonAuthoritativeInformation)
    }

    /// 204 No Content. The response entity still describes the outcome
    /// even when the framework sends an empty body for this code.
    pub fn no_content() -> Self {
        Self::new(Status::NoContent)
    }

    /// 205 Reset Content.
    pub fn reset_content() -> Self {
        Self::new(Status::ResetContent)
    }

    /// 206 Partial Content.
    pub fn partial_content() -> Self {
        Self::new(Status::PartialContent)
    }

    /// 207 Multi-Status.
    pub fn multi_status() -> Self {
        Self::new(Status::MultiStatus)
    }

    /// 208 Already Reported.
    pub fn already_reported() -> Self {
        Self::new(Status::AlreadyReported)
    }

    /// 226 IM Used.
    pub fn im_used() -> Self {
        Self::new(Status::ImUsed)
    }
}

// ── 3xx redirection ───────────────────────────────────────────────────────────

impl Response {
    /// 300 Multiple Choices.
    pub fn multiple_choices() -> Self {
        Self::new(Status::MultipleChoices)
    }

    /// 301 Moved Permanently.
    pub fn moved_permanently() -> Self {
        Self::new(Status::MovedPermanently)
    }

    /// 302 Found.
    pub fn found() -> Self {
        Self::new(Status::Found)
    }

    /// 303 See Other.
    pub fn see_other() -> Self {
        Self::new(Status::SeeOther)
    }

    /// 304 Not Modified.
    pub fn not_modified() -> Self {
        Self::new(Status::NotModified)
    }

    /// 305 Use Proxy.
    pub fn use_proxy() -> Self {
        Self::new(Status::UseProxy)
    }

    /// 307 Temporary Redirect.
    pub fn temporary_redirect() -> Self {
        Self::new(Status::TemporaryRedirect)
    }

    /// 308 Permanent Redirect.
    pub fn permanent_redirect() -> Self {
        Self::new(Status::PermanentRedirect)
    }

    /// 310 Too Many Redirects. Off the RFC registry but in the catalog.
    pub fn too_many_redirects() -> Self {
        Self::new(Status::TooManyRedirects)
    }
}

// ── 4xx client errors ─────────────────────────────────────────────────────────

impl Response {
    /// 400 Bad Request.
    pub fn bad_request() -> Self {
        Self::new(Status::BadRequest)
    }

    /// 401 Unauthorized.
    pub fn unauthorized() -> Self {
        Self::new(Status::Unauthorized)
    }

    /// 402 Payment Required.
    pub fn payment_required() -> Self {
        Self::new(Status::PaymentRequired)
    }

    /// 403 Forbidden.
    pub fn forbidden() -> Self {
        Self::new(Status::Forbidden)
    }

    /// 404 Not Found.
    pub fn not_found() -> Self {
        Self::new(Status::NotFound)
    }

    /// 405 Method Not Allowed.
    pub fn method_not_allowed() -> Self {
        Self::new(Status::MethodNotAllowed)
    }

    /// 406 Not Acceptable.
    pub fn not_acceptable() -> Self {
        Self::new(Status::NotAcceptable)
    }

    /// 407 Proxy Authentication Required.
    pub fn proxy_authentication_required() -> Self {
        Self::new(Status::ProxyAuthenticationRequired)
    }

    /// 408 Request Timeout.
    pub fn request_timeout() -> Self {
        Self::new(Status::RequestTimeout)
    }

    /// 409 Conflict.
    pub fn conflict() -> Self {
        Self::new(Status::Conflict)
    }

    /// 410 Gone.
    pub fn gone() -> Self {
        Self::new(Status::Gone)
    }

    /// 411 Length Required.
    pub fn length_required() -> Self {
        Self::new(Status::LengthRequired)
    }

    /// 412 Precondition Failed.
    pub fn precondition_failed() -> Self {
        Self::new(Status::PreconditionFailed)
    }

    /// 413 Payload Too Large.
    pub fn payload_too_large() -> Self {
        Self::new(Status::PayloadTooLarge)
    }

    /// 414 URI Too Long.
    pub fn uri_too_long() -> Self {
        Self::new(Status::UriTooLong)
    }

    /// 415 Unsupported Media Type.
    pub fn unsupported_media_type() -> Self {
        Self::new(Status::UnsupportedMediaType)
    }

    /// 416 Range Not Satisfiable.
    pub fn range_not_satisfiable() -> Self {
        Self::new(Status::RangeNotSatisfiable)
    }

    /// 417 Expectation Failed.
    pub fn expectation_failed() -> Self {
        Self::new(Status::ExpectationFailed)
    }

    /// 418 I'm a teapot. Short and stout per RFC 2324.
    pub fn im_a_teapot() -> Self {
        Self::new(Status::ImATeapot)
    }

    /// 421 Misdirected Request.
    pub fn misdirected_request() -> Self {
        Self::new(Status::MisdirectedRequest)
    }

    /// 422 Unprocessable Entity.
    pub fn unprocessable_entity() -> Self {
        Self::new(Status::UnprocessableEntity)
    }

    /// 423 Locked.
    pub fn locked() -> Self {
        Self::new(Status::Locked)
    }

    /// 424 Failed Dependency.
    pub fn failed_dependency() -> Self {
        Self::new(Status::FailedDependency)
    }

    /// 425 Too Early.
    pub fn too_early() -> Self {
        Self::new(Status::TooEarly)
    }

    /// 426 Upgrade Required.
    pub fn upgrade_required() -> Self {
        Self::new(Status::UpgradeRequired)
    }

    /// 428 Precondition Required.
    pub fn precondition_required() -> Self {
        Self::new(Status::PreconditionRequired)
    }

    /// 429 Too Many Requests.
    pub fn too_many_requests() -> Self {
        Self::new(Status::TooManyRequests)
    }

    /// 431 Request Header Fields Too Large.
    pub fn request_header_fields_too_large() -> Self {
        Self::new(Status::RequestHeaderFieldsTooLarge)
    }

    /// 451 Unavailable For Legal Reasons.
    pub fn unavailable_for_legal_reasons() -> Self {
        Self::new(Status::UnavailableForLegalReasons)
    }
}

// ── 5xx server errors ─────────────────────────────────────────────────────────

impl Response {
    /// 500 Internal Server Error.
    pub fn internal_server_error() -> Self {
        Self::new(Status::InternalServerError)
    }

    /// 501 Not Implemented.
    pub fn not_implemented() -> Self {
        Self::new(Status::NotImplemented)
    }

    /// 502 Bad Gateway.
    pub fn bad_gateway() -> Self {
        Self::new(Status::BadGateway)
    }

    /// 503 Service Unavailable.
    pub fn service_unavailable() -> Self {
        Self::new(Status::ServiceUnavailable)
    }

    /// 504 Gateway Timeout.
    pub fn gateway_timeout() -> Self {
        Self::new(Status::GatewayTimeout)
    }

    /// 505 HTTP Version Not Supported.
    pub fn http_version_not_supported() -> Self {
        Self::new(Status::HttpVersionNotSupported)
    }

    /// 506 Variant Also Negotiates.
    pub fn variant_also_negotiates() -> Self {
        Self::new(Status::VariantAlsoNegotiates)
    }

    /// 507 Insufficient Storage.
    pub fn insufficient_storage() -> Self {
        Self::new(Status::InsufficientStorage)
    }

    /// 508 Loop Detected.
    pub fn loop_detected() -> Self {
        Self::new(Status::LoopDetected)
    }

    /// 510 Not Extended.
    pub fn not_extended() -> Self {
        Self::new(Status::NotExtended)
    }

    /// 511 Network Authentication Required.
    pub fn network_authentication_required() -> Self {
        Self::new(Status::NetworkAuthenticationRequired)
    }

    /// 520 Unknown Error. The CDN-style catch-all for upstream responses
    /// that defy classification.
    pub fn unknown_error() -> Self {
        Self::new(Status::UnknownError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premades_carry_their_catalog_code() {
        assert_eq!(Response::continue_().status_code(), Status::Continue);
        assert_eq!(Response::ok().status_code(), Status::Ok);
        assert_eq!(Response::im_used().status_code(), Status::ImUsed);
        assert_eq!(
            Response::too_many_redirects().status_code(),
            Status::TooManyRedirects,
        );
        assert_eq!(Response::im_a_teapot().status_code(), Status::ImATeapot);
        assert_eq!(Response::unknown_error().status_code(), Status::UnknownError);
    }

    #[test]
    fn premades_start_with_the_catalog_message() {
        assert_eq!(Response::ok().message(), "OK");
        assert_eq!(Response::payload_too_large().message(), "Payload Too Large");
        assert_eq!(Response::bad_gateway().message(), "Bad gateway");
    }

    #[test]
    fn premades_chain_like_any_other_response() {
        let response = Response::too_many_requests()
            .with_cause("burst limit hit")
            .with_request_id("req-rate-1");

        assert_eq!(response.status_code().code(), 429);
        assert_eq!(response.cause(), Some("burst limit hit"));
        assert_eq!(response.request_id(), Some("req-rate-1"));
    }
}
