//! HTTP status codes as a typed, closed set.
//!
//! [`Status`] enumerates exactly the codes this crate ships premade
//! responses for — the IANA registry plus the two extensions that survive
//! in the wild (`310 Too Many Redirects`, `520 Unknown error`). Nothing
//! else round-trips: an unknown number is rejected at the deserialization
//! boundary instead of leaking into handler code.
//!
//! On the wire a `Status` is a bare number, never a string:
//!
//! ```rust
//! use canned::Status;
//!
//! assert_eq!(serde_json::to_string(&Status::NotFound).unwrap(), "404");
//! assert_eq!(Status::from_code(404), Some(Status::NotFound));
//! assert_eq!(Status::from_code(599), None);
//! ```

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A status code with a premade response in the catalog.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    // ── 1xx Informational ─────────────────────────────────────────────────────
    Continue,                      // 100
    SwitchingProtocols,            // 101
    Processing,                    // 102
    EarlyHints,                    // 103

    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                            // 200
    Created,                       // 201
    Accepted,                      // 202
    NonAuthoritativeInformation,   // 203
    NoContent,                     // 204
    ResetContent,                  // 205
    PartialContent,                // 206
    MultiStatus,                   // 207
    AlreadyReported,               // 208
    ImUsed,                        // 226

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    MultipleChoices,               // 300
    MovedPermanently,              // 301
    Found,                         // 302
    SeeOther,                      // 303
    NotModified,                   // 304
    UseProxy,                      // 305
    TemporaryRedirect,             // 307
    PermanentRedirect,             // 308
    TooManyRedirects,              // 310

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,                    // 400
    Unauthorized,                  // 401
    PaymentRequired,               // 402
    Forbidden,                     // 403
    NotFound,                      // 404
    MethodNotAllowed,              // 405
    NotAcceptable,                 // 406
    ProxyAuthenticationRequired,   // 407
    RequestTimeout,                // 408
    Conflict,                      // 409
    Gone,                          // 410
    LengthRequired,                // 411
    PreconditionFailed,            // 412
    PayloadTooLarge,               // 413
    UriTooLong,                    // 414
    UnsupportedMediaType,          // 415
    RangeNotSatisfiable,           // 416
    ExpectationFailed,             // 417
    ImATeapot,                     // 418
    MisdirectedRequest,            // 421
    UnprocessableEntity,           // 422
    Locked,                        // 423
    FailedDependency,              // 424
    TooEarly,                      // 425
    UpgradeRequired,               // 426
    PreconditionRequired,          // 428
    TooManyRequests,               // 429
    RequestHeaderFieldsTooLarge,   // 431
    UnavailableForLegalReasons,    // 451

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError,           // 500
    NotImplemented,                // 501
    BadGateway,                    // 502
    ServiceUnavailable,            // 503
    GatewayTimeout,                // 504
    HttpVersionNotSupported,       // 505
    VariantAlsoNegotiates,         // 506
    InsufficientStorage,           // 507
    LoopDetected,                  // 508
    NotExtended,                   // 510
    NetworkAuthenticationRequired, // 511
    UnknownError,                  // 520
}

impl Status {
    /// Returns the numeric status code.
    pub const fn code(self) -> u16 {
        match self {
            Status::Continue                      => 100,
            Status::SwitchingProtocols            => 101,
            Status::Processing                    => 102,
            Status::EarlyHints                    => 103,
            Status::Ok                            => 200,
            Status::Created                       => 201,
            Status::Accepted                      => 202,
            Status::NonAuthoritativeInformation   => 203,
            Status::NoContent                     => 204,
            Status::ResetContent                  => 205,
            Status::PartialContent                => 206,
            Status::MultiStatus                   => 207,
            Status::AlreadyReported               => 208,
            Status::ImUsed                        => 226,
            Status::MultipleChoices               => 300,
            Status::MovedPermanently              => 301,
            Status::Found                         => 302,
            Status::SeeOther                      => 303,
            Status::NotModified                   => 304,
            Status::UseProxy                      => 305,
            Status::TemporaryRedirect             => 307,
            Status::PermanentRedirect             => 308,
            Status::TooManyRedirects              => 310,
            Status::BadRequest                    => 400,
            Status::Unauthorized                  => 401,
            Status::PaymentRequired               => 402,
            Status::Forbidden                     => 403,
            Status::NotFound                      => 404,
            Status::MethodNotAllowed              => 405,
            Status::NotAcceptable                 => 406,
            Status::ProxyAuthenticationRequired   => 407,
            Status::RequestTimeout                => 408,
            Status::Conflict                      => 409,
            Status::Gone                          => 410,
            Status::LengthRequired                => 411,
            Status::PreconditionFailed            => 412,
            Status::PayloadTooLarge               => 413,
            Status::UriTooLong                    => 414,
            Status::UnsupportedMediaType          => 415,
            Status::RangeNotSatisfiable           => 416,
            Status::ExpectationFailed             => 417,
            Status::ImATeapot                     => 418,
            Status::MisdirectedRequest            => 421,
            Status::UnprocessableEntity           => 422,
            Status::Locked                        => 423,
            Status::FailedDependency              => 424,
            Status::TooEarly                      => 425,
            Status::UpgradeRequired               => 426,
            Status::PreconditionRequired          => 428,
            Status::TooManyRequests               => 429,
            Status::RequestHeaderFieldsTooLarge   => 431,
            Status::UnavailableForLegalReasons    => 451,
            Status::InternalServerError           => 500,
            Status::NotImplemented                => 501,
            Status::BadGateway                    => 502,
            Status::ServiceUnavailable            => 503,
            Status::GatewayTimeout                => 504,
            Status::HttpVersionNotSupported       => 505,
            Status::VariantAlsoNegotiates         => 506,
            Status::InsufficientStorage           => 507,
            Status::LoopDetected                  => 508,
            Status::NotExtended                   => 510,
            Status::NetworkAuthenticationRequired => 511,
            Status::UnknownError                  => 520,
        }
    }

    /// Returns the default response message for this status.
    ///
    /// These are the strings the premade constructors put in the `message`
    /// field when the caller does not override it. They follow the catalog,
    /// not RFC 9110 to the letter: 5xx messages are sentence case, and 418
    /// keeps its lowercase teapot.
    pub const fn reason(self) -> &'static str {
        match self {
            Status::Continue                      => "Continue",
            Status::SwitchingProtocols            => "Switching Protocols",
            Status::Processing                    => "Processing",
            Status::EarlyHints                    => "Early Hints",
            Status::Ok                            => "OK",
            Status::Created                       => "Created",
            Status::Accepted                      => "Accepted",
            Status::NonAuthoritativeInformation   => "Non-Authoritative Information",
            Status::NoContent                     => "No Content",
            Status::ResetContent                  => "Reset Content",
            Status::PartialContent                => "Partial Content",
            Status::MultiStatus                   => "Multi-Status",
            Status::AlreadyReported               => "Already Reported",
            Status::ImUsed                        => "IM Used",
            Status::MultipleChoices               => "Multiple Choices",
            Status::MovedPermanently              => "Moved Permanently",
            Status::Found                         => "Found",
            Status::SeeOther                      => "See Other",
            Status::NotModified                   => "Not Modified",
            Status::UseProxy                      => "Use Proxy",
            Status::TemporaryRedirect             => "Temporary Redirect",
            Status::PermanentRedirect             => "Permanent Redirect",
            Status::TooManyRedirects              => "Too Many Redirects",
            Status::BadRequest                    => "Bad Request",
            Status::Unauthorized                  => "Unauthorized",
            Status::PaymentRequired               => "Payment Required",
            Status::Forbidden                     => "Forbidden",
            Status::NotFound                      => "Not Found",
            Status::MethodNotAllowed              => "Method Not Allowed",
            Status::NotAcceptable                 => "Not Acceptable",
            Status::ProxyAuthenticationRequired   => "Proxy Authentication Required",
            Status::RequestTimeout                => "Request Timeout",
            Status::Conflict                      => "Conflict",
            Status::Gone                          => "Gone",
            Status::LengthRequired                => "Length Required",
            Status::PreconditionFailed            => "Precondition Failed",
            Status::PayloadTooLarge               => "Payload Too Large",
            Status::UriTooLong                    => "URI Too Long",
            Status::UnsupportedMediaType          => "Unsupported Media Type",
            Status::RangeNotSatisfiable           => "Range Not Satisfiable",
            Status::ExpectationFailed             => "Expectation Failed",
            Status::ImATeapot                     => "I'm a teapot",
            Status::MisdirectedRequest            => "Misdirected Request",
            Status::UnprocessableEntity           => "Unprocessable Entity",
            Status::Locked                        => "Locked",
            Status::FailedDependency              => "Failed Dependency",
            Status::TooEarly                      => "Too Early",
            Status::UpgradeRequired               => "Upgrade Required",
            Status::PreconditionRequired          => "Precondition Required",
            Status::TooManyRequests               => "Too Many Requests",
            Status::RequestHeaderFieldsTooLarge   => "Request Header Fields Too Large",
            Status::UnavailableForLegalReasons    => "Unavailable For Legal Reasons",
            Status::InternalServerError           => "Internal server error",
            Status::NotImplemented                => "Not implemented",
            Status::BadGateway                    => "Bad gateway",
            Status::ServiceUnavailable            => "Service unavailable",
            Status::GatewayTimeout                => "Gateway timeout",
            Status::HttpVersionNotSupported       => "HTTP version not supported",
            Status::VariantAlsoNegotiates         => "Variant also negotiates",
            Status::InsufficientStorage           => "Insufficient storage",
            Status::LoopDetected                  => "Loop detected",
            Status::NotExtended                   => "Not extended",
            Status::NetworkAuthenticationRequired => "Network authentication required",
            Status::UnknownError                  => "Unknown error",
        }
    }

    /// Looks up the variant for a numeric code. `None` for anything outside
    /// the catalog.
    pub const fn from_code(code: u16) -> Option<Status> {
        let status = match code {
            100 => Status::Continue,
            101 => Status::SwitchingProtocols,
            102 => Status::Processing,
            103 => Status::EarlyHints,
            200 => Status::Ok,
            201 => Status::Created,
            202 => Status::Accepted,
            203 => Status::NonAuthoritativeInformation,
            204 => Status::NoContent,
            205 => Status::ResetContent,
            206 => Status::PartialContent,
            207 => Status::MultiStatus,
            208 => Status::AlreadyReported,
            226 => Status::ImUsed,
            300 => Status::MultipleChoices,
            301 => Status::MovedPermanently,
            302 => Status::Found,
            303 => Status::SeeOther,
            304 => Status::NotModified,
            305 => Status::UseProxy,
            307 => Status::TemporaryRedirect,
            308 => Status::PermanentRedirect,
            310 => Status::TooManyRedirects,
            400 => Status::BadRequest,
            401 => Status::Unauthorized,
            402 => Status::PaymentRequired,
            403 => Status::Forbidden,
            404 => Status::NotFound,
            405 => Status::MethodNotAllowed,
            406 => Status::NotAcceptable,
            407 => Status::ProxyAuthenticationRequired,
            408 => Status::RequestTimeout,
            409 => Status::Conflict,
            410 => Status::Gone,
            411 => Status::LengthRequired,
            412 => Status::PreconditionFailed,
            413 => Status::PayloadTooLarge,
            414 => Status::UriTooLong,
            415 => Status::UnsupportedMediaType,
            416 => Status::RangeNotSatisfiable,
            417 => Status::ExpectationFailed,
            418 => Status::ImATeapot,
            421 => Status::MisdirectedRequest,
            422 => Status::UnprocessableEntity,
            423 => Status::Locked,
            424 => Status::FailedDependency,
            425 => Status::TooEarly,
            426 => Status::UpgradeRequired,
            428 => Status::PreconditionRequired,
            429 => Status::TooManyRequests,
            431 => Status::RequestHeaderFieldsTooLarge,
            451 => Status::UnavailableForLegalReasons,
            500 => Status::InternalServerError,
            501 => Status::NotImplemented,
            502 => Status::BadGateway,
            503 => Status::ServiceUnavailable,
            504 => Status::GatewayTimeout,
            505 => Status::HttpVersionNotSupported,
            506 => Status::VariantAlsoNegotiates,
            507 => Status::InsufficientStorage,
            508 => Status::LoopDetected,
            510 => Status::NotExtended,
            511 => Status::NetworkAuthenticationRequired,
            520 => Status::UnknownError,
            _ => return None,
        };
        Some(status)
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 {
        s.code()
    }
}

/// `404 Not Found`, `500 Internal server error`, …
impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.reason())
    }
}

/// Serializes as the bare number, matching the `statusCode` wire field.
impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.code())
    }
}

/// Accepts the bare number; anything outside the catalog is a hard error,
/// not a silently constructed unknown status.
impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u16::deserialize(deserializer)?;
        Status::from_code(code)
            .ok_or_else(|| de::Error::custom(format!("unknown status code {code}")))
    }
}
