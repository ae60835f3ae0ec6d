//! Categorisation of transport-layer failures.
//!
//! [`classify`] folds a raw [`TransportFailure`] into the closed
//! [`CategorisedNetworkError`] taxonomy. Each category carries a stable
//! numeric code (see [`CategorisedNetworkError::error_code`]) so
//! failures can be reported and aggregated across SDK versions without
//! string matching.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Raw failure shapes
// ---------------------------------------------------------------------------

/// Connection-level failure kinds reported by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionFailure {
    NotConnectedToInternet,
    NetworkConnectionLost,
    DataNotAllowed,
    InternationalRoamingOff,
    CallIsActive,
    TimedOut,
    DnsLookupFailed,
    CannotFindHost,
    CannotConnectToHost,
    SecureConnectionFailed,
    ClientCertificateRequired,
    ClientCertificateRejected,
    ServerCertificateUntrusted,
    ServerCertificateHasBadDate,
    ServerCertificateNotYetValid,
    ServerCertificateHasUnknownRoot,
    RequiresSecureConnection,
    BadServerResponse,
    CannotDecodeContentData,
    CannotDecodeRawData,
    CannotParseResponse,
    DataLengthExceedsMaximum,
    ZeroByteResource,
    BadUrl,
    UnsupportedUrl,
    Cancelled,
    Other,
}

/// A transport failure as observed before any response handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportFailure {
    /// The request could not be built or was rejected as malformed.
    BadRequest,
    /// The response body could not be decoded.
    Decoding,
    /// The server answered with a non-success HTTP status.
    InvalidStatusCode(u16),
    /// The response carried no body where one was required.
    NoData,
    /// The connection itself failed.
    Connection(ConnectionFailure),
    /// Anything the transport layer could not describe further.
    Other,
}

impl From<&reqwest::Error> for TransportFailure {
    fn from(error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::InvalidStatusCode(status.as_u16());
        }

        if error.is_timeout() {
            Self::Connection(ConnectionFailure::TimedOut)
        } else if error.is_connect() {
            Self::Connection(ConnectionFailure::CannotConnectToHost)
        } else if error.is_decode() {
            Self::Decoding
        } else if error.is_builder() || error.is_request() {
            Self::BadRequest
        } else {
            Self::Other
        }
    }
}

// ---------------------------------------------------------------------------
// Categorised taxonomy
// ---------------------------------------------------------------------------

/// Coarse, closed taxonomy of network failures.
///
/// `Eq + Hash` so categories can key aggregation maps. The payload on
/// [`DnsError`](Self::DnsError), [`SslError`](Self::SslError) and
/// [`OtherNetworkError`](Self::OtherNetworkError) preserves the exact
/// connection failure for diagnostics without widening the category set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum CategorisedNetworkError {
    // Networking
    #[error("no internet connection")]
    NoInternet,
    #[error("request timed out")]
    Timeout,
    #[error("dns resolution failed")]
    DnsError(ConnectionFailure),
    #[error("tls negotiation failed")]
    SslError(ConnectionFailure),
    #[error("secure connection required")]
    RequiresHttps,
    #[error("can't connect to host")]
    CantConnectToHost,
    #[error("network error")]
    OtherNetworkError(ConnectionFailure),

    // Data / configuration
    #[error("response decoding failed")]
    DecodingError,
    #[error("client not configured")]
    NotConfigured,
    #[error("bad response")]
    BadResponse,
    #[error("bad request")]
    BadRequest,

    // Based on response codes
    #[error("server error {0}")]
    ServerError(u16),
    #[error("unauthorised: {0}")]
    Unauthorised(u16),
    #[error("client error {0}")]
    ClientError(u16),

    // Other
    #[error("unknown network error")]
    Unknown,
}

impl CategorisedNetworkError {
    /// Stable numeric code for reporting.
    ///
    /// Status-code categories map to `2000 + status`; the rest are fixed.
    pub fn error_code(&self) -> i32 {
        match self {
            Self::NoInternet => 1001,
            Self::Timeout => 1002,
            Self::DnsError(_) => 1003,
            Self::SslError(_) => 1004,
            Self::RequiresHttps => 1005,
            Self::CantConnectToHost => 1006,
            Self::OtherNetworkError(_) => 1100,
            Self::DecodingError => 3001,
            Self::NotConfigured => 4001,
            Self::BadResponse => 1008,
            Self::BadRequest => 1007,
            Self::ServerError(code) | Self::Unauthorised(code) | Self::ClientError(code) => {
                2000 + i32::from(*code)
            }
            Self::Unknown => 5001,
        }
    }

    fn from_status_code(code: u16) -> Self {
        match code {
            500..=599 => Self::ServerError(code),
            401 | 403 => Self::Unauthorised(code),
            400..=499 => Self::ClientError(code),
            _ => Self::Unknown,
        }
    }

    fn from_connection(failure: ConnectionFailure) -> Self {
        use ConnectionFailure as F;

        match failure {
            F::BadServerResponse
            | F::CannotDecodeContentData
            | F::CannotDecodeRawData
            | F::CannotParseResponse
            | F::DataLengthExceedsMaximum
            | F::ZeroByteResource => Self::BadResponse,
            F::BadUrl | F::UnsupportedUrl => Self::BadRequest,
            F::RequiresSecureConnection => Self::RequiresHttps,
            F::CallIsActive
            | F::DataNotAllowed
            | F::InternationalRoamingOff
            | F::NetworkConnectionLost
            | F::NotConnectedToInternet => Self::NoInternet,
            F::CannotConnectToHost => Self::CantConnectToHost,
            F::CannotFindHost | F::DnsLookupFailed => Self::DnsError(failure),
            F::ClientCertificateRejected
            | F::ClientCertificateRequired
            | F::SecureConnectionFailed
            | F::ServerCertificateUntrusted
            | F::ServerCertificateHasBadDate
            | F::ServerCertificateNotYetValid
            | F::ServerCertificateHasUnknownRoot => Self::SslError(failure),
            F::TimedOut => Self::Timeout,
            F::Cancelled | F::Other => Self::OtherNetworkError(failure),
        }
    }
}

/// Fold a raw transport failure into its category.
pub fn classify(failure: TransportFailure) -> CategorisedNetworkError {
    match failure {
        TransportFailure::BadRequest => CategorisedNetworkError::BadRequest,
        TransportFailure::Decoding => CategorisedNetworkError::DecodingError,
        TransportFailure::InvalidStatusCode(code) => {
            CategorisedNetworkError::from_status_code(code)
        }
        TransportFailure::NoData => CategorisedNetworkError::BadResponse,
        TransportFailure::Connection(connection) => {
            CategorisedNetworkError::from_connection(connection)
        }
        TransportFailure::Other => CategorisedNetworkError::Unknown,
    }
}

impl From<TransportFailure> for CategorisedNetworkError {
    fn from(failure: TransportFailure) -> Self {
        classify(failure)
    }
}

impl From<&reqwest::Error> for CategorisedNetworkError {
    fn from(error: &reqwest::Error) -> Self {
        classify(TransportFailure::from(error))
    }
}

// ── tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::CategorisedNetworkError as E;
    use super::ConnectionFailure as F;
    use super::*;

    fn connection(failure: F) -> E {
        classify(TransportFailure::Connection(failure))
    }

    #[test]
    fn codes_are_stable() {
        let expected = [
            (E::NoInternet, 1001),
            (E::Timeout, 1002),
            (E::DnsError(F::CannotFindHost), 1003),
            (E::SslError(F::ServerCertificateUntrusted), 1004),
            (E::RequiresHttps, 1005),
            (E::CantConnectToHost, 1006),
            (E::OtherNetworkError(F::Other), 1100),
            (E::DecodingError, 3001),
            (E::NotConfigured, 4001),
            (E::BadResponse, 1008),
            (E::BadRequest, 1007),
            (E::ServerError(500), 2500),
            (E::Unauthorised(403), 2403),
            (E::ClientError(418), 2418),
            (E::Unknown, 5001),
        ];

        for (error, code) in expected {
            assert_eq!(error.error_code(), code, "{error:?}");
        }
    }

    #[test]
    fn no_internet_bucket() {
        for failure in [
            F::NotConnectedToInternet,
            F::CallIsActive,
            F::DataNotAllowed,
            F::InternationalRoamingOff,
            F::NetworkConnectionLost,
        ] {
            assert_eq!(connection(failure), E::NoInternet);
        }
    }

    #[test]
    fn dns_failures_keep_their_kind() {
        assert_eq!(connection(F::DnsLookupFailed), E::DnsError(F::DnsLookupFailed));
        assert_eq!(connection(F::CannotFindHost), E::DnsError(F::CannotFindHost));
    }

    #[test]
    fn ssl_failures_keep_their_kind() {
        for failure in [
            F::ClientCertificateRequired,
            F::ClientCertificateRejected,
            F::ServerCertificateUntrusted,
            F::ServerCertificateHasBadDate,
            F::ServerCertificateNotYetValid,
            F::ServerCertificateHasUnknownRoot,
            F::SecureConnectionFailed,
        ] {
            assert_eq!(connection(failure), E::SslError(failure));
        }
    }

    #[test]
    fn bad_request_bucket() {
        assert_eq!(connection(F::BadUrl), E::BadRequest);
        assert_eq!(connection(F::UnsupportedUrl), E::BadRequest);
        assert_eq!(classify(TransportFailure::BadRequest), E::BadRequest);
    }

    #[test]
    fn bad_response_bucket() {
        for failure in [
            F::BadServerResponse,
            F::CannotDecodeRawData,
            F::CannotDecodeContentData,
            F::ZeroByteResource,
            F::DataLengthExceedsMaximum,
            F::CannotParseResponse,
        ] {
            assert_eq!(connection(failure), E::BadResponse);
        }

        assert_eq!(classify(TransportFailure::NoData), E::BadResponse);
    }

    #[test]
    fn remaining_connection_failures() {
        assert_eq!(connection(F::TimedOut), E::Timeout);
        assert_eq!(connection(F::RequiresSecureConnection), E::RequiresHttps);
        assert_eq!(connection(F::CannotConnectToHost), E::CantConnectToHost);
        assert_eq!(connection(F::Cancelled), E::OtherNetworkError(F::Cancelled));
    }

    #[test]
    fn status_codes_are_bucketed() {
        assert_eq!(classify(TransportFailure::InvalidStatusCode(501)), E::ServerError(501));
        assert_eq!(classify(TransportFailure::InvalidStatusCode(422)), E::ClientError(422));
        assert_eq!(classify(TransportFailure::InvalidStatusCode(401)), E::Unauthorised(401));
        assert_eq!(classify(TransportFailure::InvalidStatusCode(403)), E::Unauthorised(403));
        assert_eq!(classify(TransportFailure::InvalidStatusCode(302)), E::Unknown);
    }

    #[test]
    fn other_failures() {
        assert_eq!(classify(TransportFailure::Decoding), E::DecodingError);
        assert_eq!(classify(TransportFailure::Other), E::Unknown);
    }
}
