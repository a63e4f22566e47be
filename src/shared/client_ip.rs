// src/shared/client_ip.rs

use actix_web::HttpRequest;
use std::net::{IpAddr, Ipv4Addr};

/// Resolves the caller's IP address.
///
/// Forwarding headers are only honoured when the deployment sits behind a
/// reverse proxy that rewrites them; otherwise the socket peer is used.
pub fn resolve_client_ip(req: &HttpRequest, trust_proxy_headers: bool) -> IpAddr {
    if trust_proxy_headers {
        let forwarded = req
            .headers()
            .get("X-Forwarded-For")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|first| first.trim().parse::<IpAddr>().ok());

        if let Some(ip) = forwarded {
            return ip;
        }

        let real_ip = req
            .headers()
            .get("X-Real-IP")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<IpAddr>().ok());

        if let Some(ip) = real_ip {
            return ip;
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use std::net::SocketAddr;

    fn peer() -> SocketAddr {
        "10.0.0.7:51000".parse().unwrap()
    }

    #[test]
    fn test_uses_peer_when_proxy_headers_untrusted() {
        let req = TestRequest::default()
            .peer_addr(peer())
            .insert_header(("X-Forwarded-For", "203.0.113.9"))
            .to_http_request();

        assert_eq!(
            resolve_client_ip(&req, false),
            "10.0.0.7".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_uses_first_forwarded_address_when_trusted() {
        let req = TestRequest::default()
            .peer_addr(peer())
            .insert_header(("X-Forwarded-For", "203.0.113.9, 10.0.0.1"))
            .to_http_request();

        assert_eq!(
            resolve_client_ip(&req, true),
            "203.0.113.9".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_falls_back_to_real_ip_then_peer() {
        let req = TestRequest::default()
            .peer_addr(peer())
            .insert_header(("X-Real-IP", "198.51.100.4"))
            .to_http_request();
        assert_eq!(
            resolve_client_ip(&req, true),
            "198.51.100.4".parse::<IpAddr>().unwrap()
        );

        let req = TestRequest::default()
            .peer_addr(peer())
            .insert_header(("X-Forwarded-For", "garbage"))
            .to_http_request();
        assert_eq!(
            resolve_client_ip(&req, true),
            "10.0.0.7".parse::<IpAddr>().unwrap()
        );
    }

    #[test]
    fn test_missing_peer_defaults_to_localhost() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(
            resolve_client_ip(&req, false),
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        );
    }
}
