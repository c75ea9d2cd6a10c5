//! `Authorization` header assembly.
//!
//! The server parses this header literally, so the format admits no
//! deviation. Header names must appear in the same order the canonical
//! string used them (sorted, lowercase) or verification fails.

/// Format the `Authorization` header value for a signed request.
pub fn authorization_header(
    key_id: &str,
    algorithm: &str,
    signed_names: &[String],
    signature_b64: &str,
) -> String {
    let mut names = String::from("(request-target)");
    for name in signed_names {
        names.push(' ');
        names.push_str(name);
    }

    format!(
        "Signature keyId=\"{key_id}\",algorithm=\"{algorithm}\",headers=\"{names}\",signature=\"{signature_b64}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::{string_to_sign, SignableHeaders};
    use crate::constants::SIGNATURE_ALGORITHM;
    use crate::request::Method;

    #[test]
    fn test_exact_header_format() {
        let names = vec!["date".to_string(), "digest".to_string(), "host".to_string()];
        let header = authorization_header("key-123", SIGNATURE_ALGORITHM, &names, "c2ln");
        assert_eq!(
            header,
            "Signature keyId=\"key-123\",algorithm=\"rsa-sha256\",\
             headers=\"(request-target) date digest host\",signature=\"c2ln\"",
        );
    }

    #[test]
    fn test_empty_name_list_still_carries_request_target() {
        let header = authorization_header("k", SIGNATURE_ALGORITHM, &[], "s");
        assert!(header.contains("headers=\"(request-target)\""));
    }

    /// The order embedded in `headers="..."` must reproduce the
    /// canonical string byte for byte.
    #[test]
    fn test_header_order_round_trips_canonical_string() {
        let mut headers = SignableHeaders::new();
        headers.insert("Host", "intersight.com");
        headers.insert("Digest", "SHA-256=abc");
        headers.insert("Date", "Mon, 01 Jan 2024 00:00:00 GMT");

        let original = string_to_sign(Method::Get, "/api/v1/ntp/Policies", "", &headers);
        let auth = authorization_header("k", SIGNATURE_ALGORITHM, &headers.signed_names(), "s");

        // Pull the name list back out of the assembled header.
        let embedded = auth
            .split("headers=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("header should embed a name list");
        let embedded_names: Vec<&str> = embedded.split(' ').skip(1).collect();

        // Rebuild using the embedded order and a name -> value lookup.
        let lookup = |name: &str| -> &str {
            headers
                .iter()
                .find(|(n, _)| n.eq_ignore_ascii_case(name))
                .map(|(_, v)| v)
                .expect("embedded name should exist in header set")
        };
        let mut rebuilt = String::from("(request-target): get /api/v1/ntp/policies");
        for name in embedded_names {
            rebuilt.push('\n');
            rebuilt.push_str(name);
            rebuilt.push_str(": ");
            rebuilt.push_str(lookup(name));
        }

        assert_eq!(rebuilt, original);
    }
}
