/// Algorithm token carried in the `Authorization` header. The server
/// parses this literally.
pub const SIGNATURE_ALGORITHM: &str = "rsa-sha256";

/// Default API endpoint, including the versioned base path.
pub const DEFAULT_API_HOST: &str = "https://intersight.com/api/v1";

/// Managed-object identifiers are validated by byte length, not by
/// character class.
pub const MOID_BYTE_LENGTH: usize = 24;

pub const HEADER_DATE: &str = "Date";
pub const HEADER_HOST: &str = "Host";
pub const HEADER_DIGEST: &str = "Digest";
pub const HEADER_ACCEPT: &str = "Accept";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
