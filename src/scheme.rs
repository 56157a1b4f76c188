use crate::types::SchemeType;

/// Get the scheme type from the bytes of a scheme, ignoring ASCII case.
/// Filters on length first so most schemes need a single comparison.
pub fn get_scheme_type(scheme: &[u8]) -> SchemeType {
    let candidate = match scheme.len() {
        2 => SchemeType::Ws,
        3 => match scheme.first().map(u8::to_ascii_lowercase) {
            Some(b'w') => SchemeType::Wss,
            Some(b'f') => SchemeType::Ftp,
            _ => return SchemeType::Other,
        },
        4 => match scheme.first().map(u8::to_ascii_lowercase) {
            Some(b'h') => SchemeType::Http,
            Some(b'f') => match scheme.get(1).map(u8::to_ascii_lowercase) {
                Some(b't') => SchemeType::Ftps,
                _ => SchemeType::File,
            },
            _ => return SchemeType::Other,
        },
        5 => SchemeType::Https,
        6 => SchemeType::Gopher,
        _ => return SchemeType::Other,
    };

    if scheme.eq_ignore_ascii_case(scheme_name(candidate).as_bytes()) {
        candidate
    } else {
        SchemeType::Other
    }
}

/// Canonical lowercase name of a classified scheme.
fn scheme_name(scheme_type: SchemeType) -> &'static str {
    match scheme_type {
        SchemeType::Http => "http",
        SchemeType::Https => "https",
        SchemeType::Ws => "ws",
        SchemeType::Wss => "wss",
        SchemeType::Ftp => "ftp",
        SchemeType::Ftps => "ftps",
        SchemeType::Gopher => "gopher",
        SchemeType::File => "file",
        SchemeType::Other => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_type() {
        assert_eq!(get_scheme_type(b"http"), SchemeType::Http);
        assert_eq!(get_scheme_type(b"HTTPS"), SchemeType::Https);
        assert_eq!(get_scheme_type(b"ftp"), SchemeType::Ftp);
        assert_eq!(get_scheme_type(b"ftps"), SchemeType::Ftps);
        assert_eq!(get_scheme_type(b"FiLe"), SchemeType::File);
        assert_eq!(get_scheme_type(b"gopher"), SchemeType::Gopher);
        assert_eq!(get_scheme_type(b"ws"), SchemeType::Ws);
        assert_eq!(get_scheme_type(b"wss"), SchemeType::Wss);
        assert_eq!(get_scheme_type(b"custom"), SchemeType::Other);
        assert_eq!(get_scheme_type(b"htt"), SchemeType::Other);
        assert_eq!(get_scheme_type(b"fila"), SchemeType::Other);
        assert_eq!(get_scheme_type(b""), SchemeType::Other);
    }

    #[test]
    fn test_authority_sets() {
        assert!(SchemeType::Gopher.always_has_authority());
        assert!(!SchemeType::File.always_has_authority());
        assert!(!SchemeType::Ftps.always_has_authority());
        assert!(SchemeType::File.lowercases_host());
        assert!(SchemeType::Https.is_http_family());
        assert!(!SchemeType::Wss.is_http_family());
    }
}
