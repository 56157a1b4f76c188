use crate::checkers::parse_port;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;
use crate::url_aggregator::UrlAggregator;

/// Sorted list of ports that are blocked because they belong to protocols
/// that can be abused through a browser. 65535 stands for any unparsable
/// port.
static BLOCKED_PORTS: &[u16] = &[
    1,    // tcpmux
    7,    // echo
    9,    // discard
    11,   // systat
    13,   // daytime
    15,   // netstat
    17,   // qotd
    19,   // chargen
    20,   // FTP-data
    21,   // FTP-control
    22,   // SSH
    23,   // telnet
    25,   // SMTP
    37,   // time
    42,   // name
    43,   // nicname
    53,   // domain
    77,   // priv-rjs
    79,   // finger
    87,   // ttylink
    95,   // supdup
    101,  // hostriame
    102,  // iso-tsap
    103,  // gppitnp
    104,  // acr-nema
    109,  // POP2
    110,  // POP3
    111,  // sunrpc
    113,  // auth
    115,  // SFTP
    117,  // uucp-path
    119,  // nntp
    123,  // NTP
    135,  // loc-srv / epmap
    139,  // netbios
    143,  // IMAP2
    179,  // BGP
    389,  // LDAP
    465,  // SMTP+SSL
    512,  // print / exec
    513,  // login
    514,  // shell
    515,  // printer
    526,  // tempo
    530,  // courier
    531,  // Chat
    532,  // netnews
    540,  // UUCP
    556,  // remotefs
    563,  // NNTP+SSL
    587,  // ESMTP
    601,  // syslog-conn
    636,  // LDAP+SSL
    993,  // IMAP+SSL
    995,  // POP3+SSL
    2049, // NFS
    3659, // apple-sasl
    4045, // lockd
    6000, // X11
    6665, // Alternate IRC
    6666, // Alternate IRC
    6667, // Standard IRC
    6668, // Alternate IRC
    6669, // Alternate IRC
    u16::MAX,
];

/// Whether `port` is the default port of `protocol`.
///
/// ```
/// assert!(urlcanon::is_default_port_for_protocol(443, "https"));
/// assert!(!urlcanon::is_default_port_for_protocol(443, "http"));
/// ```
pub fn is_default_port_for_protocol(port: u16, protocol: &str) -> bool {
    get_scheme_type(protocol.as_bytes()).default_port() == Some(port)
}

/// Whether the port digits name the scheme's default port. Leading zeros
/// are ignored, so "080" is the default port of http.
pub(crate) fn is_default_port_text(port: &[u8], scheme_type: SchemeType) -> bool {
    let Some(default) = scheme_type.default_port() else {
        return false;
    };
    core::str::from_utf8(port)
        .ok()
        .and_then(parse_port)
        .is_some_and(|p| p == default)
}

/// Whether a network request to this URL's port is permitted.
///
/// ```
/// use urlcanon::{Url, port_is_allowed};
///
/// assert!(!port_is_allowed(&Url::parse("http://host:25/")));
/// assert!(port_is_allowed(&Url::parse("ftp://host:21/")));
/// ```
pub fn port_is_allowed(url: &UrlAggregator) -> bool {
    let port = match url.port_digits() {
        None => return true,
        Some(digits) => parse_port(digits).unwrap_or(u16::MAX),
    };
    if port == 0 || BLOCKED_PORTS.binary_search(&port).is_err() {
        return true;
    }
    if (port == 21 || port == 22) && url.protocol_is("ftp") {
        return true;
    }
    url.protocol_is("file")
}
