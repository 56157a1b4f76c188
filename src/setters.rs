//! Component setters. Each one assembles a new string around the replaced
//! component and parses it again, so the result is always canonical.

use crate::checkers::is_valid_protocol;
use crate::compat::{Cow, String, format};
use crate::error::{ParseError, Result};
use crate::parser::parse_url;
use crate::unicode::idna::normalize_hostname;
use crate::unicode::percent_encode::{
    QUERY_SET, USER_SET, USERINFO_SET, encode_percent_escapes, percent_encode_with_set,
};
use crate::url_aggregator::UrlAggregator;

fn reparse(parts: &[&str]) -> UrlAggregator {
    parse_url(Cow::Owned(parts.concat()))
}

impl UrlAggregator {
    fn text_at(&self, offset: u32) -> Option<u8> {
        self.buffer.as_bytes().get(offset as usize).copied()
    }

    fn slice(&self, start: u32, end: u32) -> &str {
        &self.buffer[start as usize..end as usize]
    }

    fn head(&self, end: u32) -> &str {
        &self.buffer[..end as usize]
    }

    fn tail(&self, start: u32) -> &str {
        &self.buffer[start as usize..]
    }

    /// No `//` yet: one has to be inserted before authority parts.
    fn needs_authority_slashes(&self) -> bool {
        self.components.user_start == self.components.scheme_end + 1
    }

    /// Replace the scheme. Anything from the first `:` of `protocol` on is
    /// ignored. An invalid URL gets `protocol:` prepended to its text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidScheme`] when `protocol` is not a scheme.
    ///
    /// ```
    /// use urlcanon::Url;
    ///
    /// let url = Url::parse("http://h/p").with_protocol("https:").unwrap();
    /// assert_eq!(url.as_str(), "https://h/p");
    /// ```
    pub fn with_protocol(&self, protocol: &str) -> Result<Self> {
        let protocol = protocol.split(':').next().unwrap_or_default();
        if !is_valid_protocol(protocol) {
            return Err(ParseError::InvalidScheme);
        }
        if !self.is_valid {
            return Ok(reparse(&[protocol, ":", &self.buffer]));
        }
        Ok(reparse(&[protocol, self.tail(self.components.scheme_end)]))
    }

    /// Replace the host, converting it to ASCII-compatible form.
    pub fn with_host(&self, host: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let slashes = if self.needs_authority_slashes() { "//" } else { "" };
        reparse(&[
            self.head(self.host_start()),
            slashes,
            &normalize_hostname(host),
            self.tail(self.components.host_end),
        ])
    }

    /// Replace host and port from a `host[:port]` string.
    pub fn with_host_and_port(&self, host_and_port: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let slashes = if self.needs_authority_slashes() { "//" } else { "" };
        let (host, port) = match host_and_port.rsplit_once(':') {
            // Bare IPv6 address without a port
            Some((host, _)) if !host.ends_with(']') && host.contains(':') => (host_and_port, None),
            Some((host, port)) => (host, Some(port)),
            None => (host_and_port, None),
        };
        let host = normalize_hostname(host);
        match port {
            Some(port) => reparse(&[
                self.head(self.host_start()),
                slashes,
                &host,
                ":",
                port,
                self.tail(self.components.port_end),
            ]),
            None => reparse(&[
                self.head(self.host_start()),
                slashes,
                &host,
                self.tail(self.components.port_end),
            ]),
        }
    }

    /// Replace the port.
    pub fn with_port(&self, port: u16) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let colon_needed = self.components.port_end == self.components.host_end;
        let start = if colon_needed {
            self.components.port_end
        } else {
            self.components.host_end + 1
        };
        reparse(&[
            self.head(start),
            if colon_needed { ":" } else { "" },
            &format!("{port}"),
            self.tail(self.components.port_end),
        ])
    }

    /// Drop the port and its colon.
    pub fn without_port(&self) -> Self {
        if !self.is_valid || self.components.host_end == self.components.port_end {
            return self.clone();
        }
        reparse(&[
            self.head(self.components.host_end),
            self.tail(self.components.port_end),
        ])
    }

    /// Replace the user name. An empty `user` removes it, together with the
    /// `@` when there is no password.
    pub fn with_user(&self, user: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let c = self.components;
        let mut end = c.user_end;
        if user.is_empty() {
            if c.user_end == c.password_end && end != c.host_end && self.text_at(end) == Some(b'@') {
                end += 1;
            }
            if c.user_start == end {
                return self.clone();
            }
            return reparse(&[self.head(c.user_start), self.tail(end)]);
        }

        let mut replacement = String::new();
        if self.needs_authority_slashes() {
            replacement.push_str("//");
        }
        replacement.push_str(&percent_encode_with_set(user, USER_SET));
        if end == c.host_end || (end == c.password_end && self.text_at(end) != Some(b'@')) {
            replacement.push('@');
        }
        reparse(&[self.head(c.user_start), &replacement, self.tail(end)])
    }

    /// Replace the password. An empty `pass` removes it, together with the
    /// `@` when there is no user name.
    pub fn with_pass(&self, pass: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let c = self.components;
        let mut end = c.password_end;
        if pass.is_empty() {
            if c.user_start == c.user_end && end != c.host_end && self.text_at(end) == Some(b'@') {
                end += 1;
            }
            if c.user_end == end {
                return self.clone();
            }
            return reparse(&[self.head(c.user_end), self.tail(end)]);
        }

        let mut replacement = String::new();
        if c.user_end == c.scheme_end + 1 {
            replacement.push_str("//");
        }
        replacement.push(':');
        replacement.push_str(&percent_encode_with_set(pass, USERINFO_SET));
        replacement.push('@');
        if end != c.host_end && self.text_at(end) == Some(b'@') {
            end += 1;
        }
        reparse(&[self.head(c.user_end), &replacement, self.tail(end)])
    }

    /// Replace the path. A missing leading `/` is added and every byte that
    /// may not appear in a path, `?` and `#` included, is escaped.
    pub fn with_path(&self, path: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let slash = if path.starts_with('/') { "" } else { "/" };
        let escaped = encode_percent_escapes(path);
        reparse(&[
            self.head(self.components.port_end),
            slash,
            &escaped,
            self.tail(self.components.path_end),
        ])
    }

    /// Replace the query. A leading `?` in `query` is optional.
    pub fn with_query(&self, query: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let query = query.strip_prefix('?').unwrap_or(query);
        reparse(&[
            self.head(self.components.path_end),
            "?",
            &percent_encode_with_set(query, QUERY_SET),
            self.tail(self.components.query_end),
        ])
    }

    /// Drop the query and its `?`.
    pub fn without_query(&self) -> Self {
        if !self.is_valid || self.query().is_none() {
            return self.clone();
        }
        reparse(&[
            self.head(self.components.path_end),
            self.tail(self.components.query_end),
        ])
    }

    /// Replace the fragment.
    pub fn with_fragment(&self, fragment: &str) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        reparse(&[self.head(self.components.query_end), "#", fragment])
    }

    /// Drop the fragment and its `#`.
    pub fn without_fragment(&self) -> Self {
        if !self.is_valid || !self.has_fragment() {
            return self.clone();
        }
        reparse(&[self.head(self.components.query_end)])
    }

    /// Copy without user, password and fragment, suitable for a `Referer`
    /// header.
    pub fn stripped_for_use_as_referrer(&self) -> Self {
        if !self.is_valid {
            return self.clone();
        }
        let c = self.components;
        let stripped = self.without_fragment();
        if c.user_start == c.password_end {
            return stripped;
        }
        reparse(&[
            stripped.head(c.user_start),
            stripped.slice(c.host_start(), c.query_end),
        ])
    }
}
