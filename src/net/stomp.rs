//! STOMP 1.2 text-frame codec for the chat WebSocket.
//!
//! This module owns the wire representation spoken against the backend's
//! STOMP broker. Only the subset the client uses is modeled: `CONNECT`/
//! `CONNECTED` handshake, `SUBSCRIBE`, `SEND`, broker `MESSAGE`/`ERROR`/
//! `RECEIPT`, and `DISCONNECT`. A frame is
//! `COMMAND\nheader:value…\n\nbody\0`; bare newlines between frames are
//! heartbeats and decode to `None`.
//!
//! Header values are escaped per the STOMP 1.2 rules (`\\`, `\n`, `\c`,
//! `\r`) on every frame except `CONNECT`/`CONNECTED`, which the spec exempts
//! for backward compatibility. Parsing is lenient about `\r\n` line endings.

#[cfg(test)]
#[path = "stomp_test.rs"]
mod stomp_test;

/// Error returned by [`parse_frame`].
#[derive(Debug, thiserror::Error)]
pub enum StompError {
    /// The first line is not a command this client understands.
    #[error("unknown STOMP command: {0}")]
    UnknownCommand(String),
    /// A header line has no `:` separator.
    #[error("malformed STOMP header: {0}")]
    MalformedHeader(String),
    /// A header value uses an escape sequence the spec does not define.
    #[error("invalid escape sequence in header value")]
    InvalidEscape,
}

/// Frame commands used by this client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Connect,
    Connected,
    Subscribe,
    Send,
    Message,
    Receipt,
    Error,
    Disconnect,
}

impl Command {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Connect => "CONNECT",
            Self::Connected => "CONNECTED",
            Self::Subscribe => "SUBSCRIBE",
            Self::Send => "SEND",
            Self::Message => "MESSAGE",
            Self::Receipt => "RECEIPT",
            Self::Error => "ERROR",
            Self::Disconnect => "DISCONNECT",
        }
    }

    fn from_line(line: &str) -> Result<Self, StompError> {
        match line {
            "CONNECT" => Ok(Self::Connect),
            "CONNECTED" => Ok(Self::Connected),
            "SUBSCRIBE" => Ok(Self::Subscribe),
            "SEND" => Ok(Self::Send),
            "MESSAGE" => Ok(Self::Message),
            "RECEIPT" => Ok(Self::Receipt),
            "ERROR" => Ok(Self::Error),
            "DISCONNECT" => Ok(Self::Disconnect),
            other => Err(StompError::UnknownCommand(other.to_owned())),
        }
    }

    /// CONNECT/CONNECTED headers are exempt from escaping per the spec.
    fn escapes_headers(self) -> bool {
        !matches!(self, Self::Connect | Self::Connected)
    }
}

/// A single STOMP frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    /// Header order is preserved; on repeated names the first entry wins,
    /// matching the spec's precedence rule.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Frame {
    #[must_use]
    pub fn new(command: Command) -> Self {
        Self { command, headers: Vec::new(), body: String::new() }
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// First value for `name`, if present.
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Serialize a frame to its wire form, NUL terminator included.
#[must_use]
pub fn encode_frame(frame: &Frame) -> String {
    let escape = frame.command.escapes_headers();
    let mut out = String::new();
    out.push_str(frame.command.as_str());
    out.push('\n');
    for (name, value) in &frame.headers {
        if escape {
            out.push_str(&escape_header(name));
            out.push(':');
            out.push_str(&escape_header(value));
        } else {
            out.push_str(name);
            out.push(':');
            out.push_str(value);
        }
        out.push('\n');
    }
    out.push('\n');
    out.push_str(&frame.body);
    out.push('\0');
    out
}

/// Parse one frame from a WebSocket text message.
///
/// Returns `Ok(None)` for heartbeats (messages that are only EOLs). A
/// missing NUL terminator is tolerated; everything after the blank line is
/// taken as the body.
///
/// # Errors
///
/// Returns [`StompError`] for unknown commands, separator-less header lines,
/// and undefined escape sequences.
pub fn parse_frame(raw: &str) -> Result<Option<Frame>, StompError> {
    let raw = raw.strip_suffix('\0').unwrap_or(raw);
    if raw.trim_matches(['\r', '\n']).is_empty() {
        return Ok(None);
    }

    let mut lines = raw.split('\n');
    let command_line = lines.next().unwrap_or_default();
    let command = Command::from_line(command_line.trim_end_matches('\r'))?;
    let unescape_headers = command.escapes_headers();

    let mut headers = Vec::new();
    let mut consumed = command_line.len() + 1;
    for line in lines {
        let trimmed = line.strip_suffix('\r').unwrap_or(line);
        consumed += line.len() + 1;
        if trimmed.is_empty() {
            break;
        }
        let Some((name, value)) = trimmed.split_once(':') else {
            return Err(StompError::MalformedHeader(trimmed.to_owned()));
        };
        let (name, value) = if unescape_headers {
            (unescape_header(name)?, unescape_header(value)?)
        } else {
            (name.to_owned(), value.to_owned())
        };
        // First occurrence wins.
        if !headers.iter().any(|(existing, _)| *existing == name) {
            headers.push((name, value));
        }
    }

    let body = raw.get(consumed..).unwrap_or_default().to_owned();
    Ok(Some(Frame { command, headers, body }))
}

fn escape_header(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            ':' => out.push_str("\\c"),
            other => out.push(other),
        }
    }
    out
}

fn unescape_header(value: &str) -> Result<String, StompError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('c') => out.push(':'),
            _ => return Err(StompError::InvalidEscape),
        }
    }
    Ok(out)
}

/// The `CONNECT` frame opening a session, with the bearer token attached the
/// way the backend's STOMP interceptor expects.
#[must_use]
pub fn connect_frame(host: &str, token: Option<&str>) -> Frame {
    let mut frame = Frame::new(Command::Connect)
        .header("accept-version", "1.2")
        .header("host", host)
        .header("heart-beat", "0,0");
    if let Some(token) = token {
        frame = frame.header("Authorization", &format!("Bearer {token}"));
    }
    frame
}

/// Subscribe to a broker topic.
#[must_use]
pub fn subscribe_frame(subscription_id: &str, destination: &str) -> Frame {
    Frame::new(Command::Subscribe)
        .header("id", subscription_id)
        .header("destination", destination)
}

/// Send a JSON payload to an application destination.
#[must_use]
pub fn send_frame(destination: &str, body: &serde_json::Value) -> Frame {
    let body = body.to_string();
    Frame::new(Command::Send)
        .header("destination", destination)
        .header("content-type", "application/json")
        .header("content-length", &body.len().to_string())
        .body(body)
}

/// The polite goodbye before closing the socket.
#[must_use]
pub fn disconnect_frame() -> Frame {
    Frame::new(Command::Disconnect)
}
