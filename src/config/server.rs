//! Server configuration constants.

/// Address the HTTP/WebSocket server binds to.
pub const BIND_ADDR: (&str, u16) = ("127.0.0.1", 8080);

/// Route of the display WebSocket.
pub const WS_ROUTE: &str = "/ws";
