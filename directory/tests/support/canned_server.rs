//! Loopback HTTP server serving one canned response per test.
//!
//! Shared by the adapter and headless driver integration tests.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use url::Url;

/// Two records in the remote source's JSON shape.
pub const TWO_USERS: &str = r#"[
  {
    "id": 1,
    "name": "Leanne Graham",
    "username": "Bret",
    "email": "Sincere@april.biz",
    "address": {
      "street": "Kulas Light",
      "suite": "Apt. 556",
      "city": "Gwenborough",
      "zipcode": "92998-3874",
      "geo": { "lat": "-37.3159", "lng": "81.1496" }
    },
    "phone": "1-770-736-8031 x56442",
    "website": "hildegard.org",
    "company": {
      "name": "Romaguera-Crona",
      "catchPhrase": "Multi-layered client-server neural-net",
      "bs": "harness real-time e-markets"
    }
  },
  {
    "id": 2,
    "name": "Ervin Howell",
    "username": "Antonette",
    "email": "Shanna@melissa.tv",
    "address": {
      "street": "Victor Plains",
      "suite": "Suite 879",
      "city": "Wisokyburgh",
      "zipcode": "90566-7771"
    },
    "phone": "010-692-6593 x09125",
    "website": "anastasia.net",
    "company": {
      "name": "Deckow-Crist",
      "catchPhrase": "Proactive didactic contingency",
      "bs": "synergize scalable supply-chains"
    }
  }
]"#;

/// Loopback server answering exactly one request.
pub struct CannedServer {
    /// URL of the single `/users` resource.
    pub endpoint: Url,
    request: JoinHandle<String>,
}

impl CannedServer {
    /// Serve `status_line` and `body` to the first connection.
    pub async fn respond(status_line: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("listener address");
        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let head = read_request_head(&mut socket).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\n\
                 content-type: application/json\r\n\
                 content-length: {}\r\n\
                 connection: close\r\n\r\n{body}",
                body.len()
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write response");
            socket.shutdown().await.expect("shutdown socket");
            head
        });
        Self {
            endpoint: Url::parse(&format!("http://{addr}/users")).expect("endpoint URL"),
            request,
        }
    }

    /// Accept the first connection and never answer it.
    pub async fn silent() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind listener");
        let addr = listener.local_addr().expect("listener address");
        let request = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept connection");
            let head = read_request_head(&mut socket).await;
            let mut rest = Vec::new();
            // Hold the connection open until the client gives up.
            socket.read_to_end(&mut rest).await.ok();
            head
        });
        Self {
            endpoint: Url::parse(&format!("http://{addr}/users")).expect("endpoint URL"),
            request,
        }
    }

    /// Raw request line and headers the server received.
    pub async fn request_head(self) -> String {
        self.request.await.expect("server task")
    }
}

async fn read_request_head(socket: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0_u8; 1024];
    while !head.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = socket.read(&mut buf).await.expect("read request");
        if read == 0 {
            break;
        }
        head.extend(buf.iter().take(read));
    }
    String::from_utf8_lossy(&head).into_owned()
}
