//! Blocking HTTP/1.1 server for browsing scan results.
//!
//! Routes:
//! - `GET /`: HTML page
//! - `GET /api/variables`: JSON array of records
//!
//! One request per connection, no keep-alive. Request bodies are never read.
//! Both documents are rendered once when the site is built.

use std::{
    io::{Read, Write},
    net::{SocketAddr, TcpListener, TcpStream},
    time::Duration,
};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{HtmlRenderer, JsonRenderer, Render};
use crate::core::VariableRecord;

/// Maximum header section size (32 KiB)
const MAX_HEADER_SIZE: usize = 32 * 1024;

const READ_TIMEOUT: Duration = Duration::from_secs(5);

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

#[derive(Debug)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    fn ok(content_type: &str, body: &str) -> Self {
        Self {
            status: 200,
            headers: vec![("Content-Type".to_string(), content_type.to_string())],
            body: body.as_bytes().to_vec(),
        }
    }

    fn text(status: u16, message: &str) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), TEXT_CONTENT_TYPE.to_string())],
            body: format!("{}\n", message).into_bytes(),
        }
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        405 => "Method Not Allowed",
        _ => "Unknown",
    }
}

/// Read and parse one request head from a stream.
///
/// Returns None if the connection closed before sending anything.
pub fn read_request(stream: &mut impl Read) -> Option<Result<HttpRequest, String>> {
    let mut header_buf = Vec::with_capacity(1024);
    let mut byte = [0u8; 1];

    loop {
        match stream.read(&mut byte) {
            Ok(0) => {
                if header_buf.is_empty() {
                    return None;
                }
                return Some(Err("Connection closed mid-request".to_string()));
            }
            Ok(_) => {
                header_buf.push(byte[0]);
                if header_buf.len() > MAX_HEADER_SIZE {
                    return Some(Err("Headers too large".to_string()));
                }
                if header_buf.ends_with(b"\r\n\r\n") {
                    break;
                }
            }
            Err(e) => {
                if header_buf.is_empty() {
                    return None;
                }
                return Some(Err(format!("Read error: {}", e)));
            }
        }
    }

    let mut parsed_headers = [httparse::EMPTY_HEADER; 64];
    let mut req = httparse::Request::new(&mut parsed_headers);

    match req.parse(&header_buf) {
        Ok(httparse::Status::Complete(_)) => {}
        Ok(httparse::Status::Partial) => {
            return Some(Err("Incomplete HTTP request".to_string()));
        }
        Err(e) => return Some(Err(format!("HTTP parse error: {}", e))),
    }

    Some(Ok(HttpRequest {
        method: req.method.unwrap_or("").to_string(),
        path: req.path.unwrap_or("/").to_string(),
    }))
}

/// Write a response. Errors are ignored; the client may have disconnected.
pub fn write_response(stream: &mut impl Write, response: &HttpResponse) {
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    for (name, value) in &response.headers {
        head.push_str(&format!("{}: {}\r\n", name, value));
    }
    head.push_str("\r\n");

    let _ = stream.write_all(head.as_bytes());
    if !response.body.is_empty() {
        let _ = stream.write_all(&response.body);
    }
    let _ = stream.flush();
}

/// Pre-rendered documents served by [`Server`].
#[derive(Debug, Clone)]
pub struct Site {
    page: String,
    json: String,
}

impl Site {
    pub fn new(records: &[VariableRecord]) -> Result<Self> {
        Ok(Self {
            page: HtmlRenderer::default().render(records)?,
            json: JsonRenderer.render(records)?,
        })
    }

    pub fn route(&self, request: &HttpRequest) -> HttpResponse {
        let path = request
            .path
            .split_once('?')
            .map_or(request.path.as_str(), |(path, _)| path);

        let body = match path {
            "/" => (HTML_CONTENT_TYPE, &self.page),
            "/api/variables" => (JSON_CONTENT_TYPE, &self.json),
            _ => return HttpResponse::text(404, "Not Found"),
        };

        if request.method != "GET" {
            let mut response = HttpResponse::text(405, "Method Not Allowed");
            response
                .headers
                .push(("Allow".to_string(), "GET".to_string()));
            return response;
        }

        HttpResponse::ok(body.0, body.1)
    }
}

pub struct Server {
    listener: TcpListener,
    site: Site,
    verbose: bool,
}

impl Server {
    pub fn bind(host: &str, port: u16, site: Site, verbose: bool) -> Result<Self> {
        let listener = TcpListener::bind((host, port))
            .with_context(|| format!("Failed to bind {}:{}", host, port))?;
        Ok(Self {
            listener,
            site,
            verbose,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read server address")
    }

    /// Serve connections until the process is stopped.
    pub fn run(&self) -> Result<()> {
        for stream in self.listener.incoming() {
            match stream {
                Ok(mut stream) => self.handle(&mut stream),
                Err(e) => {
                    if self.verbose {
                        eprintln!("{} connection failed: {}", "warning:".bold().yellow(), e);
                    }
                }
            }
        }
        Ok(())
    }

    /// Serve a single connection.
    pub fn handle(&self, stream: &mut TcpStream) {
        let _ = stream.set_read_timeout(Some(READ_TIMEOUT));

        let response = match read_request(stream) {
            None => return,
            Some(Ok(request)) => {
                let response = self.site.route(&request);
                if self.verbose {
                    eprintln!("  {} {} {}", request.method, request.path, response.status);
                }
                response
            }
            Some(Err(message)) => HttpResponse::text(400, &message),
        };

        write_response(stream, &response);
    }
}
