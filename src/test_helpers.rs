//! Stub HTTP server for exercising the network paths in tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

/// A `tiny_http` server answering configured routes on an ephemeral port.
///
/// Unknown paths get a 404. Every requested path is recorded in arrival
/// order. The server shuts down when dropped.
pub struct StubServer {
    pub base_url: String,
    routes: Arc<Mutex<HashMap<String, (u16, String)>>>,
    requests: Arc<Mutex<Vec<String>>>,
    shutdown_tx: mpsc::Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubServer {
    pub fn spawn(routes: &[(&str, u16, &str)]) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("start tiny_http server");
        let base_url = format!("http://{}", server.server_addr());

        let routes: Arc<Mutex<HashMap<String, (u16, String)>>> = Arc::new(Mutex::new(
            routes
                .iter()
                .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
                .collect(),
        ));
        let served = Arc::clone(&routes);
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let path = request.url().to_string();
                seen.lock().unwrap().push(path.clone());

                let (status, body) = served
                    .lock()
                    .unwrap()
                    .get(&path)
                    .cloned()
                    .unwrap_or((404, "not found".to_string()));
                let content_type = tiny_http::Header::from_bytes(
                    &b"Content-Type"[..],
                    &b"text/html; charset=utf-8"[..],
                )
                .unwrap();
                let _ = request.respond(
                    tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(content_type),
                );
            }
        });

        Self {
            base_url,
            routes,
            requests,
            shutdown_tx,
            handle: Some(handle),
        }
    }

    /// Add or replace a route after the server has started.
    pub fn route(&self, path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Compiled rules matching the HTML produced by [`homepage`] and [`article_page`].
pub fn sample_rules() -> crate::config::SiteRules {
    sample_site("http://unused").validate("example").unwrap()
}

/// A site definition pointing at `url` with selectors for the sample pages.
pub fn sample_site(url: &str) -> crate::config::SiteConfig {
    crate::config::SiteConfig {
        url: url.to_string(),
        queries: crate::config::SiteQueries {
            homepage_article_links: ".headline a".to_string(),
            article_body: ".story-body".to_string(),
            article_title: "h1.title".to_string(),
            article_date: Some("time.published".to_string()),
        },
    }
}

/// A homepage listing `hrefs` as headline links.
pub fn homepage(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|href| format!(r#"<li class="headline"><a href="{href}">Story</a></li>"#))
        .collect();
    format!("<!doctype html><html><body><ul>{items}</ul></body></html>")
}

/// An article page with the given title, date, and body text.
pub fn article_page(title: &str, date: &str, body: &str) -> String {
    format!(
        r#"<!doctype html><html><body>
<h1 class="title">{title}</h1>
<time class="published">{date}</time>
<div class="story-body">{body}</div>
</body></html>"#
    )
}
