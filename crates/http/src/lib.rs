mod client;

pub use client::ReqwestClient;

use std::future::Future;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Transport seam for outbound service calls. Both collaborators
/// (transcription and text completion) only ever POST; a non-2xx response
/// surfaces as an error and aborts the run.
pub trait HttpClient: Send + Sync {
    fn post_json(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> impl Future<Output = Result<Vec<u8>, Error>> + Send;

    fn post_form(&self, path: &str, form: Form)
    -> impl Future<Output = Result<Vec<u8>, Error>> + Send;
}

/// Transport-neutral multipart form body.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone)]
pub enum Part {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        mime: String,
        bytes: Vec<u8>,
    },
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(Part::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.parts.push(Part::File {
            name: name.into(),
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        });
        self
    }
}
