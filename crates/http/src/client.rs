use crate::{Error, Form, HttpClient, Part};

/// `reqwest`-backed transport with a fixed base URL and optional bearer token.
#[derive(Debug, Clone)]
pub struct ReqwestClient {
    api_base: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            api_key: None,
            client: reqwest::Client::new(),
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn request(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.api_base.trim_end_matches('/'), path);
        let mut request = self.client.post(url);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        request
    }
}

impl HttpClient for ReqwestClient {
    async fn post_json(&self, path: &str, body: Vec<u8>) -> Result<Vec<u8>, Error> {
        let response = self
            .request(path)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn post_form(&self, path: &str, form: Form) -> Result<Vec<u8>, Error> {
        let mut multipart = reqwest::multipart::Form::new();
        for part in form.parts {
            multipart = match part {
                Part::Text { name, value } => multipart.text(name, value),
                Part::File {
                    name,
                    file_name,
                    mime,
                    bytes,
                } => multipart.part(
                    name,
                    reqwest::multipart::Part::bytes(bytes)
                        .file_name(file_name)
                        .mime_str(&mime)?,
                ),
            };
        }
        let response = self.request(path).multipart(multipart).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
