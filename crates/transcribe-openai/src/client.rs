use bisub_http::{Form, HttpClient};

use crate::error::Error;
use crate::types::TranscriptionResponse;

pub const TRANSCRIPTIONS_PATH: &str = "/v1/audio/transcriptions";
pub const DEFAULT_TRANSCRIBE_MODEL: &str = "whisper-1";

/// Speech-recognition client: uploads one audio chunk and returns timed
/// segments. The vocabulary hint rides along as the `prompt` field to bias
/// recognition toward domain terms.
pub struct TranscribeOpenAiClient<C> {
    http: C,
    model: String,
}

impl<C: HttpClient> TranscribeOpenAiClient<C> {
    pub fn new(http: C) -> Self {
        Self {
            http,
            model: DEFAULT_TRANSCRIBE_MODEL.to_string(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub async fn transcribe(
        &self,
        file_name: &str,
        audio: Vec<u8>,
        prompt: &str,
    ) -> Result<TranscriptionResponse, Error> {
        let form = Form::new()
            .file("file", file_name, "audio/mpeg", audio)
            .text("model", self.model.clone())
            .text("response_format", "verbose_json")
            .text("prompt", prompt);
        let bytes = self
            .http
            .post_form(TRANSCRIPTIONS_PATH, form)
            .await
            .map_err(Error::Http)?;
        let response = serde_json::from_slice(&bytes)?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bisub_http::Part;
    use std::sync::Mutex;

    struct FakeHttp {
        reply: &'static str,
        forms: Mutex<Vec<(String, Form)>>,
    }

    impl HttpClient for FakeHttp {
        async fn post_json(
            &self,
            _path: &str,
            _body: Vec<u8>,
        ) -> Result<Vec<u8>, bisub_http::Error> {
            unimplemented!("transcription client never posts JSON")
        }

        async fn post_form(&self, path: &str, form: Form) -> Result<Vec<u8>, bisub_http::Error> {
            self.forms.lock().unwrap().push((path.to_string(), form));
            Ok(self.reply.as_bytes().to_vec())
        }
    }

    const REPLY: &str = r#"{
        "task": "transcribe",
        "language": "japanese",
        "duration": 123.5,
        "text": "今日は天気です。",
        "segments": [
            {"id": 0, "start": 0.0, "end": 4.2, "text": "今日は天気です。", "avg_logprob": -0.3},
            {"id": 1, "start": 4.2, "end": 7.9, "text": "明日は雨です。", "avg_logprob": -0.4}
        ]
    }"#;

    #[tokio::test]
    async fn parses_duration_and_segments() {
        let client = TranscribeOpenAiClient::new(FakeHttp {
            reply: REPLY,
            forms: Mutex::new(Vec::new()),
        });
        let response = client
            .transcribe("audio0.mp3", vec![1, 2, 3], "機械学習")
            .await
            .unwrap();

        assert_eq!(response.duration, 123.5);
        assert_eq!(response.segments.len(), 2);
        assert_eq!(response.segments[1].text, "明日は雨です。");
        assert_eq!(response.segments[1].start, 4.2);
    }

    #[tokio::test]
    async fn form_carries_model_format_and_prompt() {
        let client = TranscribeOpenAiClient::new(FakeHttp {
            reply: REPLY,
            forms: Mutex::new(Vec::new()),
        });
        client
            .transcribe("audio0.mp3", vec![0xff], "確率論、統計")
            .await
            .unwrap();

        let forms = client.http.forms.lock().unwrap();
        let (path, form) = &forms[0];
        assert_eq!(path, TRANSCRIPTIONS_PATH);

        let mut texts = Vec::new();
        let mut file_names = Vec::new();
        for part in &form.parts {
            match part {
                Part::Text { name, value } => texts.push((name.as_str(), value.as_str())),
                Part::File {
                    name, file_name, ..
                } => file_names.push((name.as_str(), file_name.as_str())),
            }
        }
        assert_eq!(file_names, [("file", "audio0.mp3")]);
        assert!(texts.contains(&("model", "whisper-1")));
        assert!(texts.contains(&("response_format", "verbose_json")));
        assert!(texts.contains(&("prompt", "確率論、統計")));
    }

    #[tokio::test]
    async fn reply_without_segments_is_fatal() {
        let client = TranscribeOpenAiClient::new(FakeHttp {
            reply: r#"{"text": "plain text reply"}"#,
            forms: Mutex::new(Vec::new()),
        });
        let result = client.transcribe("a.mp3", vec![], "").await;
        assert!(result.is_err());
    }
}
