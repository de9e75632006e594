//! Subtitle and tabular payload rendering.
//!
//! Consumes time-aligned text tracks and produces the two artifact formats:
//! SRT blocks (`index\nstart --> end\ntext\n\n`) and CSV rows of
//! `index,start,end,text`. Timestamps render as `HH:MM:SS,mmm`.

mod timestamp;

pub use timestamp::format_timestamp;

/// One time-aligned text entry, in global seconds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Cue {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Cue {
    pub fn new(start: f64, end: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }
}

/// Render sequential-numbered SRT blocks.
pub fn render_srt(cues: &[Cue]) -> String {
    let mut srt = String::new();
    for (i, cue) in cues.iter().enumerate() {
        srt.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(cue.start),
            format_timestamp(cue.end),
            cue.text
        ));
    }
    srt.push('\n');
    srt
}

/// Render CSV rows of `index,start,end,text`, newline-terminated. Fields
/// containing a comma, quote, or newline are quoted with doubled quotes;
/// the timestamp fields carry a comma before the milliseconds, so they are
/// always quoted.
pub fn render_csv(cues: &[Cue]) -> String {
    let mut csv = String::new();
    for (i, cue) in cues.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            i + 1,
            csv_field(&format_timestamp(cue.start)),
            csv_field(&format_timestamp(cue.end)),
            csv_field(&cue.text)
        ));
    }
    csv
}

fn csv_field(text: &str) -> String {
    if text.contains([',', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
