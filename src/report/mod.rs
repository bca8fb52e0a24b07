pub mod exec;
pub mod output;

pub use exec::exec;
pub use output::{build_report, write_json, write_ndjson, write_text};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Ndjson,
}

impl OutputFormat {
    pub fn from_flags(json: bool, ndjson: bool) -> Self {
        if json {
            OutputFormat::Json
        } else if ndjson {
            OutputFormat::Ndjson
        } else {
            OutputFormat::Text
        }
    }
}
