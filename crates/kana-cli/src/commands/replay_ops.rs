use std::path::Path;

use serde::Serialize;

use kana_core::cue::DisplayCue;
use kana_session::{KioskSession, Response};

use super::die;
use crate::replay::{read_reports, RecordedReport};

/// A non-idle response, tagged with the report line that caused it.
#[derive(Debug, Serialize)]
pub struct ReplayEvent {
    pub line: usize,
    pub clear: bool,
    pub cues: Vec<DisplayCue>,
    pub audio: Option<String>,
    pub volume: Option<u8>,
}

impl ReplayEvent {
    fn new(line: usize, resp: Response) -> Self {
        Self {
            line,
            clear: resp.clear,
            audio: resp.audio.map(|a| a.as_str().to_string()),
            cues: resp.cues,
            volume: resp.volume,
        }
    }
}

/// Feed recorded reports through one session. Reports the session rejects
/// are logged to stderr and skipped.
pub fn replay(reports: &[RecordedReport]) -> Vec<ReplayEvent> {
    let mut session = KioskSession::new();
    let mut events = Vec::new();
    for report in reports {
        match session.handle_report(&report.bytes) {
            Ok(resp) if resp.is_idle() => {}
            Ok(resp) => events.push(ReplayEvent::new(report.line, resp)),
            Err(e) => eprintln!("line {}: {e}", report.line),
        }
    }
    events
}

pub fn replay_cmd(file: &str, json: bool) {
    let reports = die!(read_reports(Path::new(file)), "Error reading {file}: {}");
    for event in replay(&reports) {
        if json {
            let line = die!(serde_json::to_string(&event), "Error: {}");
            println!("{line}");
            continue;
        }
        let texts: Vec<&str> = event.cues.iter().map(|c| c.text.as_str()).collect();
        let mut out = format!("{:>4}: {}", event.line, texts.join(" | "));
        if let Some(ref audio) = event.audio {
            out.push_str(&format!("  ♪{audio}"));
        }
        if let Some(level) = event.volume {
            out.push_str(&format!("  vol={level}"));
        }
        println!("{out}");
    }
}
