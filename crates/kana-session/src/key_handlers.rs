use tracing::{debug, debug_span};

use kana_core::keycode::usage;
use kana_core::romaji::{normalize, EngineMode, InputSymbol};

use super::types::{BootReport, ReportError, Response};
use super::KioskSession;

impl KioskSession {
    /// Process one raw HID boot report. Returns a response describing what
    /// the caller should draw and play.
    ///
    /// Only the first report of a press does anything; repeats while the key
    /// is held are idle, and the all-keys-up report re-arms the latch.
    pub fn handle_report(&mut self, bytes: &[u8]) -> Result<Response, ReportError> {
        let report = BootReport::parse(bytes)?;

        if report.is_release() {
            self.press_latched = false;
            return Ok(Response::idle());
        }
        if self.press_latched {
            return Ok(Response::idle());
        }
        self.press_latched = true;

        let _span = debug_span!("handle_report", ?report).entered();
        Ok(self.dispatch(report))
    }

    fn dispatch(&mut self, report: BootReport) -> Response {
        // Held chords never get here, so this toggles once per press.
        if report.ctrl() && report.keycode == usage::M {
            return self.toggle_mode();
        }

        if report.left_ctrl_only() {
            match report.keycode {
                usage::RIGHT => return self.set_volume(self.volume_settings.high),
                usage::LEFT => return self.set_volume(self.volume_settings.low),
                _ => {}
            }
        }

        self.handle_key(report.keycode)
    }

    /// Flip alphabet/romaji mode and show the new mode's label.
    pub fn toggle_mode(&mut self) -> Response {
        let mode = self.engine.toggle_mode();
        Response::show(vec![self.resolver.mode(mode)])
    }

    /// Handle one pressed key in the current mode, without latching.
    pub fn handle_key(&mut self, keycode: u8) -> Response {
        match self.engine.mode() {
            EngineMode::Alphabet => Response::show(vec![self.resolver.alphabet(keycode)]),
            EngineMode::Romaji => {
                let symbol = normalize(keycode);
                if symbol == InputSymbol::None {
                    return Response::show(Vec::new());
                }
                let step = self.engine.step(symbol);
                let cues = self.resolver.romaji(&step, self.engine.state());
                debug!(keycode, kana = %step.kana, cues = cues.len(), "romaji key");
                Response::show(cues)
            }
        }
    }

    fn set_volume(&mut self, level: u8) -> Response {
        self.volume = level;
        let mut resp = Response::show(vec![self.resolver.volume(level)]);
        resp.volume = Some(level);
        resp
    }
}
