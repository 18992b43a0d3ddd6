//! Speech synthesis boundary.
//!
//! The board core speaks through the [`SpeechEngine`] trait so its behaviour
//! can be tested natively with a recording fake. [`WebSpeech`] is the real
//! implementation and the only code in the crate that talks to the Web
//! Speech API.

use web_sys::{SpeechSynthesis, SpeechSynthesisUtterance};

/// Text-to-speech sink used by the board.
pub trait SpeechEngine {
    /// Stop any utterance currently playing or queued.
    fn cancel_all(&self);

    /// Queue `text` for synthesis, tagged with the given BCP 47 locale.
    fn speak(&self, text: &str, locale: &str);
}

/// [`SpeechEngine`] backed by the browser's `speechSynthesis` global.
pub struct WebSpeech {
    synth: SpeechSynthesis,
}

impl WebSpeech {
    /// Grab the host's speech synthesis handle, or `None` when the
    /// environment does not expose one. Boards constructed without an
    /// engine stay silent rather than failing.
    pub fn acquire() -> Option<Self> {
        let synth = web_sys::window()?.speech_synthesis().ok()?;
        Some(Self { synth })
    }
}

impl SpeechEngine for WebSpeech {
    fn cancel_all(&self) {
        self.synth.cancel();
    }

    fn speak(&self, text: &str, locale: &str) {
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => {
                utterance.set_lang(locale);
                self.synth.speak(&utterance);
            }
            Err(err) => log::warn!("speech synthesis rejected utterance: {err:?}"),
        }
    }
}
