// audio.rs - Background music and ambience
//
// Browsers may refuse playback until the first user gesture; a refused
// play() is logged and otherwise ignored.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlAudioElement, HtmlMediaElement};

use crate::error::WebError;
use crate::scene::{AMBIENCE_SRC, MUSIC_SRC, MUSIC_VOLUME};

pub struct Soundtrack {
    music: HtmlAudioElement,
    ambience: HtmlAudioElement,
}

impl Soundtrack {
    pub fn load() -> Result<Self, WebError> {
        let music = HtmlAudioElement::new_with_src(MUSIC_SRC).map_err(WebError::js)?;
        music.set_volume(MUSIC_VOLUME);

        let ambience = HtmlAudioElement::new_with_src(AMBIENCE_SRC).map_err(WebError::js)?;

        // Replay on end instead of `loop` so a failed restart is visible in the log
        let replay = ambience.clone();
        let on_ended = Closure::wrap(Box::new(move || play(&replay, "ambience")) as Box<dyn FnMut()>);
        ambience
            .add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref())
            .map_err(WebError::js)?;
        on_ended.forget();

        Ok(Self { music, ambience })
    }

    pub fn start(&self) {
        play(&self.music, "music");
        play(&self.ambience, "ambience");
    }

    pub fn play_music(&self) {
        play(&self.music, "music");
    }
}

fn play(el: &HtmlMediaElement, name: &'static str) {
    match el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("{name} playback refused: {e:?}");
            }
        }),
        Err(e) => log::warn!("{name} playback failed: {e:?}"),
    }
}
