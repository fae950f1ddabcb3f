// web/ - Browser shell
//
// Wires the page: canvases, buttons, readouts, audio, resize, visibility
// and the requestAnimationFrame loop that never stops.

mod audio;
mod canvas;
mod dom;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::Params;
use crate::error::WebError;
use crate::input::{Action, Cue};
use crate::scene::{NOISE_CANVAS, POWER_READOUT, SPHERE_CANVAS, TEMPERATURE_READOUT};
use crate::Luminary;
use audio::Soundtrack;
use canvas::{NoiseCanvas, SphereCanvas};

/// Entry point called by the page once the module is loaded
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("luminary starting");

    run().map_err(|e| {
        log::error!("mount failed: {e}");
        JsValue::from(e)
    })
}

struct Readouts {
    temperature: HtmlElement,
    power: HtmlElement,
}

impl Readouts {
    fn attach() -> Result<Self, WebError> {
        Ok(Self {
            temperature: dom::element(TEMPERATURE_READOUT)?,
            power: dom::element(POWER_READOUT)?,
        })
    }

    fn update(&self, world: &Luminary) {
        self.temperature.set_text_content(Some(&world.temperature_text()));
        self.power.set_text_content(Some(&world.power_text()));
    }
}

fn run() -> Result<(), WebError> {
    let sphere = SphereCanvas::attach(SPHERE_CANVAS)?;
    let noise = Rc::new(NoiseCanvas::attach(NOISE_CANVAS)?);
    let (w, h) = noise.fit_viewport()?;

    // Unseeded on purpose: every visit gets its own static
    let seed = (js_sys::Math::random() * 9007199254740992.0) as u64;
    let world = Rc::new(RefCell::new(Luminary::with_params(Params::default(), w, h, seed)?));

    let readouts = Readouts::attach()?;
    let soundtrack = Rc::new(Soundtrack::load()?);

    for action in Action::ALL {
        let world = world.clone();
        let soundtrack = soundtrack.clone();
        dom::on_click(action.element_id(), move || {
            let cue = world.borrow_mut().apply(action);
            match cue {
                Ok(Cue::PlayMusic) => soundtrack.play_music(),
                Ok(Cue::None) => {}
                Err(e) => log::warn!("{action:?} rejected: {e}"),
            }
        })?;
    }

    {
        let world = world.clone();
        let noise = noise.clone();
        dom::on_window("resize", move |_| match noise.fit_viewport() {
            Ok((w, h)) => world.borrow_mut().resize(w, h),
            Err(e) => log::warn!("resize failed: {e}"),
        })?;
    }

    {
        // rAF pauses while hidden; don't replay the gap as physics
        let world = world.clone();
        dom::on_document("visibilitychange", move |_| match dom::document() {
            Ok(doc) if !doc.hidden() => world.borrow_mut().reset_clock(),
            Ok(_) => {}
            Err(e) => log::warn!("visibility check failed: {e}"),
        })?;
    }

    soundtrack.start();
    start_loop(world, sphere, noise, readouts)
}

fn start_loop(
    world: Rc<RefCell<Luminary>>,
    sphere: SphereCanvas,
    noise: Rc<NoiseCanvas>,
    readouts: Readouts,
) -> Result<(), WebError> {
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        {
            let mut world = world.borrow_mut();
            world.tick(now);

            if let Err(e) = sphere.draw(world.sphere()) {
                log::error!("sphere draw failed: {e}");
            }
            if let Err(e) = noise.blit(world.noise()) {
                log::error!("noise blit failed: {e}");
            }
            readouts.update(&world);
        }

        if let Some(cb) = f.borrow().as_ref() {
            if let Err(e) = dom::request_animation_frame(cb) {
                log::error!("{e}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    if let Some(cb) = g.borrow().as_ref() {
        dom::request_animation_frame(cb)?;
    }
    log::info!("frame loop running");
    Ok(())
}
