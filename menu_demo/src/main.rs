//! Menu demo replaying a scripted input session against the headless backend
//!
//! Usage: `menu_demo [config.toml|config.ron]`

use overlay_menu::foundation::{logging, math::rgb};
use overlay_menu::prelude::*;
use overlay_menu::ui::backend::headless::{
    GeometryLog, HeadlessFont, HeadlessFontLoader, HeadlessGeometry, TextLog,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

// Frame pacing for the replay
const FRAME_TIME: Duration = Duration::from_millis(16);
const SHADOW_OFFSET: f32 = 2.0;

/// One host event, in raw window coordinates (Y down)
#[derive(Debug, Clone, Copy)]
enum ScriptedEvent {
    Key(Key, KeyModifiers),
    Move(f64, f64),
    Press(f64, f64, MouseButton),
    Release(f64, f64, MouseButton),
    Resize(f32, f32),
    Frames(u32),
}

pub struct MenuDemoApp {
    panel: Panel<HeadlessFont, HeadlessGeometry>,
    name_box: TextBoxId,
    quit_requested: Rc<Cell<bool>>,
    text_log: TextLog,
    geometry_log: Rc<RefCell<GeometryLog>>,
    clock: Instant,
}

impl MenuDemoApp {
    pub fn new(config: &MenuConfig) -> Result<Self, MenuError> {
        let text_log = TextLog::default();
        let geometry_log = Rc::new(RefCell::new(GeometryLog::default()));
        let mut panel = Panel::load(
            config,
            &HeadlessFontLoader::with_log(Rc::clone(&text_log)),
            HeadlessGeometry::with_log(Rc::clone(&geometry_log)),
        )?;

        let rate = panel.text_scale_rate();
        let quit_requested = Rc::new(Cell::new(false));

        let start = panel.add_label("Start");
        panel.attach_label_shadow(start, SHADOW_OFFSET, rgb(0.1, 0.1, 0.1));
        if let Some(label) = panel.label_mut(start) {
            label.set_position(0.0, 60.0);
            label.set_color(rgb(1.0, 1.0, 1.0));
            label.set_on_hover(move |label, _| label.grow(rate));
            label.set_on_not_hover(move |label| label.shrink(rate));
            label.set_on_release(|label, event| {
                if event.in_box {
                    log::info!("'{}' selected", label.text());
                }
            });
        }

        let quit = panel.add_label("Quit");
        panel.attach_label_shadow(quit, SHADOW_OFFSET, rgb(0.1, 0.1, 0.1));
        if let Some(label) = panel.label_mut(quit) {
            label.set_position(0.0, -60.0);
            label.set_color(rgb(1.0, 0.4, 0.4));
            label.set_on_hover(move |label, _| label.grow(rate));
            label.set_on_not_hover(move |label| label.shrink(rate));
            let quit_requested = Rc::clone(&quit_requested);
            label.set_on_release(move |_, event| {
                if event.in_box {
                    quit_requested.set(true);
                }
            });
        }

        let name_box = panel.add_textbox("", 200.0, 30.0, 2.0)?;
        if let Some(textbox) = panel.textbox_mut(name_box) {
            textbox.set_max_length(Some(16));
            textbox.set_color(rgb(1.0, 1.0, 1.0));
        }

        Ok(Self {
            panel,
            name_box,
            quit_requested,
            text_log,
            geometry_log,
            clock: Instant::now(),
        })
    }

    /// Replay `events`, stopping early once "Quit" is released
    pub fn run(&mut self) {
        for event in script(self.panel.window()) {
            log::debug!("Replaying {event:?}");
            self.handle(event);
            if self.quit_requested.get() {
                log::info!("Quit selected, stopping replay");
                break;
            }
        }
        self.report();
    }

    fn handle(&mut self, event: ScriptedEvent) {
        match event {
            ScriptedEvent::Key(key, mods) => {
                if !self.panel.dispatch_key(key, mods) {
                    log::debug!("Key {key:?} unused");
                }
            }
            ScriptedEvent::Move(x, y) => self.panel.dispatch_hover(x, y),
            ScriptedEvent::Press(x, y, button) => self.panel.dispatch_click(x, y, button),
            ScriptedEvent::Release(x, y, button) => self.panel.dispatch_release(x, y, button),
            ScriptedEvent::Resize(width, height) => self.panel.resize_window(width, height),
            ScriptedEvent::Frames(count) => {
                for _ in 0..count {
                    self.clock += FRAME_TIME;
                    self.panel.draw_at(self.clock);
                }
            }
        }
    }

    fn report(&self) {
        if let Some(textbox) = self.panel.textbox(self.name_box) {
            log::info!("Name entered: '{}'", textbox.text());
        }
        for label in self.panel.labels() {
            log::info!("Label '{}' at scale {:.2}", label.text(), label.scale());
        }
        let geometry = self.geometry_log.borrow();
        log::info!(
            "{} text draws, {} geometry draws over {} uploaded meshes",
            self.text_log.borrow().len(),
            geometry.draws.len(),
            geometry.uploads.len()
        );
    }
}

/// Open the menu, hover "Start", type a name, then select "Quit"
fn script(window: WindowSize) -> Vec<ScriptedEvent> {
    let cx = f64::from(window.width) / 2.0;
    let cy = f64::from(window.height) / 2.0;
    let no_mods = KeyModifiers::empty();

    let mut events = vec![
        ScriptedEvent::Key(Key::M, no_mods),
        ScriptedEvent::Frames(2),
        ScriptedEvent::Move(cx, cy - 60.0),
        ScriptedEvent::Frames(10),
        ScriptedEvent::Move(cx, cy),
        ScriptedEvent::Press(cx, cy, MouseButton::Left),
        ScriptedEvent::Release(cx, cy, MouseButton::Left),
        ScriptedEvent::Key(Key::A, KeyModifiers::SHIFT),
    ];
    events.extend("lice".chars().map(Key::from_char).map(|key| ScriptedEvent::Key(key, no_mods)));
    events.extend([
        ScriptedEvent::Frames(40),
        ScriptedEvent::Press(cx, cy + 60.0, MouseButton::Left),
        ScriptedEvent::Release(cx, cy + 60.0, MouseButton::Left),
        ScriptedEvent::Resize(window.width * 1.5, window.height * 1.5),
        ScriptedEvent::Frames(10),
    ]);
    events
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting overlay menu demo");

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading menu config from {path}");
            MenuConfig::load_from_file(&path)?
        }
        None => MenuConfig::default(),
    };

    let mut app = MenuDemoApp::new(&config)?;
    app.run();

    log::info!("Menu demo completed successfully");
    Ok(())
}
