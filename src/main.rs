//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::consts::MAX_FRAME_MS;
    use brick_breaker::input::{Key, key_down, key_up};
    use brick_breaker::platform::CanvasSurface;
    use brick_breaker::{Game, GameConfig};

    /// Canvas element the game paints into
    const CANVAS_ID: &str = "gameScreen";

    /// Game instance plus its frame timing
    struct App {
        game: Game,
        surface: CanvasSurface,
        last_time: f64,
    }

    impl App {
        fn frame(&mut self, time: f64) {
            // First frame has no delta; long stalls (tab switch) are clamped
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) as f32).min(MAX_FRAME_MS)
            } else {
                0.0
            };
            self.last_time = time;

            self.surface.clear(self.game.width(), self.game.height());
            self.game.update(dt);
            self.game.draw(&mut self.surface);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id(CANVAS_ID)
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let seed = js_sys::Date::now() as u64;
        let config = GameConfig {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
            seed,
            ..Default::default()
        };

        let game = match Game::new(config) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Cannot start: {}", e);
                return;
            }
        };
        log::info!("Game initialized with seed: {}", seed);

        let app = Rc::new(RefCell::new(App {
            game,
            surface: CanvasSurface::new(ctx),
            last_time: 0.0,
        }));

        setup_input_handlers(app.clone());
        request_animation_frame(app);

        log::info!("Brick Breaker running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    event.prevent_default();
                    key_down(&mut app.borrow_mut().game, key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(key) = Key::from_name(&event.key()) {
                    key_up(&mut app.borrow_mut().game, key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        app.borrow_mut().frame(time);
        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    //! Headless runner: the autopilot plays until the session ends

    use brick_breaker::input::{self, Key};
    use brick_breaker::render::RecordingSurface;
    use brick_breaker::{Game, GameConfig, Result};

    /// 60 Hz frames
    const FRAME_MS: f32 = 1000.0 / 60.0;
    /// Give up after five minutes of game time
    const MAX_FRAMES: u32 = 60 * 60 * 5;

    pub fn run() -> Result<()> {
        let config = match std::env::args().nth(1) {
            Some(path) => {
                log::info!("Loading config from {}", path);
                GameConfig::load(path)?
            }
            None => GameConfig::default(),
        };

        let mut game = Game::new(config)?;
        let mut surface = RecordingSurface::new();
        input::key_down(&mut game, Key::Start);

        let mut held: Option<Key> = None;
        let mut frames = 0;
        while !game.state().is_terminal() && frames < MAX_FRAMES {
            let wanted = input::autopilot(&game);
            if wanted != held {
                if let Some(key) = held {
                    input::key_up(&mut game, key);
                }
                if let Some(key) = wanted {
                    input::key_down(&mut game, key);
                }
                held = wanted;
            }

            game.update(FRAME_MS);
            surface.clear();
            game.draw(&mut surface);
            frames += 1;
        }

        log::info!("Last frame painted {} commands", surface.commands.len());
        println!(
            "{} after {} frames: level {}/{}, score {}, lives {}",
            game.state().as_str(),
            frames,
            game.current_level() + 1,
            game.level_count(),
            game.score(),
            game.lives()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native, headless) starting...");

    if let Err(e) = native::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
