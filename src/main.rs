//! Cosmic Zoom entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent, TouchEvent};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use cosmic_zoom::Settings;
    use cosmic_zoom::audio::DroneAudio;
    use cosmic_zoom::journey::{JourneyState, tick};
    use cosmic_zoom::renderer::{RenderState, shapes};
    use cosmic_zoom::scenes;

    /// Application instance holding all state
    struct App {
        state: JourneyState,
        render_state: Option<RenderState>,
        audio: DroneAudio,
        settings: Settings,
        /// RNG for the noise-driven scenes
        rng: Pcg32,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        /// Last label pushed to the DOM, to skip redundant updates
        last_label: &'static str,
    }

    impl App {
        fn new(seed: u64, settings: Settings) -> Self {
            Self {
                state: JourneyState::new(),
                render_state: None,
                audio: DroneAudio::new(),
                settings,
                rng: Pcg32::seed_from_u64(seed),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_label: "",
            }
        }

        /// First genuine user gesture starts the drone; later ones are no-ops
        fn on_interaction(&mut self) {
            if self.state.begin_drone() {
                self.audio.set_master_volume(self.settings.master_volume);
                self.audio.set_muted(self.settings.muted);
                self.audio.start(self.state.audio.frequency);
            }
        }

        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_muted(self.settings.muted);
            self.settings.save();
            log::info!("Drone muted: {}", self.settings.muted);
        }

        /// Run one frame: draw the selected scene, retune the drone, advance
        fn frame(&mut self, time: f64) {
            let shape_list = scenes::draw(self.state.scene(), self.state.time, &mut self.rng);
            let vertices = shapes::tessellate(&shape_list);
            let camera_scale = self.state.scale();

            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, camera_scale) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }

            tick(&mut self.state);

            if self.audio.started() {
                self.audio.set_frequency(self.state.audio.frequency);
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Update overlay elements in the DOM (not subject to the camera)
        fn update_overlay(&mut self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            // Scene label at the bottom of the screen
            let label = self.state.scene().label();
            if label != self.last_label {
                if let Some(el) = document.get_element_by_id("scene-label") {
                    el.set_text_content(Some(label));
                }
                self.last_label = label;
            }

            // "Tap to start" prompt until the drone is running
            if let Some(el) = document.get_element_by_id("start-prompt") {
                if self.state.audio.started {
                    let _ = el.set_attribute("class", "hidden");
                } else {
                    let _ = el.set_attribute("class", "");
                }
            }

            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    let _ = el.set_attribute("class", "");
                    el.set_text_content(Some(&self.fps.to_string()));
                } else {
                    let _ = el.set_attribute("class", "hidden");
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Cosmic Zoom starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width();
        let client_h = canvas.client_height();
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize the app; the RNG seed only feeds the stateless noise
        // scenes, so wall-clock entropy is fine
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let app = Rc::new(RefCell::new(App::new(seed, settings)));

        log::info!("Journey initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height, dpr as f32).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, app.clone());
        setup_resize_handler(&canvas, app.clone());

        // Start the frame loop
        request_animation_frame(app);

        log::info!("Cosmic Zoom running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        // Mouse click - gesture boundary for audio
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                app.borrow_mut().on_interaction();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch - same gesture boundary on mobile
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                app.borrow_mut().on_interaction();
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Keyboard: any key starts the drone, `m` toggles mute,
        // `f` toggles the FPS counter
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut a = app.borrow_mut();
                match event.key().as_str() {
                    "m" | "M" => a.toggle_mute(),
                    "f" | "F" => {
                        a.settings.show_fps = !a.settings.show_fps;
                        a.settings.save();
                    }
                    _ => a.on_interaction(),
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let canvas = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let dpr = window.device_pixel_ratio();
            let width = (canvas.client_width() as f64 * dpr) as u32;
            let height = (canvas.client_height() as f64 * dpr) as u32;
            canvas.set_width(width);
            canvas.set_height(height);

            let mut a = app.borrow_mut();
            if let Some(ref mut render_state) = a.render_state {
                render_state.resize(width, height);
                render_state.pixel_ratio = dpr as f32;
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            frame_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame(time);
            a.update_overlay();
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_app::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Cosmic Zoom (native) starting...");
    log::info!("Rendering requires a browser - run with `trunk serve` for the web version");

    // Headless dry run: walk one full journey and print the scene schedule
    dry_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn dry_run() {
    use cosmic_zoom::consts::ZOOM_MIN;
    use cosmic_zoom::journey::{JourneyState, tick};

    let mut state = JourneyState::new();
    let mut scene = state.scene();
    let mut ticks: u64 = 0;

    println!("tick {ticks:>5}  zoom {:>6.3}  {}", state.zoom, scene.label());
    loop {
        tick(&mut state);
        ticks += 1;

        if state.zoom == ZOOM_MIN {
            println!("tick {ticks:>5}  zoom {:>6.3}  (loop wraps)", state.zoom);
            break;
        }
        let now = state.scene();
        if now != scene {
            println!("tick {ticks:>5}  zoom {:>6.3}  {}", state.zoom, now.label());
            scene = now;
        }
    }
}
