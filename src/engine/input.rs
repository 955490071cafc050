use sdl2::event::Event;
use sdl2::keyboard::Scancode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;
use std::collections::HashSet;

pub enum InputEvent {
    KeyPressed(Scancode),
}

pub struct InputState {
    pub keys: HashSet<Scancode>,
    /// Edge events for this frame, in arrival order.
    pub events: Vec<InputEvent>,
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub wheel_dy: f32,
    pub dragging: bool,
    pub quit: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            events: Vec::new(),
            mouse_dx: 0.0,
            mouse_dy: 0.0,
            wheel_dy: 0.0,
            dragging: false,
            quit: false,
        }
    }

    pub fn update(&mut self, event_pump: &mut EventPump) {
        self.events.clear();
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
        self.wheel_dy = 0.0;

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(Scancode::Escape),
                    ..
                } => self.quit = true,
                Event::KeyDown {
                    scancode: Some(sc),
                    repeat: false,
                    ..
                } => {
                    self.keys.insert(sc);
                    self.events.push(InputEvent::KeyPressed(sc));
                }
                Event::KeyUp {
                    scancode: Some(sc), ..
                } => {
                    self.keys.remove(&sc);
                }
                Event::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.dragging = true,
                Event::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => self.dragging = false,
                Event::MouseMotion { xrel, yrel, .. } => {
                    self.mouse_dx += xrel as f32;
                    self.mouse_dy += yrel as f32;
                }
                Event::MouseWheel { y, .. } => {
                    self.wheel_dy += y as f32;
                }
                _ => {}
            }
        }
    }

    #[allow(dead_code)]
    pub fn is_key_held(&self, sc: Scancode) -> bool {
        self.keys.contains(&sc)
    }
}
