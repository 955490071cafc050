use crate::camera::OrbitCamera;
use crate::components::{Backdrop, Hidden, MeshHandle};
use crate::engine::input::{InputEvent, InputState};
use crate::engine::time::FrameTimer;
use crate::engine::window::ViewerWindow;
use crate::grid::{build_grid_mesh, GridParams, MeshConsumer};
use crate::recording;
use crate::renderer::{MeshStore, Renderer};
use crate::scene::viewer_scene::load_viewer_scene;
use hecs::{Entity, World};
use sdl2::keyboard::Scancode;
use sdl2::Sdl;

const RECORD_DURATION: f32 = 5.0;
const RECORD_FRAME_INTERVAL: f32 = 1.0 / 60.0;

pub struct ViewerApp {
    world: World,
    meshes: MeshStore,
    primary: Entity,
    params: GridParams,
    camera: OrbitCamera,
    renderer: Renderer,
    recorder: Option<recording::Recorder>,
    record_frame_debt: f32,
}

impl ViewerApp {
    pub fn new(params: GridParams, record: bool, window: &ViewerWindow) -> Self {
        let renderer = Renderer::init();

        let mut world = World::new();
        let (meshes, primary) = load_viewer_scene(&mut world, &params);

        let recorder = if record {
            let (w, h) = window.size();
            Some(
                recording::Recorder::new(w, h, "demos/reticle.mp4")
                    .expect("Failed to start recorder"),
            )
        } else {
            None
        };

        Self {
            world,
            meshes,
            primary,
            params,
            camera: OrbitCamera::new(params.world_size * 1.6),
            renderer,
            recorder,
            record_frame_debt: 0.0,
        }
    }

    pub fn run(&mut self, sdl: &Sdl, window: &ViewerWindow) {
        let mut event_pump = sdl.event_pump().expect("Failed to get event pump");
        let mut input = InputState::new();
        let mut timer = FrameTimer::new();

        loop {
            timer.tick();
            input.update(&mut event_pump);

            if input.quit {
                break;
            }

            // [ and ] rebuild the primary grid with fewer/more cells,
            // B toggles the backdrop.
            let mut cells = self.params.cells;
            let mut toggle_backdrop = false;
            for event in &input.events {
                match event {
                    InputEvent::KeyPressed(Scancode::LeftBracket) => {
                        cells = cells.saturating_sub(1).max(1);
                    }
                    InputEvent::KeyPressed(Scancode::RightBracket) => {
                        cells = cells.saturating_add(1);
                    }
                    InputEvent::KeyPressed(Scancode::B) => toggle_backdrop = true,
                    _ => {}
                }
            }
            if cells != self.params.cells {
                self.rebuild_primary(cells);
            }
            if toggle_backdrop {
                self.toggle_backdrop();
            }

            if input.dragging {
                self.camera.orbit(input.mouse_dx, input.mouse_dy);
            }
            if input.wheel_dy != 0.0 {
                self.camera.zoom(input.wheel_dy);
            }

            let view = self.camera.view_matrix();
            let proj = self.camera.projection_matrix(window.aspect_ratio());

            self.renderer.draw_scene(&self.world, &self.meshes, &view, &proj);

            if let Some(ref mut rec) = self.recorder {
                self.record_frame_debt += timer.dt;
                while self.record_frame_debt >= RECORD_FRAME_INTERVAL {
                    rec.capture_frame();
                    self.record_frame_debt -= RECORD_FRAME_INTERVAL;
                }
                if timer.elapsed >= RECORD_DURATION {
                    self.recorder.take().unwrap().finish();
                    break;
                }
            }

            window.swap();
        }
    }

    /// Discard the primary grid's mesh data and regenerate it with a
    /// new cell count. The old GPU buffers are released by `accept`.
    fn rebuild_primary(&mut self, cells: u32) {
        self.params.cells = cells;
        let data = build_grid_mesh(&self.params);
        println!(
            "rebuilt grid: {} cells, {} vertices, {} triangles",
            cells,
            data.vertex_count(),
            data.triangle_count()
        );
        let handle = *self
            .world
            .get::<&MeshHandle>(self.primary)
            .expect("primary grid entity lost its mesh handle");
        self.meshes.get_mut(handle).accept(&data);
    }

    fn toggle_backdrop(&mut self) {
        let backdrops: Vec<Entity> = self
            .world
            .query::<&Backdrop>()
            .iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in backdrops {
            if self.world.get::<&Hidden>(entity).is_ok() {
                let _ = self.world.remove_one::<Hidden>(entity);
            } else {
                let _ = self.world.insert_one(entity, Hidden);
            }
        }
    }
}
