mod app;
mod camera;
mod components;
mod engine;
mod grid;
mod recording;
mod renderer;
mod scene;

use app::ViewerApp;
use clap::Parser;
use engine::window::ViewerWindow;
use grid::GridParams;

#[derive(Parser)]
#[command(name = "reticle", about = "Grid overlay mesh viewer")]
struct Args {
    /// Number of grid divisions along each axis
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    cells: u32,

    /// Total span of the grid in world units
    #[arg(long, default_value_t = 1.0, value_parser = parse_world_size)]
    size: f32,

    /// Half-width of each line stroke in world units
    #[arg(long, default_value_t = 0.005, value_parser = parse_thickness)]
    thickness: f32,

    /// Record 5 seconds of video to demos/reticle.mp4
    #[arg(long)]
    record: bool,
}

fn parse_world_size(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v > 0.0 {
        Ok(v)
    } else {
        Err("must be positive and finite".into())
    }
}

fn parse_thickness(s: &str) -> Result<f32, String> {
    let v: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if v.is_finite() && v >= 0.0 {
        Ok(v)
    } else {
        Err("must be non-negative and finite".into())
    }
}

fn main() {
    let args = Args::parse();
    let params = GridParams {
        cells: args.cells,
        world_size: args.size,
        thickness: args.thickness,
    };

    let sdl = sdl2::init().expect("Failed to init SDL2");
    let window = ViewerWindow::new(&sdl, "Reticle", 1280, 720);

    let mut app = ViewerApp::new(params, args.record, &window);
    app.run(&sdl, &window);
}
