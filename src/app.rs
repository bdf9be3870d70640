use std::fs::File;
use std::io::BufReader;
use std::time;

use image::RgbaImage;
use nalgebra as na;
use na::{Point3, Vector3};
use obj::{load_obj, Obj};
use show_image::{create_window, event, ImageInfo, ImageView, WindowOptions};

use tiny_gl::gl::*;
use tiny_gl::{ContextConfig, GlContext};

pub struct Params {
    pub width: u32,
    pub height: u32,
    pub print_fps: bool,
    pub model_path: Option<String>,
    pub output_path: Option<String>,
}

/// What gets drawn every frame.
enum Scene {
    Cube,
    Model(Obj),
}

/// Corners of the unit cube, one quad per face, counter-clockwise seen from outside.
const CUBE_FACES: [([f64; 3], [[f64; 3]; 4]); 6] = [
    ([1.0, 0.2, 0.2], [[-0.5, -0.5, 0.5], [0.5, -0.5, 0.5], [0.5, 0.5, 0.5], [-0.5, 0.5, 0.5]]),
    ([0.2, 1.0, 0.2], [[0.5, -0.5, -0.5], [-0.5, -0.5, -0.5], [-0.5, 0.5, -0.5], [0.5, 0.5, -0.5]]),
    ([0.2, 0.2, 1.0], [[0.5, -0.5, 0.5], [0.5, -0.5, -0.5], [0.5, 0.5, -0.5], [0.5, 0.5, 0.5]]),
    ([1.0, 1.0, 0.2], [[-0.5, -0.5, -0.5], [-0.5, -0.5, 0.5], [-0.5, 0.5, 0.5], [-0.5, 0.5, -0.5]]),
    ([0.2, 1.0, 1.0], [[-0.5, 0.5, 0.5], [0.5, 0.5, 0.5], [0.5, 0.5, -0.5], [-0.5, 0.5, -0.5]]),
    ([1.0, 0.2, 1.0], [[-0.5, -0.5, -0.5], [0.5, -0.5, -0.5], [0.5, -0.5, 0.5], [-0.5, -0.5, 0.5]]),
];

/// Helper, defining exit event to be an Escape key press.
fn is_exit_event(window_event: event::WindowEvent) -> bool {
    if let event::WindowEvent::KeyboardInput(event) = window_event {
        if event.input.key_code == Some(event::VirtualKeyCode::Escape) && event.input.state.is_released() {
            return true;
        }
    }

    return false;
}

fn draw_cube(gl: &mut GlContext) {
    gl.begin(GL_QUADS);
    for (color, corners) in CUBE_FACES.iter() {
        gl.color(color[0], color[1], color[2], 1.0);
        for c in corners {
            gl.vertex3(c[0], c[1], c[2]);
        }
    }
    gl.end();
}

/// Draws the model flat shaded, scaled to fit the unit cube around the origin.
fn draw_model(gl: &mut GlContext, model: &Obj) {
    let positions: Vec<Point3<f32>> = model.vertices.iter().map(|v| Point3::from(v.position)).collect();
    let (low, high) = positions.iter().fold(
        (Point3::new(f32::MAX, f32::MAX, f32::MAX), Point3::new(f32::MIN, f32::MIN, f32::MIN)),
        |(low, high), p| (low.inf(p), high.sup(p)),
    );
    let extent = (high - low).max();
    if positions.is_empty() || extent <= 0.0 {
        return;
    }
    let center = na::center(&low, &high);

    gl.scale(1.0 / extent as f64, 1.0 / extent as f64, 1.0 / extent as f64);
    gl.translate(-center.x as f64, -center.y as f64, -center.z as f64);

    let light_direction = Vector3::new(0.3, 0.5, 1.0).normalize();
    gl.begin(GL_TRIANGLES);
    for face in model.indices.chunks_exact(3) {
        let [a, b, c] = [face[0], face[1], face[2]].map(|i| positions[i as usize]);
        // Calculating normal projection on the light direction.
        let normal = (b - a).cross(&(c - a));
        let intensity = match normal.try_normalize(f32::EPSILON) {
            Some(n) => n.dot(&light_direction).max(0.1) as f64,
            None => 0.1,
        };
        gl.color(intensity, intensity, intensity, 1.0);
        for p in [a, b, c] {
            gl.vertex3(p.x as f64, p.y as f64, p.z as f64);
        }
    }
    gl.end();
}

/// Renders one frame of the scene rotated by `angle` degrees.
fn draw_frame(gl: &mut GlContext, scene: &Scene, angle: f64) -> Result<(), Box<dyn std::error::Error>> {
    gl.clear(GL_COLOR_BUFFER_BIT);
    gl.matrix_mode(GL_MODELVIEW);
    gl.load_identity();
    gl.translate(0.0, 0.0, -2.5);
    gl.rotate(angle, 0.3, 1.0, 0.0);

    gl.push_matrix();
    match scene {
        Scene::Cube => draw_cube(gl),
        Scene::Model(model) => draw_model(gl, model),
    }
    // Checking the outcome of the last draw before the pop overwrites it.
    let code = gl.get_error();
    gl.pop_matrix();
    if code != GL_NO_ERROR {
        return Err(format!("drawing failed with GL error {:#06x}", code).into());
    }

    return Ok(());
}

/// Sets up the context and either saves a single frame or shows frames in a window until Escape.
pub fn run(params: Params) -> Result<(), Box<dyn std::error::Error>> {
    let scene = match &params.model_path {
        Some(path) => {
            let model: Obj = load_obj(BufReader::new(File::open(path)?))?;
            log::info!("loaded {}: {} vertices, {} indices", path, model.vertices.len(), model.indices.len());
            Scene::Model(model)
        }
        None => Scene::Cube,
    };

    let mut gl = GlContext::new(ContextConfig::new(params.width, params.height));
    log::info!("{} / {}", gl.get_string(GL_RENDERER).unwrap_or("?"), gl.get_string(GL_VERSION).unwrap_or("?"));
    let (width, height) = gl.frame_size();
    let aspect = width as f64 / height as f64;
    gl.matrix_mode(GL_PROJECTION);
    gl.load_identity();
    gl.frustum(-0.5 * aspect, 0.5 * aspect, -0.5, 0.5, 1.0, 10.0);
    gl.clear_color(0.1, 0.1, 0.12, 1.0);
    // Counter-clockwise faces come out clockwise once y points down on screen.
    gl.front_face(GL_CW);
    gl.cull_face(GL_BACK);
    gl.enable(GL_CULL_FACE);

    let mut frame = RgbaImage::new(width, height);

    if let Some(path) = &params.output_path {
        draw_frame(&mut gl, &scene, 30.0)?;
        gl.present(&mut frame);
        frame.save(path)?;
        log::info!("frame written to {}", path);
        return Ok(());
    }

    let window_options: WindowOptions = WindowOptions {
        size: Some([width, height]),
        ..Default::default()
    };
    let window = create_window("tiny_gl", window_options)?;
    let event_channel = window.event_channel()?;

    let mut exit = false;
    let time_begin = time::Instant::now();
    let mut frame_counter_time_begin = time::Instant::now();
    let mut frame_counter: u32 = 0;
    while !exit {
        let passed_time = time::Instant::now().duration_since(time_begin).as_secs_f64();
        draw_frame(&mut gl, &scene, passed_time * 45.0)?;
        gl.present(&mut frame);

        let image_data = ImageView::new(ImageInfo::rgba8(width, height), frame.as_raw());
        window.set_image("image", image_data)?;

        // Unloading all the garbage from event channel, that has piled up, looking for exit event.
        exit = event_channel
            .try_iter()
            .map(is_exit_event)
            .fold(false, |was_exit_event, is_exit_event| was_exit_event || is_exit_event);

        if params.print_fps {
            // Counting frames to printout stats every seconds.
            frame_counter += 1;
            if time::Instant::now().duration_since(frame_counter_time_begin).as_secs_f32() > 1.0 {
                log::info!("FPS --- {}", frame_counter);
                frame_counter_time_begin = time::Instant::now();
                frame_counter = 0;
            }
        }
    }

    return Ok(());
}
