mod app;

use std::env;

use tiny_gl::logging::{init_logging, LoggingConfig};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 800;

#[show_image::main]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(LoggingConfig::default());

    // Default values.
    let mut model_path = None; // Built-in cube when no model is given.
    let mut output_path = None; // Window when no output file is given.
    let mut print_fps = false;

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-p" => {
                model_path = args.get(i + 1).cloned();
                i += 1;
            }
            "-o" => {
                output_path = args.get(i + 1).cloned();
                i += 1;
            }
            "--fps" => print_fps = true,
            other => log::warn!("ignoring unknown argument {}", other),
        }
        i += 1;
    }

    let params = app::Params {
        width: WIDTH,
        height: HEIGHT,
        print_fps,
        model_path,
        output_path,
    };

    app::run(params)?;

    return Ok(());
}
