extern crate gfx_core;
extern crate env_logger;
extern crate piston_window;
#[macro_use] extern crate log;
#[macro_use] extern crate clap;
#[cfg(test)] extern crate rand;

use std::process;
use std::path::PathBuf;

use clap::{App, Arg, ArgMatches};
use piston_window::{
    OpenGL,
    PistonWindow,
    WindowSettings,
    TextureSettings,
    Glyphs,
    Event,
    Input,
    Button,
    ButtonArgs,
    ButtonState,
    Key,
};

mod common;
mod koch;
mod metrics;

use common::{InvalidInput, check_side_length, depth_from_signed};
use metrics::Metrics;

fn main() {
    env_logger::init();
    match run() {
        Ok(()) =>
            info!("graceful shutdown"),
        Err(e) => {
            error!("fatal error: {:?}", e);
            process::exit(1);
        },
    }
}

#[derive(Debug)]
enum Error {
    MissingParameter(&'static str),
    InvalidParameter { name: &'static str, value: String, },
    InvalidInput(InvalidInput),
    Piston(PistonError),
}

#[derive(Debug)]
enum PistonError {
    BuildWindow(String),
    DrawText(gfx_core::factory::CombinedError),
}

impl From<InvalidInput> for Error {
    fn from(error: InvalidInput) -> Error {
        Error::InvalidInput(error)
    }
}

const SCREEN_WIDTH: u32 = 600;
const SCREEN_HEIGHT: u32 = 600;
// half size of the visible world square
const VIEW_EXTENT: f64 = 1.5;
const ASSETS_DIR: &'static str = "./assets";
const LINE_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
const LINE_RADIUS: f64 = 0.5;

fn app<'a, 'b>() -> App<'a, 'b> {
    app_from_crate!()
        .arg(Arg::with_name("side-length")
             .short("s")
             .long("side-length")
             .value_name("LENGTH")
             .help("Side length of the initial triangle")
             .default_value("2.0")
             .takes_value(true))
        .arg(Arg::with_name("depth")
             .short("n")
             .long("depth")
             .value_name("N")
             .help("Recursion depth")
             .default_value("2")
             .allow_hyphen_values(true)
             .takes_value(true))
}

fn startup_params(matches: &ArgMatches) -> Result<(f32, u32), Error> {
    let side_length = parse_param::<f32>(matches.value_of("side-length"), "side-length")?;
    let side_length = check_side_length(side_length)?;
    let depth = depth_from_signed(parse_param::<i64>(matches.value_of("depth"), "depth")?)?;
    if depth > koch::MAX_DEPTH {
        return Err(Error::InvalidInput(InvalidInput::DepthTooLarge(depth)));
    }
    Ok((side_length, depth))
}

fn run() -> Result<(), Error> {
    let matches = app().get_matches();
    let (side_length, depth) = startup_params(&matches)?;
    info!("side length = {}, depth = {}", side_length, depth);

    let report = Metrics::compute(side_length, depth)?;
    println!("{}", report);
    info!("{}", report.summary());
    info!("area converges to {} as depth grows", metrics::area_limit(side_length));

    let segments = koch::snowflake(side_length, depth)?;
    let coords = koch::flatten(&segments);
    debug!(
        "flat buffer: {} floats, {} points, piece length {}",
        coords.len(),
        coords.len() / 2,
        segments.first().map(|s| s.length()).unwrap_or(0.0),
    );

    let opengl = OpenGL::V4_1;
    let mut window: PistonWindow = WindowSettings::new("Koch Snowflake 2D", [SCREEN_WIDTH, SCREEN_HEIGHT])
        .exit_on_esc(true)
        .opengl(opengl)
        .build()
        .map_err(PistonError::BuildWindow)
        .map_err(Error::Piston)?;

    let mut font_path = PathBuf::from(ASSETS_DIR);
    font_path.push("FiraSans-Regular.ttf");
    let mut maybe_glyphs = match Glyphs::new(&font_path, window.factory.clone(), TextureSettings::new()) {
        Ok(glyphs) =>
            Some(glyphs),
        Err(e) => {
            warn!("failed to load font {}: {:?}, report overlay disabled", font_path.to_string_lossy(), e);
            None
        },
    };
    let info_line = report.summary();

    let mut view = View::new(SCREEN_WIDTH, SCREEN_HEIGHT);
    while let Some(event) = window.next() {
        let maybe_result = window.draw_2d(&event, |context, g2d| {
            use piston_window::{clear, text, line, Transformed};
            // clear everything
            clear([0.0, 0.0, 0.0, 1.0], g2d);

            // draw snowflake as disjoint segments
            let (cx, cy) = view.center();
            let scale = view.scale();
            let transform = context.transform.trans(cx, cy).scale(scale, -scale);
            for seg in coords.chunks(4) {
                let points = [seg[0] as f64, seg[1] as f64, seg[2] as f64, seg[3] as f64];
                line(LINE_COLOR, LINE_RADIUS / scale, points, transform, g2d);
            }

            // draw report
            if let Some(ref mut glyphs) = maybe_glyphs {
                text::Text::new_color([0.0, 1.0, 0.0, 1.0], 16).draw(
                    &info_line,
                    glyphs,
                    &context.draw_state,
                    context.transform.trans(5.0, 20.0),
                    g2d
                ).map_err(PistonError::DrawText)?;
            }

            Ok(())
        });
        if let Some(result) = maybe_result {
            let () = result.map_err(Error::Piston)?;
        }

        match event {
            Event::Input(Input::Button(ButtonArgs { button: Button::Keyboard(Key::Q), state: ButtonState::Release, .. })) =>
                break,
            Event::Input(Input::Resize(width, height)) =>
                view.reset(width, height),
            _ =>
                (),
        }
    }

    Ok(())
}

fn parse_param<T: std::str::FromStr>(value: Option<&str>, name: &'static str) -> Result<T, Error> {
    let value = value.ok_or(Error::MissingParameter(name))?;
    value.parse()
        .map_err(|_| Error::InvalidParameter { name, value: value.to_string(), })
}

/// Orthographic mapping of the `[-VIEW_EXTENT, VIEW_EXTENT]` world square
/// onto the window, y axis up.
struct View {
    width: u32,
    height: u32,
}

impl View {
    fn new(width: u32, height: u32) -> View {
        View { width, height, }
    }

    fn reset(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn center(&self) -> (f64, f64) {
        (self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    fn scale(&self) -> f64 {
        let side = if self.width < self.height { self.width } else { self.height };
        // keep the transform invertible for a collapsed window
        (side as f64).max(1.0) / (2.0 * VIEW_EXTENT)
    }

    #[cfg(test)]
    fn to_screen(&self, x: f32, y: f32) -> (f64, f64) {
        let (cx, cy) = self.center();
        let scale = self.scale();
        (cx + x as f64 * scale, cy - y as f64 * scale)
    }
}
