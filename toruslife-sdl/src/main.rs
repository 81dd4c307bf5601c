use sdl2::{self, event::Event, keyboard::Keycode, pixels::Color};
use std::{
    env::args,
    error::Error,
    fs::read_to_string,
    thread::sleep,
    time::{Duration, Instant},
};
use toruslife::{ca_formats::rle::Rle, World};

const WINDOW_WIDTH_DEFAULT: u32 = 800;
const WINDOW_HEIGHT_DEFAULT: u32 = 600;
const GRID_WIDTH_DEFAULT: usize = 80;
const GRID_HEIGHT_DEFAULT: usize = 60;
const SPARSENESS_DEFAULT: u32 = 2;
const FPS_DEFAULT: u32 = 30;

struct Config {
    window_width: u32,
    window_height: u32,
    grid_width: usize,
    grid_height: usize,
    sparseness: u32,
    fps: u32,
    pattern: Option<String>,
}

impl Config {
    fn parse() -> Option<Self> {
        let mut config = Config {
            window_width: WINDOW_WIDTH_DEFAULT,
            window_height: WINDOW_HEIGHT_DEFAULT,
            grid_width: GRID_WIDTH_DEFAULT,
            grid_height: GRID_HEIGHT_DEFAULT,
            sparseness: SPARSENESS_DEFAULT,
            fps: FPS_DEFAULT,
            pattern: None,
        };
        let args = args().skip(1).collect::<Vec<_>>();
        if args.len() == 1 && args[0].parse::<u32>().is_err() {
            config.pattern = Some(args[0].clone());
            return Some(config);
        }
        match args.len() {
            0 => {}
            2 | 4 | 5 | 6 => {
                config.window_width = args[0].parse().ok()?;
                config.window_height = args[1].parse().ok()?;
                if args.len() >= 4 {
                    config.grid_width = args[2].parse().ok().filter(|&w| w > 0)?;
                    config.grid_height = args[3].parse().ok().filter(|&h| h > 0)?;
                }
                if args.len() >= 5 {
                    config.sparseness = args[4].parse().ok()?;
                }
                if args.len() == 6 {
                    config.fps = args[5].parse().ok().filter(|&fps| fps > 0)?;
                }
            }
            _ => return None,
        }
        Some(config)
    }
}

fn usage() {
    eprintln!(
        "usage: toruslife-sdl [window-width window-height [grid-width grid-height [sparseness [fps]]]]"
    );
    eprintln!("   or: toruslife-sdl <pattern.rle>");
    eprintln!(
        "e.g.: toruslife-sdl {} {} {} {} {} {}",
        WINDOW_WIDTH_DEFAULT,
        WINDOW_HEIGHT_DEFAULT,
        GRID_WIDTH_DEFAULT,
        GRID_HEIGHT_DEFAULT,
        SPARSENESS_DEFAULT,
        FPS_DEFAULT,
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = match Config::parse() {
        Some(config) => config,
        None => {
            usage();
            return Ok(());
        }
    };

    let mut rng = rand::thread_rng();
    let mut world;
    if let Some(path) = &config.pattern {
        let text = read_to_string(path)?;
        let rle = Rle::new(text.as_str())?;
        let pattern = World::from_rle(rle)?;
        if pattern.width() <= config.grid_width && pattern.height() <= config.grid_height {
            // Center the pattern in the configured grid.
            let left = (config.grid_width - pattern.width()) / 2;
            let top = (config.grid_height - pattern.height()) / 2;
            world = World::new(config.grid_width, config.grid_height)?;
            for (x, y) in pattern.live_cells() {
                world.set_cell(x + left, y + top, true);
            }
        } else {
            world = pattern;
        }
    } else {
        world = World::new(config.grid_width, config.grid_height)?;
        world.randomize(&mut rng, config.sparseness);
    }

    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;
    let window = video_subsystem
        .window(
            "Conway's Game of Life",
            config.window_width,
            config.window_height,
        )
        .build()?;
    let mut canvas = window.into_canvas().build()?;
    canvas.set_scale(
        config.window_width as f32 / world.width() as f32,
        config.window_height as f32 / world.height() as f32,
    )?;
    let mut events = sdl.event_pump()?;

    let frame_time = Duration::from_nanos(1_000_000_000 / config.fps as u64);
    let mut step_times = [0.0f32; 5];

    'mainloop: loop {
        let now = Instant::now();

        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'mainloop,
                Event::KeyDown {
                    keycode: Some(Keycode::R),
                    ..
                } => {
                    world.randomize(&mut rng, config.sparseness);
                }
                _ => {}
            }
        }

        let step_start = Instant::now();
        world.step();
        step_times.rotate_right(1);
        step_times[0] = step_start.elapsed().as_secs_f32() * 1000.0;

        canvas.set_draw_color(Color::BLACK);
        canvas.clear();
        canvas.set_draw_color(Color::RED);
        world.for_living_cells(|x, y| {
            canvas.draw_point((x as i32, y as i32)).unwrap();
        });
        canvas.present();

        let average = step_times.iter().sum::<f32>() / step_times.len() as f32;
        canvas.window_mut().set_title(&format!(
            "Conway's Game of Life. Press R to reset. Average step time: {:.1} ms",
            average
        ))?;

        let time_taken = now.elapsed();
        if frame_time > time_taken {
            sleep(frame_time - time_taken);
        }
    }

    Ok(())
}
