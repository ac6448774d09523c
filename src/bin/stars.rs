// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use std::path::Path;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use starfractal::frames::{write_image, FrameWriter};
use starfractal::{
    Canvas, ChildPlacement, Configuration, FractalScheduler, PlaneMapper, Point, Session, Tick,
    Ticker,
};

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_point(s: &str) -> Option<Point> {
    parse_pair(s, ',').map(|(x, y)| Point::new(x, y))
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_open_unit(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(v) if v > 0.0 && v < 1.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

/// Largest run the binary agrees to start.  The queue holds a whole
/// generation at once.
const MAX_STARS: u64 = 2_000_000;

const OUTPUT: &str = "output";
const CORNERS: &str = "corners";
const DEPTH: &str = "depth";
const SIZE: &str = "size";
const CENTER: &str = "center";
const RADIUS: &str = "radius";
const INNER: &str = "inner-ratio";
const SHRINK: &str = "shrink";
const EVERY_VERTEX: &str = "every-vertex";
const FRAMES: &str = "frames";
const EVERY: &str = "every";
const STOP_AFTER: &str = "stop-after";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("stars")
        .version("0.1.0")
        .about("Grows a star-of-stars fractal one polygon per frame")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output image of the finished fractal"),
        )
        .arg(
            Arg::with_name(CORNERS)
                .required(true)
                .long(CORNERS)
                .short("c")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        3,
                        64,
                        "Could not parse corner count",
                        "Corner count must be between 3 and 64",
                    )
                })
                .help("Number of spikes on every star"),
        )
        .arg(
            Arg::with_name(DEPTH)
                .required(true)
                .long(DEPTH)
                .short("d")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        10,
                        "Could not parse depth",
                        "Depth must be between 1 and 10",
                    )
                })
                .help("Levels of stars, the root included"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("800x800")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of output image; the 800x800 world is scaled to fit"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .takes_value(true)
                .default_value("400,380")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse root center"))
                .help("Center of the root star in world coordinates"),
        )
        .arg(
            Arg::with_name(RADIUS)
                .required(false)
                .long(RADIUS)
                .takes_value(true)
                .default_value("220")
                .validator(|s| {
                    validate_range(
                        &s,
                        1.0,
                        100_000.0,
                        "Could not parse root radius",
                        "Root radius must be between 1 and 100000",
                    )
                })
                .help("Outer radius of the root star"),
        )
        .arg(
            Arg::with_name(INNER)
                .required(false)
                .long(INNER)
                .takes_value(true)
                .default_value("0.5")
                .validator(|s| validate_open_unit(&s, "Inner ratio must lie strictly between 0 and 1"))
                .help("Inner vertex radius as a fraction of the outer radius"),
        )
        .arg(
            Arg::with_name(SHRINK)
                .required(false)
                .long(SHRINK)
                .takes_value(true)
                .default_value("0.35")
                .validator(|s| validate_open_unit(&s, "Shrink factor must lie strictly between 0 and 1"))
                .help("Radius of each child star relative to its parent"),
        )
        .arg(
            Arg::with_name(EVERY_VERTEX)
                .long(EVERY_VERTEX)
                .help("Grow children on inner vertices too, not only on spike tips"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .required(false)
                .long(FRAMES)
                .short("f")
                .takes_value(true)
                .help("Directory to write a snapshot of each frame into"),
        )
        .arg(
            Arg::with_name(EVERY)
                .required(false)
                .long(EVERY)
                .takes_value(true)
                .default_value("1")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse snapshot interval",
                        "Snapshot interval must be between 1 and 1000000",
                    )
                })
                .help("Write a snapshot every N frames"),
        )
        .arg(
            Arg::with_name(STOP_AFTER)
                .required(false)
                .long(STOP_AFTER)
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        std::u64::MAX,
                        "Could not parse frame count",
                        "Frame count must be positive",
                    )
                })
                .help("Stop the render loop after N frames, leaving the fractal part grown"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads used to encode frame snapshots"),
        )
        .get_matches()
}

fn value<T: FromStr>(matches: &ArgMatches, name: &str) -> Result<T, String> {
    let raw = matches
        .value_of(name)
        .ok_or_else(|| format!("Missing value for --{}", name))?;
    T::from_str(raw).map_err(|_| format!("Could not parse --{} value {:?}", name, raw))
}

fn run(matches: &ArgMatches) -> Result<(), String> {
    let size = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<u16>(s, 'x'))
        .ok_or("Error parsing image dimensions")?;
    let center = matches
        .value_of(CENTER)
        .and_then(parse_point)
        .ok_or("Error parsing root center")?;
    let placement = if matches.is_present(EVERY_VERTEX) {
        ChildPlacement::EveryVertex
    } else {
        ChildPlacement::SpikeTips
    };
    let base = Configuration::default()
        .with_root_center(center)
        .with_root_radius(value(matches, RADIUS)?)
        .with_inner_radius_ratio(value(matches, INNER)?)
        .with_shrink_factor(value(matches, SHRINK)?)
        .with_placement(placement);

    let plane = PlaneMapper::new(
        u32::from(size.0),
        u32::from(size.1),
        Point::new(0.0, 0.0),
        Point::new(800.0, 800.0),
    )
    .map_err(|e| e.to_string())?;
    let scheduler = FractalScheduler::new(Canvas::new(plane), Ticker::new());
    let mut session = Session::new(scheduler, base);
    session
        .enter_spike_count(matches.value_of(CORNERS).unwrap_or(""))
        .map_err(|e| e.to_string())?;
    session
        .enter_depth(matches.value_of(DEPTH).unwrap_or(""))
        .map_err(|e| e.to_string())?;

    let (spikes, depth) = session.inputs();
    let planned = base
        .with_spike_count(spikes.unwrap_or(0))
        .with_max_depth(depth.unwrap_or(0));
    match planned.expected_polygons() {
        Some(total) if total <= MAX_STARS => info!(total, "stars to draw"),
        _ => {
            return Err(format!(
                "This run would draw more than {} stars; lower --corners or --depth",
                MAX_STARS
            ))
        }
    }
    session.press().map_err(|e| e.to_string())?;

    let every: u64 = value(matches, EVERY)?;
    let limit = match matches.value_of(STOP_AFTER) {
        Some(_) => Some(value::<u64>(matches, STOP_AFTER)?),
        None => None,
    };
    let mut writer = match matches.value_of(FRAMES) {
        Some(dir) => Some(FrameWriter::new(dir, value(matches, THREADS)?).map_err(|e| e.to_string())?),
        None => None,
    };

    let mut failure = None;
    let frames = Ticker::drive(session.scheduler_mut(), limit, |frame, tick, scheduler| {
        if let Tick::Drew { .. } = tick {
            if frame % every != 0 {
                return;
            }
            if let Some(writer) = writer.as_mut() {
                if let Err(e) = writer.push(frame, scheduler.sink().render()) {
                    failure = Some(e);
                    scheduler.cancel();
                }
            }
        }
    });
    if let Some(e) = failure {
        return Err(e.to_string());
    }
    info!(frames, label = session.label(), "render loop finished");

    if let Some(writer) = writer {
        let written = writer.finish().map_err(|e| e.to_string())?;
        info!(written, "frame snapshots written");
    }

    let output = matches.value_of(OUTPUT).ok_or("Missing output file")?;
    write_image(Path::new(output), &session.scheduler().sink().render()).map_err(|e| e.to_string())?;
    info!(output, drawn = session.scheduler().drawn(), "image written");
    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
