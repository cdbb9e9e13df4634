mod cli;

use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use image::RgbaImage;

use catclock_engine::logging::{init_logging, LoggingConfig};
use catclock_engine::time::FrameClock;
use catclock_engine::{load_background, ClockFace, ClockView, SystemClock, WallClock};

use cli::{Cli, Command, FaceArgs, LiveArgs, RenderArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..Default::default() });

    match cli.command {
        Command::Render(args) => render(args),
        Command::Live(args) => live(args),
    }
}

fn build_face(args: &FaceArgs) -> Result<(ClockFace, Option<RgbaImage>)> {
    let face = ClockFace::new(args.to_config()).context("invalid face configuration")?;
    let background = args.background.as_ref().map(load_background).transpose()?;
    Ok((face, background))
}

fn render(args: RenderArgs) -> Result<()> {
    let (face, background) = build_face(&args.face)?;
    let sample = args.at.unwrap_or_else(|| SystemClock.now());

    let frame = face.render_frame(&sample, background.as_ref());
    frame
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    log::info!(
        "rendered {sample} to {} ({}x{})",
        args.out.display(),
        frame.width(),
        frame.height()
    );
    Ok(())
}

fn live(args: LiveArgs) -> Result<()> {
    let (face, background) = build_face(&args.face)?;
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let run_for = Duration::try_from_secs_f64(args.seconds.max(0.0))
        .context("--seconds is out of range")?;
    let poll = face.config().tick_interval;

    let mut view = ClockView::new(face, SystemClock);
    view.on_appear()?;

    let mut pacing = FrameClock::new();
    let mut written = 0u64;
    let started = Instant::now();
    let mut dirty = true;

    while started.elapsed() < run_for {
        dirty |= view.pump();
        if dirty {
            let frame = view.render(background.as_ref());
            let ft = pacing.tick();
            log::trace!("frame {} at {} (dt {:.4}s)", ft.frame_index, view.current(), ft.dt);

            if let Some(dir) = &args.out_dir {
                if ft.frame_index % args.every == 0 {
                    let path = dir.join(format!("frame-{:06}.png", ft.frame_index));
                    frame
                        .save(&path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    written += 1;
                }
            }
            dirty = false;
        }
        thread::sleep(poll);
    }

    view.on_disappear();

    match pacing.average_interval() {
        Some(avg) => log::info!(
            "drew {} frame(s), average interval {:.2} ms, wrote {written}",
            pacing.frames(),
            avg.as_secs_f64() * 1e3
        ),
        None => log::info!("drew {} frame(s), wrote {written}", pacing.frames()),
    }
    Ok(())
}
