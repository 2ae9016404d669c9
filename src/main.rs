//! Demo runner: logs one icon ordering, then plays a hover run in real
//! time.

use std::path::{Path, PathBuf};

use bunpeek::animation::{AnimationState, BunAnimation};
use bunpeek::error::BunpeekError;
use bunpeek::icons::{IconOrderer, IconSet};
use bunpeek::options::{AnimationOptions, Options};
use web_time::{Duration, Instant};

/// Icons used when no asset directory is given.
const DEMO_ICONS: [&str; 12] = [
    "Cpp",
    "Expo",
    "Go",
    "Java",
    "Javascript",
    "Nextjs",
    "Python",
    "React",
    "Rust",
    "SQL",
    "Svelte",
    "Typescript",
];

fn load_options(path: Option<&str>) -> Result<Options, BunpeekError> {
    match path {
        Some(p) => {
            log::info!("loading options from {p}");
            Options::load(Path::new(p))
        }
        None => Ok(Options::default()),
    }
}

fn load_icons(
    dir: Option<&str>,
    extension: &str,
) -> Result<IconSet<PathBuf>, BunpeekError> {
    match dir {
        Some(d) => IconSet::from_dir(Path::new(d), extension),
        None => IconSet::from_pairs(DEMO_ICONS.iter().map(|&name| {
            (name, PathBuf::from(format!("{name}.{extension}")))
        })),
    }
}

fn log_state(state: &AnimationState) {
    log::info!(
        "{:<18} hovered={} peeking={} blinking={}",
        state.phase,
        state.hovered,
        state.peeking,
        state.blinking
    );
}

/// Play one hover run in real time, optionally releasing hover early.
fn play(options: &AnimationOptions, leave_after: Option<Duration>) {
    let mut anim = BunAnimation::with_options(options);
    let _ = anim.subscribe(log_state);

    let start = Instant::now();
    let _ = anim.hover_start(start);
    let mut leave_at = leave_after.map(|d| start + d);

    loop {
        let now = Instant::now();
        if leave_at.is_some_and(|at| now >= at) {
            log::info!("hover released");
            anim.hover_end(now);
            leave_at = None;
        }

        if let Some(outcome) = anim.update(now).finished {
            log::info!("run finished: {outcome:?}");
        }

        let next = match (anim.next_deadline(), leave_at) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) => a,
            (None, Some(b)) if anim.is_running() => b,
            _ => break,
        };
        std::thread::sleep(next.saturating_duration_since(Instant::now()));
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match load_options(args.get(1).map(String::as_str)) {
        Ok(o) => o,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let icons =
        match load_icons(args.get(2).map(String::as_str), &options.icons.extension)
        {
            Ok(set) => set,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        };

    let orderer = IconOrderer::from_options(icons, &options.icons);
    let order: Vec<&str> =
        orderer.ordered().into_iter().map(|icon| icon.name.as_str()).collect();
    log::info!("icon order: {}", order.join(", "));

    let leave_after = std::env::var("BUNPEEK_LEAVE_AFTER_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis);
    play(&options.animation, leave_after);
}
