use anyhow::{anyhow, Context};
use glam::{Vec3, Vec4};
use ripple_pulse::{
    FrameClock, MaterialSink, PropertyBlock, PulseConfig, PulseController, RippleUniforms,
    TransformState,
};

const DEFAULT_FPS: f32 = 60.0;
const TRACE_EVERY_FRAMES: u64 = 6;
const TAIL_SEC: f32 = 0.5; // keep ticking after the last cycle should have settled

// Default scripted input: hold for one second, then a programmatic trigger
const DEFAULT_HOLD: (f32, f32) = (0.2, 1.2);
const DEFAULT_TRIGGER_AT: f32 = 4.0;

const USAGE: &str = "usage: pulse-native [--config FILE] [--hold START:END]... [--trigger AT]... [--fps N]";

#[derive(Debug, Default)]
struct Script {
    config_path: Option<String>,
    holds: Vec<(f32, f32)>,
    triggers: Vec<f32>,
    fps: Option<f32>,
}

/// Parse the command line; `None` means help was requested.
fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Option<Script>> {
    let mut script = Script::default();
    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{flag} needs a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--config" => script.config_path = Some(value("--config")?),
            "--hold" => script.holds.push(parse_span(&value("--hold")?)?),
            "--trigger" => script.triggers.push(parse_seconds(&value("--trigger")?)?),
            "--fps" => {
                let fps = parse_seconds(&value("--fps")?)?;
                if !fps.is_finite() || fps <= 0.0 {
                    return Err(anyhow!("--fps must be a positive number, got {fps}"));
                }
                script.fps = Some(fps);
            }
            "-h" | "--help" => return Ok(None),
            other => return Err(anyhow!("unexpected argument {other:?}\n{USAGE}")),
        }
    }
    if script.holds.is_empty() && script.triggers.is_empty() {
        script.holds.push(DEFAULT_HOLD);
        script.triggers.push(DEFAULT_TRIGGER_AT);
    }
    script.triggers.sort_by(f32::total_cmp);
    Ok(Some(script))
}

fn parse_seconds(s: &str) -> anyhow::Result<f32> {
    s.parse::<f32>()
        .with_context(|| format!("not a number: {s:?}"))
}

fn parse_span(s: &str) -> anyhow::Result<(f32, f32)> {
    let (start, end) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("hold span must be START:END, got {s:?}"))?;
    let (start, end) = (parse_seconds(start)?, parse_seconds(end)?);
    if end < start {
        return Err(anyhow!("hold span ends before it starts: {s:?}"));
    }
    Ok((start, end))
}

#[inline]
fn held_at(holds: &[(f32, f32)], t: f32) -> bool {
    holds.iter().any(|&(start, end)| t >= start && t < end)
}

fn initial_material(config: &PulseConfig) -> PropertyBlock {
    let names = &config.channels;
    PropertyBlock::new()
        .with_color(&names.color, Vec4::new(0.55, 0.8, 1.0, 1.0))
        .with_float(&names.shading, 0.2)
        .with_float(&names.edge_softness, 0.02)
        .with_float(&names.ripple_amp, 0.05)
        .with_float(&names.ripple_freq, 7.0)
        .with_float(&names.ripple_sharp, 2.0)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let Some(script) = parse_args(std::env::args().skip(1))? else {
        println!("{USAGE}");
        return Ok(());
    };
    let config = match &script.config_path {
        Some(path) => {
            PulseConfig::load(path).with_context(|| format!("loading config {path}"))?
        }
        None => PulseConfig::default(),
    };
    let names = config.channels.clone();
    let total = config.total_duration;

    let mut transform = TransformState::new(Vec3::ONE);
    let mut material = initial_material(&config);
    let mut controller = PulseController::new(config, &transform, &material);

    let last_input = script
        .holds
        .iter()
        .map(|&(_, end)| end)
        .chain(script.triggers.iter().copied())
        .fold(0.0_f32, f32::max);
    let end_time = (last_input + total + TAIL_SEC) as f64;
    let dt = 1.0 / script.fps.unwrap_or(DEFAULT_FPS);
    log::info!(
        "[native] holds={:?} triggers={:?} dt={:.4}s explode={:.3}s settle={:.3}s",
        script.holds,
        script.triggers,
        dt,
        controller.durations().explode,
        controller.durations().settle
    );

    let mut clock = FrameClock::new();
    let mut triggers = script.triggers.iter().copied().peekable();
    let mut frame_index: u64 = 0;
    while clock.time() < end_time {
        let frame = clock.step(dt);
        let now = frame.time as f32;
        controller.set_hold(held_at(&script.holds, now));
        while triggers.next_if(|&at| at <= now).is_some() {
            controller.trigger_once(&transform, &material);
        }
        controller.tick(frame, &mut transform, &mut material);

        if controller.is_active() && frame_index % TRACE_EVERY_FRAMES == 0 {
            log::info!(
                "[native] t={:.3} {:<9} scale={:.3} shading={:.3} alpha={:.3} ripple=({:.3}, {:.2}, {:.2})",
                frame.time,
                controller.phase().name(),
                transform.scale.x,
                material.get_float(&names.shading).unwrap_or_default(),
                material.get_color(&names.color).map_or(0.0, |c| c.w),
                material.get_float(&names.ripple_amp).unwrap_or_default(),
                material.get_float(&names.ripple_freq).unwrap_or_default(),
                material.get_float(&names.ripple_sharp).unwrap_or_default(),
            );
        }
        frame_index += 1;
    }

    let uniforms = RippleUniforms::from_block(&material, &names);
    log::info!(
        "[native] done after {} frames: phase={} scale={:.3} uniform block={} bytes",
        frame_index,
        controller.phase().name(),
        transform.scale.x,
        uniforms.as_bytes().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn empty_args_use_default_script() {
        let script = parse_args(args(&[])).unwrap().expect("defaults");
        assert_eq!(script.holds, vec![DEFAULT_HOLD]);
        assert_eq!(script.triggers, vec![DEFAULT_TRIGGER_AT]);
    }

    #[test]
    fn parses_spans_and_sorts_triggers() {
        let script =
            parse_args(args(&["--hold", "0.5:1.0", "--trigger", "3", "--trigger", "2"]))
                .unwrap()
                .expect("script");
        assert_eq!(script.holds, vec![(0.5, 1.0)]);
        assert_eq!(script.triggers, vec![2.0, 3.0]);
    }

    #[test]
    fn help_returns_no_script() {
        assert!(parse_args(args(&["--help"])).unwrap().is_none());
        assert!(parse_args(args(&["--hold", "0:1", "-h"])).unwrap().is_none());
    }

    #[test]
    fn rejects_frame_rates_that_never_advance() {
        for fps in ["0", "-30", "nan", "NaN", "inf", "-inf"] {
            assert!(parse_args(args(&["--fps", fps])).is_err(), "accepted --fps {fps}");
        }
        let script = parse_args(args(&["--fps", "30"])).unwrap().expect("script");
        assert_eq!(script.fps, Some(30.0));
    }

    #[test]
    fn rejects_backwards_span() {
        assert!(parse_span("2.0:1.0").is_err());
        assert!(parse_span("nope").is_err());
    }

    #[test]
    fn held_at_uses_half_open_spans() {
        let holds = [(0.2, 1.2)];
        assert!(!held_at(&holds, 0.1));
        assert!(held_at(&holds, 0.2));
        assert!(!held_at(&holds, 1.2));
    }
}
