//! Hold / explode / settle state machine.
//!
//! ```text
//!   ┌──────┐  pressed   ┌─────────┐  released  ┌───────────┐  explode done  ┌──────────┐
//!   │ Idle │ ─────────→ │ Holding │ ─────────→ │ Exploding │ ─────────────→ │ Settling │
//!   └──────┘            └─────────┘            └───────────┘                └──────────┘
//!       ↑                                            ↑   trigger_once            │
//!       └────────────────────────────────────────────┴───────────────────────────┘
//!                                  settle done (snap to baseline)
//! ```
//!
//! The baseline is sampled when a hold begins or a one-shot trigger fires
//! and is the look every cycle returns to. The phase start is sampled from the live sinks when the
//! explode begins, so releasing at any point of the pulse continues from
//! exactly what is on screen.
//!
//! Pressing again while exploding or settling arms a re-trigger instead of
//! interrupting the cycle. If the input is still down when settling ends,
//! the controller goes straight back to holding; a release before that
//! disarms it.

use crate::clock::FrameTime;
use crate::config::{clamp_total_duration, PhaseDurations, PulseConfig};
use crate::input::{EdgeDetector, EdgeQueue, HoldEdge};
use crate::lerp::Blend;
use crate::sink::{MaterialSink, TransformSink};
use crate::snapshot::Snapshot;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    /// At rest; nothing is written
    Idle,
    /// Input held; scale pulses around a slightly shrunk baseline
    Holding,
    /// Blending from `start` to the explode targets
    Exploding { start: Snapshot, elapsed: f32 },
    /// Blending from the explode targets back to the baseline
    Settling { elapsed: f32 },
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Holding => "holding",
            Phase::Exploding { .. } => "exploding",
            Phase::Settling { .. } => "settling",
        }
    }
}

pub struct PulseController {
    config: PulseConfig,
    durations: PhaseDurations,
    baseline: Snapshot,
    phase: Phase,
    edges: EdgeQueue,
    detector: EdgeDetector,
    rearmed: bool,
}

impl PulseController {
    /// Create an idle controller and sample the object's current look as
    /// its baseline.
    pub fn new<T, M>(config: PulseConfig, transform: &T, material: &M) -> Self
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        let config = config.sanitized();
        let durations = config.durations();
        let baseline = Snapshot::sample_baseline(transform, material, &config.channels);
        log::debug!(
            "[pulse] init explode={:.4}s settle={:.4}s",
            durations.explode,
            durations.settle
        );
        Self {
            config,
            durations,
            baseline,
            phase: Phase::Idle,
            edges: EdgeQueue::default(),
            detector: EdgeDetector::default(),
            rearmed: false,
        }
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: PulseConfig) {
        self.config = config.sanitized();
        self.durations = self.config.durations();
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn baseline(&self) -> &Snapshot {
        &self.baseline
    }

    /// Start snapshot of the running explode, if any.
    pub fn phase_start(&self) -> Option<&Snapshot> {
        match &self.phase {
            Phase::Exploding { start, .. } => Some(start),
            _ => None,
        }
    }

    pub fn durations(&self) -> PhaseDurations {
        self.durations
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    pub fn is_rearmed(&self) -> bool {
        self.rearmed
    }

    /// Queue an edge for the next [`tick`](Self::tick).
    pub fn push_edge(&mut self, edge: HoldEdge) {
        self.edges.push(edge);
    }

    /// Feed the current level of the hold input; edges are queued.
    pub fn set_hold(&mut self, held: bool) {
        if let Some(edge) = self.detector.sample(held) {
            self.push_edge(edge);
        }
    }

    /// Change the cycle length. Sub-phase lengths are re-derived and a phase
    /// already in progress continues against the new length.
    pub fn set_total_duration(&mut self, seconds: f32) {
        self.config.total_duration = clamp_total_duration(seconds);
        self.durations = self.config.durations();
        log::debug!(
            "[pulse] total={:.3}s explode={:.4}s settle={:.4}s",
            self.config.total_duration,
            self.durations.explode,
            self.durations.settle
        );
    }

    /// Play one explode and settle without going through holding.
    ///
    /// In every phase the baseline is re-sampled from the sinks and the
    /// explode starts from it with a fresh clock. A hold that is still down
    /// keeps or arms the re-trigger.
    pub fn trigger_once<T, M>(&mut self, transform: &T, material: &M)
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        self.rearmed |= matches!(self.phase, Phase::Holding);
        self.baseline = Snapshot::sample_baseline(transform, material, &self.config.channels);
        log::info!("[pulse] trigger once from {}", self.phase.name());
        self.set_phase(Phase::Exploding {
            start: self.baseline,
            elapsed: 0.0,
        });
    }

    /// Apply one input edge immediately.
    pub fn handle_edge<T, M>(&mut self, edge: HoldEdge, transform: &T, material: &M)
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        match (self.phase, edge) {
            (Phase::Idle, HoldEdge::Pressed) => self.begin_hold(transform, material),
            (Phase::Holding, HoldEdge::Released) => {
                let start = Snapshot::sample_current(
                    transform,
                    material,
                    &self.config.channels,
                    &self.baseline,
                );
                self.set_phase(Phase::Exploding {
                    start,
                    elapsed: 0.0,
                });
            }
            (Phase::Exploding { .. } | Phase::Settling { .. }, HoldEdge::Pressed) => {
                self.rearmed = true;
                log::debug!("[pulse] re-trigger armed during {}", self.phase.name());
            }
            (Phase::Exploding { .. } | Phase::Settling { .. }, HoldEdge::Released) => {
                self.rearmed = false;
            }
            (Phase::Idle, HoldEdge::Released) | (Phase::Holding, HoldEdge::Pressed) => {}
        }
    }

    /// The look the current phase produces, without touching any sink.
    ///
    /// `time` is the running clock used for the holding pulse. Returns `None`
    /// while idle.
    pub fn evaluate(&self, time: f64) -> Option<Snapshot> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Holding => Some(self.baseline.held(&self.config, time)),
            Phase::Exploding { start, elapsed } => {
                let u = progress(*elapsed, self.durations.explode);
                let e = self.config.explode_ease.evaluate(u);
                let target = self.baseline.explode_target(&self.config);
                Some(Snapshot::blend(start, &target, e))
            }
            Phase::Settling { elapsed } => {
                let u = progress(*elapsed, self.durations.settle);
                let e = self.config.settle_ease.evaluate(u);
                let peak = self.baseline.explode_target(&self.config);
                Some(Snapshot::blend(&peak, &self.baseline, e))
            }
        }
    }

    /// Advance one frame: consume queued edges, step the active phase and
    /// write its look to the sinks once.
    pub fn tick<T, M>(&mut self, frame: FrameTime, transform: &mut T, material: &mut M)
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        let mut pending = std::mem::take(&mut self.edges);
        for edge in pending.drain() {
            self.handle_edge(edge, &*transform, &*material);
        }

        match &mut self.phase {
            Phase::Idle => return,
            Phase::Holding => {}
            Phase::Exploding { elapsed, .. } | Phase::Settling { elapsed } => {
                *elapsed += frame.delta;
            }
        }

        let settled = matches!(
            self.phase,
            Phase::Settling { elapsed } if elapsed >= self.durations.settle
        );
        // The final settle frame writes the baseline itself, not a blend
        // that might carry rounding or a curve that misses 1.0
        let look = if settled {
            self.baseline
        } else {
            self.evaluate(frame.time).unwrap_or(self.baseline)
        };
        look.apply(
            transform,
            material,
            &self.config.channels,
            &self.config.color_override,
        );

        if settled {
            self.set_phase(Phase::Idle);
            if std::mem::take(&mut self.rearmed) {
                self.begin_hold(&*transform, &*material);
            }
        } else if let Phase::Exploding { elapsed, .. } = self.phase {
            if elapsed >= self.durations.explode {
                self.set_phase(Phase::Settling { elapsed: 0.0 });
            }
        }
    }

    fn begin_hold<T, M>(&mut self, transform: &T, material: &M)
    where
        T: TransformSink + ?Sized,
        M: MaterialSink + ?Sized,
    {
        self.baseline = Snapshot::sample_baseline(transform, material, &self.config.channels);
        self.set_phase(Phase::Holding);
    }

    fn set_phase(&mut self, next: Phase) {
        log::debug!("[pulse] {} -> {}", self.phase.name(), next.name());
        self.phase = next;
    }
}

/// Normalized progress through a phase, clamped to [0, 1].
#[inline]
fn progress(elapsed: f32, duration: f32) -> f32 {
    elapsed.clamp(0.0, duration) / duration
}
