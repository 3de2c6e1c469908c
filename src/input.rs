use smallvec::SmallVec;

/// Transition of the binary hold input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoldEdge {
    Pressed,
    Released,
}

/// Turns a level-triggered hold input, sampled once per tick, into edges.
#[derive(Default, Clone, Copy, Debug)]
pub struct EdgeDetector {
    held: bool,
}

impl EdgeDetector {
    #[inline]
    pub fn sample(&mut self, held: bool) -> Option<HoldEdge> {
        let edge = match (self.held, held) {
            (false, true) => Some(HoldEdge::Pressed),
            (true, false) => Some(HoldEdge::Released),
            _ => None,
        };
        self.held = held;
        edge
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Edges waiting for the next tick. Draining hands each edge out once.
#[derive(Default, Clone, Debug)]
pub struct EdgeQueue {
    pending: SmallVec<[HoldEdge; 4]>,
}

impl EdgeQueue {
    pub fn push(&mut self, edge: HoldEdge) {
        self.pending.push(edge);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = HoldEdge> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Space bar, as reported by DOM `KeyboardEvent.key` or winit named keys.
#[inline]
pub fn is_hold_key(key: &str) -> bool {
    matches!(key, " " | "Space" | "Spacebar")
}
