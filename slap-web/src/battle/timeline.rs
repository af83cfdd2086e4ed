//! Deferred battle effects
//!
//! Everything the battle wants to happen "later" (attack resolution, hurt
//! image revert, end screen reveal) is queued here with an absolute due
//! time and the generation it was scheduled in. Starting a new battle bumps
//! the generation, which silently drops whatever the previous run queued.

/// Effects that can be scheduled
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Put the normal boss image back after a hit (only while Idle)
    RevertHurt,
    /// Show special-skill frame N (only while EnemyAttack)
    SkillFrame(usize),
    /// Evaluate block and apply enemy damage (only while EnemyAttack)
    ResolveAttack,
    RevealVictory,
    RevealDefeat,
}

#[derive(Clone, Copy, Debug)]
struct ScheduledEffect {
    due: f64,
    /// Insertion order, keeps ties FIFO
    seq: u64,
    generation: u64,
    effect: Effect,
}

#[derive(Debug, Default)]
pub struct Timeline {
    generation: u64,
    next_seq: u64,
    pending: Vec<ScheduledEffect>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Invalidate everything scheduled so far
    pub fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn schedule(&mut self, now: f64, delay_ms: f64, effect: Effect) {
        self.pending.push(ScheduledEffect {
            due: now + delay_ms,
            seq: self.next_seq,
            generation: self.generation,
            effect,
        });
        self.next_seq += 1;
    }

    /// Remove and return the earliest effect due at `now`, with its due time.
    /// Effects from an older generation are discarded on the way.
    pub fn pop_due(&mut self, now: f64) -> Option<(f64, Effect)> {
        let generation = self.generation;
        self.pending.retain(|s| s.generation == generation);

        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due <= now)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.seq.cmp(&b.seq)))
            .map(|(i, _)| i)?;

        let scheduled = self.pending.swap_remove(index);
        Some((scheduled.due, scheduled.effect))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
