//! One-shot timer capability and a virtual-clock implementation.

use core::fmt::Debug;

use heapless::Vec as HeaplessVec;

pub const MANUAL_TIMER_SLOTS: usize = 4;

/// Identifies one scheduled expiry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct TimerHandle(u32);

impl TimerHandle {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Host timer. Expiry is delivered back to the engine with
/// [`crate::Spritzer::on_timer`], on the same timeline as every other call.
pub trait TimerService {
    type Error: Debug;

    fn schedule_once(&mut self, delay_ms: u32) -> Result<TimerHandle, Self::Error>;

    /// Cancelling an unknown or already fired handle is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ManualTimerError {
    NoFreeSlot,
}

#[derive(Clone, Copy, Debug)]
struct PendingTimer {
    handle: TimerHandle,
    due_ms: u64,
}

/// Timer driven by an explicit clock. Nothing fires until the host moves
/// time forward with [`ManualTimer::advance_to`] or [`ManualTimer::fire_next`].
#[derive(Debug, Default)]
pub struct ManualTimer {
    now_ms: u64,
    next_id: u32,
    pending: HeaplessVec<PendingTimer, MANUAL_TIMER_SLOTS>,
}

impl ManualTimer {
    pub const fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 0,
            pending: HeaplessVec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.pending.iter().map(|timer| timer.due_ms).min()
    }

    /// Move the clock to `now_ms` (never backwards) and pop the earliest
    /// timer due by then.
    pub fn advance_to(&mut self, now_ms: u64) -> Option<TimerHandle> {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let (slot, _) = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= now)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.handle.id()))?;

        Some(self.pending.swap_remove(slot).handle)
    }

    /// Jump straight to the earliest deadline and pop that timer.
    pub fn fire_next(&mut self) -> Option<TimerHandle> {
        let due_ms = self.next_deadline_ms()?;
        self.advance_to(due_ms)
    }
}

impl TimerService for ManualTimer {
    type Error = ManualTimerError;

    fn schedule_once(&mut self, delay_ms: u32) -> Result<TimerHandle, Self::Error> {
        let handle = TimerHandle::new(self.next_id);
        self.pending
            .push(PendingTimer {
                handle,
                due_ms: self.now_ms + delay_ms as u64,
            })
            .map_err(|_| ManualTimerError::NoFreeSlot)?;
        self.next_id = self.next_id.wrapping_add(1);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(slot) = self.pending.iter().position(|timer| timer.handle == handle) {
            self.pending.swap_remove(slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_deadline_order() {
        let mut timer = ManualTimer::new();
        let late = timer.schedule_once(300).unwrap();
        let early = timer.schedule_once(100).unwrap();

        assert_eq!(timer.advance_to(50), None);
        assert_eq!(timer.fire_next(), Some(early));
        assert_eq!(timer.now_ms(), 100);
        assert_eq!(timer.fire_next(), Some(late));
        assert_eq!(timer.now_ms(), 300);
        assert_eq!(timer.fire_next(), None);
    }

    #[test]
    fn delays_are_relative_to_current_clock() {
        let mut timer = ManualTimer::new();
        timer.advance_to(1_000);
        timer.schedule_once(250).unwrap();
        assert_eq!(timer.next_deadline_ms(), Some(1_250));
    }

    #[test]
    fn clock_never_moves_backwards() {
        let mut timer = ManualTimer::new();
        timer.advance_to(500);
        timer.advance_to(200);
        assert_eq!(timer.now_ms(), 500);
    }

    #[test]
    fn cancelled_timers_never_fire() {
        let mut timer = ManualTimer::new();
        let handle = timer.schedule_once(10).unwrap();
        timer.cancel(handle);
        timer.cancel(handle);
        assert_eq!(timer.pending_count(), 0);
        assert_eq!(timer.advance_to(1_000), None);
    }

    #[test]
    fn reports_exhausted_slots() {
        let mut timer = ManualTimer::new();
        for _ in 0..MANUAL_TIMER_SLOTS {
            timer.schedule_once(1).unwrap();
        }
        assert_eq!(timer.schedule_once(1), Err(ManualTimerError::NoFreeSlot));
    }
}
