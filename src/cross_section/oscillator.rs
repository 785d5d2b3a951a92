//! Triangle-wave tick counter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Bounded counter that bounces between `0` and `max_tick`.
///
/// Each `step` moves one unit and flips direction on reaching either bound,
/// so from 0 the sequence is 1, 2, ..., max, max-1, ..., 0, 1, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oscillator {
    tick: u32,
    max_tick: u32,
    direction: Direction,
}

impl Oscillator {
    pub fn new(max_tick: u32) -> Self {
        Self {
            tick: 0,
            max_tick: max_tick.max(1),
            direction: Direction::Forward,
        }
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn max_tick(&self) -> u32 {
        self.max_tick
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn reset(&mut self) {
        self.tick = 0;
        self.direction = Direction::Forward;
    }

    /// Advance one pulse and return the new tick.
    pub fn step(&mut self) -> u32 {
        self.tick = match self.direction {
            Direction::Forward => (self.tick + 1).min(self.max_tick),
            Direction::Backward => self.tick.saturating_sub(1),
        };
        if self.tick == self.max_tick || self.tick == 0 {
            self.direction = match self.direction {
                Direction::Forward => Direction::Backward,
                Direction::Backward => Direction::Forward,
            };
        }
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaches_max_then_turns() {
        let mut osc = Oscillator::new(20);
        let seq: Vec<u32> = (0..22).map(|_| osc.step()).collect();
        assert_eq!(&seq[..3], &[1, 2, 3]);
        assert_eq!(seq[19], 20);
        assert_eq!(seq[20], 19);
        assert_eq!(seq[21], 18);
    }

    #[test]
    fn returns_to_zero_and_goes_forward_again() {
        let mut osc = Oscillator::new(3);
        let seq: Vec<u32> = (0..8).map(|_| osc.step()).collect();
        assert_eq!(seq, vec![1, 2, 3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn never_leaves_bounds() {
        let mut osc = Oscillator::new(20);
        for _ in 0..1000 {
            let t = osc.step();
            assert!(t <= 20);
        }
    }

    #[test]
    fn zero_max_is_clamped() {
        let mut osc = Oscillator::new(0);
        assert_eq!(osc.max_tick(), 1);
        assert_eq!(osc.step(), 1);
        assert_eq!(osc.step(), 0);
    }

    #[test]
    fn reset_restarts_forward() {
        let mut osc = Oscillator::new(20);
        for _ in 0..25 {
            osc.step();
        }
        osc.reset();
        assert_eq!(osc.tick(), 0);
        assert_eq!(osc.direction(), Direction::Forward);
        assert_eq!(osc.step(), 1);
    }
}
