use std::{fmt::Display, sync::atomic};

/// Progress bar over a known number of steps, safe to advance from several threads
pub struct Progress {
    current: atomic::AtomicUsize,
    done: atomic::AtomicBool,
    max: usize,
}

enum DoneState {
    Done,
    FirstDone,
    NotDone,
}

impl Progress {
    pub fn new(max: usize) -> Self {
        Self {
            current: Default::default(),
            done: Default::default(),
            max,
        }
    }
    pub fn inc(&self) -> usize {
        self.current.fetch_add(1, atomic::Ordering::SeqCst)
    }
    pub fn get_raw(&self) -> usize {
        self.current.load(atomic::Ordering::SeqCst)
    }
    pub fn print(&self) {
        use std::io::Write;
        match self.done_state() {
            DoneState::Done => (),
            DoneState::FirstDone => {
                println!("\r{}", self);
                let _ = std::io::stdout().flush();
            }
            DoneState::NotDone => {
                print!("\r{}", self);
                let _ = std::io::stdout().flush();
            }
        }
    }

    fn done_state(&self) -> DoneState {
        if self.get_raw() < self.max {
            return DoneState::NotDone;
        }
        // Only the first caller past the end prints the final line
        if self.done.swap(true, atomic::Ordering::SeqCst) {
            DoneState::Done
        } else {
            DoneState::FirstDone
        }
    }

    fn ratio(&self) -> f32 {
        if self.max == 0 {
            1.
        } else {
            (self.get_raw() as f32 / self.max as f32).min(1.)
        }
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = 50;
        let val = self.ratio();
        let width = ((n - 1) as f32 * val).round() as usize;
        write!(
            f,
            "[{empty:=>width_left$}>{empty:.<width_right$}] {val:.1}%",
            empty = "",
            width_left = width,
            width_right = n - 1 - width,
            val = 100. * val
        )
    }
}
