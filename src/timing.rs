use std::{
    fmt::{self, Display},
    time::{Duration, Instant},
};

/*
 * Run <f> once and return its result with the wall time it took
 */
pub fn measure<R, F: FnOnce() -> R>(f: F) -> (R, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

/*
 * One timed phase of the benchmark
 */
pub struct Timing<'a> {
    pub action: Action,
    pub count: usize,
    pub container: &'a str,
    pub elapsed: Duration,
}

impl<'a> Display for Timing<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (verb, prep) = match self.action {
            Action::Add => ("add", "to"),
            Action::Remove => ("remove", "from"),
        };
        write!(
            f,
            "The time required to {} {} elements {} a {} = {} us",
            verb,
            self.count,
            prep,
            self.container,
            self.elapsed.as_micros()
        )
    }
}
