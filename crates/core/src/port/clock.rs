// Clock Port (for testability)

/// Clock interface (allows fixed dates in tests)
pub trait Clock: Send + Sync {
    /// Current local date as display text, `DD/MM/YYYY`.
    fn today(&self) -> String;
}

/// System clock (production)
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> String {
        chrono::Local::now().format("%d/%m/%Y").to_string()
    }
}
