use chrono::{DateTime, Utc};
use folio_shared_contracts::time::TimeService;
use folio_utils::trace_instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[trace_instrument(skip(self))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_current() {
        let before = Utc::now();
        let now = TimeServiceImpl.now();
        assert!(before <= now && now <= Utc::now());
    }
}
