//! Guard against out-of-order responses when a screen refetches.

/// Identifies one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic counter. Each fetch takes a ticket with [`RequestGeneration::begin`]
/// and applies its response only while the ticket is still current.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestGeneration {
    latest: u64,
}

impl RequestGeneration {
    pub fn begin(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.0 == self.latest
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_is_current() {
        let mut generation = RequestGeneration::default();
        let slow = generation.begin();
        let fast = generation.begin();
        assert!(!generation.is_current(slow));
        assert!(generation.is_current(fast));
    }
}
