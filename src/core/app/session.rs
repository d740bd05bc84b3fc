use crate::utils::logging::LoggingState;

/// Client-side session state.
///
/// Requests are numbered from one counter. Starting a session and loading a
/// conversation both decide which conversation is active, so they share a
/// single navigation slot: only the most recently issued navigation request
/// may apply its response. The conversation listing has its own slot.
pub struct SessionContext {
    pub active_conversation_id: Option<String>,
    pub logging: LoggingState,
    next_request_id: u64,
    pending_navigation: Option<u64>,
    pending_listing: Option<u64>,
}

impl SessionContext {
    pub fn new(logging: LoggingState) -> Self {
        Self {
            active_conversation_id: None,
            logging,
            next_request_id: 0,
            pending_navigation: None,
            pending_listing: None,
        }
    }

    pub fn next_request_id(&mut self) -> u64 {
        self.next_request_id += 1;
        self.next_request_id
    }

    pub fn begin_navigation(&mut self) -> u64 {
        let request_id = self.next_request_id();
        self.pending_navigation = Some(request_id);
        request_id
    }

    /// Close the navigation slot if `request_id` holds it. Returns false for
    /// superseded responses, which must be discarded.
    pub fn finish_navigation(&mut self, request_id: u64) -> bool {
        if self.pending_navigation == Some(request_id) {
            self.pending_navigation = None;
            true
        } else {
            false
        }
    }

    pub fn is_navigating(&self) -> bool {
        self.pending_navigation.is_some()
    }

    pub fn begin_listing(&mut self) -> u64 {
        let request_id = self.next_request_id();
        self.pending_listing = Some(request_id);
        request_id
    }

    pub fn finish_listing(&mut self, request_id: u64) -> bool {
        if self.pending_listing == Some(request_id) {
            self.pending_listing = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_navigation_supersedes_older() {
        let mut session = SessionContext::new(LoggingState::disabled());
        let first = session.begin_navigation();
        let second = session.begin_navigation();
        assert!(session.is_navigating());
        assert!(!session.finish_navigation(first));
        assert!(session.finish_navigation(second));
        assert!(!session.is_navigating());
        // A response can only be applied once
        assert!(!session.finish_navigation(second));
    }

    #[test]
    fn listing_and_navigation_slots_are_independent() {
        let mut session = SessionContext::new(LoggingState::disabled());
        let nav = session.begin_navigation();
        let list = session.begin_listing();
        assert_ne!(nav, list);
        assert!(session.finish_listing(list));
        assert!(session.finish_navigation(nav));
    }
}
