use super::ActivityLog;

/// Synthetic record derived deterministically from the requested id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl UserRecord {
    pub fn synthesize(id: u32) -> Self {
        Self {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
            avatar_url: format!("https://api.dicebear.com/7.x/avataaars/svg?seed={id}"),
        }
    }
}

/// Capability carried by one in-flight fetch. The generation is captured at
/// task start; a completion whose generation no longer matches the widget's
/// is stale and must not mutate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub user_id: u32,
}

/// Simulated keyed data fetch. The widget never performs the delay itself;
/// the TUI layer sleeps and hands the ticket back via [`FetchDemo::complete`].
#[derive(Debug)]
pub struct FetchDemo {
    user_id: u32,
    user: Option<UserRecord>,
    loading: bool,
    generation: u64,
    pub log: ActivityLog,
}

impl Default for FetchDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchDemo {
    pub fn new() -> Self {
        Self {
            user_id: 1,
            user: None,
            loading: false,
            generation: 0,
            log: ActivityLog::new(4),
        }
    }

    pub fn user_id(&self) -> u32 {
        self.user_id
    }

    pub fn user(&self) -> Option<&UserRecord> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Starts a fetch for the current id, superseding any in-flight one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.log.push(format!("fetching user {}...", self.user_id));
        FetchTicket {
            generation: self.generation,
            user_id: self.user_id,
        }
    }

    /// Delivers a completed fetch. Stale tickets log a cancellation and
    /// leave the rest of the state untouched.
    pub fn complete(&mut self, ticket: FetchTicket) {
        if ticket.generation != self.generation {
            self.log
                .push(format!("request for user {} cancelled", ticket.user_id));
            return;
        }
        self.user = Some(UserRecord::synthesize(ticket.user_id));
        self.loading = false;
        self.log.push(format!("user {} loaded", ticket.user_id));
    }

    pub fn next_user(&mut self) -> FetchTicket {
        self.user_id += 1;
        self.begin_fetch()
    }

    pub fn reset_user(&mut self) -> FetchTicket {
        self.user_id = 1;
        self.begin_fetch()
    }

    /// Called when the widget's slide is left: invalidates any in-flight
    /// fetch so its completion is discarded as stale.
    pub fn deactivate(&mut self) {
        if self.loading {
            self.generation += 1;
            self.loading = false;
            self.log
                .push(format!("request for user {} cancelled (cleanup)", self.user_id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_result_never_reaches_state() {
        let mut demo = FetchDemo::new();
        let first = demo.begin_fetch();
        // Key changes before the first fetch resolves.
        let second = demo.next_user();

        demo.complete(first);
        assert!(demo.user().is_none());
        assert!(demo.loading());
        assert!(demo.log.last().unwrap().contains("cancelled"));

        demo.complete(second);
        let user = demo.user().unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.email, "user2@example.com");
        assert!(!demo.loading());
    }

    #[test]
    fn reset_returns_to_user_one() {
        let mut demo = FetchDemo::new();
        demo.next_user();
        demo.next_user();
        assert_eq!(demo.user_id(), 3);

        let ticket = demo.reset_user();
        assert_eq!(ticket.user_id, 1);
        demo.complete(ticket);
        assert_eq!(demo.user().unwrap().name, "User 1");
    }

    #[test]
    fn deactivation_discards_in_flight_fetch() {
        let mut demo = FetchDemo::new();
        let ticket = demo.begin_fetch();
        demo.deactivate();
        assert!(!demo.loading());

        demo.complete(ticket);
        assert!(demo.user().is_none());
    }

    #[test]
    fn deactivation_without_in_flight_fetch_logs_nothing() {
        let mut demo = FetchDemo::new();
        demo.deactivate();
        assert!(demo.log.is_empty());
    }
}
