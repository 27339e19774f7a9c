//! In-memory event collection.
//!
//! The store is always sorted by `(date, time)`. Every mutation re-sorts, so
//! callers never see an out-of-order collection.

use crate::event::{Event, EventUpdate};

#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from events in any order.
    pub fn from_events(events: Vec<Event>) -> Self {
        let mut store = EventStore { events };
        store.sort();
        store
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
        self.sort();
    }

    /// First event whose title equals `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.title == title)
    }

    /// Apply `update` to the first event titled `title`.
    ///
    /// Later events with the same title are left alone. Returns the event as
    /// it reads after the update, or `None` if no title matched.
    pub fn update(&mut self, title: &str, update: &EventUpdate) -> Option<&Event> {
        let index = self.events.iter().position(|e| e.title == title)?;
        update.apply(&mut self.events[index]);
        let updated = self.events[index].clone();
        self.sort();

        // The re-sort may move the event; find it again by value.
        self.events.iter().find(|e| **e == updated)
    }

    /// Remove every event titled `title`. Returns how many were removed.
    pub fn remove_by_title(&mut self, title: &str) -> usize {
        let before = self.events.len();
        self.events.retain(|e| e.title != title);
        before - self.events.len()
    }

    /// Events whose title contains `query` (case-sensitive), in schedule order.
    pub fn search(&self, query: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.title.contains(query))
            .collect()
    }

    fn sort(&mut self) {
        self.events.sort_by(Event::cmp_schedule);
    }
}

impl<'a> IntoIterator for &'a EventStore {
    type Item = &'a Event;
    type IntoIter = std::slice::Iter<'a, Event>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(store: &EventStore) -> bool {
        store
            .events()
            .windows(2)
            .all(|w| w[0].cmp_schedule(&w[1]).is_le())
    }

    fn rendered(store: &EventStore) -> Vec<String> {
        store.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_add_keeps_schedule_order() {
        let mut store = EventStore::new();
        store.add(Event::new("Standup", "2024-03-01", "09:00"));
        store.add(Event::new("Lunch", "2024-03-01", "12:00"));

        assert_eq!(
            rendered(&store),
            vec!["2024-03-01 09:00 - Standup", "2024-03-01 12:00 - Lunch"]
        );
    }

    #[test]
    fn test_add_inserts_earlier_event_first() {
        let mut store = EventStore::new();
        store.add(Event::new("Later", "2024-05-01", "08:00"));
        store.add(Event::new("Sooner", "2024-04-30", "23:59"));
        store.add(Event::new("Same day", "2024-05-01", "07:59"));

        assert!(is_sorted(&store));
        assert_eq!(store.events()[0].title, "Sooner");
        assert_eq!(store.events()[1].title, "Same day");
    }

    #[test]
    fn test_from_events_sorts() {
        let store = EventStore::from_events(vec![
            Event::new("C", "2024-01-03", "10:00"),
            Event::new("A", "2024-01-01", "10:00"),
            Event::new("B", "2024-01-02", "10:00"),
        ]);
        let titles: Vec<_> = store.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_find_by_title_is_exact_and_first() {
        let store = EventStore::from_events(vec![
            Event::new("Gym", "2024-02-02", "18:00"),
            Event::new("Gym", "2024-02-01", "18:00"),
        ]);

        assert_eq!(store.find_by_title("Gym").map(|e| e.date.as_str()), Some("2024-02-01"));
        assert!(store.find_by_title("gym").is_none());
        assert!(store.find_by_title("Gy").is_none());
    }

    #[test]
    fn test_update_changes_only_first_match() {
        let mut store = EventStore::from_events(vec![
            Event::new("Sync", "2024-06-02", "10:00"),
            Event::new("Sync", "2024-06-01", "10:00"),
        ]);

        let update = EventUpdate::from_input("", "", "11:00");
        let updated = store.update("Sync", &update).cloned();

        assert_eq!(updated, Some(Event::new("Sync", "2024-06-01", "11:00")));
        assert_eq!(
            rendered(&store),
            vec!["2024-06-01 11:00 - Sync", "2024-06-02 10:00 - Sync"]
        );
    }

    #[test]
    fn test_update_resorts() {
        let mut store = EventStore::from_events(vec![
            Event::new("First", "2024-01-01", "09:00"),
            Event::new("Second", "2024-01-02", "09:00"),
        ]);

        store.update("First", &EventUpdate::from_input("", "2024-01-03", ""));

        assert!(is_sorted(&store));
        assert_eq!(store.events()[1].title, "First");
    }

    #[test]
    fn test_update_missing_title_is_none() {
        let mut store = EventStore::from_events(vec![Event::new("A", "2024-01-01", "09:00")]);
        assert!(store
            .update("B", &EventUpdate::from_input("C", "", ""))
            .is_none());
        assert_eq!(store.events()[0].title, "A");
    }

    #[test]
    fn test_update_invalid_date_is_discarded() {
        let mut store = EventStore::from_events(vec![Event::new("A", "2024-01-01", "09:00")]);
        let updated = store
            .update("A", &EventUpdate::from_input("", "01/02/2024", "25:99"))
            .cloned();
        assert_eq!(updated, Some(Event::new("A", "2024-01-01", "25:99")));
    }

    #[test]
    fn test_remove_by_title_removes_all_matches() {
        let mut store = EventStore::from_events(vec![
            Event::new("Gym", "2024-02-01", "18:00"),
            Event::new("Work", "2024-02-01", "09:00"),
            Event::new("Gym", "2024-02-03", "18:00"),
        ]);

        assert_eq!(store.remove_by_title("Gym"), 2);
        assert_eq!(rendered(&store), vec!["2024-02-01 09:00 - Work"]);
        assert_eq!(store.remove_by_title("Gym"), 0);
        assert!(is_sorted(&store));
    }

    #[test]
    fn test_search_substring_in_schedule_order() {
        let store = EventStore::from_events(vec![
            Event::new("Dinner", "2024-03-01", "19:00"),
            Event::new("Brunch", "2024-03-02", "11:00"),
            Event::new("Lunch", "2024-03-01", "12:00"),
        ]);

        let titles: Vec<_> = store.search("unch").iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Lunch", "Brunch"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let store = EventStore::from_events(vec![Event::new("Lunch", "2024-03-01", "12:00")]);
        assert!(store.search("lunch").is_empty());
        assert_eq!(store.search("").len(), 1);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut store = EventStore::new();
        assert!(store.is_empty());
        store.add(Event::new("A", "2024-01-01", "09:00"));
        store.add(Event::new("B", "2024-01-01", "09:00"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_equal_slots_keep_insertion_order() {
        let mut store = EventStore::new();
        store.add(Event::new("A", "2024-01-01", "09:00"));
        store.add(Event::new("B", "2024-01-01", "09:00"));
        store.add(Event::new("C", "2023-12-31", "09:00"));
        let titles: Vec<_> = store.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }
}
