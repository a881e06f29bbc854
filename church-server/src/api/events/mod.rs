//! Events API - upcoming events listing
//!
//! Static fixture data; there is no event persistence yet.

use axum::{Json, Router, routing::get};
use shared::models::Event;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/events", get(list))
}

fn event(id: i64, title: &str, date: &str, time: &str, description: &str) -> Event {
    Event {
        id,
        title: title.into(),
        date: date.into(),
        time: time.into(),
        description: description.into(),
    }
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        event(1, "Sunday Mass", "2026-02-22", "10:00 AM", "Weekly Sunday Service"),
        event(2, "Bible Study", "2026-02-23", "7:00 PM", "Join us for Bible study and discussion"),
        event(3, "Choir Practice", "2026-02-24", "6:00 PM", "Weekly choir rehearsal"),
        event(4, "Sunday Mass", "2026-02-29", "10:00 AM", "Weekly Sunday Service"),
        event(5, "Community Outreach", "2026-03-01", "9:00 AM", "Help serve the community"),
        event(6, "Confession", "2026-03-02", "4:00 PM", "Sacrament of Reconciliation"),
        event(7, "Young Adults Group", "2026-03-03", "7:30 PM", "Social gathering for young adults"),
        event(8, "Sunday Mass", "2026-03-08", "10:00 AM", "Weekly Sunday Service"),
        event(9, "Prayer Circle", "2026-03-09", "6:00 PM", "Evening prayer and fellowship"),
        event(10, "Baptism Class", "2026-03-10", "7:00 PM", "Preparation for Baptism"),
    ]
}

/// GET /api/events
async fn list() -> Json<Vec<Event>> {
    Json(upcoming_events())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_is_stable() {
        let events = upcoming_events();
        assert_eq!(events.len(), 10);
        assert_eq!(events[0].title, "Sunday Mass");
        assert_eq!(events[9].date, "2026-03-10");
        // Ids are sequential from 1
        for (i, e) in events.iter().enumerate() {
            assert_eq!(e.id, i as i64 + 1);
        }
    }
}
