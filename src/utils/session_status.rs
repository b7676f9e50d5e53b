use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::session::AttendanceSession;

/// Lifecycle state of an attendance session at a given instant.
///
/// Display-only: nothing is persisted, the state is recomputed from the
/// session window on every render. `Overtime` is the late-check-in grace
/// window and is unreachable when the session carries no grace minutes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, PartialOrd, Ord)]
pub enum SessionStatus {
    NotYetStarted,
    Ongoing,
    Overtime,
    Ended,
}

impl SessionStatus {
    pub fn label(self) -> &'static str {
        match self {
            SessionStatus::NotYetStarted => "Not yet started",
            SessionStatus::Ongoing => "Ongoing",
            SessionStatus::Overtime => "Overtime",
            SessionStatus::Ended => "Ended",
        }
    }
}

/// Badge color for a status. Separate lookup so the palette can change
/// without touching the state logic.
pub fn display_color(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::NotYetStarted => "#6b7280",
        SessionStatus::Ongoing => "#22c55e",
        SessionStatus::Overtime => "#f97316",
        SessionStatus::Ended => "#ef4444",
    }
}

fn at(date: NaiveDate, hour: u32, min: u32) -> NaiveDateTime {
    date.and_hms_opt(hour.min(23), min.min(59), 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN))
}

fn grace(session: &AttendanceSession) -> Duration {
    Duration::minutes(i64::from(session.overtime_minutes_for_late.unwrap_or(0)))
}

/// Resolve the session lifecycle state at `now`.
///
/// Expects a well-formed window (`start <= end`, hours 0..=23, minutes
/// 0..=59); callers trust the upstream data and ill-formed windows are not
/// diagnosed here.
pub fn resolve(session: &AttendanceSession, now: NaiveDateTime) -> SessionStatus {
    let start = at(session.session_date, session.start_hour, session.start_min);
    let end = at(session.session_date, session.end_hour, session.end_min);

    if now < start {
        SessionStatus::NotYetStarted
    } else if now <= end {
        SessionStatus::Ongoing
    } else if now <= end + grace(session) {
        SessionStatus::Overtime
    } else {
        SessionStatus::Ended
    }
}

/// Countdown line shown next to an `Ongoing`/`Overtime` badge, e.g.
/// "5 minutes left." -- the strict distance from `now` to the final
/// check-in deadline (`end` plus grace). `None` in the other states.
pub fn time_left(session: &AttendanceSession, now: NaiveDateTime) -> Option<String> {
    match resolve(session, now) {
        SessionStatus::Ongoing | SessionStatus::Overtime => {}
        SessionStatus::NotYetStarted | SessionStatus::Ended => return None,
    }

    let deadline = at(session.session_date, session.end_hour, session.end_min) + grace(session);
    Some(format!("{} left.", strict_distance(deadline - now)))
}

// Largest single unit, rounded half-up, always pluralized on != 1.
fn strict_distance(d: Duration) -> String {
    let secs = d.num_seconds().max(0);
    let (value, unit) = if secs < 60 {
        (secs, "second")
    } else if secs < 3_600 {
        ((secs + 30) / 60, "minute")
    } else if secs < 86_400 {
        ((secs + 1_800) / 3_600, "hour")
    } else {
        ((secs + 43_200) / 86_400, "day")
    };

    if value == 1 {
        format!("1 {unit}")
    } else {
        format!("{value} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(
        start: (u32, u32),
        end: (u32, u32),
        overtime: Option<u32>,
    ) -> AttendanceSession {
        AttendanceSession {
            id: 1,
            session_date: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            start_hour: start.0,
            start_min: start.1,
            end_hour: end.0,
            end_min: end.1,
            overtime_minutes_for_late: overtime,
            description: None,
        }
    }

    fn on_day(hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 2)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    #[test]
    fn before_start_is_not_yet_started() {
        let s = session((9, 0), (10, 30), None);
        assert_eq!(resolve(&s, on_day(8, 59, 59)), SessionStatus::NotYetStarted);
    }

    #[test]
    fn inside_window_is_ongoing() {
        let s = session((9, 0), (10, 30), None);
        assert_eq!(resolve(&s, on_day(9, 0, 0)), SessionStatus::Ongoing);
        assert_eq!(resolve(&s, on_day(9, 45, 0)), SessionStatus::Ongoing);
        assert_eq!(resolve(&s, on_day(10, 30, 0)), SessionStatus::Ongoing);
    }

    #[test]
    fn grace_window_is_overtime_then_ended() {
        let s = session((9, 0), (10, 0), Some(15));
        assert_eq!(resolve(&s, on_day(10, 10, 0)), SessionStatus::Overtime);
        assert_eq!(resolve(&s, on_day(10, 15, 0)), SessionStatus::Overtime);
        assert_eq!(resolve(&s, on_day(10, 20, 0)), SessionStatus::Ended);
    }

    #[test]
    fn overtime_unreachable_without_grace() {
        let s = session((9, 0), (10, 0), None);
        assert_eq!(resolve(&s, on_day(10, 0, 1)), SessionStatus::Ended);

        let s = session((9, 0), (10, 0), Some(0));
        assert_eq!(resolve(&s, on_day(10, 0, 1)), SessionStatus::Ended);
    }

    #[test]
    fn status_never_regresses_as_time_advances() {
        let s = session((9, 0), (10, 0), Some(15));
        let mut last = SessionStatus::NotYetStarted;
        for minute in 0..240 {
            let now = on_day(8, 0, 0) + Duration::minutes(minute);
            let status = resolve(&s, now);
            assert!(status >= last, "regressed at minute {minute}: {status:?} after {last:?}");
            last = status;
        }
        assert_eq!(last, SessionStatus::Ended);
    }

    #[test]
    fn countdown_runs_to_the_grace_deadline() {
        let s = session((9, 0), (10, 0), Some(15));
        assert_eq!(time_left(&s, on_day(9, 45, 0)), Some("30 minutes left.".into()));
        assert_eq!(time_left(&s, on_day(10, 10, 0)), Some("5 minutes left.".into()));
        assert_eq!(time_left(&s, on_day(10, 14, 30)), Some("30 seconds left.".into()));
        assert_eq!(time_left(&s, on_day(10, 20, 0)), None);
        assert_eq!(time_left(&s, on_day(8, 0, 0)), None);
    }

    #[test]
    fn strict_distance_picks_the_largest_unit() {
        assert_eq!(strict_distance(Duration::seconds(1)), "1 second");
        assert_eq!(strict_distance(Duration::seconds(90)), "2 minutes");
        assert_eq!(strict_distance(Duration::minutes(61)), "1 hour");
        assert_eq!(strict_distance(Duration::hours(30)), "1 day");
    }

    #[test]
    fn colors_follow_the_status() {
        assert_eq!(display_color(SessionStatus::Ongoing), "#22c55e");
        assert_eq!(display_color(SessionStatus::Overtime), "#f97316");
        assert_ne!(
            display_color(SessionStatus::NotYetStarted),
            display_color(SessionStatus::Ended)
        );
    }
}
