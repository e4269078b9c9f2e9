use chrono::{Duration, TimeZone, Utc};

use hackform::agenda::{AgendaItem, AgendaStatus, Countdown};

#[test]
fn countdown_breaks_down_remaining_time() {
    let now = Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap();
    let target = now + Duration::days(4) + Duration::hours(3) + Duration::minutes(2) + Duration::seconds(1);

    let countdown = Countdown::between(now, target);
    assert_eq!(
        countdown,
        Countdown { days: 4, hours: 3, minutes: 2, seconds: 1 }
    );
    assert_eq!(countdown.to_string(), "4d 03h 02m 01s");
}

#[test]
fn countdown_saturates_after_target() {
    let now = Utc.with_ymd_and_hms(2024, 10, 1, 12, 0, 0).unwrap();
    let countdown = Countdown::between(now, now - Duration::hours(1));
    assert!(countdown.is_zero());
    assert_eq!(countdown.to_string(), "00h 00m 00s");
}

#[test]
fn agenda_item_moves_from_upcoming_to_past() {
    let start = Utc.with_ymd_and_hms(2024, 10, 5, 9, 0, 0).unwrap();
    let item = AgendaItem::new("Kick-off", start, Some(start + Duration::hours(1)));

    let before = item.status(start - Duration::minutes(90));
    assert_eq!(
        before,
        AgendaStatus::Upcoming(Countdown { days: 0, hours: 1, minutes: 30, seconds: 0 })
    );
    assert_eq!(before.css_class(), "agenda__item--future");
    assert_eq!(before.label(), "starting in 01h 30m 00s");

    let during = item.status(start + Duration::minutes(30));
    assert_eq!(during, AgendaStatus::Current);
    assert_eq!(during.label(), "happening now");

    let after = item.status(start + Duration::hours(2));
    assert_eq!(after, AgendaStatus::Past);
    assert_eq!(after.css_class(), "agenda__item--past");
}

#[test]
fn open_ended_item_is_past_once_started() {
    let start = Utc.with_ymd_and_hms(2024, 10, 5, 9, 0, 0).unwrap();
    let item = AgendaItem::new("Doors open", start, None);

    assert_eq!(item.status(start), AgendaStatus::Current);
    assert_eq!(item.status(start + Duration::seconds(1)), AgendaStatus::Past);
}
