use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Countdown {
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Self {
        let total = (target - now).num_seconds().max(0);
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.days > 0 {
            write!(f, "{}d ", self.days)?;
        }
        write!(f, "{:02}h {:02}m {:02}s", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgendaStatus {
    Past,
    Current,
    Upcoming(Countdown),
}

impl AgendaStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            AgendaStatus::Past => "agenda__item--past",
            AgendaStatus::Current => "agenda__item--current",
            AgendaStatus::Upcoming(_) => "agenda__item--future",
        }
    }

    pub fn label(&self) -> String {
        match self {
            AgendaStatus::Past => "been and gone".to_string(),
            AgendaStatus::Current => "happening now".to_string(),
            AgendaStatus::Upcoming(countdown) => format!("starting in {countdown}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgendaItem {
    pub title: String,
    pub starts_at: DateTime<Utc>,
    /// Items without an end are current only at their start instant.
    pub ends_at: Option<DateTime<Utc>>,
}

impl AgendaItem {
    pub fn new(title: &str, starts_at: DateTime<Utc>, ends_at: Option<DateTime<Utc>>) -> Self {
        Self {
            title: title.to_string(),
            starts_at,
            ends_at,
        }
    }

    pub fn status(&self, now: DateTime<Utc>) -> AgendaStatus {
        if now < self.starts_at {
            return AgendaStatus::Upcoming(Countdown::between(now, self.starts_at));
        }
        match self.ends_at {
            Some(end) if now < end => AgendaStatus::Current,
            None if now == self.starts_at => AgendaStatus::Current,
            _ => AgendaStatus::Past,
        }
    }
}
