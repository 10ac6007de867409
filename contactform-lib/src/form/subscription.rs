//! Declarative event subscriptions owned by a form.

/// An event delivered to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The user edited a field.
    Input { field: String, value: String },
    /// A field lost focus.
    Blur { field: String },
    /// The user asked to submit.
    Submit,
}

impl FormEvent {
    pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Input {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn blur(field: impl Into<String>) -> Self {
        Self::Blur {
            field: field.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Input { .. } => EventKind::Input,
            Self::Blur { .. } => EventKind::Blur,
            Self::Submit => EventKind::Submit,
        }
    }

    /// Field targeted by the event, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Input { field, .. } | Self::Blur { field } => Some(field),
            Self::Submit => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    Blur,
    Submit,
}

/// Interest in one kind of event, optionally limited to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    pub kind: EventKind,
    pub field: Option<String>,
}

/// The list of subscriptions of a form.
///
/// Events that match no entry are dropped. [`clear`](Self::clear) tears the
/// whole list down at once.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a subscription. Adding the same one twice has no effect.
    pub fn subscribe(&mut self, kind: EventKind, field: Option<String>) {
        let subscription = Subscription { kind, field };
        if !self.entries.contains(&subscription) {
            self.entries.push(subscription);
        }
    }

    /// Whether any subscription accepts this event.
    pub fn matches(&self, event: &FormEvent) -> bool {
        let kind = event.kind();
        let field = event.field();
        self.entries.iter().any(|s| {
            s.kind == kind && (s.field.is_none() || s.field.as_deref() == field)
        })
    }

    /// Remove every subscription, returning how many there were.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Subscription> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scoped_match() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventKind::Input, Some("email".into()));

        assert!(subs.matches(&FormEvent::input("email", "a")));
        assert!(!subs.matches(&FormEvent::input("phone", "1")));
        assert!(!subs.matches(&FormEvent::blur("email")));
        assert!(!subs.matches(&FormEvent::Submit));
    }

    #[test]
    fn test_unscoped_match() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventKind::Submit, None);
        subs.subscribe(EventKind::Blur, None);
        assert!(subs.matches(&FormEvent::Submit));
        assert!(subs.matches(&FormEvent::blur("anything")));
    }

    #[test]
    fn test_duplicate_subscription_ignored() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventKind::Input, Some("name".into()));
        subs.subscribe(EventKind::Input, Some("name".into()));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn test_clear_tears_down_everything() {
        let mut subs = Subscriptions::new();
        subs.subscribe(EventKind::Input, Some("name".into()));
        subs.subscribe(EventKind::Submit, None);
        assert_eq!(subs.clear(), 2);
        assert!(subs.is_empty());
        assert!(!subs.matches(&FormEvent::Submit));
    }
}
