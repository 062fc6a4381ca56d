use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attendance {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventChoice {
    Wedding,
    Reception,
}

impl EventChoice {
    pub fn label(&self) -> &'static str {
        match self {
            EventChoice::Wedding => "Wedding Ceremony (Aug 31)",
            EventChoice::Reception => "Reception (Sep 1)",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventChoice::Wedding => "💍",
            EventChoice::Reception => "🥂",
        }
    }
}

/// RSVP form state. Pure local state; submission is simulated.
#[derive(Debug, Clone, PartialEq)]
pub struct RsvpEntry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attendance: Attendance,
    pub guest_count: u8,
    pub events: Vec<EventChoice>,
    pub dietary_notes: String,
    pub message: String,
}

impl Default for RsvpEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            attendance: Attendance::Yes,
            guest_count: 1,
            events: Vec::new(),
            dietary_notes: String::new(),
            message: String::new(),
        }
    }
}

impl RsvpEntry {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Please enter your name.".to_string()));
        }
        if self.attendance == Attendance::Yes && self.events.is_empty() {
            return Err(AppError::Validation(
                "Please select at least one event you will attend.".to_string(),
            ));
        }
        Ok(())
    }

    /// Flip one event in or out of the selection.
    pub fn toggle_event(&mut self, choice: EventChoice) {
        if let Some(pos) = self.events.iter().position(|e| *e == choice) {
            self.events.remove(pos);
        } else {
            self.events.push(choice);
        }
    }

    pub fn attends(&self, choice: EventChoice) -> bool {
        self.events.contains(&choice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let entry = RsvpEntry {
            name: "Anjali".to_string(),
            events: vec![EventChoice::Wedding],
            ..Default::default()
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_name_is_required() {
        let entry = RsvpEntry {
            events: vec![EventChoice::Wedding],
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_attending_requires_an_event() {
        let entry = RsvpEntry {
            name: "Anjali".to_string(),
            ..Default::default()
        };
        assert!(entry.validate().is_err());
    }

    #[test]
    fn test_declining_needs_no_events() {
        let entry = RsvpEntry {
            name: "Anjali".to_string(),
            attendance: Attendance::No,
            ..Default::default()
        };
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn test_toggle_event() {
        let mut entry = RsvpEntry::default();

        entry.toggle_event(EventChoice::Reception);
        assert!(entry.attends(EventChoice::Reception));

        entry.toggle_event(EventChoice::Reception);
        assert!(!entry.attends(EventChoice::Reception));
    }
}
