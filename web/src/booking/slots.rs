const FIRST_SLOT_HOUR: u32 = 9;
const LAST_SLOT_HOUR: u32 = 16;
const SLOT_MINUTES: u32 = 30;

/// Half-hour slot labels from 9:00 AM through 4:00 PM. Reserved dates do not affect slots.
pub fn time_slots() -> impl Iterator<Item = String> {
    (FIRST_SLOT_HOUR * 60..=LAST_SLOT_HOUR * 60)
        .step_by(SLOT_MINUTES as usize)
        .map(|minutes| format_slot(minutes / 60, minutes % 60))
}

/// 12-hour clock label, e.g. `9:30 AM`, `12:00 PM`.
pub fn format_slot(hour: u32, minute: u32) -> String {
    let display_hour = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{}:{:02} {}", display_hour, minute, suffix)
}

pub fn is_slot(label: &str) -> bool {
    time_slots().any(|slot| slot == label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_noon_and_afternoon() {
        assert_eq!(format_slot(9, 0), "9:00 AM");
        assert_eq!(format_slot(12, 30), "12:30 PM");
        assert_eq!(format_slot(0, 0), "12:00 AM");
        assert_eq!(format_slot(16, 0), "4:00 PM");
    }

    #[test]
    fn recognises_generated_labels_only() {
        assert!(is_slot("10:00 AM"));
        assert!(!is_slot("4:30 PM"));
        assert!(!is_slot("10:15 AM"));
    }
}
