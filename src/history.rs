//! Past questions shown in the History tab. Read-only fixture data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Photo,
    Text,
}

impl InputKind {
    pub fn icon(self) -> &'static str {
        match self {
            InputKind::Photo => "📷",
            InputKind::Text => "💬",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Math,
    Science,
    English,
    History,
    Other(&'static str),
}

impl Subject {
    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Science => "Science",
            Subject::English => "English",
            Subject::History => "History",
            Subject::Other(name) => name,
        }
    }

    /// CSS class selecting the badge colour.
    pub fn badge_class(self) -> &'static str {
        match self {
            Subject::Math => "badge subject-math",
            Subject::Science => "badge subject-science",
            Subject::English => "badge subject-english",
            Subject::History => "badge subject-history",
            Subject::Other(_) => "badge subject-other",
        }
    }
}

pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u32,
    pub kind: InputKind,
    pub question: &'static str,
    pub subject: Subject,
    pub grade: &'static str,
    pub timestamp: &'static str,
    pub rating: u8,
}

impl HistoryEntry {
    /// One flag per star, filled stars first.
    pub fn stars(&self) -> [bool; MAX_RATING as usize] {
        let filled = self.rating.min(MAX_RATING);
        std::array::from_fn(|i| (i as u8) < filled)
    }
}

pub fn recent_questions() -> Vec<HistoryEntry> {
    vec![
        HistoryEntry {
            id: 1,
            kind: InputKind::Photo,
            question: "Fraction addition worksheet",
            subject: Subject::Math,
            grade: "Grade 3",
            timestamp: "2 hours ago",
            rating: 5,
        },
        HistoryEntry {
            id: 2,
            kind: InputKind::Text,
            question: "How do I explain photosynthesis to a 7-year-old?",
            subject: Subject::Science,
            grade: "Grade 2",
            timestamp: "1 day ago",
            rating: 4,
        },
        HistoryEntry {
            id: 3,
            kind: InputKind::Photo,
            question: "Reading comprehension exercise",
            subject: Subject::English,
            grade: "Grade 4",
            timestamp: "3 days ago",
            rating: 5,
        },
        HistoryEntry {
            id: 4,
            kind: InputKind::Text,
            question: "Simple multiplication tables practice",
            subject: Subject::Math,
            grade: "Grade 2",
            timestamp: "1 week ago",
            rating: 4,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_are_stable_and_ordered() {
        let a = recent_questions();
        assert_eq!(a, recent_questions());
        assert_eq!(a.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn stars_fill_up_to_the_rating() {
        let mut e = recent_questions().remove(1);
        for rating in 0..=MAX_RATING {
            e.rating = rating;
            let stars = e.stars();
            assert_eq!(stars.iter().filter(|s| **s).count(), rating as usize);
            assert!(stars.iter().skip(rating as usize).all(|s| !s));
        }
        e.rating = 9;
        assert!(e.stars().iter().all(|s| *s));
    }

    #[test]
    fn unknown_subjects_get_the_neutral_badge() {
        assert_eq!(Subject::Other("Art").badge_class(), "badge subject-other");
        assert_eq!(Subject::Other("Art").name(), "Art");
        assert_eq!(Subject::Science.badge_class(), "badge subject-science");
    }
}
