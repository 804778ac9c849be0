//! List-view shaping helpers for the presentation layer.
//!
//! # Responsibility
//! - Partition fetched notes into pinned-first display order.
//! - Filter a fetched list by live search query and by category.
//!
//! # Invariants
//! - All helpers are pure over an in-memory snapshot; storage order within
//!   each partition is preserved.
//! - Query matching is case-insensitive substring over title and content.

use crate::model::note::Note;

/// Pseudo-category matching every note.
pub const ALL_CATEGORIES: &str = "All";

/// Reorders a snapshot so pinned notes come first, keeping storage order
/// within each partition.
pub fn partition_pinned(notes: Vec<Note>) -> Vec<Note> {
    let (pinned, regular): (Vec<Note>, Vec<Note>) =
        notes.into_iter().partition(|note| note.is_pinned);
    let mut ordered = pinned;
    ordered.extend(regular);
    ordered
}

/// Keeps notes whose title or content contains the query,
/// case-insensitively. An empty query matches everything.
pub fn filter_query(notes: &[Note], query: &str) -> Vec<Note> {
    let needle = query.to_lowercase();
    notes
        .iter()
        .filter(|note| {
            note.title.to_lowercase().contains(&needle)
                || note.content.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keeps notes in the given category; [`ALL_CATEGORIES`] keeps everything.
pub fn filter_category(notes: &[Note], category: &str) -> Vec<Note> {
    if category == ALL_CATEGORIES {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|note| note.category == category)
        .cloned()
        .collect()
}

/// Badge shown next to a note in listings; pin wins over favorite.
pub fn badge(note: &Note) -> &'static str {
    if note.is_pinned {
        "📌"
    } else if note.favorite {
        "⭐"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::{badge, filter_category, filter_query, partition_pinned, ALL_CATEGORIES};
    use crate::model::note::Note;

    fn note(id: i64, title: &str, content: &str, category: &str, pinned: bool) -> Note {
        Note {
            id,
            title: title.to_string(),
            content: content.to_string(),
            favorite: false,
            category: category.to_string(),
            is_pinned: pinned,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn pinned_notes_sort_first_with_stable_order() {
        let notes = vec![
            note(1, "a", "", "General", false),
            note(2, "b", "", "General", true),
            note(3, "c", "", "General", false),
            note(4, "d", "", "General", true),
        ];
        let ordered: Vec<i64> = partition_pinned(notes).iter().map(|n| n.id).collect();
        assert_eq!(ordered, vec![2, 4, 1, 3]);
    }

    #[test]
    fn query_filter_is_case_insensitive_over_title_and_content() {
        let notes = vec![
            note(1, "Groceries", "Milk, eggs", "General", false),
            note(2, "Plans", "buy MILK later", "General", false),
            note(3, "Other", "nothing here", "General", false),
        ];
        let hits: Vec<i64> = filter_query(&notes, "milk").iter().map(|n| n.id).collect();
        assert_eq!(hits, vec![1, 2]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let notes = vec![note(1, "a", "", "General", false)];
        assert_eq!(filter_query(&notes, "").len(), 1);
    }

    #[test]
    fn category_filter_treats_all_as_wildcard() {
        let notes = vec![
            note(1, "a", "", "Work", false),
            note(2, "b", "", "Ideas", false),
        ];
        assert_eq!(filter_category(&notes, ALL_CATEGORIES).len(), 2);
        let work: Vec<i64> = filter_category(&notes, "Work").iter().map(|n| n.id).collect();
        assert_eq!(work, vec![1]);
    }

    #[test]
    fn pin_badge_wins_over_favorite() {
        let mut pinned = note(1, "a", "", "General", true);
        pinned.favorite = true;
        assert_eq!(badge(&pinned), "📌");

        let mut favorite = note(2, "b", "", "General", false);
        favorite.favorite = true;
        assert_eq!(badge(&favorite), "⭐");

        assert_eq!(badge(&note(3, "c", "", "General", false)), "");
    }
}
