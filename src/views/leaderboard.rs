//! Leaderboard ranking and medals.

use serde::Serialize;

use super::initial;
use crate::models::User;
use crate::store::DomainStore;

/// Marker shown next to a 0-based rank.
pub fn medal(rank: usize) -> String {
    match rank {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("{}.", rank + 1),
    }
}

/// One row of the leaderboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based position
    pub place: usize,
    pub medal: String,
    pub top_three: bool,
    pub author_initial: String,
    #[serde(flatten)]
    pub user: User,
}

/// Rank every user. Recomputed on each call.
pub fn build_leaderboard(store: &DomainStore) -> Vec<LeaderboardEntry> {
    store
        .ranked_users()
        .into_iter()
        .enumerate()
        .map(|(rank, user)| LeaderboardEntry {
            place: rank + 1,
            medal: medal(rank),
            top_three: rank < 3,
            author_initial: initial(&user.name),
            user,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhotoAuthor;

    #[test]
    fn test_medals() {
        assert_eq!(medal(0), "🥇");
        assert_eq!(medal(1), "🥈");
        assert_eq!(medal(2), "🥉");
        assert_eq!(medal(3), "4.");
        assert_eq!(medal(9), "10.");
    }

    #[test]
    fn test_build_leaderboard() {
        let store = DomainStore::with_fixtures(PhotoAuthor::new("currentUser", "Вы"));

        let entries = build_leaderboard(&store);

        assert_eq!(entries.len(), store.users().len());
        let names: Vec<_> = entries.iter().map(|e| e.user.name.as_str()).collect();
        // Анна and Дмитрий tie on 12 and keep fixture order.
        assert_eq!(names, vec!["Иван", "Анна", "Дмитрий", "Мария", "Елена", "Сергей"]);
        assert_eq!(entries[0].medal, "🥇");
        assert_eq!(entries[3].medal, "4.");
        assert_eq!(entries[3].place, 4);
        assert!(entries[2].top_three);
        assert!(!entries[3].top_three);
        assert_eq!(entries[0].author_initial, "И");
    }

    #[test]
    fn test_leaderboard_serializes_flat() {
        let store = DomainStore::with_fixtures(PhotoAuthor::new("currentUser", "Вы"));
        let json = serde_json::to_value(&build_leaderboard(&store)[0]).unwrap();

        assert_eq!(json["name"], "Иван");
        assert_eq!(json["completedQuests"], 15);
        assert_eq!(json["place"], 1);
        assert_eq!(json["topThree"], true);
    }
}
