//! Genre preference analysis over a watch history.

use profile::User;

/// One genre per watched item, in watch order. Repeats are the frequency signal.
pub fn analyze_user_genre_preferences(user: &User) -> Vec<String> {
    user.watch_history()
        .iter()
        .map(|item| item.genre().to_string())
        .collect()
}

/// Count each distinct genre, most frequent first.
///
/// Genres with the same count stay in order of first appearance.
pub fn tally_genres(genres: &[String]) -> Vec<(String, usize)> {
    let mut tally: Vec<(String, usize)> = Vec::new();
    for genre in genres {
        match tally.iter_mut().find(|(g, _)| g == genre) {
            Some((_, count)) => *count += 1,
            None => tally.push((genre.clone(), 1)),
        }
    }

    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::MediaRecord;

    #[test]
    fn test_analyze_user_genre_preferences() {
        let mut user = User::restore("User1", "alice", Vec::new());
        user.watch_media(MediaRecord::movie("M1", "Inception", "Sci-Fi", 8.8, 148, "Nolan").unwrap());
        user.watch_media(MediaRecord::series("S1", "Dark", "Thriller", 9.0, 60, 3).unwrap());
        user.watch_media(MediaRecord::movie("M1", "Inception", "Sci-Fi", 8.8, 148, "Nolan").unwrap());

        assert_eq!(
            analyze_user_genre_preferences(&user),
            vec!["Sci-Fi", "Thriller", "Sci-Fi"]
        );
    }

    #[test]
    fn test_empty_history_has_no_genres() {
        let user = User::restore("User1", "alice", Vec::new());
        assert!(analyze_user_genre_preferences(&user).is_empty());
        assert!(tally_genres(&[]).is_empty());
    }

    #[test]
    fn test_tally_genres() {
        let genres: Vec<String> = ["Drama", "Sci-Fi", "Nature", "Sci-Fi", "Nature", "Sci-Fi"]
            .iter()
            .map(|g| g.to_string())
            .collect();

        assert_eq!(
            tally_genres(&genres),
            vec![
                ("Sci-Fi".to_string(), 3),
                ("Nature".to_string(), 2),
                ("Drama".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_tally_ties_keep_first_appearance() {
        let genres: Vec<String> = ["Crime", "Comedy", "Comedy", "Crime"]
            .iter()
            .map(|g| g.to_string())
            .collect();

        let tally = tally_genres(&genres);
        assert_eq!(tally[0].0, "Crime");
        assert_eq!(tally[1].0, "Comedy");
    }
}
