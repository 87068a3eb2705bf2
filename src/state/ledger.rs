// Event log helpers
use crate::catalog::LOG_CAP;
use crate::model::PlayerState;

/// Appends a stamped entry and drops the oldest ones beyond `LOG_CAP`.
pub fn push_log(player: &mut PlayerState, stamp: &str, text: &str) {
    let entry = if stamp.is_empty() { text.to_string() } else { format!("[{stamp}] {text}") };
    player.log.push(entry);
    if player.log.len() > LOG_CAP {
        let excess = player.log.len() - LOG_CAP;
        player.log.drain(..excess);
    }
}

/// The last `n` entries, oldest first.
pub fn recent(player: &PlayerState, n: usize) -> &[String] {
    let start = player.log.len().saturating_sub(n);
    &player.log[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_carry_the_stamp() {
        let mut p = PlayerState::default();
        push_log(&mut p, "12:03:09", "hello");
        push_log(&mut p, "", "bare");
        assert_eq!(p.log, vec!["[12:03:09] hello".to_string(), "bare".to_string()]);
    }

    #[test]
    fn test_log_keeps_the_most_recent_entries() {
        let mut p = PlayerState::default();
        for i in 0..LOG_CAP + 25 {
            push_log(&mut p, "", &i.to_string());
        }
        assert_eq!(p.log.len(), LOG_CAP);
        assert_eq!(p.log.first().map(String::as_str), Some("25"));
        assert_eq!(p.log.last().map(String::as_str), Some("224"));
    }

    #[test]
    fn test_recent_returns_tail() {
        let mut p = PlayerState::default();
        assert!(recent(&p, 6).is_empty());
        for i in 0..10 {
            push_log(&mut p, "", &i.to_string());
        }
        assert_eq!(recent(&p, 6), &["4", "5", "6", "7", "8", "9"]);
        assert_eq!(recent(&p, 50).len(), 10);
    }
}
