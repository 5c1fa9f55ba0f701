use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while interpreting fetched page data.
#[derive(Error, Debug)]
pub enum FeedError {
    /// The comment feed was not valid JSON for a list of comments.
    #[error("Comment feed could not be parsed: {0}")]
    MalformedFeed(#[from] serde_json::Error),

    /// The login-status payload did not have the expected
    /// `[flag, redirect-url]` shape.
    #[error("Login status payload is malformed: {0}")]
    MalformedStatus(String),

    /// The max-comments parameter value was not a non-negative integer.
    #[error("Invalid max-comments value {0:?}")]
    InvalidLimit(String),
}

/// A single visitor comment from the page's comment feed.
///
/// The feed format grew over time: early feeds carried only `id` and `text`,
/// later ones added the submission timestamp and the author's email. Both
/// shapes parse; the newer fields are simply absent on old entries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Parses a JSON comment feed into a list of comments.
pub fn parse_comment_feed(json: &str) -> Result<Vec<Comment>, FeedError> {
    let comments = serde_json::from_str(json)?;
    Ok(comments)
}

/// Keeps at most the first `max_comments` entries of the feed, in feed order.
pub fn apply_comment_limit(comments: &mut Vec<Comment>, max_comments: usize) {
    comments.truncate(max_comments);
}

/// Parses the raw value of the max-comments query parameter.
///
/// # Returns
/// The parsed limit, or `FeedError::InvalidLimit` when the value is not a
/// non-negative integer.
pub fn parse_max_comments(raw: &str) -> Result<usize, FeedError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| FeedError::InvalidLimit(raw.to_string()))
}

/// The answer from the login-status endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginStatus {
    /// Whether the visitor currently has a session.
    pub logged_in: bool,
    /// Where to send the visitor next: a logout URL when logged in,
    /// a login URL otherwise.
    pub redirect_url: String,
}

/// Parses the login-status payload, a two-element JSON string array of the
/// form `["true", logout-url]` or `["false", login-url]`.
pub fn parse_login_status(json: &str) -> Result<LoginStatus, FeedError> {
    let fields: Vec<String> = serde_json::from_str(json)
        .map_err(|e| FeedError::MalformedStatus(e.to_string()))?;
    if fields.len() != 2 {
        return Err(FeedError::MalformedStatus(format!(
            "expected 2 fields, got {}",
            fields.len()
        )));
    }
    let logged_in = match fields[0].as_str() {
        "true" => true,
        "false" => false,
        other => {
            return Err(FeedError::MalformedStatus(format!(
                "expected \"true\" or \"false\" flag, got {:?}",
                other
            )));
        }
    };
    Ok(LoginStatus {
        logged_in,
        redirect_url: fields[1].clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_comment_feed_accepts_full_entries() {
        let json = r#"[
            {"id": 1, "text": "Nice site!", "timestamp": "May 4, 2020 1:02:03 PM", "email": "a@example.com"},
            {"id": 2, "text": "Hello", "timestamp": "May 5, 2020 9:00:00 AM", "email": "b@example.com"}
        ]"#;
        let comments = parse_comment_feed(json).expect("Full-shape feed should parse");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[0].text, "Nice site!");
        assert_eq!(
            comments[0].email.as_deref(),
            Some("a@example.com"),
            "Full entries carry the author email"
        );
    }

    #[test]
    fn parse_comment_feed_accepts_minimal_entries() {
        let json = r#"[{"id": 7, "text": "first!"}]"#;
        let comments = parse_comment_feed(json).expect("Old id/text-only feed should parse");
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].id, 7);
        assert!(comments[0].timestamp.is_none());
        assert!(comments[0].email.is_none());
    }

    #[test]
    fn parse_comment_feed_rejects_malformed_json() {
        let result = parse_comment_feed("{not a feed");
        assert!(
            matches!(result, Err(FeedError::MalformedFeed(_))),
            "Broken JSON must surface as MalformedFeed, got {:?}",
            result
        );
    }

    #[test]
    fn apply_comment_limit_truncates_in_feed_order() {
        let mut comments = parse_comment_feed(
            r#"[{"id": 1, "text": "a"}, {"id": 2, "text": "b"}, {"id": 3, "text": "c"}]"#,
        )
        .unwrap();
        apply_comment_limit(&mut comments, 2);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, 1);
        assert_eq!(comments[1].id, 2);

        // A limit larger than the feed keeps everything.
        apply_comment_limit(&mut comments, 10);
        assert_eq!(comments.len(), 2);

        apply_comment_limit(&mut comments, 0);
        assert!(comments.is_empty(), "A zero limit empties the feed");
    }

    #[test]
    fn parse_max_comments_accepts_digits_and_rejects_junk() {
        assert_eq!(parse_max_comments("10").unwrap(), 10);
        assert_eq!(parse_max_comments(" 3 ").unwrap(), 3);
        assert_eq!(parse_max_comments("0").unwrap(), 0);
        for junk in ["", "ten", "-1", "3.5"] {
            assert!(
                matches!(parse_max_comments(junk), Err(FeedError::InvalidLimit(_))),
                "Value {:?} should be rejected",
                junk
            );
        }
    }

    #[test]
    fn parse_login_status_handles_both_flags() {
        let logged_in = parse_login_status(r#"["true", "/logout"]"#).unwrap();
        assert_eq!(
            logged_in,
            LoginStatus {
                logged_in: true,
                redirect_url: "/logout".to_string(),
            }
        );

        let logged_out = parse_login_status(r#"["false", "/login"]"#).unwrap();
        assert!(!logged_out.logged_in);
        assert_eq!(logged_out.redirect_url, "/login");
    }

    #[test]
    fn parse_login_status_rejects_bad_shapes() {
        for bad in [
            r#"["true"]"#,
            r#"["true", "/logout", "extra"]"#,
            r#"["maybe", "/login"]"#,
            r#"{"logged_in": true}"#,
        ] {
            assert!(
                matches!(parse_login_status(bad), Err(FeedError::MalformedStatus(_))),
                "Payload {:?} should be rejected",
                bad
            );
        }
    }
}
