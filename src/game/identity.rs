//! Player identity
//!
//! A user id is derived deterministically from the chosen username so the
//! same name maps to the same id on every device; players without a name get
//! a random guest id.

use rand::Rng;
use rand::distr::Alphanumeric;

const USER_ID_LEN: usize = 20;
const GUEST_ID_LEN: usize = 13;

/// Who is playing: stable id plus display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: String,
    username: String,
}

impl Identity {
    /// Derive an identity from a username
    ///
    /// The id keeps only ASCII alphanumerics of the name, lowercased and
    /// truncated, so it is stable across sessions.
    #[must_use]
    pub fn from_username(username: &str) -> Self {
        let user_id: String = username
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .take(USER_ID_LEN)
            .collect();

        // An all-symbol name would produce an empty id; fall back to a
        // fixed marker plus length so the key stays non-empty.
        let user_id = if user_id.is_empty() {
            format!("anon{}", username.chars().count())
        } else {
            user_id
        };

        Self {
            user_id,
            username: username.trim().to_string(),
        }
    }

    /// Random guest identity
    pub fn guest<R: Rng>(rng: &mut R) -> Self {
        let user_id: String = rng
            .sample_iter(&Alphanumeric)
            .take(GUEST_ID_LEN)
            .map(|b| (b as char).to_ascii_lowercase())
            .collect();

        Self {
            username: format!("guest-{}", &user_id[..4]),
            user_id,
        }
    }

    /// Stable user id used as the persistence key
    #[inline]
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Display name
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}
