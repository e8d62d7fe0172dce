pub mod domain;
pub mod hits;
pub mod moderation;
pub mod ports;

pub use domain::{Chirp, User};
pub use hits::HitCounter;
pub use moderation::{MatchMode, ModerationError, Moderator, MAX_CHIRP_LENGTH};
pub use ports::{DatabaseService, PortError, PortResult};
