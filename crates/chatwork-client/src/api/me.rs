//! Me API.

use crate::client::{ChatworkClient, require};
use crate::error::Result;
use crate::types::Me;

impl ChatworkClient {
    /// Get the authenticated user's profile.
    pub fn get_me(&self) -> Result<Me> {
        require(self.get("/me", &())?, "/me")
    }
}
