use crate::constants::STORAGE_KEY_TOKEN;
use crate::models::User;
use crate::storage::SharedStorage;

/// Session state.  Only the raw token is persisted; the profile is
/// refetched when needed.
pub struct AuthStore {
    storage: SharedStorage,
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl AuthStore {
    pub fn new(storage: SharedStorage) -> Self {
        Self {
            storage,
            user: None,
            token: None,
            is_authenticated: false,
            is_loading: true,
        }
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.is_authenticated = user.is_some();
        self.user = user;
    }

    /// Persists the token, or removes the stored one for `None`.
    pub fn set_token(&mut self, token: Option<String>) {
        let token = token.filter(|t| !t.is_empty());
        match &token {
            Some(t) => self.storage.set_item(STORAGE_KEY_TOKEN, t),
            None => self.storage.remove_item(STORAGE_KEY_TOKEN),
        }
        self.is_authenticated = token.is_some();
        self.token = token;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    pub fn logout(&mut self) {
        self.storage.remove_item(STORAGE_KEY_TOKEN);
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
    }

    /// Adopt whatever token storage holds and finish the initial load.
    pub fn hydrate(&mut self) {
        self.token = self
            .storage
            .get_item(STORAGE_KEY_TOKEN)
            .filter(|t| !t.is_empty());
        self.is_authenticated = self.token.is_some();
        self.is_loading = false;
    }

    /// Route guards check storage directly so a token removed in another
    /// tab (or by hand) logs the user out on the next navigation.
    pub fn has_stored_token(&self) -> bool {
        self.storage
            .get_item(STORAGE_KEY_TOKEN)
            .map_or(false, |t| !t.is_empty())
    }
}
