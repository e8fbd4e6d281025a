//! Application context handed to every view
//!
//! Owns the API client, the auth session and the terminal prompt. The
//! client's bearer token always mirrors the session's.

use inventory_client::{
    Action, Guard, HttpClient, InventoryClient, LoginResponse, NetworkHttpClient,
    Route, Session,
};

use crate::config::DeskConfig;
use crate::error::{DeskError, DeskResult};
use crate::prompt::Prompt;

pub struct AppContext<H: HttpClient = NetworkHttpClient> {
    pub client: InventoryClient<H>,
    pub session: Session,
    pub prompt: Prompt,
}

impl AppContext<NetworkHttpClient> {
    /// Build the client and restore the stored session
    pub fn new(config: &DeskConfig) -> DeskResult<Self> {
        let client_config = config.client_config();
        client_config.validate()?;
        let client = InventoryClient::new(&client_config)?;
        let session = Session::init(config.session_storage());
        Ok(Self::with_parts(client, session, Prompt::stdio()))
    }
}

impl<H: HttpClient> AppContext<H> {
    pub fn with_parts(mut client: InventoryClient<H>, session: Session, prompt: Prompt) -> Self {
        client.set_token(session.token().map(str::to_string));
        Self {
            client,
            session,
            prompt,
        }
    }

    /// Adopt a login response and fetch the business settings
    pub async fn sign_in(&mut self, response: LoginResponse) -> DeskResult<()> {
        self.session.login(response.token, response.user)?;
        self.client.set_token(self.session.token().map(str::to_string));
        self.session.load_settings(&self.client).await;
        Ok(())
    }

    /// Forget the session; the client stops sending a token
    pub fn sign_out(&mut self) -> DeskResult<()> {
        self.client.set_token(None);
        self.session.logout()?;
        Ok(())
    }

    /// Fetch settings for a restored session that has none yet
    pub async fn refresh_settings(&mut self) {
        if self.session.is_authenticated() && self.session.settings().is_none() {
            self.session.load_settings(&self.client).await;
        }
    }

    /// Refuse to open `route` without a session
    pub fn require(&self, route: Route) -> DeskResult<()> {
        match self.session.guard(route) {
            Guard::Allowed => Ok(()),
            Guard::RedirectToLogin => {
                tracing::debug!(route = %route.path(), "Redirecting to login");
                Err(DeskError::NotSignedIn(route))
            }
        }
    }

    /// Refuse an admin-only action for other roles
    pub fn ensure(&self, action: Action) -> DeskResult<()> {
        if self.session.can(action) {
            Ok(())
        } else {
            Err(DeskError::AdminRequired(action))
        }
    }

    /// Username of the signed-in user, empty when signed out
    pub fn username(&self) -> &str {
        self.session
            .user()
            .map(|u| u.username.as_str())
            .unwrap_or_default()
    }
}
