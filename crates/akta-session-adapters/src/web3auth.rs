use std::sync::{Arc, Mutex, MutexGuard};

use akta_session_core::{IdentityPort, IdentityProviderKind, PortError, UserProfile};

/// Deterministic stand-in for the Web3Auth identity SDK.
///
/// Enforces the init -> connect -> user_info call order the real SDK
/// requires; everything else is canned.
#[derive(Debug, Clone)]
pub struct Web3AuthAdapter {
    inner: Arc<Mutex<IdentityState>>,
}

#[derive(Debug)]
struct IdentityState {
    initialized: bool,
    connected: bool,
    profile: UserProfile,
}

impl Default for Web3AuthAdapter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(IdentityState {
                initialized: false,
                connected: false,
                profile: UserProfile {
                    name: "Demo Clinician".to_owned(),
                    email: "clinician@akta.example".to_owned(),
                    profile_image: None,
                },
            })),
        }
    }
}

impl Web3AuthAdapter {
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn set_profile(&self, profile: UserProfile) {
        self.lock().profile = profile;
    }

    fn lock(&self) -> MutexGuard<'_, IdentityState> {
        self.inner.lock().expect("web3auth adapter lock poisoned")
    }

    fn try_lock(&self) -> Result<MutexGuard<'_, IdentityState>, PortError> {
        self.inner
            .lock()
            .map_err(|e| PortError::Transport(format!("web3auth lock poisoned: {e}")))
    }
}

impl IdentityPort for Web3AuthAdapter {
    fn init(&self) -> Result<(), PortError> {
        self.try_lock()?.initialized = true;
        Ok(())
    }

    fn connect_to(&self, _provider: IdentityProviderKind) -> Result<(), PortError> {
        let mut g = self.try_lock()?;
        if !g.initialized {
            return Err(PortError::Validation(
                "identity sdk used before init".to_owned(),
            ));
        }
        g.connected = true;
        Ok(())
    }

    fn user_info(&self) -> Result<UserProfile, PortError> {
        let g = self.try_lock()?;
        if !g.connected {
            return Err(PortError::NotFound("no identity session".to_owned()));
        }
        Ok(g.profile.clone())
    }

    fn logout(&self) -> Result<(), PortError> {
        // Always succeeds locally, mirroring the wallet disconnect contract.
        self.try_lock()?.connected = false;
        Ok(())
    }
}
