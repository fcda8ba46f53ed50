//! Interactive session state

use crate::access::{allowed, Action};
use crate::model::Identity;
use crate::{Error, Result};

/// Who is signed in, if anyone.
///
/// Starts empty, is set by a successful login and cleared by logout.
#[derive(Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn sign_in(&mut self, identity: Identity) {
        tracing::debug!(id = identity.id, role = %identity.role, "Session opened");
        self.identity = Some(identity);
    }

    /// Clear the session, returning whoever was signed in
    pub fn sign_out(&mut self) -> Option<Identity> {
        let previous = self.identity.take();
        if let Some(id) = &previous {
            tracing::debug!(id = id.id, "Session closed");
        }
        previous
    }

    /// The signed-in identity, provided its role permits `action`
    pub fn require(&self, action: Action) -> Result<&Identity> {
        let identity = self.identity.as_ref().ok_or(Error::NotSignedIn)?;
        if !allowed(identity.role, action) {
            return Err(Error::Forbidden { role: identity.role, action });
        }
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;

    fn identity(role: Role) -> Identity {
        Identity { id: 7, name: "Tester".into(), role }
    }

    #[test]
    fn test_lifecycle() {
        let mut session = Session::new();
        assert!(session.current().is_none());
        assert!(matches!(session.require(Action::ViewDashboard), Err(Error::NotSignedIn)));

        session.sign_in(identity(Role::Auditor));
        assert_eq!(session.current().unwrap().name, "Tester");
        assert!(session.require(Action::SubmitNote).is_ok());

        let previous = session.sign_out().unwrap();
        assert_eq!(previous.id, 7);
        assert!(session.current().is_none());
        assert!(session.sign_out().is_none());
    }

    #[test]
    fn test_require_checks_role() {
        let mut session = Session::new();
        session.sign_in(identity(Role::Auditor));

        let err = session.require(Action::AddAuditor).unwrap_err();
        assert!(matches!(
            err,
            Error::Forbidden { role: Role::Auditor, action: Action::AddAuditor }
        ));
    }
}
