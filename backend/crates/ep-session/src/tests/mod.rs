mod firestore_value;
mod identity_error_code;

use crate::SessionResolver;
use crate::tests::fakes::{BackendMode, FakeBackend, FakeDocumentStore, FakeIdentityProvider};

use ep_core::{AdminProfile, InstitutionProfile, Role, RoleProfile, StudentProfile, UserProfile};

use std::sync::Arc;

pub(crate) struct Fixture {
    pub identity: Arc<FakeIdentityProvider>,
    pub store: Arc<FakeDocumentStore>,
    pub backend: Arc<FakeBackend>,
    pub resolver: Arc<SessionResolver>,
}

impl Fixture {
    pub fn new(identity: FakeIdentityProvider, store: FakeDocumentStore, backend: FakeBackend) -> Self {
        let identity = Arc::new(identity);
        let store = Arc::new(store);
        let backend = Arc::new(backend);
        let resolver = Arc::new(SessionResolver::new(
            identity.clone(),
            store.clone(),
            backend.clone(),
        ));

        Self {
            identity,
            store,
            backend,
            resolver,
        }
    }

    /// Fixture whose reachability flag has already been set by a probe.
    pub async fn probed(
        identity: FakeIdentityProvider,
        store: FakeDocumentStore,
        backend: FakeBackend,
    ) -> Self {
        let fixture = Self::new(identity, store, backend);
        fixture.resolver.probe_backend().await;
        fixture
    }

    pub fn empty(mode: BackendMode) -> Self {
        Self::new(
            FakeIdentityProvider::new(),
            FakeDocumentStore::new(),
            FakeBackend::new(mode),
        )
    }
}

pub(crate) fn profile_for(uid: &str, email: &str, role: Role) -> UserProfile {
    let profile: RoleProfile = match role {
        Role::Student => StudentProfile::new("Ada", "Lovelace").into(),
        Role::Institution => InstitutionProfile {
            institution_id: "inst-1".into(),
            institution_name: "Springfield University".into(),
            contact_person: "Edna Krabappel".into(),
            phone: None,
        }
        .into(),
        Role::Company => ep_core::CompanyProfile {
            company_name: "Initech".into(),
            contact_person: "Bill Lumbergh".into(),
            industry: Some("Software".into()),
            phone: None,
            address: None,
        }
        .into(),
        Role::Admin => AdminProfile {
            full_name: "Root Admin".into(),
        }
        .into(),
    };

    UserProfile::new(uid, email, profile, true)
}
