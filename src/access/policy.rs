use crate::role::Role;

use super::permission::{Permission, RestrictionTag};

/// Access evaluation interface.
pub trait AccessPolicy: Send + Sync {
    /// Name of the policy (for audit/debugging).
    fn name(&self) -> &str;

    /// Permission granted to `role`. Must be total.
    fn permission_for(&self, role: Role) -> Permission;
}

/// The fixed cultural access table.
///
/// | Role | can access | restrictions |
/// |------|------------|--------------|
/// | elder | yes | none |
/// | educator | yes | `sacred_ceremonies` |
/// | youth | yes | `genealogy`, `sacred_ceremonies` |
/// | researcher | no | `all` |
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticAccessPolicy;

impl AccessPolicy for StaticAccessPolicy {
    fn name(&self) -> &str {
        "static_cultural_table"
    }

    fn permission_for(&self, role: Role) -> Permission {
        permission_for(role)
    }
}

/// Permission for a role under the fixed cultural access table.
#[must_use]
pub fn permission_for(role: Role) -> Permission {
    match role {
        Role::Elder => Permission::granted(Vec::<RestrictionTag>::new()),
        Role::Educator => Permission::granted([RestrictionTag::sacred_ceremonies()]),
        Role::Youth => Permission::granted([
            RestrictionTag::genealogy(),
            RestrictionTag::sacred_ceremonies(),
        ]),
        Role::Researcher => Permission::denied(),
    }
}

/// Permission for a raw role label.
///
/// Unrecognized labels get the researcher permission: no access, `{all}`.
#[must_use]
pub fn permission_for_label(label: &str) -> Permission {
    match label.parse::<Role>() {
        Ok(role) => permission_for(role),
        Err(_) => {
            tracing::debug!(label, "default-deny for unrecognized role label");
            Permission::denied()
        }
    }
}
