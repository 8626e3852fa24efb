use super::Serializer;

use bulkins_core::driver::{Capability, SqlFlavor};

impl Serializer {
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: SqlFlavor::Sqlite,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: SqlFlavor::Postgresql,
        }
    }

    pub fn mysql() -> Serializer {
        Serializer {
            flavor: SqlFlavor::Mysql,
        }
    }

    /// Picks the flavor a driver advertises.
    pub fn for_capability(capability: &Capability) -> Serializer {
        Serializer {
            flavor: capability.flavor,
        }
    }
}
