#[derive(Debug, PartialEq, Eq)]
pub struct Capability {
    /// SQL dialect spoken by the database
    pub flavor: SqlFlavor,

    /// Upper bound on bind parameters in a single statement.
    pub max_params: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlFlavor {
    Sqlite,
    Postgresql,
    Mysql,
}

impl Capability {
    /// SQLite capabilities.
    ///
    /// `SQLITE_MAX_VARIABLE_NUMBER` defaults to 32766 since SQLite 3.32.
    pub const SQLITE: Self = Self {
        flavor: SqlFlavor::Sqlite,
        max_params: 32_766,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        flavor: SqlFlavor::Postgresql,
        max_params: u16::MAX as usize,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        flavor: SqlFlavor::Mysql,
        max_params: u16::MAX as usize,
    };
}
