use std::env::VarError;

use diesel::result::DatabaseErrorKind;
use diesel_async::pooled_connection::deadpool;
use thiserror::Error;

/// The kind of integrity rule the database refused to break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
    Check,
    NotNull,
}

impl ConstraintKind {
    const fn from_diesel(kind: &DatabaseErrorKind) -> Option<Self> {
        match kind {
            DatabaseErrorKind::UniqueViolation => Some(Self::Unique),
            DatabaseErrorKind::ForeignKeyViolation => Some(Self::ForeignKey),
            DatabaseErrorKind::CheckViolation => Some(Self::Check),
            DatabaseErrorKind::NotNullViolation => Some(Self::NotNull),
            _ => None,
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Database url not set in env variable DATABASE_URL")]
    DatabaseEnvUrl(#[from] VarError),
    #[error("Failed to create database pool {0}")]
    PoolBuild(#[from] deadpool::BuildError),
    #[error("Database pool failed {0}")]
    Pool(#[from] deadpool::PoolError),
    #[error(
        "{kind:?} constraint {} violated: {message}",
        .constraint.as_deref().unwrap_or("<unnamed>")
    )]
    ConstraintViolation {
        kind: ConstraintKind,
        constraint: Option<String>,
        message: String,
    },
    #[error("Database query failed {0}")]
    Database(diesel::result::Error),
}

impl DatabaseError {
    /// Name of the violated constraint, if the database reported one.
    #[must_use]
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { constraint, .. } => constraint.as_deref(),
            _ => None,
        }
    }
}

impl From<diesel::result::Error> for DatabaseError {
    fn from(error: diesel::result::Error) -> Self {
        match error {
            diesel::result::Error::DatabaseError(kind, info) => {
                match ConstraintKind::from_diesel(&kind) {
                    Some(constraint_kind) => Self::ConstraintViolation {
                        kind: constraint_kind,
                        constraint: info.constraint_name().map(str::to_owned),
                        message: info.message().to_owned(),
                    },
                    None => Self::Database(diesel::result::Error::DatabaseError(kind, info)),
                }
            }
            other => Self::Database(other),
        }
    }
}
