use std::borrow::Cow;

use sqlx::error::ErrorKind;

/// Caller-facing failure of an operation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Validation Error: {0}")]
    Validation(Cow<'static, str>),
    #[error("Unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("Forbidden: {0}")]
    Forbidden(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Conflict: {0}")]
    Conflict(Cow<'static, str>),
    #[error("Consistency Error: {0}")]
    Consistency(Cow<'static, str>),
    #[error("Upstream Error: {0}")]
    Upstream(Cow<'static, str>),
    #[error("Internal Error")]
    Internal,
}

impl Error {
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Error::Validation(msg)
            | Error::Unauthorized(msg)
            | Error::Forbidden(msg)
            | Error::NotFound(msg)
            | Error::Conflict(msg)
            | Error::Consistency(msg)
            | Error::Upstream(msg) => msg.clone(),
            Error::Internal => "Internal Error".into(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SystemError {
    // sqlx errors
    #[error("Database Error : {0}")]
    DatabaseError(Cow<'static, str>),
    #[error("Migration Error")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    // serde errors
    #[error("JSON Serialization/Deserialization Error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    // Custom Errors
    #[error("Validation Error: {0}")]
    Validation(Cow<'static, str>),
    #[error("Unauthorized: {0}")]
    Unauthorized(Cow<'static, str>),
    #[error("Forbidden: {0}")]
    Forbidden(Cow<'static, str>),
    #[error("Not Found: {0}")]
    NotFound(Cow<'static, str>),
    #[error("Conflict: {0}")]
    Conflict(Cow<'static, str>),
    #[error("Database Conflict: {0:?}")]
    DbConflict(Option<DbErrorMeta>),
    #[error("Consistency Error: {0}")]
    Consistency(Cow<'static, str>),
    #[error("Provider Error: {0}")]
    Provider(Cow<'static, str>),
    #[error("Internal System Error: {0}")]
    InternalError(Box<dyn std::error::Error + Send + Sync>),
}

/// Turns the violated column of a unique constraint into "<Column> already exists".
///
/// SQLite reports `UNIQUE constraint failed: users.email`; composite keys list
/// several columns and fall back to a generic message.
fn conflict_message(meta: &Option<DbErrorMeta>) -> Cow<'static, str> {
    let Some(m) = meta else {
        return "Duplicate value".into();
    };

    let columns = m
        .constraint
        .as_deref()
        .or_else(|| m.message.split_once(':').map(|(_, cols)| cols))
        .unwrap_or_default();

    let mut columns = columns.split(',').map(str::trim).filter(|c| !c.is_empty());
    let (Some(column), None) = (columns.next(), columns.next()) else {
        return "Duplicate value".into();
    };

    let field = column.rsplit('.').next().unwrap_or("value");

    let mut chars = field.chars();
    let field = match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => "Value".to_string(),
    };

    format!("{field} already exists").into()
}

#[derive(Debug)]
pub struct DbErrorMeta {
    pub code: Option<String>,
    pub constraint: Option<String>,
    pub message: String,
}

impl From<SystemError> for Error {
    fn from(value: SystemError) -> Self {
        match value {
            SystemError::Validation(msg) => Error::Validation(msg),
            SystemError::Unauthorized(msg) => Error::Unauthorized(msg),
            SystemError::Forbidden(msg) => Error::Forbidden(msg),
            SystemError::NotFound(msg) => Error::NotFound(msg),
            SystemError::Conflict(msg) => Error::Conflict(msg),
            SystemError::DbConflict(meta) => Error::Conflict(conflict_message(&meta)),
            SystemError::Consistency(msg) => Error::Consistency(msg),
            SystemError::Provider(msg) => Error::Upstream(msg),
            _ => {
                log::error!("Internal Error: {:?}", value);
                Error::Internal
            }
        }
    }
}

impl From<sqlx::Error> for SystemError {
    fn from(err: sqlx::Error) -> Self {
        log::error!("{:?}", err);
        if let sqlx::Error::Database(db_err) = &err {
            return match db_err.kind() {
                ErrorKind::UniqueViolation => SystemError::DbConflict(Some(DbErrorMeta {
                    code: db_err.code().map(|s| s.to_string()),
                    constraint: db_err.constraint().map(|s| s.to_string()),
                    message: db_err.message().to_string(),
                })),
                ErrorKind::ForeignKeyViolation => {
                    SystemError::NotFound("Referenced record not found".into())
                }
                _ => {
                    log::error!("Unhandled DB error: {:?}", db_err);
                    SystemError::DatabaseError(db_err.message().to_string().into())
                }
            };
        }
        SystemError::InternalError(Box::new(err))
    }
}

impl SystemError {
    pub fn validation(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn consistency(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Consistency(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(message: &str) -> Option<DbErrorMeta> {
        Some(DbErrorMeta { code: Some("2067".into()), constraint: None, message: message.into() })
    }

    #[test]
    fn unique_violation_names_the_column() {
        let msg = conflict_message(&meta("UNIQUE constraint failed: users.email"));
        assert_eq!(msg, "Email already exists");
    }

    #[test]
    fn composite_violation_is_generic() {
        let msg = conflict_message(&meta(
            "UNIQUE constraint failed: friend_requests.username, friend_requests.other",
        ));
        assert_eq!(msg, "Duplicate value");
        assert_eq!(conflict_message(&None), "Duplicate value");
    }

    #[test]
    fn infrastructure_errors_collapse_to_internal() {
        let err: Error = SystemError::DatabaseError("disk I/O error".into()).into();
        assert!(matches!(err, Error::Internal));

        let err: Error = SystemError::Provider("Error ZERO_RESULTS".into()).into();
        assert_eq!(err.message(), "Error ZERO_RESULTS");
    }
}
