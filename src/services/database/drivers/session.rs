//! Session lifecycle shared by the MySQL-protocol drivers.
//!
//! Both backends open a single SQLx `MySqlConnection`; they differ only in the
//! connect options they build. Everything after connect (timed execution,
//! fetching, closing) lives here.

use anyhow::{anyhow, bail, Result};
use sqlx::mysql::MySqlConnectOptions;
use sqlx::Connection as _;
use std::time::Instant;

use super::mysql::MySqlValueConverter;
use crate::services::database::traits::{Backend, Credentials, Record, Value};

/// Where a session is in its lifecycle.
enum SessionState {
    Unconnected,
    Connected(sqlx::MySqlConnection),
    Closed,
}

/// Credentials plus the live connection, once there is one.
pub(crate) struct Session {
    backend: Backend,
    credentials: Credentials,
    state: SessionState,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match self.state {
            SessionState::Unconnected => "unconnected",
            SessionState::Connected(_) => "<MySqlConnection>",
            SessionState::Closed => "closed",
        };
        f.debug_struct("Session")
            .field("backend", &self.backend)
            .field("credentials", &self.credentials)
            .field("state", &state)
            .finish()
    }
}

impl Session {
    pub(crate) fn new(backend: Backend, credentials: Credentials) -> Self {
        Self {
            backend,
            credentials,
            state: SessionState::Unconnected,
        }
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(crate) fn is_connected(&self) -> bool {
        matches!(self.state, SessionState::Connected(_))
    }

    /// Options common to both backends: host, port, login and database.
    pub(crate) fn base_connect_options(&self) -> MySqlConnectOptions {
        let creds = &self.credentials;
        MySqlConnectOptions::new()
            .host(&creds.host)
            .port(creds.port)
            .username(&creds.user)
            .password(&creds.password)
            .database(&creds.database)
    }

    /// Open the connection with the given options.
    pub(crate) fn open(&mut self, options: MySqlConnectOptions) -> Result<()> {
        match self.state {
            SessionState::Unconnected => {}
            SessionState::Connected(_) => bail!("Database already connected"),
            SessionState::Closed => bail!("Connection already closed"),
        }

        let conn = smol::block_on(sqlx::MySqlConnection::connect_with(&options))?;
        self.state = SessionState::Connected(conn);

        tracing::info!(
            "Connected to {} at {}:{}/{}",
            self.backend,
            self.credentials.host,
            self.credentials.port,
            self.credentials.database
        );
        Ok(())
    }

    /// Get the live connection.
    ///
    /// Returns an error if not connected.
    fn live_connection(&mut self) -> Result<&mut sqlx::MySqlConnection> {
        match &mut self.state {
            SessionState::Connected(conn) => Ok(conn),
            SessionState::Unconnected => Err(anyhow!("Database not connected")),
            SessionState::Closed => Err(anyhow!("Connection already closed")),
        }
    }

    pub(crate) fn execute_and_fetchall(
        &mut self,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<Record>> {
        let conn = self.live_connection()?;

        let start_time = Instant::now();
        let rows = smol::block_on(async {
            if params.is_empty() {
                sqlx::raw_sql(sql).fetch_all(&mut *conn).await
            } else {
                MySqlValueConverter::bind_params(sqlx::query(sql), params)
                    .fetch_all(&mut *conn)
                    .await
            }
        })?;
        let elapsed = start_time.elapsed();

        tracing::info!(
            "Query execution completed after {:.4} seconds",
            elapsed.as_secs_f64()
        );

        let records = rows
            .iter()
            .map(MySqlValueConverter::convert_row)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    pub(crate) fn close(&mut self) -> Result<()> {
        match std::mem::replace(&mut self.state, SessionState::Closed) {
            SessionState::Connected(conn) => {
                smol::block_on(conn.close())?;
                tracing::info!("Closed {} connection to {}", self.backend, self.credentials.host);
                Ok(())
            }
            SessionState::Unconnected => {
                self.state = SessionState::Unconnected;
                Err(anyhow!("No active database connection to close"))
            }
            SessionState::Closed => Err(anyhow!("Connection already closed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            Backend::MySQL,
            Credentials::new("localhost", "root", "password", "mysql", 3306),
        )
    }

    #[test]
    fn test_execute_before_connect_fails() {
        let mut session = session();
        let err = session.execute_and_fetchall("SELECT 1", &[]).unwrap_err();
        assert!(err.to_string().contains("not connected"));
    }

    #[test]
    fn test_execute_with_params_before_connect_fails() {
        let mut session = session();
        let result = session.execute_and_fetchall("SELECT ?", &[Value::Int(1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_close_before_connect_fails_and_stays_unconnected() {
        let mut session = session();
        assert!(session.close().is_err());
        assert!(!session.is_connected());
        // the state was not flipped to closed
        let err = session.execute_and_fetchall("SELECT 1", &[]).unwrap_err();
        assert!(err.to_string().contains("not connected"));
    }

    #[test]
    fn test_base_connect_options() {
        let options = session().base_connect_options();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_port(), 3306);
        assert_eq!(options.get_username(), "root");
        assert_eq!(options.get_database(), Some("mysql"));
    }
}
