//! Session provider
//!
//! `SessionFactory` hands out `Session`s (units of work) bound to the
//! configured database. It is created once per process and passed explicitly
//! to whatever needs a session.

use std::marker::PhantomData;
use std::sync::{Mutex, MutexGuard};

use persona_core::{DiscriminatorMap, Entity, EntityQuery};
use persona_core_types::SessionId;
use rusqlite::Connection;

use crate::config::{DatabaseLocation, StoreConfig};
use crate::db;
use crate::errors::{factory_closed, from_rusqlite, internal_error, Result};
use crate::migrations::apply_migrations;
use crate::repo::hydration;

struct FactoryState {
    open: bool,
    migrated: bool,
    /// Keeps a shared in-memory database alive between sessions
    anchor: Option<Connection>,
}

/// Produces sessions against one configured database
pub struct SessionFactory {
    config: StoreConfig,
    memory_name: String,
    state: Mutex<FactoryState>,
}

impl SessionFactory {
    /// Create a factory. No connection is made until the first session.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            memory_name: format!("persona-{}", uuid::Uuid::now_v7()),
            state: Mutex::new(FactoryState {
                open: true,
                migrated: false,
                anchor: None,
            }),
        }
    }

    /// Create a factory from `PERSONA_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(StoreConfig::from_env()?))
    }

    /// Factory over a fresh in-memory database with default discriminators
    pub fn in_memory() -> Self {
        Self::new(StoreConfig::in_memory())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.lock_state().map(|s| s.open).unwrap_or(false)
    }

    fn lock_state(&self) -> Result<MutexGuard<'_, FactoryState>> {
        self.state
            .lock()
            .map_err(|_| internal_error("session_factory", "factory state lock poisoned"))
    }

    /// Open a new session
    ///
    /// The first successful open applies pending migrations. Fails with
    /// `Connection` when the database cannot be opened, including a missing
    /// file unless the config allows creating it, and with
    /// `SessionClosed` after [`shutdown`](Self::shutdown).
    pub fn open_session(&self) -> Result<Session> {
        let mut state = self.lock_state()?;
        if !state.open {
            return Err(factory_closed());
        }

        let mut conn = match &self.config.location {
            DatabaseLocation::File(path) => db::open(path, self.config.create_if_missing)?,
            DatabaseLocation::InMemory => {
                if state.anchor.is_none() {
                    state.anchor = Some(db::open_shared_memory(&self.memory_name)?);
                }
                db::open_shared_memory(&self.memory_name)?
            }
        };
        db::configure(&conn)?;

        if !state.migrated {
            apply_migrations(&mut conn)?;
            state.migrated = true;
        }

        let session = Session {
            id: SessionId::new(),
            conn,
            discriminators: self.config.discriminators.clone(),
        };
        tracing::debug!(
            session_id = %session.id,
            database = %self.config.location.describe(),
            "session opened"
        );
        Ok(session)
    }

    /// Run `f` inside a session that is closed on every exit path
    ///
    /// An error from `f` wins over an error from closing the session.
    pub fn with_session<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Session) -> Result<T>,
    {
        let mut session = self.open_session()?;
        let outcome = f(&mut session);
        let closed = session.close();
        match (outcome, closed) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(err), _) => Err(err),
        }
    }

    /// Release the factory. Safe to call more than once.
    pub fn shutdown(&self) {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };
        if !state.open {
            return;
        }
        state.open = false;
        state.anchor = None;
        tracing::debug!(database = %self.config.location.describe(), "session factory shut down");
    }
}

/// A unit of work holding one database connection
///
/// Entities returned by a session are plain values and stay readable after
/// the session closes.
pub struct Session {
    id: SessionId,
    conn: Connection,
    discriminators: DiscriminatorMap,
}

impl Session {
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    pub fn discriminators(&self) -> &DiscriminatorMap {
        &self.discriminators
    }

    /// Prepare a `from <Entity>` query whose rows are loaded as `T`
    pub fn create_query<T: Entity>(&self, text: &str) -> Result<TypedQuery<'_, T>> {
        let query = EntityQuery::parse(text)?;
        query.ensure_result_type::<T>()?;
        Ok(TypedQuery::new(self, query))
    }

    /// Load every row mapped to `T`
    pub fn load_all<T: Entity>(&self) -> Result<Vec<T>> {
        TypedQuery::<T>::new(self, EntityQuery::for_entity::<T>()).result_list()
    }

    /// Load one row by id, if it exists and is a `T`
    pub fn find<T: Entity>(&self, person_id: i64) -> Result<Option<T>> {
        let person = hydration::load_person(&self.conn, person_id, &self.discriminators)
            .map_err(|e| e.with_session_id(self.id.clone()))?;
        Ok(person.and_then(T::from_person))
    }

    /// Close the session, reporting any failure to release the connection
    pub fn close(self) -> Result<()> {
        let id = self.id;
        self.conn
            .close()
            .map_err(|(_, e)| from_rusqlite(e).with_session_id(id.clone()))?;
        tracing::debug!(session_id = %id, "session closed");
        Ok(())
    }
}

/// A parsed query bound to a session
pub struct TypedQuery<'s, T> {
    session: &'s Session,
    query: EntityQuery,
    _marker: PhantomData<fn() -> T>,
}

impl<'s, T: Entity> TypedQuery<'s, T> {
    fn new(session: &'s Session, query: EntityQuery) -> Self {
        Self {
            session,
            query,
            _marker: PhantomData,
        }
    }

    pub fn query(&self) -> &EntityQuery {
        &self.query
    }

    /// Execute the query and return rows in id order
    pub fn result_list(&self) -> Result<Vec<T>> {
        let rows = hydration::load_kind(
            &self.session.conn,
            self.query.target(),
            &self.session.discriminators,
        )
        .map_err(|e| e.with_session_id(self.session.id.clone()))?;

        tracing::debug!(
            session_id = %self.session.id,
            query = self.query.text(),
            row_count = rows.len(),
            "query executed"
        );

        // ensure_result_type guarantees every row narrows to T.
        Ok(rows.into_iter().filter_map(T::from_person).collect())
    }
}
