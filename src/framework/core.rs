//! # Core Resource Framework
//!
//! This module defines the generic building blocks for the persistence layer.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all row types must implement.
//! - [`ResourceActor`]: The generic actor that owns one collection of rows.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, NotFound, Conflict).

use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any row type must implement to be stored by a [`ResourceActor`].
///
/// # Architecture Note
/// By defining a contract that every collection (Product, CartItem, Order, ...)
/// satisfies, the request loop in [`ResourceActor`] is written *once* and reused for
/// all of them.
///
/// Associated types keep each collection's payloads apart: a `CartItem` actor only
/// accepts `CartItemCreate`, and the compiler rejects a `ProductCreate` sent to it.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Primary key. Generated by the actor from a `u32` counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to insert a new row.
    type Create: Send + Sync + Debug;

    /// The data required to patch an existing row.
    type Update: Send + Sync + Debug;

    /// Equality predicates used by `list`, `upsert`, `create_unique` and `delete_where`.
    type Filter: Send + Sync + Debug;

    /// Validation error raised by the row itself.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full row from the generated ID and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    fn id(&self) -> &Self::Id;

    /// Returns `true` if this row satisfies every predicate in `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Apply a patch. Must validate before mutating so a rejected patch leaves the
    /// row untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}

/// Update payload for collections whose rows are never modified after insert.
///
/// The type has no values, so an `Update` request for such a collection cannot be
/// constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Immutable {}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the persistence layer itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    fn entity<E: std::error::Error + Send + Sync + 'static>(e: E) -> Self {
        FrameworkError::EntityError(Box::new(e))
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map to the operations of a hosted table API:
///
/// - **Create / CreateMany**: insert one row or a batch; the batch is validated as a
///   whole before anything is stored.
/// - **CreateUnique**: insert unless a row already matches the filter.
/// - **Get / List**: select by primary key, or by filter in id order with an optional limit.
/// - **Update**: patch a row by primary key.
/// - **Upsert**: patch the first row matching the filter, or insert when none does.
///   Runs inside the actor, so two concurrent upserts cannot both insert.
/// - **Delete / DeleteWhere**: remove one row, or every row matching the filter.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    CreateMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T>>,
    },
    CreateUnique {
        filter: T::Filter,
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        filter: T::Filter,
        limit: Option<usize>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Upsert {
        filter: T::Filter,
        create: T::Create,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    DeleteWhere {
        filter: T::Filter,
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns one collection of rows.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the rows (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially*, so every single-collection
/// operation (including `Upsert`, `CreateMany` and `DeleteWhere`) is atomic without
/// any `Mutex` around the store. Different collections run in parallel.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "CartItem" instead of "storefront::model::cart_item::CartItem")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.build(params).map(|item| self.insert(item));
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::CreateMany { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "CreateMany");
                    let built: Result<Vec<T>, FrameworkError> =
                        params.into_iter().map(|p| self.build(p)).collect();
                    let result = built.map(|items| {
                        items.into_iter().map(|item| self.insert(item)).collect::<Vec<_>>()
                    });
                    match &result {
                        Ok(items) => info!(entity_type, count = items.len(), size = self.store.len(), "Created batch"),
                        Err(e) => warn!(entity_type, error = %e, "CreateMany failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::CreateUnique { filter, params, respond_to } => {
                    debug!(entity_type, ?filter, "CreateUnique");
                    let result = if self.store.values().any(|item| item.matches(&filter)) {
                        Err(FrameworkError::Conflict(format!("{filter:?}")))
                    } else {
                        self.build(params).map(|item| self.insert(item))
                    };
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "CreateUnique failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { filter, limit, respond_to } => {
                    let rows: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .take(limit.unwrap_or(usize::MAX))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, rows = rows.len(), "List");
                    let _ = respond_to.send(Ok(rows));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Upsert { filter, create, update, respond_to } => {
                    debug!(entity_type, ?filter, "Upsert");
                    let result = self.upsert(&filter, create, update);
                    match &result {
                        Ok(item) => info!(entity_type, id = %item.id(), "Upserted"),
                        Err(e) => warn!(entity_type, error = %e, "Upsert failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if self.store.remove(&id).is_some() {
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::DeleteWhere { filter, respond_to } => {
                    debug!(entity_type, ?filter, "DeleteWhere");
                    let before = self.store.len();
                    self.store.retain(|_, item| !item.matches(&filter));
                    let removed = before - self.store.len();
                    info!(entity_type, removed, size = self.store.len(), "Deleted matching");
                    let _ = respond_to.send(Ok(removed));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn build(&mut self, params: T::Create) -> Result<T, FrameworkError> {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;
        T::from_create_params(id, params).map_err(FrameworkError::entity)
    }

    fn insert(&mut self, item: T) -> T {
        self.store.insert(item.id().clone(), item.clone());
        item
    }

    fn upsert(&mut self, filter: &T::Filter, create: T::Create, update: T::Update) -> Result<T, FrameworkError> {
        if let Some(item) = self.store.values_mut().find(|item| item.matches(filter)) {
            item.on_update(update).map_err(FrameworkError::entity)?;
            return Ok(item.clone());
        }
        self.build(create).map(|item| self.insert(item))
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the channel sender, so cloning is cheap and clones can be shared
/// across tasks.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn create_many(&self, params: Vec<T::Create>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::CreateMany { params, respond_to }).await
    }

    pub async fn create_unique(&self, filter: T::Filter, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::CreateUnique { filter, params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn list(&self, filter: T::Filter, limit: Option<usize>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { filter, limit, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to })
            .await
    }

    pub async fn upsert(
        &self,
        filter: T::Filter,
        create: T::Create,
        update: T::Update,
    ) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Upsert {
            filter,
            create,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn delete_where(&self, filter: T::Filter) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::DeleteWhere { filter, respond_to })
            .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Tally {
        id: u32,
        owner: String,
        count: u32,
    }

    #[derive(Debug)]
    struct TallyCreate {
        owner: String,
        count: u32,
    }

    #[derive(Debug)]
    enum TallyUpdate {
        Bump,
        Set(u32),
    }

    #[derive(Debug)]
    enum TallyFilter {
        All,
        Owner(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("count must be positive")]
    struct ZeroCount;

    impl ActorEntity for Tally {
        type Id = u32;
        type Create = TallyCreate;
        type Update = TallyUpdate;
        type Filter = TallyFilter;
        type Error = ZeroCount;

        fn from_create_params(id: u32, params: TallyCreate) -> Result<Self, ZeroCount> {
            if params.count == 0 {
                return Err(ZeroCount);
            }
            Ok(Self { id, owner: params.owner, count: params.count })
        }

        fn id(&self) -> &u32 {
            &self.id
        }

        fn matches(&self, filter: &TallyFilter) -> bool {
            match filter {
                TallyFilter::All => true,
                TallyFilter::Owner(owner) => &self.owner == owner,
            }
        }

        fn on_update(&mut self, update: TallyUpdate) -> Result<(), ZeroCount> {
            match update {
                TallyUpdate::Bump => self.count += 1,
                TallyUpdate::Set(0) => return Err(ZeroCount),
                TallyUpdate::Set(count) => self.count = count,
            }
            Ok(())
        }
    }

    fn tally(owner: &str, count: u32) -> TallyCreate {
        TallyCreate { owner: owner.into(), count }
    }

    fn spawn() -> ResourceClient<Tally> {
        let (actor, client) = ResourceActor::<Tally>::new(10);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_crud_round() {
        let client = spawn();

        let created = client.create(tally("alice", 1)).await.unwrap();
        assert_eq!(created.id, 1);

        let updated = client.update(created.id, TallyUpdate::Set(5)).await.unwrap();
        assert_eq!(updated.count, 5);
        assert_eq!(client.get(1).await.unwrap(), Some(updated));

        client.delete(1).await.unwrap();
        assert!(client.get(1).await.unwrap().is_none());
        assert!(matches!(client.delete(1).await, Err(FrameworkError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_rejected_update_leaves_row_untouched() {
        let client = spawn();
        let created = client.create(tally("alice", 3)).await.unwrap();

        let result = client.update(created.id, TallyUpdate::Set(0)).await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));
        assert_eq!(client.get(created.id).await.unwrap().unwrap().count, 3);
    }

    #[tokio::test]
    async fn test_list_filters_in_id_order_with_limit() {
        let client = spawn();
        for owner in ["alice", "bob", "alice", "alice"] {
            client.create(tally(owner, 1)).await.unwrap();
        }

        let alice = client.list(TallyFilter::Owner("alice".into()), None).await.unwrap();
        let ids: Vec<u32> = alice.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);

        let first_two = client.list(TallyFilter::All, Some(2)).await.unwrap();
        assert_eq!(first_two.len(), 2);
        assert_eq!(first_two[0].id, 1);
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_updates() {
        let client = spawn();
        let filter = || TallyFilter::Owner("alice".into());

        let first = client.upsert(filter(), tally("alice", 1), TallyUpdate::Bump).await.unwrap();
        let second = client.upsert(filter(), tally("alice", 1), TallyUpdate::Bump).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.count, 2);
        assert_eq!(client.list(TallyFilter::All, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_upserts_never_duplicate() {
        let client = spawn();
        let mut handles = vec![];
        for _ in 0..20 {
            let client = client.clone();
            handles.push(tokio::spawn(async move {
                client
                    .upsert(TallyFilter::Owner("alice".into()), tally("alice", 1), TallyUpdate::Bump)
                    .await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let rows = client.list(TallyFilter::All, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].count, 20);
    }

    #[tokio::test]
    async fn test_create_many_is_all_or_nothing() {
        let client = spawn();

        let result = client.create_many(vec![tally("alice", 1), tally("bob", 0)]).await;
        assert!(result.is_err());
        assert!(client.list(TallyFilter::All, None).await.unwrap().is_empty());

        let rows = client.create_many(vec![tally("alice", 1), tally("bob", 2)]).await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(client.list(TallyFilter::All, None).await.unwrap(), rows);
    }

    #[tokio::test]
    async fn test_create_unique_conflicts_on_match() {
        let client = spawn();
        client.create_unique(TallyFilter::Owner("alice".into()), tally("alice", 1)).await.unwrap();

        let again = client.create_unique(TallyFilter::Owner("alice".into()), tally("alice", 1)).await;
        assert!(matches!(again, Err(FrameworkError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_delete_where_reports_removed_rows() {
        let client = spawn();
        for owner in ["alice", "bob", "alice"] {
            client.create(tally(owner, 1)).await.unwrap();
        }

        let removed = client.delete_where(TallyFilter::Owner("alice".into())).await.unwrap();
        assert_eq!(removed, 2);
        let left = client.list(TallyFilter::All, None).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].owner, "bob");

        assert_eq!(client.delete_where(TallyFilter::Owner("alice".into())).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_closed_actor_reports_actor_closed() {
        let (actor, client) = ResourceActor::<Tally>::new(1);
        drop(actor);
        assert!(matches!(client.get(1).await, Err(FrameworkError::ActorClosed)));
    }
}
