//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to script the responses a collection returns, or
//! [`create_mock_client`] to get a client and a receiver and answer each request by hand.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client and the response it gets.
enum Expectation<T: ActorEntity> {
    Create(Result<T, FrameworkError>),
    CreateMany(Result<Vec<T>, FrameworkError>),
    CreateUnique(Result<T, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    List(Result<Vec<T>, FrameworkError>),
    Update(Result<T, FrameworkError>),
    Upsert(Result<T, FrameworkError>),
    Delete(Result<(), FrameworkError>),
    DeleteWhere(Result<usize, FrameworkError>),
}

impl<T: ActorEntity> Expectation<T> {
    fn name(&self) -> &'static str {
        match self {
            Expectation::Create(_) => "Create",
            Expectation::CreateMany(_) => "CreateMany",
            Expectation::CreateUnique(_) => "CreateUnique",
            Expectation::Get(_) => "Get",
            Expectation::List(_) => "List",
            Expectation::Update(_) => "Update",
            Expectation::Upsert(_) => "Upsert",
            Expectation::Delete(_) => "Delete",
            Expectation::DeleteWhere(_) => "DeleteWhere",
        }
    }
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn lock<T: ActorEntity>(expectations: &Expectations<T>) -> MutexGuard<'_, VecDeque<Expectation<T>>> {
    expectations.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next
/// expectation panics the mock task, and the caller sees [`FrameworkError::ActorDropped`].
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Product>::new();
/// mock.expect_get().return_ok(Some(product));
/// mock.expect_update().return_err(FrameworkError::NotFound("product_1".into()));
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = lock(&expectations_clone).pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::CreateMany { respond_to, .. }, Some(Expectation::CreateMany(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::CreateUnique { respond_to, .. }, Some(Expectation::CreateUnique(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Update { respond_to, .. }, Some(Expectation::Update(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Upsert { respond_to, .. }, Some(Expectation::Upsert(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::DeleteWhere { respond_to, .. }, Some(Expectation::DeleteWhere(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (request, Some(expected)) => {
                        panic!("Expected {} request, got {}", expected.name(), request_name(&request));
                    }
                    (request, None) => {
                        panic!("Unexpected {} request", request_name(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    fn expect<R>(&mut self, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            expectations: self.expectations.clone(),
            wrap,
        }
    }

    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(Expectation::Create)
    }

    pub fn expect_create_many(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(Expectation::CreateMany)
    }

    pub fn expect_create_unique(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(Expectation::CreateUnique)
    }

    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        self.expect(Expectation::Get)
    }

    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.expect(Expectation::List)
    }

    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(Expectation::Update)
    }

    pub fn expect_upsert(&mut self) -> ExpectationBuilder<T, T> {
        self.expect(Expectation::Upsert)
    }

    pub fn expect_delete(&mut self) -> ExpectationBuilder<T, ()> {
        self.expect(Expectation::Delete)
    }

    pub fn expect_delete_where(&mut self) -> ExpectationBuilder<T, usize> {
        self.expect(Expectation::DeleteWhere)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn request_name<T: ActorEntity>(request: &ResourceRequest<T>) -> &'static str {
    match request {
        ResourceRequest::Create { .. } => "Create",
        ResourceRequest::CreateMany { .. } => "CreateMany",
        ResourceRequest::CreateUnique { .. } => "CreateUnique",
        ResourceRequest::Get { .. } => "Get",
        ResourceRequest::List { .. } => "List",
        ResourceRequest::Update { .. } => "Update",
        ResourceRequest::Upsert { .. } => "Upsert",
        ResourceRequest::Delete { .. } => "Delete",
        ResourceRequest::DeleteWhere { .. } => "DeleteWhere",
    }
}

/// Builder that records the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Expectations<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        lock(&self.expectations).push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// When a test needs to inspect the *payload* a client sends (e.g., the filter a
/// `CartClient` builds), the receiver half lets the test pull each request off the
/// channel, assert on it, and answer through its responder.
///
/// **Note**: Consider using [`MockClient`] when only the responses matter.
pub fn create_mock_client<T: ActorEntity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Option<usize>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, limit, respond_to }) => Some((filter, limit, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Upsert request
pub async fn expect_upsert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, T::Create, T::Update, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Upsert { filter, create, update, respond_to }) => Some((filter, create, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a DeleteWhere request
pub async fn expect_delete_where<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Response<usize>)> {
    match receiver.recv().await {
        Some(ResourceRequest::DeleteWhere { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryCreate, CategoryFilter, CategoryId};

    fn category(id: u32, name: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            description: String::new(),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Category>(10);

        let create_task = tokio::spawn(async move {
            client.create(CategoryCreate::new("Books", "Paper and ink")).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Books");
        responder.send(Ok(category(1, "Books"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, CategoryId(1));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Category>::new();

        mock.expect_list().return_ok(vec![category(1, "Books"), category(2, "Games")]);
        mock.expect_get().return_err(FrameworkError::ActorClosed);

        let client = mock.client();

        let rows = client.list(CategoryFilter::All, None).await.unwrap();
        assert_eq!(rows.len(), 2);

        let fetched = client.get(CategoryId(1)).await;
        assert!(matches!(fetched, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_responder() {
        let mut mock = MockClient::<Category>::new();
        mock.expect_delete().return_ok(());

        let result = mock.client().get(CategoryId(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
