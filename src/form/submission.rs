//! Create/update dispatch for a product form.
//!
//! [`SubmissionController`] owns the submission state machine:
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Succeeded --> Idle
//!                             --err-> Failed    --> Idle
//! ```
//!
//! Only one submission may be in flight per controller. A second call to
//! [`SubmissionController::submit`] while one is pending returns
//! [`SubmissionError::Busy`] without contacting the server.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use parking_lot::Mutex;
use thiserror::Error;

use crate::catalog::{Category, Product, ProductGateway};
use crate::clients::HttpError;
use crate::config::StorageId;
use crate::form::payload::PayloadBuilder;
use crate::form::state::{FormState, SubmissionMode, UiSignal};
use crate::form::validation::ValidationError;

/// Fallback shown when the server rejects a submission without a message.
pub const REJECTED_FALLBACK: &str = "Failed to submit product";

/// Fallback shown when a submission never got a usable response.
pub const TRANSPORT_FALLBACK: &str = "Error submitting product";

/// Where a controller is in its submission cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Ready to submit.
    #[default]
    Idle,
    /// A request is in flight.
    Submitting,
    /// The last request succeeded; about to return to idle.
    Succeeded,
    /// The last request failed; about to return to idle.
    Failed,
}

/// Errors from [`SubmissionController::submit`].
///
/// In every case the form is left exactly as it was before the call.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Another submission from this controller is still in flight.
    #[error("A submission is already in progress.")]
    Busy,

    /// Client-side validation failed; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-2xx status.
    #[error("Server rejected the product with status {code}.")]
    Rejected {
        /// The HTTP status code.
        code: u16,
        /// The server's `message`, if any.
        message: Option<String>,
    },

    /// The request failed before a usable response arrived.
    #[error("Product submission failed: {0}")]
    Transport(HttpError),
}

impl SubmissionError {
    /// Returns the text to show the user.
    ///
    /// Server messages are shown verbatim. Otherwise a generic fallback is
    /// used.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Busy | Self::Validation(_) => self.to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Rejected { message: None, .. } => REJECTED_FALLBACK.to_string(),
            Self::Transport(_) => TRANSPORT_FALLBACK.to_string(),
        }
    }
}

impl From<HttpError> for SubmissionError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Response(response) => Self::Rejected {
                code: response.code,
                message: response.message,
            },
            other => Self::Transport(other),
        }
    }
}

type RefreshFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// The outcome of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReport {
    /// The product as returned by the server, or `None` when the server
    /// accepted the save but its reply was not a product.
    pub product: Option<Product>,
    /// UI effects to perform, in order.
    pub signals: Vec<UiSignal>,
}

/// Drives create/update submissions for one form.
///
/// The refresh callback runs once after every successful submission so the
/// owner can reload its product list. `submit` awaits it before returning, so
/// no particular async runtime is required.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_admin::AdminConfig;
/// use storefront_admin::catalog::CatalogClient;
/// use storefront_admin::form::{FormState, SubmissionController};
///
/// let client = CatalogClient::new(&AdminConfig::default())?;
/// let controller = SubmissionController::new(client, || async { println!("reload list") });
///
/// let mut form = FormState::new();
/// // ... user edits ...
/// match controller.submit(&mut form, &categories).await {
///     Ok(report) => println!("saved {:?}", report.product.map(|p| p.item_name)),
///     Err(error) => eprintln!("{}", error.user_message()),
/// }
/// ```
pub struct SubmissionController<G> {
    gateway: G,
    refresh: Box<dyn Fn() -> RefreshFuture + Send + Sync>,
    state: Mutex<SubmissionState>,
}

impl<G> fmt::Debug for SubmissionController<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmissionController")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

/// Holds the `Submitting` state and restores `Idle` on drop.
struct BusyGuard<'a> {
    state: &'a Mutex<SubmissionState>,
}

impl<'a> BusyGuard<'a> {
    fn acquire(state: &'a Mutex<SubmissionState>) -> Option<Self> {
        let mut current = state.lock();
        if *current == SubmissionState::Submitting {
            return None;
        }
        *current = SubmissionState::Submitting;
        drop(current);
        tracing::debug!(state = ?SubmissionState::Submitting, "Submission state changed");
        Some(Self { state })
    }

    fn finish(&self, outcome: SubmissionState) {
        *self.state.lock() = outcome;
        tracing::debug!(state = ?outcome, "Submission state changed");
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.state.lock() = SubmissionState::Idle;
        tracing::debug!(state = ?SubmissionState::Idle, "Submission state changed");
    }
}

impl<G: ProductGateway> SubmissionController<G> {
    /// Creates a controller. `refresh` runs after each successful submission.
    pub fn new<F, Fut>(gateway: G, refresh: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            gateway,
            refresh: Box::new(move || -> RefreshFuture { Box::pin(refresh()) }),
            state: Mutex::new(SubmissionState::Idle),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        *self.state.lock()
    }

    /// Returns `true` while a submission is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Returns the gateway.
    #[must_use]
    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetches a product and returns a form hydrated from it (edit mode).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the product cannot be fetched or decoded.
    pub async fn load(&self, storage_id: &StorageId) -> Result<FormState, HttpError> {
        match self.gateway.fetch_product(storage_id).await {
            Ok(product) => Ok(FormState::hydrate(product)),
            Err(error) => {
                tracing::error!(storage_id = %storage_id, error = %error, "Failed to load product");
                Err(error)
            }
        }
    }

    /// Validates and submits the form.
    ///
    /// On success the form is reset in place, the refresh callback is awaited
    /// once, and the returned report carries the UI signals to clear file
    /// inputs and navigate back to the listing. Any 2xx response counts as
    /// success, even one whose body is not a product. On any error the form
    /// is untouched.
    ///
    /// # Errors
    ///
    /// - [`SubmissionError::Validation`] if the form is incomplete
    /// - [`SubmissionError::Busy`] if a submission is already in flight
    /// - [`SubmissionError::Rejected`] for a non-2xx response
    /// - [`SubmissionError::Transport`] when no response arrived
    pub async fn submit(
        &self,
        form: &mut FormState,
        categories: &[Category],
    ) -> Result<SubmitReport, SubmissionError> {
        form.validate(categories)?;

        let Some(guard) = BusyGuard::acquire(&self.state) else {
            tracing::warn!("Ignoring submit while a submission is in flight");
            return Err(SubmissionError::Busy);
        };

        let payload = PayloadBuilder::new(form).build();
        let path = payload.path();
        tracing::debug!(
            path = %path,
            parts = payload.body.len(),
            files = payload.body.file_count(),
            "Submitting product"
        );

        let result = match payload.mode {
            SubmissionMode::Create => self.gateway.create_product(payload.body).await,
            SubmissionMode::Update { storage_id } => {
                self.gateway.update_product(&storage_id, payload.body).await
            }
        };

        match result {
            Ok(product) => {
                guard.finish(SubmissionState::Succeeded);
                let (initial, clear) = form.reset();
                *form = initial;
                (self.refresh)().await;
                tracing::info!(
                    path = %path,
                    item_name = product.as_ref().map_or("", |p| p.item_name.as_str()),
                    "Product saved"
                );
                Ok(SubmitReport {
                    product,
                    signals: vec![clear, UiSignal::NavigateToListing],
                })
            }
            Err(error) => {
                guard.finish(SubmissionState::Failed);
                let error = SubmissionError::from(error);
                tracing::warn!(path = %path, error = %error, "Product submission failed");
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpResponseError, MultipartPayload};
    use crate::form::event::{InputEvent, ProductField};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    #[derive(Default)]
    struct FakeGateway {
        reject: Option<HttpResponseError>,
        undecodable: bool,
        calls: AtomicUsize,
        last: Mutex<Option<MultipartPayload>>,
    }

    #[async_trait]
    impl ProductGateway for FakeGateway {
        async fn fetch_product(&self, storage_id: &StorageId) -> Result<Product, HttpError> {
            Ok(Product {
                storage_id: Some(storage_id.clone()),
                item_name: "Stored".to_string(),
                ..Default::default()
            })
        }

        async fn create_product(
            &self,
            payload: MultipartPayload,
        ) -> Result<Option<Product>, HttpError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let item_name = payload.text("itemName").unwrap_or_default().to_string();
            *self.last.lock() = Some(payload);
            match &self.reject {
                Some(error) => Err(HttpError::Response(error.clone())),
                None if self.undecodable => Ok(None),
                None => Ok(Some(Product {
                    item_name,
                    ..Default::default()
                })),
            }
        }

        async fn update_product(
            &self,
            storage_id: &StorageId,
            payload: MultipartPayload,
        ) -> Result<Option<Product>, HttpError> {
            let product = self.create_product(payload).await?;
            Ok(product.map(|product| Product {
                storage_id: Some(storage_id.clone()),
                ..product
            }))
        }
    }

    struct NoopWake;

    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    /// Polls a future once on the current thread, outside any async runtime.
    fn poll_once<F: Future>(future: F) -> Poll<F::Output> {
        let waker = Waker::from(Arc::new(NoopWake));
        let mut cx = Context::from_waker(&waker);
        let mut future = std::pin::pin!(future);
        future.as_mut().poll(&mut cx)
    }

    fn complete() -> FormState {
        let mut state = FormState::new();
        for (field, value) in [
            (ProductField::ItemName, "Tee"),
            (ProductField::NewPrice, "10"),
            (ProductField::Category, "c1"),
            (ProductField::ShortDescription, "Short"),
            (ProductField::FullDescription, "Full"),
        ] {
            state = state.set_field(field, InputEvent::from(value)).unwrap();
        }
        state
    }

    fn counter() -> (
        Arc<AtomicUsize>,
        impl Fn() -> std::future::Ready<()> + Send + Sync + 'static,
    ) {
        let count = Arc::new(AtomicUsize::new(0));
        let hook = Arc::clone(&count);
        (count, move || {
            hook.fetch_add(1, Ordering::SeqCst);
            std::future::ready(())
        })
    }

    #[tokio::test]
    async fn test_success_resets_form_and_refreshes_once() {
        let (refreshes, hook) = counter();
        let controller = SubmissionController::new(FakeGateway::default(), hook);
        let mut form = complete();

        let report = controller.submit(&mut form, &[]).await.unwrap();

        assert_eq!(form, FormState::new());
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(report.product.unwrap().item_name, "Tee");
        assert_eq!(
            report.signals,
            vec![UiSignal::ClearFileInputs, UiSignal::NavigateToListing]
        );
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_rejection_keeps_form_and_surfaces_message() {
        let gateway = FakeGateway {
            reject: Some(HttpResponseError {
                code: 400,
                message: Some("Duplicate id".to_string()),
            }),
            ..Default::default()
        };
        let (refreshes, hook) = counter();
        let controller = SubmissionController::new(gateway, hook);
        let mut form = complete();
        let before = form.clone();

        let error = controller.submit(&mut form, &[]).await.unwrap_err();

        assert_eq!(form, before);
        assert_eq!(error.user_message(), "Duplicate id");
        assert_eq!(refreshes.load(Ordering::SeqCst), 0);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let controller = SubmissionController::new(FakeGateway::default(), || async {});
        let mut form = FormState::new();

        let error = controller.submit(&mut form, &[]).await.unwrap_err();

        assert!(matches!(error, SubmissionError::Validation(_)));
        assert_eq!(controller.gateway().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_busy_controller_rejects_second_submit() {
        let controller = SubmissionController::new(FakeGateway::default(), || async {});
        *controller.state.lock() = SubmissionState::Submitting;
        let mut form = complete();

        let error = controller.submit(&mut form, &[]).await.unwrap_err();

        assert!(matches!(error, SubmissionError::Busy));
        assert!(controller.is_busy());
        assert_eq!(controller.gateway().calls.load(Ordering::SeqCst), 0);
        assert_eq!(form, complete());
    }

    #[tokio::test]
    async fn test_accepted_save_with_unexpected_body_still_succeeds() {
        let gateway = FakeGateway {
            undecodable: true,
            ..Default::default()
        };
        let (refreshes, hook) = counter();
        let controller = SubmissionController::new(gateway, hook);
        let mut form = complete();

        let report = controller.submit(&mut form, &[]).await.unwrap();

        assert!(report.product.is_none());
        assert_eq!(form, FormState::new());
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(
            report.signals,
            vec![UiSignal::ClearFileInputs, UiSignal::NavigateToListing]
        );
    }

    #[test]
    fn test_submit_completes_without_a_runtime() {
        let (refreshes, hook) = counter();
        let controller = SubmissionController::new(FakeGateway::default(), hook);
        let mut form = complete();

        let Poll::Ready(result) = poll_once(controller.submit(&mut form, &[])) else {
            panic!("submit should not wait on anything here");
        };

        assert!(result.is_ok());
        assert_eq!(refreshes.load(Ordering::SeqCst), 1);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_load_hydrates_update_mode() {
        let controller = SubmissionController::new(FakeGateway::default(), || async {});
        let storage_id = StorageId::new("p1").unwrap();

        let form = controller.load(&storage_id).await.unwrap();

        assert_eq!(form.draft().item_name, "Stored");
        assert_eq!(form.mode(), SubmissionMode::Update { storage_id });
    }

    #[test]
    fn test_user_message_fallbacks() {
        let rejected = SubmissionError::Rejected {
            code: 500,
            message: None,
        };
        assert_eq!(rejected.user_message(), REJECTED_FALLBACK);

        let transport = SubmissionError::Transport(HttpError::Decode {
            path: "products/add".to_string(),
            reason: "expected value".to_string(),
        });
        assert_eq!(transport.user_message(), TRANSPORT_FALLBACK);
    }

    #[test]
    fn test_http_error_mapping() {
        let error = SubmissionError::from(HttpError::Response(HttpResponseError {
            code: 409,
            message: Some("Taken".to_string()),
        }));
        assert!(matches!(
            error,
            SubmissionError::Rejected { code: 409, message: Some(ref m) } if m == "Taken"
        ));
    }
}
